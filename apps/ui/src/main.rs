//! # Inventory UI
//!
//! ## Startup Sequence
//! 1. Initialize tracing to stderr (`RUST_LOG`, default `warn`)
//! 2. Load configuration from the environment
//! 3. Build the HTTP client
//! 4. Run the command loop on stdin/stdout

use tracing::info;
use tracing_subscriber::EnvFilter;

use inventory_ui::app::App;
use inventory_ui::dialog::Terminal;
use inventory_ui::{run, HttpProductApi, UiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = UiConfig::load()?;
    info!(api_url = %config.api_url, timeout = ?config.timeout, "Configuration loaded");

    let api = HttpProductApi::new(config.api_url, config.timeout)?;
    let mut app = App::new(api);
    let mut terminal = Terminal::stdio();

    terminal.print("Inventory. Type 'help' for commands.\n")?;
    run(&mut app, &mut terminal).await?;

    info!("UI closed");
    Ok(())
}

/// Logs go to stderr so they never mix with the screen.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
