//! # Inventory UI
//!
//! Terminal single-page client for the inventory API: one product table and
//! one add/edit modal.
//!
//! ## Module Organization
//! ```text
//! inventory_ui/
//! ├── lib.rs          ◄─── You are here (command loop)
//! ├── app.rs          ◄─── Product cache + actions
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   └── view.rs     ◄─── ViewState, ProductForm
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing
//! │   └── product.rs  ◄─── Command execution
//! ├── client.rs       ◄─── ProductApi trait + HTTP client
//! ├── dialog.rs       ◄─── Dialog trait + terminal implementation
//! ├── render.rs       ◄─── Table and modal text
//! ├── config.rs       ◄─── Environment configuration
//! └── error.rs        ◄─── UiError
//! ```
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  refresh ──► render ──► read line ──► parse ──► execute ──► render ...  │
//! │                                                                         │
//! │  API and validation failures were already reported by the App through  │
//! │  the dialog. Other errors (wrong view, bad row) are printed here.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod client;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod error;
pub mod render;
pub mod state;

use std::io::Write;

use tokio::io::AsyncBufRead;
use tracing::debug;

use app::App;
use client::ProductApi;
use commands::{execute, Command, Flow};
use dialog::{Dialog, Notice, Terminal};
use render::{render_screen, HELP};

// Re-exports
pub use client::HttpProductApi;
pub use config::UiConfig;
pub use error::{UiError, UiResult};

const PROMPT: &str = "> ";

/// Runs the command loop until `quit` or end of input.
pub async fn run<A, R, W>(app: &mut App<A>, terminal: &mut Terminal<R, W>) -> UiResult<()>
where
    A: ProductApi,
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    if let Err(e) = app.refresh(terminal).await {
        debug!(error = %e, "Initial load failed");
    }
    terminal.print(&render_screen(app.products(), app.view()))?;

    loop {
        terminal.print(PROMPT)?;
        let Some(line) = terminal.read_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                terminal.notify(&Notice::error(e.to_string()));
                continue;
            }
        };

        match execute(app, terminal, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Help) => terminal.print(HELP)?,
            Ok(Flow::Render) => terminal.print(&render_screen(app.products(), app.view()))?,
            Err(UiError::Io(e)) => return Err(UiError::Io(e)),
            Err(e) => {
                if !(e.is_api_failure() || matches!(e, UiError::Validation(_))) {
                    terminal.notify(&Notice::error(e.to_string()));
                }
                terminal.print(&render_screen(app.products(), app.view()))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::FakeApi;
    use crate::dialog::GENERIC_FAILURE;

    async fn run_script(api: FakeApi, script: &'static str) -> (App<FakeApi>, String) {
        let mut app = App::new(api);
        let mut terminal = Terminal::new(script.as_bytes(), Vec::new());
        run(&mut app, &mut terminal).await.unwrap();
        let output = String::from_utf8(terminal.output().clone()).unwrap();
        (app, output)
    }

    #[tokio::test]
    async fn test_session_add_product() {
        let (app, output) = run_script(
            FakeApi::default(),
            "add\nname Kopi Susu\nprice 15000\nsave\nquit\n",
        )
        .await;

        assert!(output.contains(render::EMPTY_PLACEHOLDER));
        assert!(output.contains("=== Add Product ==="));
        assert!(output.contains("[OK] Product added"));
        assert!(output.contains("Rp 15.000"));
        assert_eq!(app.products().len(), 1);
    }

    #[tokio::test]
    async fn test_session_delete_with_confirmation() {
        let (app, output) = run_script(
            FakeApi::with_products(&[("Teh Manis", 8000.0)]),
            "delete 1\nn\ndelete 1\ny\n",
        )
        .await;

        assert_eq!(output.matches("Delete this product?").count(), 2);
        assert!(output.contains("[OK] Product deleted"));
        assert!(app.products().is_empty());
        assert_eq!(app.api().calls(), vec!["list", "delete 1", "list"]);
    }

    #[tokio::test]
    async fn test_session_reports_errors_once() {
        let api = FakeApi::default();
        api.set_failing(true);
        let (_, output) = run_script(api, "bogus\nedit 4\nhelp\n").await;

        assert_eq!(output.matches(GENERIC_FAILURE).count(), 1);
        assert!(output.contains("[ERROR] Unknown command 'bogus'"));
        assert!(output.contains("[ERROR] No product in row 4"));
        assert!(output.contains("Commands:"));
    }
}
