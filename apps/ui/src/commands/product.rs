//! Runs parsed commands against the [`App`].

use tracing::debug;

use super::Command;
use crate::app::App;
use crate::client::ProductApi;
use crate::dialog::Dialog;
use crate::error::UiResult;

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redraw the screen.
    Render,
    /// Print the command list.
    Help,
    Quit,
}

pub async fn execute<A, D>(app: &mut App<A>, dialog: &mut D, command: Command) -> UiResult<Flow>
where
    A: ProductApi,
    D: Dialog,
{
    debug!(?command, "Executing command");

    match command {
        Command::Add => app.open_create()?,
        Command::Edit(row) => app.open_edit(row)?,
        Command::Delete(row) => {
            app.delete(row, dialog).await?;
        }
        Command::Name(name) => app.set_name(name)?,
        Command::Price(price) => app.set_price(price)?,
        Command::Save => app.save(dialog).await?,
        Command::Cancel => app.cancel()?,
        Command::Refresh => app.refresh(dialog).await?,
        Command::Help => return Ok(Flow::Help),
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Render)
}
