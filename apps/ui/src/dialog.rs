//! # Dialog Collaborator
//!
//! Confirmations and notifications go through [`Dialog`]. The app only sees
//! a yes/no answer and never knows how it was asked.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  App::delete(row) ──► dialog.confirm(&ConfirmPrompt::delete_product())  │
//! │                              │                                          │
//! │                 ┌────────────┴────────────┐                             │
//! │                 ▼                         ▼                             │
//! │              true                       false                           │
//! │         DELETE request            nothing happens                       │
//! │                                                                         │
//! │  App::save() / refresh() ──► dialog.notify(&Notice::success(..))        │
//! │                          ──► dialog.notify(&Notice::failure())          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tracing::warn;

/// Text shown when any API call fails.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// A yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub text: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl ConfirmPrompt {
    pub fn delete_product() -> Self {
        ConfirmPrompt {
            title: "Delete this product?",
            text: "Deleted data cannot be recovered!",
            confirm_label: "Yes, delete!",
            cancel_label: "Cancel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-off message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// The single notice used for every API failure.
    pub fn failure() -> Self {
        Notice::error(GENERIC_FAILURE)
    }
}

#[async_trait]
pub trait Dialog: Send {
    /// Asks the question and returns the user's decision.
    async fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool;

    fn notify(&mut self, notice: &Notice);
}

// =============================================================================
// Terminal
// =============================================================================

/// Line-oriented terminal: commands and answers come from `input`, every
/// screen and notice goes to `output`.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<BufReader<Stdin>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Terminal::new(BufReader::new(tokio::io::stdin()), std::io::stdout())
    }
}

impl<R, W> Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Next input line without its line ending. `None` at end of input.
    pub async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn print(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[async_trait]
impl<R, W> Dialog for Terminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool {
        let question = format!(
            "{}\n{}\n[y] {}  [N] {}: ",
            prompt.title, prompt.text, prompt.confirm_label, prompt.cancel_label
        );
        if let Err(e) = self.print(&question) {
            warn!(error = %e, "Could not show confirmation");
            return false;
        }

        match self.read_line().await {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }

    fn notify(&mut self, notice: &Notice) {
        let marker = match notice.kind {
            NoticeKind::Success => "OK",
            NoticeKind::Error => "ERROR",
        };
        if let Err(e) = self.print(&format!("[{marker}] {}\n", notice.message)) {
            warn!(error = %e, "Could not show notice");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(input: &'static str) -> Terminal<&'static [u8], Vec<u8>> {
        Terminal::new(input.as_bytes(), Vec::new())
    }

    fn printed(term: &Terminal<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8(term.output().clone()).unwrap()
    }

    #[tokio::test]
    async fn test_confirm_yes() {
        let mut term = terminal("y\n");
        assert!(term.confirm(&ConfirmPrompt::delete_product()).await);

        let out = printed(&term);
        assert!(out.contains("Delete this product?"));
        assert!(out.contains("Deleted data cannot be recovered!"));
        assert!(out.contains("Yes, delete!"));
    }

    #[tokio::test]
    async fn test_confirm_defaults_to_no() {
        let prompt = ConfirmPrompt::delete_product();
        assert!(!terminal("\n").confirm(&prompt).await);
        assert!(!terminal("nope\n").confirm(&prompt).await);
        assert!(!terminal("").confirm(&prompt).await);
        assert!(terminal("  YES \r\n").confirm(&prompt).await);
    }

    #[tokio::test]
    async fn test_read_line() {
        let mut term = terminal("add\r\nedit 2\n");
        assert_eq!(term.read_line().await.unwrap().as_deref(), Some("add"));
        assert_eq!(term.read_line().await.unwrap().as_deref(), Some("edit 2"));
        assert_eq!(term.read_line().await.unwrap(), None);
    }

    #[test]
    fn test_notify() {
        let mut term = terminal("");
        term.notify(&Notice::success("Product added"));
        term.notify(&Notice::failure());
        assert_eq!(
            printed(&term),
            format!("[OK] Product added\n[ERROR] {GENERIC_FAILURE}\n")
        );
    }
}
