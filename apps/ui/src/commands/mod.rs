//! # Terminal Commands
//!
//! One input line becomes one [`Command`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── Command enum and line parsing
//! └── product.rs  ◄─── Runs a command against the App
//! ```
//!
//! ## Grammar
//! ```text
//! add | edit <no> | delete <no> | name <text> | price <value>
//! save | cancel | refresh | help | quit
//! ```
//!
//! Keywords are case-insensitive. `<no>` is the row number shown in the
//! table. `<text>` and `<value>` are the rest of the line, inner spaces kept.

pub mod product;

use thiserror::Error;

pub use product::{execute, Flow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit(usize),
    Delete(usize),
    Name(String),
    Price(String),
    Save,
    Cancel,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list.")]
    Unknown(String),

    #[error("'{0}' needs a row number")]
    MissingRow(&'static str),

    #[error("'{0}' is not a row number")]
    InvalidRow(String),
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword.to_lowercase().as_str() {
            "add" | "new" => Command::Add,
            "edit" => Command::Edit(parse_row("edit", rest)?),
            "delete" | "del" => Command::Delete(parse_row("delete", rest)?),
            "name" => Command::Name(rest.to_string()),
            "price" => Command::Price(rest.to_string()),
            "save" | "update" => Command::Save,
            "cancel" => Command::Cancel,
            "refresh" | "list" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_row(keyword: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingRow(keyword));
    }
    arg.parse()
        .map_err(|_| CommandError::InvalidRow(arg.to_string()))
}
