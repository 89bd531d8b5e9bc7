//! Command-line text parser.
//!
//! [`parse_command`] dispatches on the first whitespace-delimited word of the
//! input (exact, case-sensitive match) and hands the remainder to the
//! matching argument parser in [`arguments`]. Unknown words produce a single
//! [`ParseError::UnknownCommand`].
//!
//! # Example
//!
//! ```
//! use rxtrack::commands::Command;
//! use rxtrack::parser::parse_command;
//!
//! assert_eq!(parse_command("list").unwrap(), Command::List);
//! assert!(parse_command("frobnicate").is_err());
//! ```

pub mod arguments;
pub mod syntax;
pub mod tokenizer;
pub mod util;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::debug;

use crate::commands::{add, clear, completed, delete, edit, find, help, list, take, Command};
use crate::messages::{duplicate_fields, invalid_command_format, MESSAGE_UNKNOWN_COMMAND};
use crate::model::FieldError;

/// Errors produced while turning user text into a [`Command`].
///
/// Parsing never changes any state, so every variant is recoverable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    /// The arguments do not fit the command's grammar.
    #[error("{}", invalid_command_format(.usage))]
    InvalidFormat { usage: &'static str },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("Amount is not a non-zero unsigned integer.")]
    InvalidAmount,

    /// Single-valued prefixes given more than once.
    #[error("{}", duplicate_fields(.prefixes))]
    DuplicatePrefixes { prefixes: Vec<&'static str> },

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,

    /// A field value failed validation.
    #[error("{0}")]
    InvalidField(#[from] FieldError),
}

impl ParseError {
    #[must_use]
    pub fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }
}

/// Parses one line of user input, using the local date as "today".
///
/// # Errors
///
/// Returns a [`ParseError`] if the command word is unknown or its arguments
/// are malformed.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    parse_command_on(input, Local::now().date_naive())
}

/// Parses one line of user input relative to `today`.
///
/// # Errors
///
/// See [`parse_command`].
pub fn parse_command_on(input: &str, today: NaiveDate) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(help::MESSAGE_USAGE));
    }

    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    // Prefixes are only recognised after whitespace, so keep one in front.
    let args = format!(" {rest}");

    debug!(word, "Dispatching command");

    match word {
        add::COMMAND_WORD => arguments::parse_add(&args, today),
        edit::COMMAND_WORD => arguments::parse_edit(&args),
        delete::COMMAND_WORD => arguments::parse_delete(&args),
        find::COMMAND_WORD => arguments::parse_find(&args),
        take::TAKE_COMMAND_WORD => arguments::parse_take(&args),
        take::UNTAKE_COMMAND_WORD => arguments::parse_untake(&args),
        completed::DONE_COMMAND_WORD => arguments::parse_done(&args),
        completed::DELETE_COMMAND_WORD => arguments::parse_delete_completed(&args),
        completed::LIST_COMMAND_WORD => Ok(Command::ListCompleted),
        list::COMMAND_WORD => Ok(Command::List),
        clear::COMMAND_WORD => Ok(Command::Clear),
        help::COMMAND_WORD => Ok(Command::Help),
        help::EXIT_COMMAND_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}
