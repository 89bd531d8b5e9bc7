//! Error types for rxtrack.
//!
//! Each layer has its own error enum next to the code that raises it:
//! [`FieldError`] for field validation, [`ParseError`] for command text,
//! [`CommandError`] for execution and saving, [`StorageError`] for data
//! files and [`ConfigError`] for the environment. [`RxError`] collects them
//! for callers that do not care which layer failed.

use thiserror::Error;

use crate::commands::CommandError;
use crate::config::ConfigError;
use crate::logic::LogicError;
use crate::model::FieldError;
use crate::parser::ParseError;
use crate::storage::StorageError;

/// Errors that can occur anywhere in rxtrack.
///
/// # Examples
///
/// ```
/// use rxtrack::error::{Result, RxError};
/// use rxtrack::parser::parse_command;
///
/// fn word_of(text: &str) -> Result<&'static str> {
///     Ok(parse_command(text)?.word())
/// }
///
/// assert_eq!(word_of("list").unwrap(), "list");
/// assert!(matches!(word_of("frobnicate"), Err(RxError::Parse(_))));
/// ```
#[derive(Error, Debug)]
pub enum RxError {
    /// Configuration-related error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing a data file failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A field value was rejected.
    #[error("{0}")]
    Field(#[from] FieldError),

    /// Command text could not be parsed.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// A command could not be carried out.
    #[error("{0}")]
    Command(#[from] CommandError),

    /// File system I/O error outside the data files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LogicError> for RxError {
    fn from(err: LogicError) -> Self {
        match err {
            LogicError::Parse(e) => Self::Parse(e),
            LogicError::Command(e) => Self::Command(e),
        }
    }
}

/// A specialized `Result` type for rxtrack operations.
pub type Result<T> = std::result::Result<T, RxError>;
