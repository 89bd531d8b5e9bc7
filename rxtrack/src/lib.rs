//! rxtrack - a command-driven prescription tracker.
//!
//! Prescriptions are kept in two ordered lists, one for active records and
//! one for completed ones, and are manipulated through one-line text
//! commands such as `add n/Aspirin d/1 tablet f/Daily` or `find aspirin`.
//!
//! # Overview
//!
//! Text flows through [`logic::LogicManager::execute`], which parses it into
//! a [`commands::Command`], applies it to the in-memory [`model::Model`] and
//! then saves both lists as JSON through [`storage`].
//!
//! # Modules
//!
//! - [`model`]: Prescription records, the two lists, filters and preferences
//! - [`parser`]: Command text to [`commands::Command`]
//! - [`commands`]: Executable commands and their results
//! - [`storage`]: JSON files with atomic saves
//! - [`logic`]: Parse, execute, persist
//! - [`config`]: Configuration from environment variables
//! - [`error`]: Error types for every layer
//! - [`messages`]: User-facing message text

pub mod commands;
pub mod config;
pub mod error;
pub mod logic;
pub mod messages;
pub mod model;
pub mod parser;
pub mod storage;

#[cfg(test)]
mod testutil;

pub use commands::{Command, CommandError, CommandResult, ListView};
pub use config::{Config, ConfigError, LogFormat};
pub use error::{Result, RxError};
pub use logic::{LogicError, LogicManager};
pub use model::{Model, NameContainsKeywordsPredicate, Prescription, PrescriptionList, UserPrefs};
pub use parser::{parse_command, ParseError};
pub use storage::{Storage, StorageError};
