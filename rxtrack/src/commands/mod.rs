//! Executable commands.
//!
//! The parser turns user text into a [`Command`]; [`Command::execute`] then
//! applies it to the [`Model`]. Commands never touch the filesystem:
//! persisting the result is the job of [`crate::logic::LogicManager`].

pub mod add;
pub mod clear;
pub mod completed;
pub mod delete;
pub mod edit;
pub mod find;
pub mod help;
pub mod index;
pub mod list;
pub mod take;

use std::path::PathBuf;

use thiserror::Error;

use crate::messages::MESSAGE_INVALID_PRESCRIPTION_DISPLAYED_INDEX;
use crate::model::{FieldError, Model};
use crate::storage::StorageError;

pub use add::AddCommand;
pub use completed::{DeleteCompletedCommand, DoneCommand};
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPrescriptionDescriptor};
pub use find::FindCommand;
pub use index::Index;
pub use take::{TakeCommand, UntakeCommand};

/// Errors raised while executing a well-formed command.
///
/// Any change already applied to the model before the error is kept.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The index does not refer to a record in the displayed list.
    #[error("{}", MESSAGE_INVALID_PRESCRIPTION_DISPLAYED_INDEX)]
    InvalidIndex,

    #[error("This prescription already exists in the prescription list")]
    DuplicatePrescription,

    #[error("This prescription already exists in the completed list")]
    DuplicateCompleted,

    /// Taking more doses than remain in stock.
    #[error("Not enough stock: {available} remaining, {requested} requested")]
    InsufficientStock { available: u32, requested: u32 },

    /// Untaking more doses than have been taken.
    #[error("Cannot untake {requested} dose(s): only {taken} taken")]
    NothingToUntake { taken: u32, requested: u32 },

    /// The edited record violates a cross-field constraint.
    #[error("{0}")]
    InvalidEdit(#[from] FieldError),

    /// Saving after the command failed because the file is not writable.
    #[error(
        "Could not save data to file {} due to insufficient permissions to write to the file or the folder.",
        .path.display()
    )]
    SavePermissionDenied { path: PathBuf },

    /// Saving after the command failed for any other reason.
    #[error("Could not save data due to the following error: {0}")]
    SaveFailed(#[source] StorageError),
}

/// Which list the host should display after a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListView {
    #[default]
    Active,
    Completed,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback_to_user: String,

    /// The host should show usage help.
    pub show_help: bool,

    /// The host should terminate.
    pub exit: bool,

    /// The list the host should display.
    pub view: ListView,
}

impl CommandResult {
    #[must_use]
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
            view: ListView::Active,
        }
    }

    #[must_use]
    pub fn with_view(mut self, view: ListView) -> Self {
        self.view = view;
        self
    }
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Clear,
    Delete(DeleteCommand),
    DeleteCompleted(DeleteCompletedCommand),
    Done(DoneCommand),
    Edit(EditCommand),
    Exit,
    Find(FindCommand),
    Help,
    List,
    ListCompleted,
    Take(TakeCommand),
    Untake(UntakeCommand),
}

impl Command {
    /// Runs the command against `model`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when the command's preconditions do not
    /// hold, e.g. an out-of-range index or a duplicate record.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(command) => command.execute(model),
            Self::Clear => Ok(clear::execute(model)),
            Self::Delete(command) => command.execute(model),
            Self::DeleteCompleted(command) => command.execute(model),
            Self::Done(command) => command.execute(model),
            Self::Edit(command) => command.execute(model),
            Self::Exit => Ok(help::exit()),
            Self::Find(command) => Ok(command.execute(model)),
            Self::Help => Ok(help::help()),
            Self::List => Ok(list::execute(model)),
            Self::ListCompleted => Ok(completed::list_completed(model)),
            Self::Take(command) => command.execute(model),
            Self::Untake(command) => command.execute(model),
        }
    }

    /// The command word this command was parsed from.
    #[must_use]
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => add::COMMAND_WORD,
            Self::Clear => clear::COMMAND_WORD,
            Self::Delete(_) => delete::COMMAND_WORD,
            Self::DeleteCompleted(_) => completed::DELETE_COMMAND_WORD,
            Self::Done(_) => completed::DONE_COMMAND_WORD,
            Self::Edit(_) => edit::COMMAND_WORD,
            Self::Exit => help::EXIT_COMMAND_WORD,
            Self::Find(_) => find::COMMAND_WORD,
            Self::Help => help::COMMAND_WORD,
            Self::List => list::COMMAND_WORD,
            Self::ListCompleted => completed::LIST_COMMAND_WORD,
            Self::Take(_) => take::TAKE_COMMAND_WORD,
            Self::Untake(_) => take::UNTAKE_COMMAND_WORD,
        }
    }
}
