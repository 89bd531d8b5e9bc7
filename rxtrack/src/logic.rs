//! The façade hosts talk to: text in, [`CommandResult`] out.
//!
//! Every call to [`LogicManager::execute`] parses the text, runs the command
//! against the model and then saves both prescription lists. A failure at
//! any stage skips the stages after it; changes already made to the model
//! are kept even if saving fails.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::commands::{CommandError, CommandResult};
use crate::model::{GuiSettings, Model, Prescription, UserPrefs};
use crate::parser::{parse_command, ParseError};
use crate::storage::{Storage, StorageError};

/// Errors surfaced to the user by [`LogicManager::execute`].
#[derive(Error, Debug)]
pub enum LogicError {
    /// The text was not a well-formed command.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The command could not be carried out, or its result not saved.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Owns the model and the storage it is persisted to.
#[derive(Debug)]
pub struct LogicManager {
    model: Model,
    storage: Storage,
}

impl LogicManager {
    #[must_use]
    pub fn new(model: Model, storage: Storage) -> Self {
        Self { model, storage }
    }

    /// Parses and runs `command_text`, then saves both lists.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::Parse`] if the text is malformed and
    /// [`LogicError::Command`] if execution or saving fails.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        info!(command = %command_text, "User command");

        let command = parse_command(command_text)?;
        let result = command.execute(&mut self.model)?;
        self.save_lists()?;

        Ok(result)
    }

    fn save_lists(&self) -> Result<(), CommandError> {
        self.storage
            .save_prescription_list(self.model.prescription_list())
            .and_then(|()| self.storage.save_completed_list(self.model.completed_list()))
            .map_err(|err| {
                warn!(error = %err, "Failed to save prescription data");
                save_error(err)
            })
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The active records the current filter lets through.
    #[must_use]
    pub fn filtered_prescription_list(&self) -> Vec<&Prescription> {
        self.model.filtered_prescription_list()
    }

    /// The completed records the current filter lets through.
    #[must_use]
    pub fn filtered_completed_list(&self) -> Vec<&Prescription> {
        self.model.filtered_completed_list()
    }

    #[must_use]
    pub fn prescription_list_file_path(&self) -> &Path {
        self.storage.prescription_list_path()
    }

    #[must_use]
    pub fn completed_list_file_path(&self) -> &Path {
        self.storage.completed_list_path()
    }

    #[must_use]
    pub fn user_prefs(&self) -> &UserPrefs {
        self.model.user_prefs()
    }

    #[must_use]
    pub fn gui_settings(&self) -> &GuiSettings {
        self.model.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.model.set_gui_settings(gui_settings);
    }
}

fn save_error(err: StorageError) -> CommandError {
    match err {
        StorageError::PermissionDenied { path, .. } => CommandError::SavePermissionDenied { path },
        other => CommandError::SaveFailed(other),
    }
}
