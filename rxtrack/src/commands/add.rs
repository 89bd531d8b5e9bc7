//! `add`: append a new prescription to the active list.

use crate::model::{ListError, Model, Prescription};

use super::{CommandError, CommandResult};

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a prescription to the prescription list. \
Parameters: n/NAME [d/DOSAGE] [f/FREQUENCY] [s/START_DATE] [e/END_DATE] [exp/EXPIRY_DATE] \
[ts/TOTAL_STOCK] [nt/NOTE]\n\
Example: add n/Aspirin d/1 tablet f/Daily s/01/01/2024 ts/30 nt/after food";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Prescription,
}

impl AddCommand {
    #[must_use]
    pub fn new(to_add: Prescription) -> Self {
        Self { to_add }
    }

    /// Appends the prescription to the active list.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::DuplicatePrescription`] if an identical record
    /// is already in the list.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model
            .add_prescription(self.to_add.clone())
            .map_err(|err| match err {
                ListError::Duplicate | ListError::NotFound => CommandError::DuplicatePrescription,
            })?;
        Ok(CommandResult::new(format!(
            "New prescription added: {}",
            self.to_add
        )))
    }
}
