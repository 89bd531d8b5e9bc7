//! Commands over the completed list: `done`, `listc` and `deletec`.

use tracing::debug;

use crate::model::{ListError, Model, PrescriptionFilter};

use super::{CommandError, CommandResult, Index, ListView};

pub const DONE_COMMAND_WORD: &str = "done";

pub const LIST_COMMAND_WORD: &str = "listc";

pub const DELETE_COMMAND_WORD: &str = "deletec";

pub const DONE_MESSAGE_USAGE: &str = "done: Marks the prescription identified by the index \
number used in the displayed prescription list as completed, moving it to the completed list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: done 1";

pub const DELETE_MESSAGE_USAGE: &str = "deletec: Deletes the prescription identified by the \
index number used in the displayed completed list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: deletec 1";

pub const LIST_MESSAGE_SUCCESS: &str = "Listed all completed prescriptions";

/// Moves an active prescription to the completed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoneCommand {
    index: Index,
}

impl DoneCommand {
    #[must_use]
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidIndex`] if the index is past the end of
    /// the displayed list, or [`CommandError::DuplicateCompleted`] if the
    /// completed list already holds an identical record.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(&model.filtered_prescription_list())?;
        if model.has_completed(&target) {
            return Err(CommandError::DuplicateCompleted);
        }

        model
            .delete_prescription(&target)
            .map_err(|_| CommandError::InvalidIndex)?;
        model
            .add_completed(target.clone())
            .map_err(|_| CommandError::DuplicateCompleted)?;

        debug!(name = %target.name(), "Prescription moved to completed list");
        Ok(CommandResult::new(format!(
            "Prescription marked as completed: {target}"
        )))
    }
}

/// Removes a record from the completed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCompletedCommand {
    index: Index,
}

impl DeleteCompletedCommand {
    #[must_use]
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidIndex`] if the index is past the end of
    /// the displayed completed list.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(&model.filtered_completed_list())?;
        model.delete_completed(&target).map_err(|err| match err {
            ListError::NotFound | ListError::Duplicate => CommandError::InvalidIndex,
        })?;
        Ok(
            CommandResult::new(format!("Deleted Completed Prescription: {target}"))
                .with_view(ListView::Completed),
        )
    }
}

pub(crate) fn list_completed(model: &mut Model) -> CommandResult {
    model.update_filtered_completed_list(PrescriptionFilter::ShowAll);
    CommandResult::new(LIST_MESSAGE_SUCCESS).with_view(ListView::Completed)
}
