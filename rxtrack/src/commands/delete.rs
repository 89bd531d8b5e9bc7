//! `delete`: remove a prescription from the active list.

use tracing::debug;

use crate::model::Model;

use super::{CommandError, CommandResult, Index};

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the prescription identified by the index \
number used in the displayed prescription list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    target_index: Index,
}

impl DeleteCommand {
    #[must_use]
    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidIndex`] if the index is past the end of
    /// the displayed list.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self
            .target_index
            .resolve(&model.filtered_prescription_list())?;
        model
            .delete_prescription(&target)
            .map_err(|_| CommandError::InvalidIndex)?;
        debug!(index = self.target_index.one_based(), "Deleted prescription");
        Ok(CommandResult::new(format!(
            "Deleted Prescription: {target}"
        )))
    }
}
