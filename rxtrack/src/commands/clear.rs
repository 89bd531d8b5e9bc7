//! `clear`: empty the active list.

use crate::model::{Model, PrescriptionList};

use super::CommandResult;

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_SUCCESS: &str = "Prescription list has been cleared!";

pub(crate) fn execute(model: &mut Model) -> CommandResult {
    model.set_prescription_list(PrescriptionList::new());
    CommandResult::new(MESSAGE_SUCCESS)
}
