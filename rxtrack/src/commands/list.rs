//! `list`: show every active prescription.

use crate::model::{Model, PrescriptionFilter};

use super::CommandResult;

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_SUCCESS: &str = "Listed all prescriptions";

pub(crate) fn execute(model: &mut Model) -> CommandResult {
    model.update_filtered_prescription_list(PrescriptionFilter::ShowAll);
    CommandResult::new(MESSAGE_SUCCESS)
}
