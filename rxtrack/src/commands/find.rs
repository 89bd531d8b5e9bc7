//! `find`: filter the active list by name keywords.

use crate::messages::prescriptions_listed_overview;
use crate::model::{Model, NameContainsKeywordsPredicate};

use super::CommandResult;

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all prescriptions whose names contain any of \
the specified keywords (case-insensitive, partial matches allowed) and displays them as a \
list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find aspirin pro";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    #[must_use]
    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }

    #[must_use]
    pub fn predicate(&self) -> &NameContainsKeywordsPredicate {
        &self.predicate
    }

    /// Installs the predicate as the active-list filter and reports how
    /// many records it lets through.
    pub fn execute(&self, model: &mut Model) -> CommandResult {
        model.update_filtered_prescription_list(self.predicate.clone());
        let count = model.filtered_prescription_list().len();
        CommandResult::new(prescriptions_listed_overview(count))
    }
}
