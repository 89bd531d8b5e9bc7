//! `help` and `exit`.

use super::{add, completed, delete, edit, find, take, CommandResult};

pub const COMMAND_WORD: &str = "help";

pub const EXIT_COMMAND_WORD: &str = "exit";

pub const MESSAGE_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting Prescription List as requested ...";

/// Usage text for every command, one paragraph each.
#[must_use]
pub fn usage() -> String {
    [
        add::MESSAGE_USAGE,
        edit::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        find::MESSAGE_USAGE,
        take::TAKE_MESSAGE_USAGE,
        take::UNTAKE_MESSAGE_USAGE,
        completed::DONE_MESSAGE_USAGE,
        completed::DELETE_MESSAGE_USAGE,
        "list: Lists all prescriptions.",
        "listc: Lists all completed prescriptions.",
        "clear: Deletes every prescription in the prescription list.",
        MESSAGE_USAGE,
        "exit: Exits the program.",
    ]
    .join("\n\n")
}

pub(crate) fn help() -> CommandResult {
    CommandResult {
        show_help: true,
        ..CommandResult::new(usage())
    }
}

pub(crate) fn exit() -> CommandResult {
    CommandResult {
        exit: true,
        ..CommandResult::new(MESSAGE_EXIT_ACKNOWLEDGEMENT)
    }
}
