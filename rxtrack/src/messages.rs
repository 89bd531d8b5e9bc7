//! User-facing message text shared across the parser and commands.

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

pub const MESSAGE_INVALID_PRESCRIPTION_DISPLAYED_INDEX: &str =
    "The prescription index provided is invalid";

/// Summary reported after filtering a list.
#[must_use]
pub fn prescriptions_listed_overview(count: usize) -> String {
    format!("{count} prescriptions listed!")
}

/// Wraps a command's usage text in the generic format error.
#[must_use]
pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{usage}")
}

/// Error text for single-valued prefixes given more than once.
#[must_use]
pub fn duplicate_fields(prefixes: &[&str]) -> String {
    format!(
        "Multiple values specified for the following single-valued field(s): {}",
        prefixes.join(" ")
    )
}
