//! Argument prefixes used in the command syntax.

use std::fmt;

/// A tag such as `n/` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_DOSAGE: Prefix = Prefix::new("d/");
pub const PREFIX_FREQUENCY: Prefix = Prefix::new("f/");
pub const PREFIX_START_DATE: Prefix = Prefix::new("s/");
pub const PREFIX_END_DATE: Prefix = Prefix::new("e/");
pub const PREFIX_EXPIRY_DATE: Prefix = Prefix::new("exp/");
pub const PREFIX_TOTAL_STOCK: Prefix = Prefix::new("ts/");
pub const PREFIX_CONSUMPTION_COUNT: Prefix = Prefix::new("c/");
pub const PREFIX_NOTE: Prefix = Prefix::new("nt/");

/// Prefixes accepted by `add`.
pub const ADD_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_DOSAGE,
    PREFIX_FREQUENCY,
    PREFIX_START_DATE,
    PREFIX_END_DATE,
    PREFIX_EXPIRY_DATE,
    PREFIX_TOTAL_STOCK,
    PREFIX_NOTE,
];

/// Prefixes accepted by `edit`.
pub const EDIT_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_DOSAGE,
    PREFIX_FREQUENCY,
    PREFIX_START_DATE,
    PREFIX_END_DATE,
    PREFIX_EXPIRY_DATE,
    PREFIX_TOTAL_STOCK,
    PREFIX_CONSUMPTION_COUNT,
    PREFIX_NOTE,
];
