//! One-based positions into a displayed list.

use std::num::NonZeroUsize;

use crate::model::Prescription;

use super::CommandError;

/// A 1-based index as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Returns `None` for zero.
    #[must_use]
    pub fn from_one_based(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    #[must_use]
    pub fn one_based(self) -> usize {
        self.0.get()
    }

    #[must_use]
    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }

    /// Looks up this index in a displayed view.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidIndex`] if the index is past the end.
    pub fn resolve(self, view: &[&Prescription]) -> Result<Prescription, CommandError> {
        view.get(self.zero_based())
            .map(|p| (*p).clone())
            .ok_or(CommandError::InvalidIndex)
    }
}
