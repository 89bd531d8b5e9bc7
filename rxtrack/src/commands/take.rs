//! `take` and `untake`: record doses against an active prescription.
//!
//! Taking a dose raises the consumption count and, when stock is tracked,
//! lowers the remaining stock by the same amount. Untaking reverses it.

use std::num::NonZeroU32;

use crate::model::{FieldError, ListError, Model, Prescription};

use super::{CommandError, CommandResult, Index};

pub const TAKE_COMMAND_WORD: &str = "take";

pub const UNTAKE_COMMAND_WORD: &str = "untake";

pub const TAKE_MESSAGE_USAGE: &str = "take: Records doses taken for the prescription \
identified by the index number used in the displayed prescription list.\n\
Parameters: INDEX (must be a positive integer) [AMOUNT] (positive integer, default 1)\n\
Example: take 1 2";

pub const UNTAKE_MESSAGE_USAGE: &str = "untake: Reverses doses recorded for the prescription \
identified by the index number used in the displayed prescription list.\n\
Parameters: INDEX (must be a positive integer) [AMOUNT] (positive integer, default 1)\n\
Example: untake 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeCommand {
    index: Index,
    amount: NonZeroU32,
}

impl TakeCommand {
    #[must_use]
    pub fn new(index: Index, amount: NonZeroU32) -> Self {
        Self { index, amount }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InsufficientStock`] when tracked stock is lower
    /// than the amount, or [`CommandError::InvalidIndex`] for an out-of-range
    /// index.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(&model.filtered_prescription_list())?;
        let amount = self.amount.get();

        let stock = match target.total_stock() {
            Some(available) if available < amount => {
                return Err(CommandError::InsufficientStock {
                    available,
                    requested: amount,
                });
            }
            Some(available) => Some(available - amount),
            None => None,
        };
        let count = target.consumption_count().saturating_add(amount);

        let updated = replace(model, &target, |p| {
            p.to_builder().total_stock(stock).consumption_count(count).build()
        })?;

        Ok(CommandResult::new(format!(
            "Took {amount} dose(s) of {}. Consumption count: {}",
            updated.name(),
            updated.consumption_count()
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UntakeCommand {
    index: Index,
    amount: NonZeroU32,
}

impl UntakeCommand {
    #[must_use]
    pub fn new(index: Index, amount: NonZeroU32) -> Self {
        Self { index, amount }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::NothingToUntake`] when fewer doses than the
    /// amount have been taken, or [`CommandError::InvalidIndex`] for an
    /// out-of-range index.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(&model.filtered_prescription_list())?;
        let amount = self.amount.get();

        let taken = target.consumption_count();
        if taken < amount {
            return Err(CommandError::NothingToUntake {
                taken,
                requested: amount,
            });
        }
        let stock = target.total_stock().map(|s| s.saturating_add(amount));

        let updated = replace(model, &target, |p| {
            p.to_builder()
                .total_stock(stock)
                .consumption_count(taken - amount)
                .build()
        })?;

        Ok(CommandResult::new(format!(
            "Untook {amount} dose(s) of {}. Consumption count: {}",
            updated.name(),
            updated.consumption_count()
        )))
    }
}

fn replace<F>(
    model: &mut Model,
    target: &Prescription,
    edit: F,
) -> Result<Prescription, CommandError>
where
    F: FnOnce(&Prescription) -> Result<Prescription, FieldError>,
{
    let updated = edit(target)?;
    model
        .set_prescription(target, updated.clone())
        .map_err(|err| match err {
            ListError::Duplicate => CommandError::DuplicatePrescription,
            ListError::NotFound => CommandError::InvalidIndex,
        })?;
    Ok(updated)
}
