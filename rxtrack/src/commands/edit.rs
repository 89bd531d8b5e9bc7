//! `edit`: replace fields of an active prescription.

use chrono::NaiveDate;

use crate::model::{Dosage, FieldError, Frequency, ListError, Model, Name, Note, Prescription};

use super::{CommandError, CommandResult, Index};

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the prescription identified by \
the index number used in the displayed prescription list. Existing values will be \
overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [d/DOSAGE] [f/FREQUENCY] \
[s/START_DATE] [e/END_DATE] [exp/EXPIRY_DATE] [ts/TOTAL_STOCK] [c/CONSUMPTION_COUNT] [nt/NOTE]\n\
Example: edit 1 d/2 tablets ts/40";

/// The fields an `edit` overwrites; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPrescriptionDescriptor {
    pub name: Option<Name>,
    pub dosage: Option<Dosage>,
    pub frequency: Option<Frequency>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub total_stock: Option<u32>,
    pub consumption_count: Option<u32>,
    pub note: Option<Note>,
}

impl EditPrescriptionDescriptor {
    #[must_use]
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.dosage.is_some()
            || self.frequency.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.expiry_date.is_some()
            || self.total_stock.is_some()
            || self.consumption_count.is_some()
            || self.note.is_some()
    }

    /// Builds the edited copy of `original`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::EndBeforeStart`] if the combined dates are
    /// inconsistent.
    pub fn apply(&self, original: &Prescription) -> Result<Prescription, FieldError> {
        let mut builder = original.to_builder();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(dosage) = &self.dosage {
            builder = builder.dosage(Some(dosage.clone()));
        }
        if let Some(frequency) = self.frequency {
            builder = builder.frequency(Some(frequency));
        }
        if let Some(start) = self.start_date {
            builder = builder.start_date(start);
        }
        if let Some(end) = self.end_date {
            builder = builder.end_date(Some(end));
        }
        if let Some(expiry) = self.expiry_date {
            builder = builder.expiry_date(Some(expiry));
        }
        if let Some(stock) = self.total_stock {
            builder = builder.total_stock(Some(stock));
        }
        if let Some(count) = self.consumption_count {
            builder = builder.consumption_count(count);
        }
        if let Some(note) = &self.note {
            builder = builder.note(Some(note.clone()));
        }
        builder.build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPrescriptionDescriptor,
}

impl EditCommand {
    #[must_use]
    pub fn new(index: Index, descriptor: EditPrescriptionDescriptor) -> Self {
        Self { index, descriptor }
    }

    /// # Errors
    ///
    /// Returns [`CommandError::InvalidIndex`] for an out-of-range index,
    /// [`CommandError::InvalidEdit`] if the edited dates are inconsistent and
    /// [`CommandError::DuplicatePrescription`] if the result duplicates
    /// another record.
    pub fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = self.index.resolve(&model.filtered_prescription_list())?;
        let edited = self.descriptor.apply(&target)?;

        model
            .set_prescription(&target, edited.clone())
            .map_err(|err| match err {
                ListError::Duplicate => CommandError::DuplicatePrescription,
                ListError::NotFound => CommandError::InvalidIndex,
            })?;

        Ok(CommandResult::new(format!("Edited Prescription: {edited}")))
    }
}
