//! Prescription records and their field types.
//!
//! A [`Prescription`] is immutable: edits build a replacement through
//! [`PrescriptionBuilder`] and the old record is swapped out wholesale.
//! Equality is structural over every field and is the only notion of
//! identity a record has.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

/// Date format accepted from users and written to disk (`dd/mm/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Validation failures for individual prescription fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error(
        "Names should only contain alphanumeric characters and spaces, and it should not be blank"
    )]
    InvalidName,

    #[error("Dosage should not be blank")]
    BlankDosage,

    #[error("Frequency should be one of: Daily, Weekly, Monthly")]
    InvalidFrequency,

    #[error("Dates should be in the format dd/mm/yyyy and be a valid calendar date")]
    InvalidDate,

    #[error("End date cannot be before start date")]
    EndBeforeStart,

    #[error("Total stock should be a non-negative integer")]
    InvalidStock,

    #[error("Consumption count should be a non-negative integer")]
    InvalidConsumptionCount,

    #[error("Note should not be blank")]
    BlankNote,
}

/// Name of the prescribed medication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `keyword` occurs anywhere in the name, ignoring case.
    ///
    /// Blank keywords never match.
    #[must_use]
    pub fn contains_ignore_case(&self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return false;
        }
        self.0.to_lowercase().contains(&keyword.to_lowercase())
    }
}

impl FromStr for Name {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let valid_first = chars.next().is_some_and(char::is_alphanumeric);
        if !valid_first || !chars.all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(FieldError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text dosage, e.g. `2 tablets` or `5ml`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dosage(String);

impl Dosage {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Dosage {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::BlankDosage);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for Dosage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How often the medication is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl FromStr for Frequency {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(FieldError::InvalidFrequency),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        };
        f.write_str(label)
    }
}

/// Free-text note attached to a prescription.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Note(String);

impl Note {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Note {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FieldError::BlankNote);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses a `dd/mm/yyyy` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| FieldError::InvalidDate)
}

/// Formats a date as `dd/mm/yyyy`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a non-negative stock quantity.
pub fn parse_stock(s: &str) -> Result<u32, FieldError> {
    parse_unsigned(s).ok_or(FieldError::InvalidStock)
}

/// Parses a non-negative consumption count.
pub fn parse_consumption_count(s: &str) -> Result<u32, FieldError> {
    parse_unsigned(s).ok_or(FieldError::InvalidConsumptionCount)
}

/// ASCII digits only; signs are rejected like they are for indexes.
fn parse_unsigned(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// A single prescription record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prescription {
    name: Name,
    dosage: Option<Dosage>,
    frequency: Option<Frequency>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    total_stock: Option<u32>,
    consumption_count: u32,
    note: Option<Note>,
}

impl Prescription {
    /// Starts building a prescription with its two required fields.
    #[must_use]
    pub fn builder(name: Name, start_date: NaiveDate) -> PrescriptionBuilder {
        PrescriptionBuilder {
            name,
            dosage: None,
            frequency: None,
            start_date,
            end_date: None,
            expiry_date: None,
            total_stock: None,
            consumption_count: 0,
            note: None,
        }
    }

    /// Returns a builder pre-filled with this record's fields.
    #[must_use]
    pub fn to_builder(&self) -> PrescriptionBuilder {
        PrescriptionBuilder {
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            frequency: self.frequency,
            start_date: self.start_date,
            end_date: self.end_date,
            expiry_date: self.expiry_date,
            total_stock: self.total_stock,
            consumption_count: self.consumption_count,
            note: self.note.clone(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[must_use]
    pub fn dosage(&self) -> Option<&Dosage> {
        self.dosage.as_ref()
    }

    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    #[must_use]
    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    #[must_use]
    pub fn total_stock(&self) -> Option<u32> {
        self.total_stock
    }

    #[must_use]
    pub fn consumption_count(&self) -> u32 {
        self.consumption_count
    }

    #[must_use]
    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(dosage) = &self.dosage {
            write!(f, "; Dosage: {dosage}")?;
        }
        if let Some(frequency) = self.frequency {
            write!(f, "; Frequency: {frequency}")?;
        }
        write!(f, "; Start Date: {}", format_date(self.start_date))?;
        if let Some(end) = self.end_date {
            write!(f, "; End Date: {}", format_date(end))?;
        }
        if let Some(expiry) = self.expiry_date {
            write!(f, "; Expiry Date: {}", format_date(expiry))?;
        }
        if let Some(stock) = self.total_stock {
            write!(f, "; Total Stock: {stock}")?;
        }
        write!(f, "; Consumption Count: {}", self.consumption_count)?;
        if let Some(note) = &self.note {
            write!(f, "; Note: {note}")?;
        }
        Ok(())
    }
}

/// Assembles a [`Prescription`], checking cross-field constraints on
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct PrescriptionBuilder {
    name: Name,
    dosage: Option<Dosage>,
    frequency: Option<Frequency>,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    total_stock: Option<u32>,
    consumption_count: u32,
    note: Option<Note>,
}

impl PrescriptionBuilder {
    #[must_use]
    pub fn name(mut self, name: Name) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn dosage(mut self, dosage: Option<Dosage>) -> Self {
        self.dosage = dosage;
        self
    }

    #[must_use]
    pub fn frequency(mut self, frequency: Option<Frequency>) -> Self {
        self.frequency = frequency;
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    #[must_use]
    pub fn expiry_date(mut self, expiry_date: Option<NaiveDate>) -> Self {
        self.expiry_date = expiry_date;
        self
    }

    #[must_use]
    pub fn total_stock(mut self, total_stock: Option<u32>) -> Self {
        self.total_stock = total_stock;
        self
    }

    #[must_use]
    pub fn consumption_count(mut self, consumption_count: u32) -> Self {
        self.consumption_count = consumption_count;
        self
    }

    #[must_use]
    pub fn note(mut self, note: Option<Note>) -> Self {
        self.note = note;
        self
    }

    /// Finishes the record.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::EndBeforeStart`] if the end date precedes the
    /// start date.
    pub fn build(self) -> Result<Prescription, FieldError> {
        if self.end_date.is_some_and(|end| end < self.start_date) {
            return Err(FieldError::EndBeforeStart);
        }
        Ok(Prescription {
            name: self.name,
            dosage: self.dosage,
            frequency: self.frequency,
            start_date: self.start_date,
            end_date: self.end_date,
            expiry_date: self.expiry_date,
            total_stock: self.total_stock,
            consumption_count: self.consumption_count,
            note: self.note,
        })
    }
}
