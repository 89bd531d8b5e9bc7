//! Ordered collection of unique prescriptions.

use thiserror::Error;

use super::prescription::Prescription;

/// Violations of the list's uniqueness and membership rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The record is structurally equal to one already in the list.
    #[error("duplicate prescription")]
    Duplicate,

    /// The record to replace or remove is not in the list.
    #[error("prescription not found")]
    NotFound,
}

/// An ordered sequence of prescriptions in which no two records are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrescriptionList {
    prescriptions: Vec<Prescription>,
}

impl PrescriptionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `prescriptions`, rejecting duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Duplicate`] if any two records are equal.
    pub fn from_prescriptions(prescriptions: Vec<Prescription>) -> Result<Self, ListError> {
        let mut list = Self::new();
        for prescription in prescriptions {
            list.add(prescription)?;
        }
        Ok(list)
    }

    #[must_use]
    pub fn contains(&self, prescription: &Prescription) -> bool {
        self.prescriptions.contains(prescription)
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Duplicate`] if an equal record is already present.
    pub fn add(&mut self, prescription: Prescription) -> Result<(), ListError> {
        if self.contains(&prescription) {
            return Err(ListError::Duplicate);
        }
        self.prescriptions.push(prescription);
        Ok(())
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if `target` is absent, or
    /// [`ListError::Duplicate`] if `edited` equals some other record.
    pub fn set(&mut self, target: &Prescription, edited: Prescription) -> Result<(), ListError> {
        let index = self.position(target).ok_or(ListError::NotFound)?;
        if target != &edited && self.contains(&edited) {
            return Err(ListError::Duplicate);
        }
        self.prescriptions[index] = edited;
        Ok(())
    }

    /// Removes `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if `target` is absent.
    pub fn remove(&mut self, target: &Prescription) -> Result<(), ListError> {
        let index = self.position(target).ok_or(ListError::NotFound)?;
        self.prescriptions.remove(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.prescriptions.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prescriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prescriptions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prescription> {
        self.prescriptions.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Prescription] {
        &self.prescriptions
    }

    fn position(&self, target: &Prescription) -> Option<usize> {
        self.prescriptions.iter().position(|p| p == target)
    }
}

impl<'a> IntoIterator for &'a PrescriptionList {
    type Item = &'a Prescription;
    type IntoIter = std::slice::Iter<'a, Prescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{aspirin, propranolol, zomig};

    #[test]
    fn add_rejects_duplicates() {
        let mut list = PrescriptionList::new();
        list.add(aspirin()).unwrap();

        assert_eq!(list.add(aspirin()), Err(ListError::Duplicate));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn from_prescriptions_rejects_duplicates() {
        let result = PrescriptionList::from_prescriptions(vec![aspirin(), propranolol(), aspirin()]);
        assert_eq!(result, Err(ListError::Duplicate));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut list =
            PrescriptionList::from_prescriptions(vec![aspirin(), propranolol(), zomig()]).unwrap();
        let edited = propranolol().to_builder().consumption_count(3).build().unwrap();

        list.set(&propranolol(), edited.clone()).unwrap();

        assert_eq!(list.as_slice(), &[aspirin(), edited, zomig()]);
    }

    #[test]
    fn set_to_identical_record_is_allowed() {
        let mut list = PrescriptionList::from_prescriptions(vec![aspirin()]).unwrap();
        assert_eq!(list.set(&aspirin(), aspirin()), Ok(()));
    }

    #[test]
    fn set_rejects_edit_into_existing_record() {
        let mut list = PrescriptionList::from_prescriptions(vec![aspirin(), propranolol()]).unwrap();
        assert_eq!(list.set(&aspirin(), propranolol()), Err(ListError::Duplicate));
        assert_eq!(list.as_slice(), &[aspirin(), propranolol()]);
    }

    #[test]
    fn set_missing_target_fails() {
        let mut list = PrescriptionList::new();
        assert_eq!(list.set(&aspirin(), zomig()), Err(ListError::NotFound));
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut list =
            PrescriptionList::from_prescriptions(vec![aspirin(), propranolol(), zomig()]).unwrap();
        list.remove(&propranolol()).unwrap();

        assert_eq!(list.as_slice(), &[aspirin(), zomig()]);
        assert_eq!(list.remove(&propranolol()), Err(ListError::NotFound));
    }
}
