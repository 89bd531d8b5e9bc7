//! In-memory model: the active and completed prescription lists, the filter
//! applied to each, and the user's preferences.
//!
//! Filtered views are recomputed on every call to
//! [`Model::filtered_prescription_list`] and
//! [`Model::filtered_completed_list`], so they always reflect the most
//! recent mutation. The model performs no I/O.

pub mod predicate;
pub mod prescription;
pub mod prescription_list;
pub mod user_prefs;

use std::path::{Path, PathBuf};

pub use predicate::{NameContainsKeywordsPredicate, PrescriptionFilter};
pub use prescription::{
    Dosage, FieldError, Frequency, Name, Note, Prescription, PrescriptionBuilder,
};
pub use prescription_list::{ListError, PrescriptionList};
pub use user_prefs::{GuiSettings, UserPrefs};

/// Owns both prescription lists for the lifetime of the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    prescriptions: PrescriptionList,
    completed: PrescriptionList,
    user_prefs: UserPrefs,
    prescription_filter: PrescriptionFilter,
    completed_filter: PrescriptionFilter,
}

impl Model {
    #[must_use]
    pub fn new(
        prescriptions: PrescriptionList,
        completed: PrescriptionList,
        user_prefs: UserPrefs,
    ) -> Self {
        Self {
            prescriptions,
            completed,
            user_prefs,
            prescription_filter: PrescriptionFilter::ShowAll,
            completed_filter: PrescriptionFilter::ShowAll,
        }
    }

    // =========================================================================
    // User preferences
    // =========================================================================

    #[must_use]
    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    #[must_use]
    pub fn gui_settings(&self) -> &GuiSettings {
        self.user_prefs.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.set_gui_settings(gui_settings);
    }

    #[must_use]
    pub fn prescription_list_file_path(&self) -> &Path {
        self.user_prefs.prescription_list_file_path()
    }

    pub fn set_prescription_list_file_path(&mut self, path: PathBuf) {
        self.user_prefs.set_prescription_list_file_path(path);
    }

    #[must_use]
    pub fn completed_list_file_path(&self) -> &Path {
        self.user_prefs.completed_list_file_path()
    }

    pub fn set_completed_list_file_path(&mut self, path: PathBuf) {
        self.user_prefs.set_completed_list_file_path(path);
    }

    // =========================================================================
    // Active prescriptions
    // =========================================================================

    #[must_use]
    pub fn prescription_list(&self) -> &PrescriptionList {
        &self.prescriptions
    }

    /// Replaces the whole active list.
    pub fn set_prescription_list(&mut self, prescriptions: PrescriptionList) {
        self.prescriptions = prescriptions;
    }

    #[must_use]
    pub fn has_prescription(&self, prescription: &Prescription) -> bool {
        self.prescriptions.contains(prescription)
    }

    /// Appends to the active list and resets its filter so the new record
    /// is visible.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Duplicate`] if an equal record already exists.
    pub fn add_prescription(&mut self, prescription: Prescription) -> Result<(), ListError> {
        self.prescriptions.add(prescription)?;
        self.prescription_filter = PrescriptionFilter::ShowAll;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if `target` is not in the active list.
    pub fn delete_prescription(&mut self, target: &Prescription) -> Result<(), ListError> {
        self.prescriptions.remove(target)
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// # Errors
    ///
    /// See [`PrescriptionList::set`].
    pub fn set_prescription(
        &mut self,
        target: &Prescription,
        edited: Prescription,
    ) -> Result<(), ListError> {
        self.prescriptions.set(target, edited)
    }

    #[must_use]
    pub fn prescription_filter(&self) -> &PrescriptionFilter {
        &self.prescription_filter
    }

    /// Installs a new filter on the active list.
    pub fn update_filtered_prescription_list(&mut self, filter: impl Into<PrescriptionFilter>) {
        self.prescription_filter = filter.into();
    }

    /// The active records passing the current filter, in list order.
    #[must_use]
    pub fn filtered_prescription_list(&self) -> Vec<&Prescription> {
        filtered(&self.prescriptions, &self.prescription_filter)
    }

    // =========================================================================
    // Completed prescriptions
    // =========================================================================

    #[must_use]
    pub fn completed_list(&self) -> &PrescriptionList {
        &self.completed
    }

    pub fn set_completed_list(&mut self, completed: PrescriptionList) {
        self.completed = completed;
    }

    #[must_use]
    pub fn has_completed(&self, prescription: &Prescription) -> bool {
        self.completed.contains(prescription)
    }

    /// # Errors
    ///
    /// Returns [`ListError::Duplicate`] if an equal record is already completed.
    pub fn add_completed(&mut self, prescription: Prescription) -> Result<(), ListError> {
        self.completed.add(prescription)?;
        self.completed_filter = PrescriptionFilter::ShowAll;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if `target` is not in the completed list.
    pub fn delete_completed(&mut self, target: &Prescription) -> Result<(), ListError> {
        self.completed.remove(target)
    }

    #[must_use]
    pub fn completed_filter(&self) -> &PrescriptionFilter {
        &self.completed_filter
    }

    pub fn update_filtered_completed_list(&mut self, filter: impl Into<PrescriptionFilter>) {
        self.completed_filter = filter.into();
    }

    #[must_use]
    pub fn filtered_completed_list(&self) -> Vec<&Prescription> {
        filtered(&self.completed, &self.completed_filter)
    }
}

fn filtered<'a>(list: &'a PrescriptionList, filter: &PrescriptionFilter) -> Vec<&'a Prescription> {
    list.iter().filter(|p| filter.test(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{
        aspirin, ibuprofen, propranolol, typical_completed_list, typical_prescription_list, zomig,
    };

    fn typical_model() -> Model {
        Model::new(
            typical_prescription_list(),
            typical_completed_list(),
            UserPrefs::default(),
        )
    }

    #[test]
    fn new_model_shows_everything() {
        let model = typical_model();

        assert_eq!(
            model.filtered_prescription_list().len(),
            model.prescription_list().len()
        );
        assert_eq!(
            model.filtered_completed_list().len(),
            model.completed_list().len()
        );
    }

    #[test]
    fn filtered_view_is_ordered_subsequence() {
        let mut model = typical_model();
        model.update_filtered_prescription_list(NameContainsKeywordsPredicate::from_text(
            "Zolmitriptan Aspirin",
        ));

        let view: Vec<Prescription> = model
            .filtered_prescription_list()
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(view, vec![aspirin(), zomig()]);
    }

    #[test]
    fn filtered_view_tracks_mutations() {
        let mut model = typical_model();
        model.update_filtered_prescription_list(NameContainsKeywordsPredicate::from_text("Asp"));
        assert_eq!(model.filtered_prescription_list().len(), 1);

        model.delete_prescription(&aspirin()).unwrap();
        assert!(model.filtered_prescription_list().is_empty());
    }

    #[test]
    fn add_resets_filter() {
        let mut model = Model::default();
        model.update_filtered_prescription_list(NameContainsKeywordsPredicate::from_text("zzz"));

        model.add_prescription(aspirin()).unwrap();

        assert_eq!(model.prescription_filter(), &PrescriptionFilter::ShowAll);
        assert_eq!(model.filtered_prescription_list(), vec![&aspirin()]);
    }

    #[test]
    fn add_duplicate_fails_and_leaves_list_unchanged() {
        let mut model = typical_model();
        let before = model.prescription_list().clone();

        assert_eq!(model.add_prescription(aspirin()), Err(ListError::Duplicate));
        assert_eq!(model.prescription_list(), &before);
    }

    #[test]
    fn lists_are_independent() {
        let mut model = typical_model();
        assert!(model.has_completed(&ibuprofen()));
        assert!(!model.has_prescription(&ibuprofen()));

        model.add_completed(propranolol()).unwrap();
        assert!(model.has_prescription(&propranolol()));
        assert!(model.has_completed(&propranolol()));
    }

    #[test]
    fn file_paths_live_in_user_prefs() {
        let mut model = Model::default();
        model.set_prescription_list_file_path(PathBuf::from("a/b.json"));

        assert_eq!(model.prescription_list_file_path(), Path::new("a/b.json"));
        assert_eq!(
            model.user_prefs().prescription_list_file_path(),
            Path::new("a/b.json")
        );
    }

    #[test]
    fn gui_settings_round_trip() {
        let mut model = Model::default();
        let settings = GuiSettings {
            window_width: 1024.0,
            window_height: 768.0,
            window_x: Some(10),
            window_y: Some(20),
        };

        model.set_gui_settings(settings.clone());

        assert_eq!(model.gui_settings(), &settings);
    }
}
