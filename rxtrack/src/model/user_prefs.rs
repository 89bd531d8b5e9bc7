//! User preferences: window geometry and data file locations.
//!
//! Preferences are persisted separately from prescription data, as a small
//! camelCase JSON document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the active prescription list inside the data directory.
pub const PRESCRIPTION_LIST_FILE: &str = "prescriptions.json";

/// File name of the completed prescription list inside the data directory.
pub const COMPLETED_LIST_FILE: &str = "completed.json";

const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

/// Window size and optional position of the host UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_y: Option<i32>,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_x: None,
            window_y: None,
        }
    }
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    prescription_list_file_path: PathBuf,
    completed_list_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::for_data_dir(Path::new("data"))
    }
}

impl UserPrefs {
    /// Preferences with both list files placed inside `data_dir`.
    #[must_use]
    pub fn for_data_dir(data_dir: &Path) -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            prescription_list_file_path: data_dir.join(PRESCRIPTION_LIST_FILE),
            completed_list_file_path: data_dir.join(COMPLETED_LIST_FILE),
        }
    }

    #[must_use]
    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    #[must_use]
    pub fn prescription_list_file_path(&self) -> &Path {
        &self.prescription_list_file_path
    }

    pub fn set_prescription_list_file_path(&mut self, path: PathBuf) {
        self.prescription_list_file_path = path;
    }

    #[must_use]
    pub fn completed_list_file_path(&self) -> &Path {
        &self.completed_list_file_path
    }

    pub fn set_completed_list_file_path(&mut self, path: PathBuf) {
        self.completed_list_file_path = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_data_dir_places_both_lists_in_the_directory() {
        let prefs = UserPrefs::for_data_dir(Path::new("/tmp/rx"));

        assert_eq!(
            prefs.prescription_list_file_path(),
            Path::new("/tmp/rx/prescriptions.json")
        );
        assert_eq!(
            prefs.completed_list_file_path(),
            Path::new("/tmp/rx/completed.json")
        );
    }

    #[test]
    fn serializes_to_camel_case() {
        let prefs = UserPrefs::for_data_dir(Path::new("data"));
        let json = serde_json::to_value(&prefs).unwrap();

        assert!(json.get("guiSettings").is_some());
        assert!(json.get("prescriptionListFilePath").is_some());
        assert!(json["guiSettings"].get("windowWidth").is_some());
        assert!(json["guiSettings"].get("windowX").is_none());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let prefs: UserPrefs =
            serde_json::from_str(r#"{"guiSettings":{"windowWidth":800.0,"windowHeight":500.0}}"#)
                .unwrap();

        assert_eq!(prefs.gui_settings().window_width, 800.0);
        assert_eq!(
            prefs.prescription_list_file_path(),
            UserPrefs::default().prescription_list_file_path()
        );
    }
}
