//! JSON persistence for prescription lists and user preferences.
//!
//! Each list lives in its own file:
//!
//! ```json
//! {
//!   "prescriptions": [
//!     { "name": "Aspirin", "startDate": "01/01/2024", "consumptionCount": 0 }
//!   ]
//! }
//! ```
//!
//! Saves go through a temporary file in the target's directory that is then
//! renamed over the target, so a failed save leaves the previous file as it
//! was. Loading a list file that does not exist yields an empty list; a file
//! that exists but cannot be decoded is an error.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::model::prescription::{
    format_date, parse_date, Dosage, FieldError, Frequency, Name, Note,
};
use crate::model::{Prescription, PrescriptionList, UserPrefs};

/// Errors from reading or writing data files.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file or its directory is not accessible to this user.
    #[error("insufficient permissions to access {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but is not a valid document.
    #[error("malformed data in {}: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory data could not be encoded for saving.
    #[error("could not encode data for {}: {}", .path.display(), .source)]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document decoded but holds values the model rejects.
    #[error("illegal value in {}: {}", .path.display(), .message)]
    IllegalValue { path: PathBuf, message: String },
}

impl StorageError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path, source }
        } else {
            Self::Io { path, source }
        }
    }

    /// The file the error concerns.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PermissionDenied { path, .. }
            | Self::Io { path, .. }
            | Self::Malformed { path, .. }
            | Self::Serialize { path, .. }
            | Self::IllegalValue { path, .. } => path,
        }
    }
}

const MESSAGE_DUPLICATE_PRESCRIPTION: &str = "Prescription list contains duplicate prescription(s).";

/// On-disk form of a single prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedPrescription {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dosage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frequency: Option<String>,
    start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_stock: Option<u32>,
    #[serde(default)]
    consumption_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl From<&Prescription> for JsonAdaptedPrescription {
    fn from(p: &Prescription) -> Self {
        Self {
            name: p.name().to_string(),
            dosage: p.dosage().map(ToString::to_string),
            frequency: p.frequency().map(|f| f.to_string()),
            start_date: format_date(p.start_date()),
            end_date: p.end_date().map(format_date),
            expiry_date: p.expiry_date().map(format_date),
            total_stock: p.total_stock(),
            consumption_count: p.consumption_count(),
            note: p.note().map(ToString::to_string),
        }
    }
}

impl JsonAdaptedPrescription {
    fn to_model(&self) -> Result<Prescription, FieldError> {
        let name: Name = self.name.parse()?;
        let start_date = parse_date(&self.start_date)?;
        Prescription::builder(name, start_date)
            .dosage(self.dosage.as_deref().map(str::parse::<Dosage>).transpose()?)
            .frequency(
                self.frequency
                    .as_deref()
                    .map(str::parse::<Frequency>)
                    .transpose()?,
            )
            .end_date(self.end_date.as_deref().map(parse_date).transpose()?)
            .expiry_date(self.expiry_date.as_deref().map(parse_date).transpose()?)
            .total_stock(self.total_stock)
            .consumption_count(self.consumption_count)
            .note(self.note.as_deref().map(str::parse::<Note>).transpose()?)
            .build()
    }
}

/// On-disk form of a whole list.
#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonSerializablePrescriptionList {
    #[serde(default)]
    prescriptions: Vec<JsonAdaptedPrescription>,
}

/// Reads a prescription list, returning an empty list if `path` does not exist.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] for undecodable JSON,
/// [`StorageError::IllegalValue`] for invalid fields or duplicate records,
/// and an I/O variant if the file cannot be read.
pub fn load_prescription_list(path: &Path) -> Result<PrescriptionList, StorageError> {
    let Some(contents) = read_optional(path)? else {
        debug!(path = %path.display(), "Prescription file not found, starting empty");
        return Ok(PrescriptionList::new());
    };

    let document: JsonSerializablePrescriptionList =
        serde_json::from_str(&contents).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let prescriptions = document
        .prescriptions
        .iter()
        .map(JsonAdaptedPrescription::to_model)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| StorageError::IllegalValue {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let list = PrescriptionList::from_prescriptions(prescriptions).map_err(|_| {
        StorageError::IllegalValue {
            path: path.to_path_buf(),
            message: MESSAGE_DUPLICATE_PRESCRIPTION.to_string(),
        }
    })?;

    debug!(path = %path.display(), count = list.len(), "Loaded prescriptions");
    Ok(list)
}

/// Writes `list` to `path`, replacing any previous file atomically.
///
/// An existing file keeps its permissions.
///
/// # Errors
///
/// Returns [`StorageError::PermissionDenied`] if the file is read-only or
/// its directory is not writable and [`StorageError::Io`] for other
/// failures. On error the previous file is left untouched.
pub fn save_prescription_list(path: &Path, list: &PrescriptionList) -> Result<(), StorageError> {
    let document = JsonSerializablePrescriptionList {
        prescriptions: list.iter().map(JsonAdaptedPrescription::from).collect(),
    };
    let json = serde_json::to_string_pretty(&document).map_err(|source| {
        StorageError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    write_atomically(path, json.as_bytes())?;
    debug!(path = %path.display(), count = list.len(), "Saved prescriptions");
    Ok(())
}

/// Reads user preferences, returning `None` if `path` does not exist.
///
/// # Errors
///
/// Returns [`StorageError::Malformed`] for undecodable JSON and an I/O
/// variant if the file cannot be read.
pub fn load_user_prefs(path: &Path) -> Result<Option<UserPrefs>, StorageError> {
    let Some(contents) = read_optional(path)? else {
        return Ok(None);
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes user preferences atomically.
///
/// # Errors
///
/// See [`save_prescription_list`].
pub fn save_user_prefs(path: &Path, prefs: &UserPrefs) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(prefs).map_err(|source| StorageError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomically(path, json.as_bytes())?;
    debug!(path = %path.display(), "Saved user preferences");
    Ok(())
}

/// File locations for the two prescription lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    prescription_list_path: PathBuf,
    completed_list_path: PathBuf,
}

impl Storage {
    #[must_use]
    pub fn new(prescription_list_path: PathBuf, completed_list_path: PathBuf) -> Self {
        Self {
            prescription_list_path,
            completed_list_path,
        }
    }

    /// Uses the list locations recorded in `prefs`.
    #[must_use]
    pub fn from_user_prefs(prefs: &UserPrefs) -> Self {
        Self::new(
            prefs.prescription_list_file_path().to_path_buf(),
            prefs.completed_list_file_path().to_path_buf(),
        )
    }

    #[must_use]
    pub fn prescription_list_path(&self) -> &Path {
        &self.prescription_list_path
    }

    #[must_use]
    pub fn completed_list_path(&self) -> &Path {
        &self.completed_list_path
    }

    /// # Errors
    ///
    /// See [`load_prescription_list`].
    pub fn load_prescription_list(&self) -> Result<PrescriptionList, StorageError> {
        load_prescription_list(&self.prescription_list_path)
    }

    /// # Errors
    ///
    /// See [`save_prescription_list`].
    pub fn save_prescription_list(&self, list: &PrescriptionList) -> Result<(), StorageError> {
        save_prescription_list(&self.prescription_list_path, list)
    }

    /// # Errors
    ///
    /// See [`load_prescription_list`].
    pub fn load_completed_list(&self) -> Result<PrescriptionList, StorageError> {
        load_prescription_list(&self.completed_list_path)
    }

    /// # Errors
    ///
    /// See [`save_prescription_list`].
    pub fn save_completed_list(&self, list: &PrescriptionList) -> Result<(), StorageError> {
        save_prescription_list(&self.completed_list_path, list)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::from_io(path, e)),
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| StorageError::from_io(path, e))?;

    // The rename below would replace a read-only file whenever the directory
    // is writable, so refuse explicitly.
    let existing = match fs::metadata(path) {
        Ok(meta) if meta.permissions().readonly() => {
            return Err(StorageError::from_io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "file is read-only"),
            ));
        }
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(StorageError::from_io(path, e)),
    };

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| StorageError::from_io(path, e))?;
    if let Some(permissions) = existing {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| StorageError::from_io(path, e))?;
    }
    tmp.write_all(contents)
        .and_then(|()| tmp.flush())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| StorageError::from_io(path, e))?;
    tmp.persist(path)
        .map_err(|e| StorageError::from_io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{aspirin, propranolol, typical_prescription_list};
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp dir")
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let dir = temp_dir();
        let list = load_prescription_list(&dir.path().join("missing.json")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = temp_dir();
        let path = dir.path().join("prescriptions.json");

        save_prescription_list(&path, &typical_prescription_list()).unwrap();
        let loaded = load_prescription_list(&path).unwrap();

        assert_eq!(loaded, typical_prescription_list());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = temp_dir();
        let path = dir.path().join("prescriptions.json");
        save_prescription_list(&path, &typical_prescription_list()).unwrap();

        let smaller = PrescriptionList::from_prescriptions(vec![propranolol()]).unwrap();
        save_prescription_list(&path, &smaller).unwrap();

        assert_eq!(load_prescription_list(&path).unwrap(), smaller);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = temp_dir();
        let path = dir.path().join("nested").join("deeper").join("list.json");

        save_prescription_list(&path, &typical_prescription_list()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temporary_files() {
        let dir = temp_dir();
        let path = dir.path().join("prescriptions.json");

        save_prescription_list(&path, &typical_prescription_list()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn writes_camel_case_fields_and_skips_absent_ones() {
        let dir = temp_dir();
        let path = dir.path().join("prescriptions.json");
        let list = PrescriptionList::from_prescriptions(vec![aspirin()]).unwrap();

        save_prescription_list(&path, &list).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let record = &json["prescriptions"][0];
        assert_eq!(record["name"], "Aspirin");
        assert_eq!(record["startDate"], "01/01/2024");
        assert_eq!(record["totalStock"], 30);
        assert_eq!(record["consumptionCount"], 0);
        assert!(record.get("note").is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = temp_dir();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_prescription_list(&path);

        assert!(matches!(result, Err(StorageError::Malformed { .. })));
    }

    #[test]
    fn illegal_field_value_is_an_error() {
        let dir = temp_dir();
        let path = dir.path().join("illegal.json");
        fs::write(
            &path,
            r#"{"prescriptions":[{"name":"Asp*rin","startDate":"01/01/2024"}]}"#,
        )
        .unwrap();

        let err = load_prescription_list(&path).unwrap_err();

        assert!(matches!(err, StorageError::IllegalValue { .. }));
        assert!(err.to_string().contains("Names should only contain"));
    }

    #[test]
    fn duplicate_records_are_an_error() {
        let dir = temp_dir();
        let path = dir.path().join("dup.json");
        let record = r#"{"name":"Aspirin","startDate":"01/01/2024"}"#;
        fs::write(&path, format!(r#"{{"prescriptions":[{record},{record}]}}"#)).unwrap();

        let err = load_prescription_list(&path).unwrap_err();

        assert!(matches!(err, StorageError::IllegalValue { ref message, .. }
            if message == MESSAGE_DUPLICATE_PRESCRIPTION));
    }

    #[test]
    fn user_prefs_round_trip() {
        let dir = temp_dir();
        let path = dir.path().join("preferences.json");
        let prefs = UserPrefs::for_data_dir(dir.path());

        assert_eq!(load_user_prefs(&path).unwrap(), None);
        save_user_prefs(&path, &prefs).unwrap();
        assert_eq!(load_user_prefs(&path).unwrap(), Some(prefs));
    }

    #[test]
    fn io_errors_are_classified() {
        let path = Path::new("/some/file.json");
        let denied = StorageError::from_io(
            path,
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let other = StorageError::from_io(path, io::Error::new(io::ErrorKind::Other, "disk full"));

        assert!(matches!(denied, StorageError::PermissionDenied { .. }));
        assert!(matches!(other, StorageError::Io { .. }));
        assert_eq!(other.to_string(), "I/O error on /some/file.json: disk full");
        assert_eq!(denied.path(), path);
    }

    #[test]
    fn storage_uses_paths_from_prefs() {
        let dir = temp_dir();
        let prefs = UserPrefs::for_data_dir(dir.path());
        let storage = Storage::from_user_prefs(&prefs);

        storage
            .save_completed_list(&PrescriptionList::from_prescriptions(vec![aspirin()]).unwrap())
            .unwrap();

        assert!(prefs.completed_list_file_path().exists());
        assert!(storage.load_prescription_list().unwrap().is_empty());
        assert_eq!(storage.load_completed_list().unwrap().len(), 1);
    }

    #[test]
    fn read_only_file_is_not_replaced() {
        let dir = temp_dir();
        let path = dir.path().join("prescriptions.json");
        save_prescription_list(&path, &typical_prescription_list()).unwrap();
        let before = fs::read(&path).unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&path, permissions).unwrap();

        let result = save_prescription_list(&path, &PrescriptionList::new());

        assert!(matches!(result, Err(StorageError::PermissionDenied { .. })));
        assert_eq!(fs::read(&path).unwrap(), before);
        assert!(fs::metadata(&path).unwrap().permissions().readonly());
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_dir();
        let path = dir.path().join("prescriptions.json");
        save_prescription_list(&path, &typical_prescription_list()).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save_prescription_list(&path, &PrescriptionList::new()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert!(load_prescription_list(&path).unwrap().is_empty());
    }

    #[test]
    fn serialize_error_is_not_reported_as_malformed_file() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StorageError::Serialize {
            path: PathBuf::from("prefs.json"),
            source,
        };

        assert!(err.to_string().starts_with("could not encode data for prefs.json: "));
        assert_eq!(err.path(), Path::new("prefs.json"));
    }
}
