//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use tempfile::TempDir;

use rxtrack::model::{Frequency, Model, Prescription, PrescriptionList, UserPrefs};
use rxtrack::{LogicManager, Storage};

pub fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn aspirin() -> Prescription {
    Prescription::builder("Aspirin".parse().unwrap(), date(1, 1, 2024))
        .dosage(Some("1 tablet".parse().unwrap()))
        .frequency(Some(Frequency::Daily))
        .total_stock(Some(30))
        .build()
        .unwrap()
}

pub fn propranolol() -> Prescription {
    Prescription::builder("Propranolol".parse().unwrap(), date(15, 2, 2024))
        .dosage(Some("40mg".parse().unwrap()))
        .frequency(Some(Frequency::Daily))
        .build()
        .unwrap()
}

pub fn zomig() -> Prescription {
    Prescription::builder("Zolmitriptan Rapimelt".parse().unwrap(), date(3, 3, 2024))
        .dosage(Some("2.5mg".parse().unwrap()))
        .note(Some("Dissolve on tongue".parse().unwrap()))
        .build()
        .unwrap()
}

pub fn metformin() -> Prescription {
    Prescription::builder("Metformin".parse().unwrap(), date(10, 4, 2024))
        .frequency(Some(Frequency::Daily))
        .build()
        .unwrap()
}

pub fn ibuprofen() -> Prescription {
    Prescription::builder("Ibuprofen".parse().unwrap(), date(1, 1, 2023))
        .end_date(Some(date(1, 2, 2023)))
        .build()
        .unwrap()
}

pub fn typical_prescription_list() -> PrescriptionList {
    PrescriptionList::from_prescriptions(vec![aspirin(), propranolol(), zomig(), metformin()])
        .unwrap()
}

pub fn typical_completed_list() -> PrescriptionList {
    PrescriptionList::from_prescriptions(vec![ibuprofen()]).unwrap()
}

pub fn typical_model() -> Model {
    Model::new(
        typical_prescription_list(),
        typical_completed_list(),
        UserPrefs::default(),
    )
}

/// A façade whose data files live in `dir`, preloaded with the typical lists.
pub fn typical_logic(dir: &TempDir) -> LogicManager {
    let prefs = UserPrefs::for_data_dir(dir.path());
    let storage = Storage::from_user_prefs(&prefs);
    LogicManager::new(
        Model::new(typical_prescription_list(), typical_completed_list(), prefs),
        storage,
    )
}
