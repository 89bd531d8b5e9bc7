//! Sample prescriptions shared by unit tests.

use chrono::NaiveDate;

use crate::model::{Frequency, Prescription, PrescriptionList};

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn aspirin() -> Prescription {
    Prescription::builder("Aspirin".parse().unwrap(), date(1, 1, 2024))
        .dosage(Some("1 tablet".parse().unwrap()))
        .frequency(Some(Frequency::Daily))
        .end_date(Some(date(31, 12, 2024)))
        .total_stock(Some(30))
        .build()
        .unwrap()
}

pub fn propranolol() -> Prescription {
    Prescription::builder("Propranolol".parse().unwrap(), date(15, 2, 2024))
        .dosage(Some("40mg".parse().unwrap()))
        .frequency(Some(Frequency::Daily))
        .total_stock(Some(60))
        .consumption_count(5)
        .build()
        .unwrap()
}

pub fn zomig() -> Prescription {
    Prescription::builder("Zolmitriptan Rapimelt".parse().unwrap(), date(3, 3, 2024))
        .dosage(Some("2.5mg".parse().unwrap()))
        .expiry_date(Some(date(1, 6, 2026)))
        .note(Some("Dissolve on tongue".parse().unwrap()))
        .build()
        .unwrap()
}

pub fn metformin() -> Prescription {
    Prescription::builder("Metformin".parse().unwrap(), date(10, 4, 2024))
        .dosage(Some("500mg".parse().unwrap()))
        .frequency(Some(Frequency::Daily))
        .build()
        .unwrap()
}

pub fn amoxicillin() -> Prescription {
    Prescription::builder("Amoxicillin".parse().unwrap(), date(20, 5, 2024))
        .frequency(Some(Frequency::Weekly))
        .total_stock(Some(0))
        .build()
        .unwrap()
}

pub fn ibuprofen() -> Prescription {
    Prescription::builder("Ibuprofen".parse().unwrap(), date(1, 1, 2023))
        .end_date(Some(date(1, 2, 2023)))
        .build()
        .unwrap()
}

pub fn paracetamol() -> Prescription {
    Prescription::builder("Paracetamol".parse().unwrap(), date(5, 5, 2023))
        .frequency(Some(Frequency::Monthly))
        .build()
        .unwrap()
}

pub fn typical_prescription_list() -> PrescriptionList {
    PrescriptionList::from_prescriptions(vec![
        aspirin(),
        propranolol(),
        zomig(),
        metformin(),
        amoxicillin(),
    ])
    .unwrap()
}

pub fn typical_completed_list() -> PrescriptionList {
    PrescriptionList::from_prescriptions(vec![ibuprofen(), paracetamol()]).unwrap()
}
