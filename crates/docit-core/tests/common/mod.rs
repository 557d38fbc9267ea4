//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use docit_core::models::{Address, Email, Name, Patient, PatientDetails, PatientId, Phone};
use docit_core::{Appointment, RecordStore};

pub fn details(name: &str, phone: &str, email: &str, address: &str) -> PatientDetails {
    PatientDetails {
        name: Name::new(name).unwrap(),
        phone: Phone::new(phone).unwrap(),
        email: Email::new(email).unwrap(),
        address: Address::new(address).unwrap(),
        medical_history: Vec::new(),
    }
}

/// Typical patients, ids 1 to 7 in this order.
pub fn typical_patients() -> Vec<Patient> {
    vec![
        details("Alice Pauline", "94351253", "alice@example.com", "123, Jurong West Ave 6, #08-111"),
        details("Benson Meier", "98765432", "johnd@example.com", "311, Clementi Ave 2, #02-25"),
        details("Carl Kurz", "95352563", "heinz@example.com", "wall street"),
        details("Daniel Meier", "87652533", "cornelia@example.com", "10th street"),
        details("Elle Meyer", "9482224", "werner@example.com", "michegan ave"),
        details("Fiona Kunz", "9482427", "lydia@example.com", "little tokyo"),
        details("George Best", "9482442", "anna@example.com", "4th street"),
    ]
    .into_iter()
    .zip(1..)
    .map(|(d, id)| d.into_patient(PatientId(id)))
    .collect()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Appointments for Alice (two) and Benson (one), stored out of date order.
pub fn typical_appointments() -> Vec<Appointment> {
    vec![
        Appointment::new(PatientId(1), at(2021, 10, 21, 16)),
        Appointment::new(PatientId(2), at(2021, 9, 1, 9)),
        Appointment::new(PatientId(1), at(2021, 11, 5, 10)),
    ]
}

pub fn typical_store() -> RecordStore {
    let mut store = RecordStore::new();
    store
        .replace_all(typical_patients(), typical_appointments())
        .unwrap();
    store
}
