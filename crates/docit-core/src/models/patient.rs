//! Patient models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Address, Email, MedicalDescription, Name, Phone};
use crate::index::Index;

/// Stable reference to a patient, assigned by the record store on insertion.
///
/// Appointments link to patients through this id, so renaming a patient never
/// breaks the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub u32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a patient's medical history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalEntry {
    pub description: MedicalDescription,
    /// Date the entry was recorded, if known.
    pub date: Option<NaiveDate>,
}

impl MedicalEntry {
    pub fn new(description: MedicalDescription, date: Option<NaiveDate>) -> Self {
        Self { description, date }
    }
}

impl fmt::Display for MedicalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{} ({})", self.description, date.format("%d %b %Y")),
            None => write!(f, "{}", self.description),
        }
    }
}

/// Everything needed to create a patient except the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDetails {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub medical_history: Vec<MedicalEntry>,
}

impl PatientDetails {
    /// Attach an id, producing a storable patient.
    pub fn into_patient(self, id: PatientId) -> Patient {
        Patient {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            medical_history: self.medical_history,
        }
    }
}

/// A patient record.
///
/// Records are never mutated in place by the store; every edit builds a
/// replacement value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub medical_history: Vec<MedicalEntry>,
}

impl Patient {
    /// Weak identity: two patients are the same patient if their names match
    /// after case and whitespace normalization.
    pub fn is_same_patient(&self, other: &Patient) -> bool {
        self.name.identity_key() == other.name.identity_key()
    }

    /// Copy of this patient with `entry` appended to the medical history.
    pub fn with_medical_entry(&self, entry: MedicalEntry) -> Patient {
        let mut edited = self.clone();
        edited.medical_history.push(entry);
        edited
    }

    /// Copy of this patient without the history entry at `index`.
    ///
    /// Returns `None` if `index` is past the end of the history.
    pub fn without_medical_entry(&self, index: Index) -> Option<Patient> {
        if index.zero_based() >= self.medical_history.len() {
            return None;
        }
        let mut edited = self.clone();
        edited.medical_history.remove(index.zero_based());
        Some(edited)
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID {}); Phone: {}; Email: {}; Address: {}",
            self.name, self.id, self.phone, self.email, self.address
        )?;
        if !self.medical_history.is_empty() {
            let entries: Vec<String> = self.medical_history.iter().map(|e| e.to_string()).collect();
            write!(f, "; Medical History: {}", entries.join(", "))?;
        }
        Ok(())
    }
}
