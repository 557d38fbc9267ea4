//! Prescription models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Duration, Medicine, Volume};
use crate::store::UniqueList;

/// A medicine prescribed at an appointment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prescription {
    pub medicine: Medicine,
    pub volume: Volume,
    pub duration: Duration,
}

impl Prescription {
    pub fn new(medicine: Medicine, volume: Volume, duration: Duration) -> Self {
        Self {
            medicine,
            volume,
            duration,
        }
    }

    /// Weak identity: one prescription per medicine name, ignoring case.
    pub fn is_same_prescription(&self, other: &Prescription) -> bool {
        self.medicine.identity_key() == other.medicine.identity_key()
    }

    /// Empty list keyed by medicine name.
    pub fn unique_list() -> UniqueList<Prescription> {
        UniqueList::new(
            "prescription",
            Prescription::is_same_prescription,
            <Prescription as PartialEq>::eq,
        )
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.medicine, self.volume, self.duration)
    }
}
