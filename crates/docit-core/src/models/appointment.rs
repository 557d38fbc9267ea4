//! Appointment models.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Medicine, PatientId, Prescription};
use crate::store::{ModelError, ModelResult, UniqueList};

/// Display format for appointment times.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A scheduled visit of one patient.
///
/// Like patients, appointments are replaced rather than mutated: every
/// `with_*`/`without_*` method returns a new value for the store to swap in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AppointmentRecord", into = "AppointmentRecord")]
pub struct Appointment {
    pub patient_id: PatientId,
    pub datetime: NaiveDateTime,
    /// Archived appointments are kept but hidden from the default view.
    pub archived: bool,
    prescriptions: UniqueList<Prescription>,
}

impl Appointment {
    pub fn new(patient_id: PatientId, datetime: NaiveDateTime) -> Self {
        Self {
            patient_id,
            datetime,
            archived: false,
            prescriptions: Prescription::unique_list(),
        }
    }

    /// Weak identity: same patient at the same time. Prescriptions and the
    /// archived flag are ignored.
    pub fn is_same_appointment(&self, other: &Appointment) -> bool {
        self.patient_id == other.patient_id && self.datetime == other.datetime
    }

    /// Orders by datetime, then patient id.
    pub fn chronological(a: &Appointment, b: &Appointment) -> Ordering {
        a.datetime
            .cmp(&b.datetime)
            .then_with(|| a.patient_id.cmp(&b.patient_id))
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        self.prescriptions.as_slice()
    }

    /// Copy with a different patient and/or time; prescriptions are kept.
    pub fn rescheduled(&self, patient_id: PatientId, datetime: NaiveDateTime) -> Appointment {
        Appointment {
            patient_id,
            datetime,
            ..self.clone()
        }
    }

    /// Copy flagged as archived.
    pub fn archived(&self) -> Appointment {
        Appointment {
            archived: true,
            ..self.clone()
        }
    }

    /// Copy with `prescription` added. Fails if the medicine is already prescribed.
    pub fn with_prescription(&self, prescription: Prescription) -> ModelResult<Appointment> {
        let mut edited = self.clone();
        edited.prescriptions.add(prescription)?;
        Ok(edited)
    }

    /// Copy with the prescription for the same medicine replaced.
    pub fn with_edited_prescription(&self, prescription: Prescription) -> ModelResult<Appointment> {
        let mut edited = self.clone();
        let target = prescription.clone();
        edited.prescriptions.set(&target, prescription)?;
        Ok(edited)
    }

    /// Copy with the prescription for `medicine` removed.
    pub fn without_prescription(&self, medicine: &Medicine) -> ModelResult<Appointment> {
        let target = self
            .prescriptions
            .iter()
            .find(|p| p.medicine.identity_key() == medicine.identity_key())
            .cloned()
            .ok_or(ModelError::EntityNotFound(self.prescriptions.kind()))?;
        let mut edited = self.clone();
        edited.prescriptions.remove(&target)?;
        Ok(edited)
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient ID {}; Datetime: {}",
            self.patient_id,
            self.datetime.format(DATETIME_DISPLAY_FORMAT)
        )?;
        if !self.prescriptions.is_empty() {
            let prescriptions: Vec<String> =
                self.prescriptions.iter().map(|p| p.to_string()).collect();
            write!(f, "; Prescriptions: {}", prescriptions.join(", "))?;
        }
        if self.archived {
            write!(f, " [archived]")?;
        }
        Ok(())
    }
}

/// Serialized form of an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppointmentRecord {
    patient_id: PatientId,
    datetime: NaiveDateTime,
    #[serde(default)]
    archived: bool,
    #[serde(default)]
    prescriptions: Vec<Prescription>,
}

impl TryFrom<AppointmentRecord> for Appointment {
    type Error = ModelError;

    fn try_from(record: AppointmentRecord) -> Result<Self, Self::Error> {
        let mut prescriptions = Prescription::unique_list();
        prescriptions.replace_all(record.prescriptions)?;
        Ok(Appointment {
            patient_id: record.patient_id,
            datetime: record.datetime,
            archived: record.archived,
            prescriptions,
        })
    }
}

impl From<Appointment> for AppointmentRecord {
    fn from(appointment: Appointment) -> Self {
        AppointmentRecord {
            patient_id: appointment.patient_id,
            datetime: appointment.datetime,
            archived: appointment.archived,
            prescriptions: appointment.prescriptions.as_slice().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Duration, Volume};
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn rx(medicine: &str, volume: &str) -> Prescription {
        Prescription::new(
            Medicine::new(medicine).unwrap(),
            Volume::new(volume).unwrap(),
            Duration::new("3 days").unwrap(),
        )
    }

    #[test]
    fn test_same_appointment_ignores_prescriptions_and_archive() {
        let plain = Appointment::new(PatientId(1), at(1, 16));
        let edited = plain.with_prescription(rx("Penicillin", "400 mg")).unwrap().archived();

        assert!(plain.is_same_appointment(&edited));
        assert_ne!(plain, edited);
        assert!(!plain.is_same_appointment(&Appointment::new(PatientId(2), at(1, 16))));
        assert!(!plain.is_same_appointment(&Appointment::new(PatientId(1), at(2, 16))));
    }

    #[test]
    fn test_prescription_sub_model() {
        let appointment = Appointment::new(PatientId(1), at(1, 16));
        let with_rx = appointment.with_prescription(rx("Penicillin", "400 mg")).unwrap();

        assert!(matches!(
            with_rx.with_prescription(rx("PENICILLIN", "1 mg")),
            Err(ModelError::DuplicateEntity("prescription"))
        ));

        let edited = with_rx.with_edited_prescription(rx("penicillin", "200 mg")).unwrap();
        assert_eq!(edited.prescriptions()[0].volume.as_str(), "200 mg");

        let removed = edited
            .without_prescription(&Medicine::new("Penicillin").unwrap())
            .unwrap();
        assert!(removed.prescriptions().is_empty());

        assert!(matches!(
            removed.without_prescription(&Medicine::new("Penicillin").unwrap()),
            Err(ModelError::EntityNotFound("prescription"))
        ));
        assert!(matches!(
            removed.with_edited_prescription(rx("Panadol", "1 tab")),
            Err(ModelError::EntityNotFound("prescription"))
        ));
    }

    #[test]
    fn test_chronological_order() {
        let early = Appointment::new(PatientId(2), at(1, 9));
        let late = Appointment::new(PatientId(1), at(1, 10));
        assert_eq!(Appointment::chronological(&early, &late), Ordering::Less);
    }

    #[test]
    fn test_serde_rejects_duplicate_prescriptions() {
        let json = r#"{
            "patient_id": 1,
            "datetime": "2021-01-01T16:00:00",
            "prescriptions": [
                {"medicine": "Penicillin", "volume": "1 mg", "duration": "1 day"},
                {"medicine": "penicillin", "volume": "2 mg", "duration": "1 day"}
            ]
        }"#;
        assert!(serde_json::from_str::<Appointment>(json).is_err());
    }

    #[test]
    fn test_display_marks_archived() {
        let appointment = Appointment::new(PatientId(3), at(1, 16)).archived();
        assert_eq!(
            appointment.to_string(),
            "Patient ID 3; Datetime: 2021-01-01 16:00 [archived]"
        );
    }
}
