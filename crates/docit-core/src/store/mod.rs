//! In-memory record store for patients and appointments.
//!
//! The store owns both collections and is the only place where the
//! cross-collection rules live:
//! - an appointment must reference a patient that exists,
//! - deleting a patient deletes every appointment referencing it,
//! - patient ids are handed out by the store and never reused.

mod filter;
mod unique_list;

pub use filter::*;
pub use unique_list::*;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Appointment, Patient, PatientId};

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("This {0} already exists in the records")]
    DuplicateEntity(&'static str),

    #[error("The {0} could not be found in the records")]
    EntityNotFound(&'static str),

    #[error("No patient with ID {0} exists")]
    UnknownPatient(PatientId),

    #[error("Patient ID {0} is used by more than one patient")]
    DuplicatePatientId(PatientId),

    #[error("Patient ID {target} cannot be changed to {edited}")]
    PatientIdChanged { target: PatientId, edited: PatientId },

    #[error("No patient IDs left after {0}")]
    PatientIdExhausted(PatientId),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Full copy of both collections, as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

fn patient_list() -> UniqueList<Patient> {
    UniqueList::new("patient", Patient::is_same_patient, <Patient as PartialEq>::eq)
}

fn appointment_list() -> UniqueList<Appointment> {
    UniqueList::new(
        "appointment",
        Appointment::is_same_appointment,
        <Appointment as PartialEq>::eq,
    )
}

/// Counter value that follows `id`.
fn id_after(id: PatientId) -> ModelResult<u32> {
    id.0.checked_add(1).ok_or(ModelError::PatientIdExhausted(id))
}

/// The record store.
#[derive(Debug, Clone)]
pub struct RecordStore {
    patients: UniqueList<Patient>,
    appointments: UniqueList<Appointment>,
    patient_filter: PatientFilter,
    appointment_filter: AppointmentFilter,
    next_patient_id: u32,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            patients: patient_list(),
            appointments: appointment_list(),
            patient_filter: PatientFilter::default(),
            appointment_filter: AppointmentFilter::default(),
            next_patient_id: 1,
        }
    }

    /// Create a store holding the contents of `snapshot`.
    pub fn from_snapshot(snapshot: Snapshot) -> ModelResult<Self> {
        let mut store = Self::new();
        store.replace_all(snapshot.patients, snapshot.appointments)?;
        Ok(store)
    }

    /// Copy both collections for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            patients: self.patients.as_slice().to_vec(),
            appointments: self.appointments.as_slice().to_vec(),
        }
    }

    // =========================================================================
    // Patients
    // =========================================================================

    /// The id the next added patient should get. Adding it advances the counter.
    pub fn next_patient_id(&self) -> PatientId {
        PatientId(self.next_patient_id)
    }

    /// All patients in insertion order.
    pub fn patients(&self) -> &[Patient] {
        self.patients.as_slice()
    }

    /// Look up a patient by id.
    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn add_patient(&mut self, patient: Patient) -> ModelResult<()> {
        if self.patient(patient.id).is_some() {
            return Err(ModelError::DuplicatePatientId(patient.id));
        }
        let after = id_after(patient.id)?;
        self.patients.add(patient)?;
        self.next_patient_id = self.next_patient_id.max(after);
        Ok(())
    }

    /// Replace `target` by `edited`. The id must stay the same.
    pub fn set_patient(&mut self, target: &Patient, edited: Patient) -> ModelResult<()> {
        if target.id != edited.id {
            return Err(ModelError::PatientIdChanged {
                target: target.id,
                edited: edited.id,
            });
        }
        self.patients.set(target, edited)
    }

    /// Remove `patient` and every appointment referencing it.
    ///
    /// Returns the number of appointments removed along with the patient.
    pub fn delete_patient(&mut self, patient: &Patient) -> ModelResult<usize> {
        self.patients.remove(patient)?;
        let id = patient.id;
        let cascaded = self.appointments.retain(|a| a.patient_id != id);
        debug!(
            "event=patient_deleted module=store patient_id={} cascaded_appointments={}",
            id, cascaded
        );
        Ok(cascaded)
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// All appointments in current order.
    pub fn appointments(&self) -> &[Appointment] {
        self.appointments.as_slice()
    }

    pub fn add_appointment(&mut self, appointment: Appointment) -> ModelResult<()> {
        self.require_patient(appointment.patient_id)?;
        self.appointments.add(appointment)
    }

    /// Replace `target` by `edited`; `edited` must reference an existing patient.
    pub fn set_appointment(&mut self, target: &Appointment, edited: Appointment) -> ModelResult<()> {
        self.require_patient(edited.patient_id)?;
        self.appointments.set(target, edited)
    }

    pub fn delete_appointment(&mut self, appointment: &Appointment) -> ModelResult<()> {
        self.appointments.remove(appointment).map(|_| ())
    }

    /// Stable sort of the backing appointment list by datetime.
    pub fn sort_appointments(&mut self) {
        self.appointments.sort_by(Appointment::chronological);
    }

    fn require_patient(&self, id: PatientId) -> ModelResult<()> {
        match self.patient(id) {
            Some(_) => Ok(()),
            None => Err(ModelError::UnknownPatient(id)),
        }
    }

    // =========================================================================
    // Bulk replacement
    // =========================================================================

    /// Replace both collections at once.
    ///
    /// Both lists and the appointment → patient links are validated before
    /// anything is committed; on error the store is unchanged.
    pub fn replace_all(
        &mut self,
        patients: Vec<Patient>,
        appointments: Vec<Appointment>,
    ) -> ModelResult<()> {
        for (i, patient) in patients.iter().enumerate() {
            if patients[i + 1..].iter().any(|p| p.id == patient.id) {
                return Err(ModelError::DuplicatePatientId(patient.id));
            }
        }
        if let Some(dangling) = appointments
            .iter()
            .find(|a| !patients.iter().any(|p| p.id == a.patient_id))
        {
            return Err(ModelError::UnknownPatient(dangling.patient_id));
        }

        let mut new_patients = patient_list();
        new_patients.replace_all(patients)?;
        let mut new_appointments = appointment_list();
        new_appointments.replace_all(appointments)?;

        let after = match new_patients.iter().map(|p| p.id).max() {
            Some(max_id) => id_after(max_id)?,
            None => 1,
        };
        self.next_patient_id = self.next_patient_id.max(after);
        self.patients = new_patients;
        self.appointments = new_appointments;
        Ok(())
    }

    // =========================================================================
    // Filtered views
    // =========================================================================

    pub fn update_filtered_patient_list(&mut self, filter: PatientFilter) {
        self.patient_filter = filter;
    }

    pub fn update_filtered_appointment_list(&mut self, filter: AppointmentFilter) {
        self.appointment_filter = filter;
    }

    pub fn appointment_filter(&self) -> &AppointmentFilter {
        &self.appointment_filter
    }

    /// Patients visible under the current patient filter.
    pub fn filtered_patients(&self) -> FilteredView<'_, Patient, PatientFilter> {
        FilteredView::new(self.patients.as_slice(), &self.patient_filter)
    }

    /// Appointments visible under the current appointment filter.
    pub fn filtered_appointments(&self) -> FilteredView<'_, Appointment, AppointmentFilter> {
        FilteredView::new(self.appointments.as_slice(), &self.appointment_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Address, Email, Name, PatientDetails, Phone};
    use chrono::{NaiveDate, NaiveDateTime};

    fn make_patient(store: &mut RecordStore, name: &str) -> Patient {
        let patient = PatientDetails {
            name: Name::new(name).unwrap(),
            phone: Phone::new("98765432").unwrap(),
            email: Email::new("test@example.com").unwrap(),
            address: Address::new("10th street").unwrap(),
            medical_history: vec![],
        }
        .into_patient(store.next_patient_id());
        store.add_patient(patient.clone()).unwrap();
        patient
    }

    fn at(month: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, month, 1)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_allocated_ids_increase() {
        let mut store = RecordStore::new();
        let a = make_patient(&mut store, "Alice Pauline");
        let b = make_patient(&mut store, "Benson Meier");
        assert_eq!(a.id, PatientId(1));
        assert_eq!(b.id, PatientId(2));
    }

    #[test]
    fn test_add_appointment_requires_patient() {
        let mut store = RecordStore::new();
        let result = store.add_appointment(Appointment::new(PatientId(7), at(1)));
        assert_eq!(result, Err(ModelError::UnknownPatient(PatientId(7))));
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn test_delete_patient_cascades_only_its_appointments() {
        let mut store = RecordStore::new();
        let alice = make_patient(&mut store, "Alice Pauline");
        let benson = make_patient(&mut store, "Benson Meier");
        store.add_appointment(Appointment::new(alice.id, at(1))).unwrap();
        store.add_appointment(Appointment::new(benson.id, at(2))).unwrap();
        store.add_appointment(Appointment::new(alice.id, at(3))).unwrap();

        let cascaded = store.delete_patient(&alice).unwrap();

        assert_eq!(cascaded, 2);
        assert_eq!(store.appointments(), &[Appointment::new(benson.id, at(2))]);
        assert_eq!(store.patients(), &[benson]);
    }

    #[test]
    fn test_set_patient_rejects_id_change() {
        let mut store = RecordStore::new();
        let alice = make_patient(&mut store, "Alice Pauline");
        let mut edited = alice.clone();
        edited.id = PatientId(99);

        assert!(matches!(
            store.set_patient(&alice, edited),
            Err(ModelError::PatientIdChanged { .. })
        ));
    }

    #[test]
    fn test_rename_keeps_appointment_link() {
        let mut store = RecordStore::new();
        let alice = make_patient(&mut store, "Alice Pauline");
        store.add_appointment(Appointment::new(alice.id, at(1))).unwrap();

        let mut renamed = alice.clone();
        renamed.name = Name::new("Alice Tan").unwrap();
        store.set_patient(&alice, renamed.clone()).unwrap();

        let linked = store.patient(store.appointments()[0].patient_id).unwrap();
        assert_eq!(linked, &renamed);
    }

    #[test]
    fn test_replace_all_rejects_dangling_appointment_and_keeps_store() {
        let mut store = RecordStore::new();
        let alice = make_patient(&mut store, "Alice Pauline");

        let result = store.replace_all(vec![], vec![Appointment::new(alice.id, at(1))]);

        assert_eq!(result, Err(ModelError::UnknownPatient(alice.id)));
        assert_eq!(store.patients(), &[alice]);
    }

    #[test]
    fn test_last_patient_id_cannot_be_added() {
        let mut store = RecordStore::new();
        let mut last = make_patient(&mut store, "Alice Pauline");
        store.delete_patient(&last).unwrap();
        last.id = PatientId(u32::MAX);

        assert_eq!(
            store.add_patient(last),
            Err(ModelError::PatientIdExhausted(PatientId(u32::MAX)))
        );
        assert!(store.patients().is_empty());
        assert_eq!(store.next_patient_id(), PatientId(2));
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut store = RecordStore::new();
        make_patient(&mut store, "Alice Pauline");
        store.replace_all(vec![], vec![]).unwrap();
        let next = make_patient(&mut store, "Benson Meier");
        assert_eq!(next.id, PatientId(2));
    }

    #[test]
    fn test_filtered_views_follow_filter_and_backing_list() {
        let mut store = RecordStore::new();
        make_patient(&mut store, "Alice Pauline");
        make_patient(&mut store, "Benson Meier");

        store.update_filtered_patient_list(PatientFilter::NameContainsKeywords(vec![
            "meier".into(),
        ]));
        assert_eq!(store.filtered_patients().len(), 1);

        make_patient(&mut store, "Daniel Meier");
        assert_eq!(store.filtered_patients().len(), 2);

        store.update_filtered_patient_list(PatientFilter::All);
        assert_eq!(store.filtered_patients().len(), 3);
    }

    #[test]
    fn test_archived_appointments_hidden_by_default() {
        let mut store = RecordStore::new();
        let alice = make_patient(&mut store, "Alice Pauline");
        let appointment = Appointment::new(alice.id, at(1));
        store.add_appointment(appointment.clone()).unwrap();

        store.set_appointment(&appointment, appointment.archived()).unwrap();

        assert!(store.filtered_appointments().is_empty());
        store.update_filtered_appointment_list(AppointmentFilter::Archived);
        assert_eq!(store.filtered_appointments().len(), 1);
    }

    #[test]
    fn test_sort_appointments_by_datetime() {
        let mut store = RecordStore::new();
        let alice = make_patient(&mut store, "Alice Pauline");
        store.add_appointment(Appointment::new(alice.id, at(3))).unwrap();
        store.add_appointment(Appointment::new(alice.id, at(1))).unwrap();

        store.sort_appointments();

        assert_eq!(store.appointments()[0].datetime, at(1));
    }
}
