//! Appointment commands (the `appt` namespace).

use chrono::NaiveDateTime;

use super::{resolve_appointment, CommandOutcome, CommandResult};
use crate::index::Index;
use crate::models::{Appointment, Medicine, PatientId, Prescription};
use crate::store::{AppointmentFilter, RecordStore};

pub const ADD_APPOINTMENT_USAGE: &str = "appt add: Adds an appointment for a patient.\n\
Parameters: i/PATIENT_ID d/DATETIME (yyyy-M-d HHmm)\n\
Example: appt add i/1 d/2021-10-21 1600";

pub const EDIT_APPOINTMENT_USAGE: &str = "appt edit: Edits the appointment identified by the index \
number used in the displayed appointment list.\n\
Parameters: INDEX (must be a positive integer) [i/PATIENT_ID] [d/DATETIME]\n\
Example: appt edit 1 d/2021-10-22 0930";

pub const DELETE_APPOINTMENT_USAGE: &str = "appt delete: Deletes the appointment identified by the \
index number used in the displayed appointment list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: appt delete 1";

pub const ARCHIVE_APPOINTMENT_USAGE: &str = "appt archive: Archives the appointment identified by \
the index number used in the displayed appointment list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: appt archive 1";

pub const LIST_APPOINTMENTS_USAGE: &str = "appt list: Lists all upcoming appointments sorted by \
date; add -a to list archived appointments instead.\n\
Example: appt list";

pub const ADD_PRESCRIPTION_USAGE: &str = "appt pa: Adds a prescription to the appointment \
identified by the index number used in the displayed appointment list.\n\
Parameters: INDEX (must be a positive integer) n/MEDICINE v/VOLUME d/DURATION\n\
Example: appt pa 1 n/Penicillin v/400 mg d/2 times a week";

pub const DELETE_PRESCRIPTION_USAGE: &str = "appt pd: Deletes a prescription from the appointment \
identified by the index number used in the displayed appointment list.\n\
Parameters: INDEX (must be a positive integer) n/MEDICINE\n\
Example: appt pd 1 n/Penicillin";

pub const EDIT_PRESCRIPTION_USAGE: &str = "appt pe: Edits the prescription of the given medicine \
in the appointment identified by the index number used in the displayed appointment list.\n\
Parameters: INDEX (must be a positive integer) n/MEDICINE v/VOLUME d/DURATION\n\
Example: appt pe 1 n/Penicillin v/200 mg d/once a day";

/// Fields to overwrite on an existing appointment. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentEdits {
    pub patient_id: Option<PatientId>,
    pub datetime: Option<NaiveDateTime>,
}

impl AppointmentEdits {
    pub fn is_empty(&self) -> bool {
        self.patient_id.is_none() && self.datetime.is_none()
    }

    pub fn apply(&self, appointment: &Appointment) -> Appointment {
        appointment.rescheduled(
            self.patient_id.unwrap_or(appointment.patient_id),
            self.datetime.unwrap_or(appointment.datetime),
        )
    }
}

/// Appointment text with the patient's name, for feedback messages.
fn describe(store: &RecordStore, appointment: &Appointment) -> String {
    match store.patient(appointment.patient_id) {
        Some(patient) => format!("{} ({})", appointment, patient.name),
        None => appointment.to_string(),
    }
}

pub(super) fn add_appointment(
    store: &mut RecordStore,
    patient_id: PatientId,
    datetime: NaiveDateTime,
) -> CommandOutcome {
    let appointment = Appointment::new(patient_id, datetime);
    store.add_appointment(appointment.clone())?;
    Ok(CommandResult::new(format!(
        "New appointment added: {}",
        describe(store, &appointment)
    )))
}

pub(super) fn edit_appointment(store: &mut RecordStore, index: Index, edits: &AppointmentEdits) -> CommandOutcome {
    let target = resolve_appointment(store, index)?;
    let edited = edits.apply(&target);
    store.set_appointment(&target, edited.clone())?;
    Ok(CommandResult::new(format!(
        "Edited Appointment: {}",
        describe(store, &edited)
    )))
}

pub(super) fn delete_appointment(store: &mut RecordStore, index: Index) -> CommandOutcome {
    let target = resolve_appointment(store, index)?;
    let feedback = format!("Deleted Appointment: {}", describe(store, &target));
    store.delete_appointment(&target)?;
    Ok(CommandResult::new(feedback))
}

/// Archiving an already archived appointment succeeds without changing anything.
pub(super) fn archive_appointment(store: &mut RecordStore, index: Index) -> CommandOutcome {
    let target = resolve_appointment(store, index)?;
    if target.archived {
        return Ok(CommandResult::new(format!(
            "Appointment is already archived: {}",
            describe(store, &target)
        )));
    }
    let archived = target.archived();
    store.set_appointment(&target, archived.clone())?;
    Ok(CommandResult::new(format!(
        "Archived Appointment: {}",
        describe(store, &archived)
    )))
}

pub(super) fn list_appointments(store: &mut RecordStore, archived: bool) -> CommandOutcome {
    store.sort_appointments();
    if archived {
        store.update_filtered_appointment_list(AppointmentFilter::Archived);
        Ok(CommandResult::new("Listed all archived appointments"))
    } else {
        store.update_filtered_appointment_list(AppointmentFilter::Active);
        Ok(CommandResult::new("Listed all appointments"))
    }
}

pub(super) fn add_prescription(store: &mut RecordStore, index: Index, prescription: &Prescription) -> CommandOutcome {
    let target = resolve_appointment(store, index)?;
    let edited = target.with_prescription(prescription.clone())?;
    store.set_appointment(&target, edited)?;
    Ok(CommandResult::new(format!(
        "New prescription added: {}",
        prescription
    )))
}

pub(super) fn delete_prescription(store: &mut RecordStore, index: Index, medicine: &Medicine) -> CommandOutcome {
    let target = resolve_appointment(store, index)?;
    let edited = target.without_prescription(medicine)?;
    store.set_appointment(&target, edited)?;
    Ok(CommandResult::new(format!("Prescription deleted: {}", medicine)))
}

pub(super) fn edit_prescription(store: &mut RecordStore, index: Index, prescription: &Prescription) -> CommandOutcome {
    let target = resolve_appointment(store, index)?;
    let edited = target.with_edited_prescription(prescription.clone())?;
    store.set_appointment(&target, edited)?;
    Ok(CommandResult::new(format!("Prescription edited: {}", prescription)))
}
