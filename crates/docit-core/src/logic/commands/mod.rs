//! Executable commands.
//!
//! Every user action is one variant of [`Command`]. Parsers do all field-level
//! validation up front, so executing a command only has to check it against the
//! current state of the [`RecordStore`].
//!
//! Index arguments always refer to the *currently visible* (filtered) view,
//! never to the unfiltered collection. After `find Meier` shows two patients,
//! `delete 3` is an invalid index even when the store holds ten patients.

mod appointment;
mod patient;

pub use appointment::*;
pub use patient::*;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::index::Index;
use crate::models::{Appointment, MedicalEntry, Medicine, Patient, PatientDetails, PatientId, Prescription};
use crate::store::{AppointmentFilter, ModelError, PatientFilter, RecordStore};

/// Command execution errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The {0} index provided is invalid")]
    InvalidIndex(&'static str),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// What a successfully executed command reports back to the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The front end should show the help text.
    pub show_help: bool,
    /// The front end should shut down.
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const HELP_MESSAGE: &str = "Showing help.";
pub const EXIT_MESSAGE: &str = "Exiting DocIt as requested ...";
pub const CLEAR_MESSAGE: &str = "All records have been cleared!";

/// A parsed, ready-to-run user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPatient(PatientDetails),
    EditPatient { index: Index, edits: PatientEdits },
    DeletePatient(Index),
    FindPatient(Vec<String>),
    ListPatients,
    AddMedicalEntry { index: Index, entry: MedicalEntry },
    DeleteMedicalEntry { index: Index, entry: Index },
    Clear,
    Help,
    Exit,

    AddAppointment { patient_id: PatientId, datetime: NaiveDateTime },
    EditAppointment { index: Index, edits: AppointmentEdits },
    DeleteAppointment(Index),
    ArchiveAppointment(Index),
    ListAppointments { archived: bool },
    AddPrescription { index: Index, prescription: Prescription },
    DeletePrescription { index: Index, medicine: Medicine },
    EditPrescription { index: Index, prescription: Prescription },
}

impl Command {
    /// Apply this command to `store`.
    ///
    /// On error the store is left exactly as it was.
    pub fn execute(&self, store: &mut RecordStore) -> CommandOutcome {
        match self {
            Command::AddPatient(details) => add_patient(store, details),
            Command::EditPatient { index, edits } => edit_patient(store, *index, edits),
            Command::DeletePatient(index) => delete_patient(store, *index),
            Command::FindPatient(keywords) => find_patient(store, keywords),
            Command::ListPatients => {
                store.update_filtered_patient_list(PatientFilter::All);
                Ok(CommandResult::new(LIST_PATIENTS_MESSAGE))
            }
            Command::AddMedicalEntry { index, entry } => add_medical_entry(store, *index, entry),
            Command::DeleteMedicalEntry { index, entry } => {
                delete_medical_entry(store, *index, *entry)
            }
            Command::Clear => {
                store.replace_all(Vec::new(), Vec::new())?;
                store.update_filtered_patient_list(PatientFilter::All);
                store.update_filtered_appointment_list(AppointmentFilter::default());
                Ok(CommandResult::new(CLEAR_MESSAGE))
            }
            Command::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(HELP_MESSAGE)
            }),
            Command::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new(EXIT_MESSAGE)
            }),

            Command::AddAppointment {
                patient_id,
                datetime,
            } => add_appointment(store, *patient_id, *datetime),
            Command::EditAppointment { index, edits } => edit_appointment(store, *index, edits),
            Command::DeleteAppointment(index) => delete_appointment(store, *index),
            Command::ArchiveAppointment(index) => archive_appointment(store, *index),
            Command::ListAppointments { archived } => list_appointments(store, *archived),
            Command::AddPrescription {
                index,
                prescription,
            } => add_prescription(store, *index, prescription),
            Command::DeletePrescription { index, medicine } => {
                delete_prescription(store, *index, medicine)
            }
            Command::EditPrescription {
                index,
                prescription,
            } => edit_prescription(store, *index, prescription),
        }
    }

    /// The word the user typed to invoke this command, for logging.
    pub fn command_word(&self) -> &'static str {
        match self {
            Command::AddPatient(_) => "add",
            Command::EditPatient { .. } => "edit",
            Command::DeletePatient(_) => "delete",
            Command::FindPatient(_) => "find",
            Command::ListPatients => "list",
            Command::AddMedicalEntry { .. } => "ma",
            Command::DeleteMedicalEntry { .. } => "md",
            Command::Clear => "clear",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::AddAppointment { .. } => "appt add",
            Command::EditAppointment { .. } => "appt edit",
            Command::DeleteAppointment(_) => "appt delete",
            Command::ArchiveAppointment(_) => "appt archive",
            Command::ListAppointments { .. } => "appt list",
            Command::AddPrescription { .. } => "appt pa",
            Command::DeletePrescription { .. } => "appt pd",
            Command::EditPrescription { .. } => "appt pe",
        }
    }

    /// True if a successful run can change the stored records.
    ///
    /// Filter changes don't count: they are view state and are not persisted.
    pub fn modifies_records(&self) -> bool {
        !matches!(
            self,
            Command::FindPatient(_) | Command::ListPatients | Command::Help | Command::Exit
        )
    }
}

/// All usage texts, in the order the help screen shows them.
pub fn help_text() -> String {
    [
        ADD_PATIENT_USAGE,
        EDIT_PATIENT_USAGE,
        DELETE_PATIENT_USAGE,
        FIND_PATIENT_USAGE,
        LIST_PATIENTS_USAGE,
        ADD_MEDICAL_ENTRY_USAGE,
        DELETE_MEDICAL_ENTRY_USAGE,
        ADD_APPOINTMENT_USAGE,
        EDIT_APPOINTMENT_USAGE,
        DELETE_APPOINTMENT_USAGE,
        ARCHIVE_APPOINTMENT_USAGE,
        LIST_APPOINTMENTS_USAGE,
        ADD_PRESCRIPTION_USAGE,
        DELETE_PRESCRIPTION_USAGE,
        EDIT_PRESCRIPTION_USAGE,
        "clear: Deletes all patients and appointments.",
        HELP_USAGE,
        "exit: Exits the program.",
    ]
    .join("\n\n")
}

fn resolve_patient(store: &RecordStore, index: Index) -> Result<Patient, CommandError> {
    store
        .filtered_patients()
        .get(index)
        .cloned()
        .ok_or(CommandError::InvalidIndex("patient"))
}

fn resolve_appointment(store: &RecordStore, index: Index) -> Result<Appointment, CommandError> {
    store
        .filtered_appointments()
        .get(index)
        .cloned()
        .ok_or(CommandError::InvalidIndex("appointment"))
}
