//! Patient commands.

use super::{resolve_patient, CommandError, CommandOutcome, CommandResult};
use crate::index::Index;
use crate::models::{Address, Email, MedicalEntry, Name, Patient, PatientDetails, Phone};
use crate::store::{PatientFilter, RecordStore};

pub const ADD_PATIENT_USAGE: &str = "add: Adds a patient to the records.\n\
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [m/MEDICAL_HISTORY]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 m/diabetes";

pub const EDIT_PATIENT_USAGE: &str = "edit: Edits the details of the patient identified by the \
index number used in the displayed patient list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS]\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const DELETE_PATIENT_USAGE: &str = "delete: Deletes the patient identified by the index number \
used in the displayed patient list, together with all of the patient's appointments.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const FIND_PATIENT_USAGE: &str = "find: Finds all patients whose names contain any of the \
specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub const LIST_PATIENTS_USAGE: &str = "list: Lists all patients.\nExample: list";

pub const ADD_MEDICAL_ENTRY_USAGE: &str = "ma: Adds a medical history entry to the patient \
identified by the index number used in the displayed patient list.\n\
Parameters: INDEX (must be a positive integer) m/MEDICAL_HISTORY\n\
Example: ma 1 m/high blood pressure";

pub const DELETE_MEDICAL_ENTRY_USAGE: &str = "md: Deletes a medical history entry from the patient \
identified by the index number used in the displayed patient list.\n\
Parameters: INDEX (must be a positive integer) i/ENTRY_INDEX (must be a positive integer)\n\
Example: md 1 i/2";

pub const LIST_PATIENTS_MESSAGE: &str = "Listed all patients";

/// Fields to overwrite on an existing patient. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientEdits {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl PatientEdits {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.address.is_none()
    }

    /// Build the replacement record. Id and medical history are carried over.
    pub fn apply(&self, patient: &Patient) -> Patient {
        Patient {
            id: patient.id,
            name: self.name.clone().unwrap_or_else(|| patient.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| patient.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| patient.email.clone()),
            address: self.address.clone().unwrap_or_else(|| patient.address.clone()),
            medical_history: patient.medical_history.clone(),
        }
    }
}

pub(super) fn add_patient(store: &mut RecordStore, details: &PatientDetails) -> CommandOutcome {
    let candidate = details.clone().into_patient(store.next_patient_id());
    store.add_patient(candidate.clone())?;
    Ok(CommandResult::new(format!("New patient added: {}", candidate)))
}

pub(super) fn edit_patient(store: &mut RecordStore, index: Index, edits: &PatientEdits) -> CommandOutcome {
    let target = resolve_patient(store, index)?;
    let edited = edits.apply(&target);
    store.set_patient(&target, edited.clone())?;
    Ok(CommandResult::new(format!("Edited Patient: {}", edited)))
}

pub(super) fn delete_patient(store: &mut RecordStore, index: Index) -> CommandOutcome {
    let target = resolve_patient(store, index)?;
    let cascaded = store.delete_patient(&target)?;
    let feedback = match cascaded {
        0 => format!("Deleted Patient: {}", target),
        1 => format!("Deleted Patient: {} (and 1 appointment)", target),
        n => format!("Deleted Patient: {} (and {} appointments)", target, n),
    };
    Ok(CommandResult::new(feedback))
}

pub(super) fn find_patient(store: &mut RecordStore, keywords: &[String]) -> CommandOutcome {
    store.update_filtered_patient_list(PatientFilter::NameContainsKeywords(keywords.to_vec()));
    let shown = store.filtered_patients().len();
    Ok(CommandResult::new(format!("{} patients listed!", shown)))
}

pub(super) fn add_medical_entry(store: &mut RecordStore, index: Index, entry: &MedicalEntry) -> CommandOutcome {
    let target = resolve_patient(store, index)?;
    let edited = target.with_medical_entry(entry.clone());
    store.set_patient(&target, edited.clone())?;
    Ok(CommandResult::new(format!(
        "Added medical history entry to Patient: {}",
        edited
    )))
}

pub(super) fn delete_medical_entry(store: &mut RecordStore, index: Index, entry: Index) -> CommandOutcome {
    let target = resolve_patient(store, index)?;
    let edited = target
        .without_medical_entry(entry)
        .ok_or(CommandError::InvalidIndex("medical history"))?;
    store.set_patient(&target, edited.clone())?;
    Ok(CommandResult::new(format!(
        "Deleted medical history entry from Patient: {}",
        edited
    )))
}
