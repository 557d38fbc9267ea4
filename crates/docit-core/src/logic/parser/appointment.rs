//! Argument parsers for `appt` sub-commands.

use super::tokenizer::{
    tokenize, PREFIX_DATETIME, PREFIX_DURATION, PREFIX_INDEX, PREFIX_NAME, PREFIX_VOLUME,
};
use super::util::{parse_datetime, parse_index, parse_patient_id, parse_prescription, require};
use super::{ParseError, ParseResult};
use crate::logic::commands::{
    AppointmentEdits, Command, ADD_APPOINTMENT_USAGE, ADD_PRESCRIPTION_USAGE,
    ARCHIVE_APPOINTMENT_USAGE, DELETE_APPOINTMENT_USAGE, DELETE_PRESCRIPTION_USAGE,
    EDIT_APPOINTMENT_USAGE, EDIT_PRESCRIPTION_USAGE, LIST_APPOINTMENTS_USAGE,
};
use crate::index::Index;
use crate::models::{Medicine, Prescription};

/// Flag for `appt list` that switches to archived appointments.
const ARCHIVED_FLAG: &str = "-a";

/// `appt add i/PATIENT_ID d/DATETIME`
pub(super) fn parse_add(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_INDEX, PREFIX_DATETIME]);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat(ADD_APPOINTMENT_USAGE));
    }
    let patient_id = require(
        map.value(PREFIX_INDEX).and_then(parse_patient_id),
        ADD_APPOINTMENT_USAGE,
    )?;
    let datetime = require(
        map.value(PREFIX_DATETIME).and_then(parse_datetime),
        ADD_APPOINTMENT_USAGE,
    )?;
    Ok(Command::AddAppointment {
        patient_id,
        datetime,
    })
}

/// `appt edit INDEX [i/PATIENT_ID] [d/DATETIME]`
pub(super) fn parse_edit(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_INDEX, PREFIX_DATETIME]);
    let index = require(parse_index(map.preamble()), EDIT_APPOINTMENT_USAGE)?;

    let patient_id = match map.value(PREFIX_INDEX) {
        Some(raw) => Some(require(parse_patient_id(raw), EDIT_APPOINTMENT_USAGE)?),
        None => None,
    };
    let datetime = match map.value(PREFIX_DATETIME) {
        Some(raw) => Some(require(parse_datetime(raw), EDIT_APPOINTMENT_USAGE)?),
        None => None,
    };
    let edits = AppointmentEdits {
        patient_id,
        datetime,
    };
    if edits.is_empty() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(Command::EditAppointment { index, edits })
}

/// `appt delete INDEX`
pub(super) fn parse_delete(args: &str) -> ParseResult<Command> {
    let index = require(parse_index(args), DELETE_APPOINTMENT_USAGE)?;
    Ok(Command::DeleteAppointment(index))
}

/// `appt archive INDEX`
pub(super) fn parse_archive(args: &str) -> ParseResult<Command> {
    let index = require(parse_index(args), ARCHIVE_APPOINTMENT_USAGE)?;
    Ok(Command::ArchiveAppointment(index))
}

/// `appt list [-a]`
pub(super) fn parse_list(args: &str) -> ParseResult<Command> {
    match args.trim() {
        "" => Ok(Command::ListAppointments { archived: false }),
        ARCHIVED_FLAG => Ok(Command::ListAppointments { archived: true }),
        _ => Err(ParseError::InvalidCommandFormat(LIST_APPOINTMENTS_USAGE)),
    }
}

/// `appt pa INDEX n/MEDICINE v/VOLUME d/DURATION`
pub(super) fn parse_add_prescription(args: &str) -> ParseResult<Command> {
    let (index, prescription) = parse_full_prescription(args, ADD_PRESCRIPTION_USAGE)?;
    Ok(Command::AddPrescription {
        index,
        prescription,
    })
}

/// `appt pe INDEX n/MEDICINE v/VOLUME d/DURATION`
pub(super) fn parse_edit_prescription(args: &str) -> ParseResult<Command> {
    let (index, prescription) = parse_full_prescription(args, EDIT_PRESCRIPTION_USAGE)?;
    Ok(Command::EditPrescription {
        index,
        prescription,
    })
}

/// `appt pd INDEX n/MEDICINE`
pub(super) fn parse_delete_prescription(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_NAME]);
    let index = require(parse_index(map.preamble()), DELETE_PRESCRIPTION_USAGE)?;
    let medicine = Medicine::new(require(map.value(PREFIX_NAME), DELETE_PRESCRIPTION_USAGE)?)?;
    Ok(Command::DeletePrescription { index, medicine })
}

fn parse_full_prescription(
    args: &str,
    usage: &'static str,
) -> ParseResult<(Index, Prescription)> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_VOLUME, PREFIX_DURATION]);
    let index = require(parse_index(map.preamble()), usage)?;
    if !map.has_all(&[PREFIX_NAME, PREFIX_VOLUME, PREFIX_DURATION]) {
        return Err(ParseError::InvalidCommandFormat(usage));
    }
    let prescription = parse_prescription(
        require(map.value(PREFIX_NAME), usage)?,
        require(map.value(PREFIX_VOLUME), usage)?,
        require(map.value(PREFIX_DURATION), usage)?,
    )?;
    Ok((index, prescription))
}
