//! Argument parsers for patient commands.

use super::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_INDEX, PREFIX_MEDICAL, PREFIX_NAME,
    PREFIX_PHONE,
};
use super::util::{parse_index, parse_medical_entry, require};
use super::{ParseError, ParseResult};
use crate::logic::commands::{
    Command, PatientEdits, ADD_MEDICAL_ENTRY_USAGE, ADD_PATIENT_USAGE,
    DELETE_MEDICAL_ENTRY_USAGE, DELETE_PATIENT_USAGE, EDIT_PATIENT_USAGE, FIND_PATIENT_USAGE,
};
use crate::models::{Address, Email, Name, PatientDetails, Phone};

/// `add n/NAME p/PHONE e/EMAIL a/ADDRESS [m/HISTORY]...`
pub(super) fn parse_add(args: &str) -> ParseResult<Command> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_MEDICAL],
    );
    if !map.has_all(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])
        || !map.preamble().is_empty()
    {
        return Err(ParseError::InvalidCommandFormat(ADD_PATIENT_USAGE));
    }

    let name = Name::new(require(map.value(PREFIX_NAME), ADD_PATIENT_USAGE)?)?;
    let phone = Phone::new(require(map.value(PREFIX_PHONE), ADD_PATIENT_USAGE)?)?;
    let email = Email::new(require(map.value(PREFIX_EMAIL), ADD_PATIENT_USAGE)?)?;
    let address = Address::new(require(map.value(PREFIX_ADDRESS), ADD_PATIENT_USAGE)?)?;

    // A bare `m/` means "no history yet" and is skipped.
    let medical_history = map
        .all_values(PREFIX_MEDICAL)
        .iter()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_medical_entry(raw))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Command::AddPatient(PatientDetails {
        name,
        phone,
        email,
        address,
        medical_history,
    }))
}

/// `edit INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS]`
pub(super) fn parse_edit(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS]);
    let index = require(parse_index(map.preamble()), EDIT_PATIENT_USAGE)?;

    let edits = PatientEdits {
        name: map.value(PREFIX_NAME).map(Name::new).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::new).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::new).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::new).transpose()?,
    };
    if edits.is_empty() {
        return Err(ParseError::NothingToEdit);
    }

    Ok(Command::EditPatient { index, edits })
}

/// `delete INDEX`
pub(super) fn parse_delete(args: &str) -> ParseResult<Command> {
    let index = require(parse_index(args), DELETE_PATIENT_USAGE)?;
    Ok(Command::DeletePatient(index))
}

/// `find KEYWORD [MORE_KEYWORDS]...`
pub(super) fn parse_find(args: &str) -> ParseResult<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat(FIND_PATIENT_USAGE));
    }
    Ok(Command::FindPatient(keywords))
}

/// `ma INDEX m/HISTORY`
pub(super) fn parse_add_medical_entry(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_MEDICAL]);
    let index = require(parse_index(map.preamble()), ADD_MEDICAL_ENTRY_USAGE)?;
    let raw = require(map.value(PREFIX_MEDICAL), ADD_MEDICAL_ENTRY_USAGE)?;
    let entry = parse_medical_entry(raw)?;
    Ok(Command::AddMedicalEntry { index, entry })
}

/// `md INDEX i/ENTRY_INDEX`
pub(super) fn parse_delete_medical_entry(args: &str) -> ParseResult<Command> {
    let map = tokenize(args, &[PREFIX_INDEX]);
    let index = require(parse_index(map.preamble()), DELETE_MEDICAL_ENTRY_USAGE)?;
    let entry = require(
        map.value(PREFIX_INDEX).and_then(parse_index),
        DELETE_MEDICAL_ENTRY_USAGE,
    )?;
    Ok(Command::DeleteMedicalEntry { index, entry })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::models::ValidationError;

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn test_parse_add_all_fields() {
        let command =
            parse_add(" n/Amy Bee p/11111111 e/amy@example.com a/Block 312, Amy Street 1 m/diabetes m/asthma")
                .unwrap();
        let Command::AddPatient(details) = command else {
            panic!("expected AddPatient");
        };
        assert_eq!(details.name.as_str(), "Amy Bee");
        assert_eq!(details.address.as_str(), "Block 312, Amy Street 1");
        let history: Vec<&str> = details
            .medical_history
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(history, vec!["diabetes", "asthma"]);
    }

    #[test]
    fn test_parse_add_without_history() {
        let Command::AddPatient(details) =
            parse_add(" n/Amy Bee p/11111111 e/amy@example.com a/Amy Street m/").unwrap()
        else {
            panic!("expected AddPatient");
        };
        assert!(details.medical_history.is_empty());
    }

    #[test]
    fn test_parse_add_missing_prefix() {
        assert_eq!(
            parse_add(" n/Amy Bee p/11111111 e/amy@example.com"),
            Err(ParseError::InvalidCommandFormat(ADD_PATIENT_USAGE))
        );
        assert_eq!(
            parse_add(" junk n/Amy Bee p/11111111 e/amy@example.com a/Street"),
            Err(ParseError::InvalidCommandFormat(ADD_PATIENT_USAGE))
        );
    }

    #[test]
    fn test_parse_add_invalid_field() {
        assert_eq!(
            parse_add(" n/Amy Bee p/11a e/amy@example.com a/Street"),
            Err(ParseError::InvalidField(ValidationError(Phone::CONSTRAINTS)))
        );
    }

    #[test]
    fn test_parse_edit() {
        let command = parse_edit(" 1 p/91234567 e/johndoe@example.com").unwrap();
        assert_eq!(
            command,
            Command::EditPatient {
                index: first(),
                edits: PatientEdits {
                    phone: Some(Phone::new("91234567").unwrap()),
                    email: Some(Email::new("johndoe@example.com").unwrap()),
                    ..PatientEdits::default()
                },
            }
        );
    }

    #[test]
    fn test_parse_edit_failures() {
        assert_eq!(parse_edit(" 1"), Err(ParseError::NothingToEdit));
        assert_eq!(
            parse_edit(" n/Bob"),
            Err(ParseError::InvalidCommandFormat(EDIT_PATIENT_USAGE))
        );
        assert_eq!(
            parse_edit(" 0 n/Bob"),
            Err(ParseError::InvalidCommandFormat(EDIT_PATIENT_USAGE))
        );
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(parse_delete(" 1"), Ok(Command::DeletePatient(first())));
        assert_eq!(
            parse_delete(" a"),
            Err(ParseError::InvalidCommandFormat(DELETE_PATIENT_USAGE))
        );
    }

    #[test]
    fn test_parse_find() {
        assert_eq!(
            parse_find(" Alice \t Bob "),
            Ok(Command::FindPatient(vec!["Alice".into(), "Bob".into()]))
        );
        assert_eq!(
            parse_find("  "),
            Err(ParseError::InvalidCommandFormat(FIND_PATIENT_USAGE))
        );
    }

    #[test]
    fn test_parse_medical_entry_commands() {
        let Command::AddMedicalEntry { index, entry } = parse_add_medical_entry(" 1 m/asthma").unwrap()
        else {
            panic!("expected AddMedicalEntry");
        };
        assert_eq!(index, first());
        assert_eq!(entry.description.as_str(), "asthma");

        assert_eq!(
            parse_delete_medical_entry(" 1 i/2"),
            Ok(Command::DeleteMedicalEntry {
                index: first(),
                entry: Index::from_one_based(2).unwrap(),
            })
        );
        assert_eq!(
            parse_delete_medical_entry(" 1"),
            Err(ParseError::InvalidCommandFormat(DELETE_MEDICAL_ENTRY_USAGE))
        );
    }
}
