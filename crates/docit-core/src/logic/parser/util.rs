//! Value parsers shared by the per-command argument parsers.

use chrono::{Local, NaiveDateTime};

use super::{ParseError, ParseResult};
use crate::index::Index;
use crate::models::{
    Duration, MedicalDescription, MedicalEntry, Medicine, PatientId, Prescription, Volume,
};

/// Accepted datetime layouts, tried in order.
pub const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H%M", "%Y-%m-%d %H:%M"];

/// A non-zero unsigned integer made of ASCII digits only ("+1" and "01x" are rejected).
pub fn parse_index(raw: &str) -> Option<Index> {
    parse_positive(raw).and_then(Index::from_one_based)
}

/// A patient id as typed after `i/`.
pub fn parse_patient_id(raw: &str) -> Option<PatientId> {
    parse_positive(raw)
        .and_then(|n| u32::try_from(n).ok())
        .map(PatientId)
}

/// Datetime in one of [`DATETIME_FORMATS`], e.g. `2021-1-1 1600`.
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// A medical history entry recorded today.
pub fn parse_medical_entry(raw: &str) -> ParseResult<MedicalEntry> {
    let description = MedicalDescription::new(raw)?;
    Ok(MedicalEntry::new(description, Some(Local::now().date_naive())))
}

pub fn parse_prescription(medicine: &str, volume: &str, duration: &str) -> ParseResult<Prescription> {
    Ok(Prescription::new(
        Medicine::new(medicine)?,
        Volume::new(volume)?,
        Duration::new(duration)?,
    ))
}

/// Maps a missing/malformed structural piece to the command's usage error.
pub fn require<T>(value: Option<T>, usage: &'static str) -> ParseResult<T> {
    value.ok_or(ParseError::InvalidCommandFormat(usage))
}

fn parse_positive(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 2 "), Index::from_one_based(2));
        assert_eq!(parse_index("0"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("a"), None);
        assert_eq!(parse_index("1 abc"), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_patient_id() {
        assert_eq!(parse_patient_id("12"), Some(PatientId(12)));
        assert_eq!(parse_patient_id("0"), None);
        assert_eq!(parse_patient_id("4294967296"), None);
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(16, 0, 0)
            .unwrap();
        assert_eq!(parse_datetime("2021-1-1 1600"), Some(expected));
        assert_eq!(parse_datetime("2021-01-01 16:00"), Some(expected));
        assert_eq!(parse_datetime("2021-13-01 1600"), None);
        assert_eq!(parse_datetime("tomorrow"), None);
    }

    #[test]
    fn test_parse_medical_entry_rejects_blank() {
        assert!(parse_medical_entry("  ").is_err());
        let entry = parse_medical_entry("diabetes").unwrap();
        assert_eq!(entry.description.as_str(), "diabetes");
        assert!(entry.date.is_some());
    }
}
