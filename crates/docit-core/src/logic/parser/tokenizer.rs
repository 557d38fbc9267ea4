//! Splits an argument string into prefixed values.
//!
//! `edit 1 n/John Doe p/98765432` has the preamble `1` and the values
//! `n/ → "John Doe"` and `p/ → "98765432"`. A prefix only counts when it starts
//! the string or follows whitespace, so `a/Blk 5a/b` stays one value.

use std::collections::HashMap;

/// An argument marker such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

pub const PREFIX_INDEX: Prefix = Prefix("i/");
pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_PHONE: Prefix = Prefix("p/");
pub const PREFIX_EMAIL: Prefix = Prefix("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix("a/");
pub const PREFIX_MEDICAL: Prefix = Prefix("m/");
pub const PREFIX_DATETIME: Prefix = Prefix("d/");
pub const PREFIX_VOLUME: Prefix = Prefix("v/");
pub const PREFIX_DURATION: Prefix = Prefix("d/");

/// Tokenized arguments: the preamble plus every value per prefix, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if every prefix in `prefixes` was given at least once.
    pub fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.values.contains_key(p))
    }
}

/// Tokenize `args`, recognizing only the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        for (start, _) in args.match_indices(prefix.0) {
            let at_boundary = args[..start]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary && !positions.iter().any(|(s, _)| *s == start) {
                positions.push((start, prefix));
            }
        }
    }
    positions.sort_by_key(|(start, _)| *start);

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.0.len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_and_values() {
        let args = tokenize(" 1 n/John Doe p/98765432 ", &[PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(args.preamble(), "1");
        assert_eq!(args.value(PREFIX_NAME), Some("John Doe"));
        assert_eq!(args.value(PREFIX_PHONE), Some("98765432"));
        assert_eq!(args.value(PREFIX_EMAIL), None);
    }

    #[test]
    fn test_repeated_prefix_keeps_all_values() {
        let args = tokenize("m/diabetes m/asthma", &[PREFIX_MEDICAL]);
        assert_eq!(args.all_values(PREFIX_MEDICAL), &["diabetes", "asthma"]);
        assert_eq!(args.value(PREFIX_MEDICAL), Some("asthma"));
    }

    #[test]
    fn test_prefix_inside_word_is_not_split() {
        let args = tokenize(" a/Blk 5a/b n/x", &[PREFIX_ADDRESS, PREFIX_NAME]);
        assert_eq!(args.value(PREFIX_ADDRESS), Some("Blk 5a/b"));
        assert_eq!(args.value(PREFIX_NAME), Some("x"));
    }

    #[test]
    fn test_unrecognized_prefix_stays_in_preamble() {
        let args = tokenize(" some text x/y", &[PREFIX_NAME]);
        assert_eq!(args.preamble(), "some text x/y");
        assert!(!args.has_all(&[PREFIX_NAME]));
    }

    #[test]
    fn test_empty_value() {
        let args = tokenize(" n/ p/123", &[PREFIX_NAME, PREFIX_PHONE]);
        assert_eq!(args.value(PREFIX_NAME), Some(""));
        assert!(args.has_all(&[PREFIX_NAME, PREFIX_PHONE]));
    }
}
