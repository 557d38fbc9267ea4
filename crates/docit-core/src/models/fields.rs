//! Validated field values shared by patients and prescriptions.
//!
//! Every type here can only be built through its validating constructor, and
//! deserializes through the same constructor, so a value read from a data file
//! obeys the same rules as one typed at the prompt.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern is valid"));

// local-part@label.label...; the final domain label is at least two characters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9+_.-]*[A-Za-z0-9])?@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
    )
    .expect("email pattern is valid")
});

/// Declares a validated string newtype with serde support.
macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $message:expr, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const CONSTRAINTS: &'static str = $message;

            /// Validate and wrap a raw value. Surrounding whitespace is trimmed.
            pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
                let trimmed = value.as_ref().trim();
                let check: fn(&str) -> bool = $check;
                if check(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(ValidationError(Self::CONSTRAINTS))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

validated_string!(
    /// A patient's full name.
    Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    |s| NAME_PATTERN.is_match(s)
);

validated_string!(
    /// A contact phone number.
    Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    |s| PHONE_PATTERN.is_match(s)
);

validated_string!(
    /// A contact email address.
    Email,
    "Emails should be of the format local-part@domain: the local-part contains alphanumerics \
     and the characters +_.- (not at either end), and the domain is made of dot-separated \
     labels whose last label is at least 2 characters long",
    |s| EMAIL_PATTERN.is_match(s)
);

validated_string!(
    /// A postal address.
    Address,
    "Addresses can take any values, and it should not be blank",
    |s| !s.is_empty()
);

validated_string!(
    /// Free text of a medical history entry.
    MedicalDescription,
    "Medical history entries can take any values, and it should not be blank",
    |s| !s.is_empty()
);

validated_string!(
    /// A prescribed medicine.
    Medicine,
    "Medicine names can take any values, and it should not be blank",
    |s| !s.is_empty()
);

validated_string!(
    /// Amount of medicine per dose, e.g. "400 mg".
    Volume,
    "Volume can take any values, and it should not be blank",
    |s| !s.is_empty()
);

validated_string!(
    /// How long a prescription runs, e.g. "2 times a week".
    Duration,
    "Duration can take any values, and it should not be blank",
    |s| !s.is_empty()
);

impl Name {
    /// Case-insensitive, whitespace-normalized form used as the identity key.
    pub fn identity_key(&self) -> String {
        self.0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// True if `keyword` equals one of the words of this name, ignoring case.
    pub fn contains_word(&self, keyword: &str) -> bool {
        self.0
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

impl Medicine {
    /// Case-insensitive identity key.
    pub fn identity_key(&self) -> String {
        self.0.to_lowercase()
    }
}
