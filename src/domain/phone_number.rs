use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::ValidationError;

/// A loosely formatted phone number
///
/// Accepts an optional `+` with up to three country digits, an optional
/// parenthesized area code, then groups of 3, 3 and 4 to 6 digits separated
/// by a single space, dot or dash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lazy_static::lazy_static! {
            static ref PHONE_REGEX: Regex = Regex::new(
                r"^\+?(?:[0-9]{1,3}[-\s.]?)?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$"
            ).unwrap();
        }

        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::Required);
        }
        if !PHONE_REGEX.is_match(value) {
            return Err(ValidationError::Format);
        }
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
