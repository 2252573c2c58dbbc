use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::ValidationError;

/// Italian fiscal code (codice fiscale)
///
/// Only the positional layout is checked: six letters, two digits, a letter,
/// two digits, a letter, three digits and a final letter. Letter case is
/// accepted as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiscalCode(String);

impl FromStr for FiscalCode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lazy_static::lazy_static! {
            static ref FISCAL_CODE_REGEX: Regex =
                Regex::new(r"(?i)^[A-Z]{6}[0-9]{2}[A-Z][0-9]{2}[A-Z][0-9]{3}[A-Z]$").unwrap();
        }

        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::Required);
        }
        if !FISCAL_CODE_REGEX.is_match(value) {
            return Err(ValidationError::Format);
        }
        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for FiscalCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FiscalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
