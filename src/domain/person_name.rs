use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::ValidationError;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 256;

/// A given or family name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonName {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::Required);
        }

        let len = value.graphemes(true).count();
        if len > MAX_LEN {
            return Err(ValidationError::Format);
        }
        if len < MIN_LEN {
            return Err(ValidationError::TooShort { min: MIN_LEN });
        }
        Ok(Self(value.to_string()))
    }
}
