use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::ValidationError;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 120;

/// Age in whole years of an adult registrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u8);

impl Age {
    pub fn years(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Age {
    type Error = ValidationError;

    fn try_from(years: i64) -> Result<Self, Self::Error> {
        if years < i64::from(MIN_AGE) {
            return Err(ValidationError::BelowMinimum { min: MIN_AGE });
        }
        if years > i64::from(MAX_AGE) {
            return Err(ValidationError::AboveMaximum { max: MAX_AGE });
        }
        // Bounded above, cannot truncate
        Ok(Self(years as u8))
    }
}

impl FromStr for Age {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::Required);
        }

        let years: i64 = value.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
            // Too many digits is still a number, just out of range
            IntErrorKind::PosOverflow => ValidationError::AboveMaximum { max: MAX_AGE },
            IntErrorKind::NegOverflow => ValidationError::BelowMinimum { min: MIN_AGE },
            _ => ValidationError::Format,
        })?;
        years.try_into()
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
