use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::ValidationError;

const MAX_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

/// A user supplied email-address
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EmailAddress(String);

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        lazy_static::lazy_static! {
            static ref EMAIL_REGEX: Regex = Regex::new(
                r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$"
            ).unwrap();
        }

        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::Required);
        }
        if value.len() > MAX_LEN {
            return Err(ValidationError::Format);
        }
        match value.split_once('@') {
            Some((local, _)) if local.len() <= MAX_LOCAL_LEN => {}
            _ => return Err(ValidationError::Format),
        }
        if !EMAIL_REGEX.is_match(value) {
            return Err(ValidationError::Format);
        }

        Ok(Self(value.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
