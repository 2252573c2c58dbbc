use std::fmt;

use crate::domain::{Age, EmailAddress, FiscalCode, PersonName, PhoneNumber};
use crate::error::ValidationError;

/// The six inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    GivenName,
    FamilyName,
    Age,
    FiscalCode,
    Email,
    Phone,
}

impl Field {
    pub const COUNT: usize = 6;

    /// Every field, in display order
    pub const ALL: [Field; Self::COUNT] = [
        Field::GivenName,
        Field::FamilyName,
        Field::Age,
        Field::FiscalCode,
        Field::Email,
        Field::Phone,
    ];

    /// Wire name, as used in the request body
    pub fn name(&self) -> &'static str {
        match self {
            Self::GivenName => "givenName",
            Self::FamilyName => "familyName",
            Self::Age => "age",
            Self::FiscalCode => "fiscalCode",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    /// User facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::GivenName => "Nome",
            Self::FamilyName => "Cognome",
            Self::Age => "Età",
            Self::FiscalCode => "Codice fiscale",
            Self::Email => "Email",
            Self::Phone => "Telefono",
        }
    }

    /// Run this field's rules against a raw input
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::GivenName | Self::FamilyName => value.parse::<PersonName>().map(drop),
            Self::Age => value.parse::<Age>().map(drop),
            Self::FiscalCode => value.parse::<FiscalCode>().map(drop),
            Self::Email => value.parse::<EmailAddress>().map(drop),
            Self::Phone => value.parse::<PhoneNumber>().map(drop),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
