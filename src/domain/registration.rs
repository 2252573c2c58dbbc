use crate::domain::{Age, EmailAddress, FiscalCode, PersonName, PhoneNumber};

/// A fully validated registration, ready to be sent
///
/// Only built once every field has parsed, so holding one means all six
/// rules passed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    pub given_name: PersonName,
    pub family_name: PersonName,
    pub age: Age,
    pub fiscal_code: FiscalCode,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}
