use crate::error::ValidationError;
use crate::form::Field;

pub const SUBMISSION_FAILED: &str = "Errore durante la registrazione. Riprova più tardi.";

const REQUIRED: &str = "Questo campo è obbligatorio";
const INVALID_EMAIL: &str = "Inserisci un'email valida";
const INVALID_FISCAL_CODE: &str = "Codice fiscale non valido (16 caratteri)";
const INVALID_PHONE: &str = "Numero di telefono non valido";
const INVALID_NUMBER: &str = "Inserisci un numero valido";
const NAME_TOO_LONG: &str = "Nome troppo lungo";
const UNDER_AGE: &str = "Devi avere almeno 18 anni";
const OVER_AGE: &str = "L'età massima consentita è 120 anni";
const TOO_SHORT: &str = "Troppo corto";

/// Localized message for `error` raised on `field`
pub fn error_message(field: Field, error: ValidationError) -> &'static str {
    match (error, field) {
        (ValidationError::Required, _) => REQUIRED,
        (ValidationError::Format, Field::Email) => INVALID_EMAIL,
        (ValidationError::Format, Field::FiscalCode) => INVALID_FISCAL_CODE,
        (ValidationError::Format, Field::Phone) => INVALID_PHONE,
        (ValidationError::Format, Field::Age) => INVALID_NUMBER,
        (ValidationError::Format, Field::GivenName | Field::FamilyName) => NAME_TOO_LONG,
        (ValidationError::BelowMinimum { .. }, _) => UNDER_AGE,
        (ValidationError::AboveMaximum { .. }, _) => OVER_AGE,
        (ValidationError::TooShort { .. }, _) => TOO_SHORT,
    }
}
