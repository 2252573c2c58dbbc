mod age;
mod email_address;
mod fiscal_code;
mod person_name;
mod phone_number;
mod registration;

pub use age::{Age, MAX_AGE, MIN_AGE};
pub use email_address::EmailAddress;
pub use fiscal_code::FiscalCode;
pub use person_name::PersonName;
pub use phone_number::PhoneNumber;
pub use registration::RegistrationRecord;
