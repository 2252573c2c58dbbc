mod registration_client;

pub use registration_client::{RegistrationClient, SubmissionClient, REGISTRATIONS_PATH};
