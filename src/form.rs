mod field;
mod form_state;
mod messages;
mod submission_state;

pub use field::Field;
pub use form_state::{FormState, DISPLAY_WINDOW};
pub use messages::{error_message, SUBMISSION_FAILED};
pub use submission_state::SubmissionState;
