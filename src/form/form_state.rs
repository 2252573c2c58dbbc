use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::client::SubmissionClient;
use crate::domain::RegistrationRecord;
use crate::error::{FieldError, Rule, SubmitError, ValidationError};
use crate::form::{error_message, Field, SubmissionState, SUBMISSION_FAILED};

/// How long a success or failure stays visible before the form goes idle again
pub const DISPLAY_WINDOW: Duration = Duration::from_secs(5);

/// State behind the registration form
///
/// Owns the raw inputs, which of them the user has touched, and the
/// submission lifecycle. Submitting borrows the form mutably for the whole
/// round trip, so a second attempt cannot start while one is in flight.
pub struct FormState<C> {
    client: C,

    values: [String; Field::COUNT],
    touched: [bool; Field::COUNT],

    display_window: Duration,
    state: Arc<watch::Sender<SubmissionState>>,
    reset_timer: Option<JoinHandle<()>>,
}

impl<C> FormState<C>
where
    C: SubmissionClient,
{
    pub fn new(client: C) -> Self {
        Self::with_display_window(client, DISPLAY_WINDOW)
    }

    pub fn with_display_window(client: C, display_window: Duration) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);

        Self {
            client,
            values: Default::default(),
            touched: Default::default(),
            display_window,
            state: Arc::new(state),
            reset_timer: None,
        }
    }

    /// Replace the raw input of a field
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Flag a field as interacted with, making its errors visible
    pub fn touch(&mut self, field: Field) {
        self.touched[field.index()] = true;
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field.index()]
    }

    pub fn mark_all_touched(&mut self) {
        self.touched = [true; Field::COUNT];
    }

    /// Check a single field, regardless of whether it was touched
    pub fn validate(&self, field: Field) -> Result<(), ValidationError> {
        field.check(self.value(field))
    }

    /// Whether `field` currently violates a rule of the given family
    pub fn has_error(&self, field: Field, rule: Rule) -> bool {
        matches!(self.validate(field), Err(e) if e.rule() == rule)
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|&field| self.validate(field).is_ok())
    }

    /// Parse every field into a record, failing on the first invalid one
    pub fn record(&self) -> Result<RegistrationRecord, FieldError> {
        Ok(RegistrationRecord {
            given_name: self.parse(Field::GivenName)?,
            family_name: self.parse(Field::FamilyName)?,
            age: self.parse(Field::Age)?,
            fiscal_code: self.parse(Field::FiscalCode)?,
            email: self.parse(Field::Email)?,
            phone: self.parse(Field::Phone)?,
        })
    }

    /// Message to display under `field`, empty when there is nothing to show
    pub fn error_message_for(&self, field: Field) -> &'static str {
        if !self.is_touched(field) {
            return "";
        }
        match self.validate(field) {
            Ok(()) => "",
            Err(e) => error_message(field, e),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Observe every lifecycle transition, including the timed return to idle
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Clear all inputs and touched flags
    pub fn reset(&mut self) {
        self.values = Default::default();
        self.touched = Default::default();
    }

    /// Validate the form and, when every field passes, send it
    ///
    /// Invalid forms get all their fields touched and no request is made.
    /// Otherwise the outcome is reflected in [`FormState::state`] for the
    /// display window, after which the form returns to idle.
    #[tracing::instrument(name = "Submit the registration form", skip(self))]
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let record = match self.record() {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Registration rejected locally: {}", e);
                self.mark_all_touched();
                return Err(e.into());
            }
        };

        // A new attempt supersedes the display of the previous one
        self.cancel_reset_timer();
        self.state.send_replace(SubmissionState::Submitting);

        match self.client.send(&record).await {
            Ok(()) => {
                tracing::info!("Registration submitted");
                self.reset();
                self.display(SubmissionState::Succeeded);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Registration failed: {}", e);
                self.display(SubmissionState::Failed(SUBMISSION_FAILED.into()));
                Err(e.into())
            }
        }
    }

    fn parse<T>(&self, field: Field) -> Result<T, FieldError>
    where
        T: FromStr<Err = ValidationError>,
    {
        self.value(field)
            .parse()
            .map_err(|error| FieldError { field, error })
    }
}

impl<C> FormState<C> {
    /// Show `state`, then flip back to idle once the display window elapses
    fn display(&mut self, state: SubmissionState) {
        self.state.send_replace(state);

        let sender = Arc::clone(&self.state);
        let window = self.display_window;
        self.reset_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            sender.send_replace(SubmissionState::Idle);
            tracing::debug!("Submission state back to idle");
        }));
    }

    fn cancel_reset_timer(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }
}

impl<C> Drop for FormState<C> {
    fn drop(&mut self) {
        self.cancel_reset_timer();
    }
}
