/// Lifecycle of a single submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Holds the message shown to the user
    Failed(String),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
