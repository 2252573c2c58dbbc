use anyhow::Context;

use async_trait::async_trait;

use reqwest::Client;

use serde::Serialize;

use url::Url;

use crate::domain::RegistrationRecord;
use crate::error::SubmissionError;

pub const REGISTRATIONS_PATH: [&str; 2] = ["api", "registrations"];

/// Outbound side of the form: delivers one registration per call
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Issue exactly one request for `record`, resolving once the remote end answers
    async fn send(&self, record: &RegistrationRecord) -> Result<(), SubmissionError>;
}

/// REST client for the registrations API
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    client: Client,

    api_registrations_url: Url,
}

impl RegistrationClient {
    pub fn new(api_base_url: Url) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build http client")?;

        // Appended below any path the base already has
        let mut api_registrations_url = api_base_url;
        api_registrations_url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Base URL cannot hold a path"))
            .context("Failed to create registrations URL")?
            .pop_if_empty()
            .extend(REGISTRATIONS_PATH);

        Ok(Self {
            client,
            api_registrations_url,
        })
    }

    /// The full URL registrations are posted to
    pub fn url(&self) -> &Url {
        &self.api_registrations_url
    }
}

#[async_trait]
impl SubmissionClient for RegistrationClient {
    #[tracing::instrument(
        name = "Send a registration via API",
        skip(self, record),
        fields(url = %self.api_registrations_url)
    )]
    async fn send(&self, record: &RegistrationRecord) -> Result<(), SubmissionError> {
        let body = RegistrationRequest::from(record);

        let res = self
            .client
            .post(self.api_registrations_url.clone())
            .json(&body)
            .send()
            .await?;

        // Any 2xx is accepted, the body is never read
        let status = res.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationRequest<'a> {
    given_name: &'a str,
    family_name: &'a str,
    age: u8,
    fiscal_code: &'a str,
    email: &'a str,
    phone: &'a str,
}

impl<'a> From<&'a RegistrationRecord> for RegistrationRequest<'a> {
    fn from(record: &'a RegistrationRecord) -> Self {
        Self {
            given_name: record.given_name.as_ref(),
            family_name: record.family_name.as_ref(),
            age: record.age.years(),
            fiscal_code: record.fiscal_code.as_ref(),
            email: record.email.as_ref(),
            phone: record.phone.as_ref(),
        }
    }
}
