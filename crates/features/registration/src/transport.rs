use crate::error::{RegistrationError, RegistrationErrorExt};
use safar_domain::config::SubmissionConfig;
use safar_domain::payload::Payload;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, warn};

/// Delivers one lead. Called exactly once per submission, never retried.
pub trait Transport: Send + Sync + 'static {
    /// # Errors
    /// Returns an error when the lead could not be delivered.
    fn send(&self, payload: &Payload) -> impl Future<Output = Result<(), RegistrationError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, payload: &Payload) -> impl Future<Output = Result<(), RegistrationError>> + Send {
        (**self).send(payload)
    }
}

/// How much of the intake endpoint's response is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    /// The response is not read; only network-level failures count.
    #[default]
    Opaque,
    /// Non-2xx statuses are failures as well.
    Verified,
}

impl ResponseMode {
    #[must_use]
    pub const fn from_verify_status(verify: bool) -> Self {
        if verify { Self::Verified } else { Self::Opaque }
    }
}

/// Posts the lead as JSON to the intake script.
#[derive(Debug, Clone)]
pub struct ScriptTransport {
    client: reqwest::Client,
    endpoint: String,
    mode: ResponseMode,
}

impl ScriptTransport {
    /// Builds a client with the configured timeout and response mode.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Config`] for a blank endpoint and
    /// [`RegistrationError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SubmissionConfig) -> Result<Self, RegistrationError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Building submission client")?;
        let mode = ResponseMode::from_verify_status(config.verify_status);
        Self::with_client(client, &config.endpoint, mode)
    }

    /// Uses an existing client.
    ///
    /// # Errors
    /// Returns [`RegistrationError::Config`] for a blank endpoint.
    pub fn with_client(
        client: reqwest::Client,
        endpoint: &str,
        mode: ResponseMode,
    ) -> Result<Self, RegistrationError> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(RegistrationError::Config {
                message: "submission endpoint is empty".into(),
                context: None,
            });
        }
        Ok(Self { client, endpoint: endpoint.to_owned(), mode })
    }

    #[must_use]
    pub const fn mode(&self) -> ResponseMode {
        self.mode
    }
}

impl Transport for ScriptTransport {
    async fn send(&self, payload: &Payload) -> Result<(), RegistrationError> {
        debug!(endpoint = %self.endpoint, mode = ?self.mode, "Posting lead");

        let response =
            self.client.post(&self.endpoint).json(payload).send().await.context("Posting lead")?;
        let status = response.status();

        match self.mode {
            ResponseMode::Opaque => {
                if !status.is_success() {
                    warn!(%status, "Intake endpoint answered with a non-success status, ignored");
                }
                Ok(())
            },
            ResponseMode::Verified if status.is_success() => Ok(()),
            ResponseMode::Verified => Err(RegistrationError::status(status)).context("Posting lead"),
        }
    }
}
