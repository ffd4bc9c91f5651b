use crate::constants::{COUNTRY_DIRECTORY_URL, FEEDBACK_TTL_SECS, LEAD_ENDPOINT_URL, PHONE_PREFIX};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level intake configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IntakeConfigInner {
    pub directory: DirectoryConfig,
    pub submission: SubmissionConfig,
    pub log: LogConfig,
    /// Language code of the built-in catalogs (`en`, `ru`, `uz`).
    pub locale: String,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct IntakeConfig {
    #[serde(flatten, default)]
    inner: Arc<IntakeConfigInner>,
}

impl Deref for IntakeConfig {
    type Target = IntakeConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for IntakeConfig {
    fn deref_mut(&mut self) -> &mut IntakeConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Remote country directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

/// Lead submission endpoint and feedback behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub endpoint: String,
    pub phone_prefix: String,
    pub feedback_ttl_secs: u64,
    pub timeout_secs: u64,
    /// Treat non-2xx responses as failures instead of ignoring the response.
    pub verify_status: bool,
}

/// Logging output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub directives: Option<String>,
    pub path: Option<PathBuf>,
    pub json: bool,
}

impl DirectoryConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SubmissionConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub const fn feedback_ttl(&self) -> Duration {
        Duration::from_secs(self.feedback_ttl_secs)
    }
}

// --- Default ---

impl Default for IntakeConfigInner {
    fn default() -> Self {
        Self {
            directory: DirectoryConfig::default(),
            submission: SubmissionConfig::default(),
            log: LogConfig::default(),
            locale: "en".to_owned(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { endpoint: COUNTRY_DIRECTORY_URL.to_owned(), timeout_secs: 10 }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: LEAD_ENDPOINT_URL.to_owned(),
            phone_prefix: PHONE_PREFIX.to_owned(),
            feedback_ttl_secs: FEEDBACK_TTL_SECS,
            timeout_secs: 30,
            verify_status: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directives: None, path: None, json: false }
    }
}
