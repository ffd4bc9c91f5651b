use crate::form::FormState;
use serde::{Deserialize, Serialize};

/// The lead sent to the intake endpoint. Built once per submission and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    first_name: String,
    last_name: String,
    phone: String,
    country: String,
    message: String,
    timestamp: String,
}

impl Payload {
    /// Snapshots `form`: names and message trimmed, phone prefixed.
    ///
    /// `timestamp` is the ISO-8601 instant captured by the caller.
    #[must_use]
    pub fn from_form(form: &FormState, phone_prefix: &str, timestamp: impl Into<String>) -> Self {
        Self {
            first_name: form.first_name().trim().to_owned(),
            last_name: form.last_name().trim().to_owned(),
            phone: format!("{phone_prefix}{}", form.phone_suffix().trim()),
            country: form.country().to_owned(),
            message: form.message().trim().to_owned(),
            timestamp: timestamp.into(),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}
