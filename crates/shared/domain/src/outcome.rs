use serde::{Deserialize, Serialize};

/// Where the submission state machine currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed { reason: String },
}

impl SubmissionOutcome {
    /// The submit affordance is disabled only while a payload is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// `Succeeded` and `Failed` render a banner; the other states do not.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Transient banner describing the last submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Error, text: text.into() }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, FeedbackKind::Error)
    }
}

/// What observers of the form see: the state plus the banner, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionView {
    pub outcome: SubmissionOutcome,
    pub feedback: Option<Feedback>,
}

impl SubmissionView {
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !self.outcome.is_submitting()
    }

    #[must_use]
    pub const fn banner(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }
}
