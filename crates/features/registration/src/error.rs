use std::borrow::Cow;

/// A specialized [`RegistrationError`] enum of this crate.
#[safar_derive::safar_error]
pub enum RegistrationError {
    /// The request never produced a usable response (DNS, TLS, timeout, refused connection).
    #[error("HTTP error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The server answered with a status the caller treats as failure.
    #[error("Unexpected status{}: {message}", format_context(.context))]
    Status { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The response body did not have the expected shape.
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Invalid endpoint or client settings.
    #[error("Registration config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        Self::Status { message: format!("server answered {status}").into(), context: None }
    }
}
