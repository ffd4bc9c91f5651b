//! # Registration
//!
//! The intake pipeline behind the landing page's registration section:
//!
//! * [`countries`]: loads the country directory once, falling back to a
//!   built-in list on any failure.
//! * [`validation`]: ordered, localized field rules.
//! * [`transport`]: delivers a lead to the intake script.
//! * [`controller`]: the submission state machine with auto-expiring feedback.
//!
//! [`init`] wires all of it from an [`IntakeConfig`] into a [`RegistrationForm`].

mod collation;
pub mod controller;
pub mod countries;
mod error;
mod form;
pub mod transport;
pub mod validation;

pub use collation::{locale_cmp, sort_names};
pub use controller::{SubmissionController, SubmissionSettings};
pub use countries::{CountryLoader, CountrySource, DirectoryHandle, RestCountries};
pub use error::{RegistrationError, RegistrationErrorExt};
pub use form::SharedForm;
pub use transport::{ResponseMode, ScriptTransport, Transport};
pub use validation::{ValidationRule, audit, validate, validate_message};

use safar_domain::config::IntakeConfig;
use safar_domain::outcome::SubmissionOutcome;
use safar_kernel::i18n::Localizer;
use std::sync::Arc;

/// An active registration form: its directory load, its fields, and its controller.
///
/// Dropping it tears the form down; a directory fetch still in flight is discarded.
#[derive(Debug)]
pub struct RegistrationForm<T> {
    directory: DirectoryHandle,
    controller: SubmissionController<T>,
}

impl<T: Transport> RegistrationForm<T> {
    /// Activates a form: starts the directory load and prepares an empty form.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open<S: CountrySource>(
        source: S,
        transport: T,
        localizer: Arc<dyn Localizer>,
        settings: SubmissionSettings,
    ) -> Self {
        let directory = CountryLoader::spawn(source);
        let controller = SubmissionController::new(transport, localizer, SharedForm::new(), settings);
        Self { directory, controller }
    }

    #[must_use]
    pub const fn directory(&self) -> &DirectoryHandle {
        &self.directory
    }

    #[must_use]
    pub const fn controller(&self) -> &SubmissionController<T> {
        &self.controller
    }

    #[must_use]
    pub fn form(&self) -> &SharedForm {
        self.controller.form()
    }

    /// Selects `name` if the directory, as currently loaded, offers it.
    pub fn select_country(&self, name: &str) -> bool {
        self.form().select_country(name, &self.directory.current())
    }

    /// See [`SubmissionController::submit`].
    pub async fn submit(&self) -> SubmissionOutcome {
        self.controller.submit().await
    }
}

/// Opens a form backed by the configured HTTP endpoints.
///
/// # Errors
/// Returns an error if either endpoint is blank or an HTTP client cannot be built.
pub fn init(
    config: &IntakeConfig,
    localizer: Arc<dyn Localizer>,
) -> Result<RegistrationForm<ScriptTransport>, RegistrationError> {
    let source = RestCountries::new(&config.directory)?;
    let transport = ScriptTransport::new(&config.submission)?;

    tracing::info!(
        directory = source.endpoint(),
        mode = ?transport.mode(),
        locale = %config.locale,
        "Registration form opened"
    );

    Ok(RegistrationForm::open(
        source,
        transport,
        localizer,
        SubmissionSettings::from(&config.submission),
    ))
}
