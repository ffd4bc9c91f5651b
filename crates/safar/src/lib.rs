//! Facade crate for the Safar intake pipeline.
//! Re-exports domain/kernel primitives and opens the registration form.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Load an [`IntakeConfig`] through [`kernel::config`].
//! - Call [`open`] inside a Tokio runtime to activate a registration form.

pub use safar_domain as domain;
use safar_domain::config::IntakeConfig;
pub use safar_kernel as kernel;
use safar_kernel::i18n::{Catalog, Localizer};
use safar_registration::{RegistrationError, RegistrationForm, ScriptTransport};
use std::sync::Arc;

/// Feature registry for runtime introspection.
pub mod features {
    pub use safar_registration as registration;

    /// Slices compiled into this build.
    pub const ENABLED: &[&str] = &["registration"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Opens a registration form with the built-in catalog for `config.locale`.
///
/// # Errors
/// See [`safar_registration::init`].
pub fn open(config: &IntakeConfig) -> Result<RegistrationForm<ScriptTransport>, RegistrationError> {
    let localizer: Arc<dyn Localizer> = Arc::new(Catalog::for_tag(&config.locale));
    safar_registration::init(config, localizer)
}
