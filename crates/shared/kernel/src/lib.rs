//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered configuration loading and the
//! localization lookup used by every visitor-facing message.
//!
//! ## Localization
//! ```rust
//! use safar_kernel::i18n::{Catalog, Locale, Localizer};
//!
//! let catalog = Catalog::new(Locale::En);
//! assert_eq!(catalog.translate("registerSection.submit"), "Send request");
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use safar_kernel::config::load_config;
//! use safar_kernel::domain::config::IntakeConfig;
//!
//! let cfg: IntakeConfig = load_config(Some("config/intake.toml")).unwrap_or_default();
//! ```
pub mod config;
pub mod i18n;

pub use safar_domain as domain;
