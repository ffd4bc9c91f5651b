use crate::constants::PHONE_DIGITS;
use crate::directory::CountryDirectory;
use serde::Serialize;

/// Values currently typed into the registration form.
///
/// `phone_suffix` only ever holds ASCII digits, at most [`PHONE_DIGITS`] of them:
/// [`FormState::set_phone_suffix`] discards anything else on entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    first_name: String,
    last_name: String,
    phone_suffix: String,
    country: String,
    message: String,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
    pub fn phone_suffix(&self) -> &str {
        &self.phone_suffix
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.message = value.into();
    }

    /// Keeps only the ASCII digits of `raw`, truncated to [`PHONE_DIGITS`].
    pub fn set_phone_suffix(&mut self, raw: &str) {
        self.phone_suffix = raw.chars().filter(char::is_ascii_digit).take(PHONE_DIGITS).collect();
    }

    /// Selects a country offered by `directory`; an empty name clears the selection.
    ///
    /// Returns `false` and leaves the selection untouched when `name` is not listed.
    pub fn select_country(&mut self, name: &str, directory: &CountryDirectory) -> bool {
        if name.is_empty() {
            self.country.clear();
            return true;
        }
        if !directory.contains(name) {
            return false;
        }
        name.clone_into(&mut self.country);
        true
    }

    /// Resets every field to its empty default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self == &Self::default()
    }
}
