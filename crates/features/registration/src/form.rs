use parking_lot::RwLock;
use safar_domain::directory::CountryDirectory;
use safar_domain::form::FormState;
use std::sync::Arc;

/// The form as shared between its editor and the submission controller.
///
/// Cloning shares the same underlying [`FormState`].
#[derive(Debug, Clone, Default)]
pub struct SharedForm {
    inner: Arc<RwLock<FormState>>,
}

impl SharedForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current values.
    #[must_use]
    pub fn snapshot(&self) -> FormState {
        self.inner.read().clone()
    }

    /// Applies `edit` under the write lock.
    pub fn edit<R>(&self, edit: impl FnOnce(&mut FormState) -> R) -> R {
        edit(&mut self.inner.write())
    }

    pub fn set_first_name(&self, value: impl Into<String>) {
        self.edit(|form| form.set_first_name(value));
    }

    pub fn set_last_name(&self, value: impl Into<String>) {
        self.edit(|form| form.set_last_name(value));
    }

    pub fn set_phone_suffix(&self, raw: &str) {
        self.edit(|form| form.set_phone_suffix(raw));
    }

    /// See [`FormState::select_country`].
    pub fn select_country(&self, name: &str, directory: &CountryDirectory) -> bool {
        self.edit(|form| form.select_country(name, directory))
    }

    pub fn set_message(&self, value: impl Into<String>) {
        self.edit(|form| form.set_message(value));
    }

    pub fn clear(&self) {
        self.edit(FormState::clear);
    }
}

impl From<FormState> for SharedForm {
    fn from(form: FormState) -> Self {
        Self { inner: Arc::new(RwLock::new(form)) }
    }
}
