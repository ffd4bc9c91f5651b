use safar_domain::constants::{PHONE_DIGITS, keys};
use safar_domain::fields::FormFields;
use safar_domain::form::FormState;
use safar_kernel::i18n::Localizer;

/// A rule the form must satisfy before it can be submitted, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    FirstNameRequired,
    LastNameRequired,
    PhoneRequired,
    PhoneFormat,
    CountryRequired,
    MessageRequired,
}

impl ValidationRule {
    /// Every rule, in the order they are checked.
    pub const ORDER: [Self; 6] = [
        Self::FirstNameRequired,
        Self::LastNameRequired,
        Self::PhoneRequired,
        Self::PhoneFormat,
        Self::CountryRequired,
        Self::MessageRequired,
    ];

    /// Localization key of the message shown when this rule fails.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::FirstNameRequired => keys::FIRST_NAME_REQUIRED,
            Self::LastNameRequired => keys::LAST_NAME_REQUIRED,
            Self::PhoneRequired => keys::PHONE_REQUIRED,
            Self::PhoneFormat => keys::PHONE_FORMAT,
            Self::CountryRequired => keys::COUNTRY_REQUIRED,
            Self::MessageRequired => keys::MESSAGE_REQUIRED,
        }
    }

    /// The field this rule is about.
    #[must_use]
    pub const fn field(self) -> FormFields {
        match self {
            Self::FirstNameRequired => FormFields::FIRST_NAME,
            Self::LastNameRequired => FormFields::LAST_NAME,
            Self::PhoneRequired | Self::PhoneFormat => FormFields::PHONE,
            Self::CountryRequired => FormFields::COUNTRY,
            Self::MessageRequired => FormFields::MESSAGE,
        }
    }

    fn holds(self, form: &FormState) -> bool {
        match self {
            Self::FirstNameRequired => !form.first_name().trim().is_empty(),
            Self::LastNameRequired => !form.last_name().trim().is_empty(),
            Self::PhoneRequired => !form.phone_suffix().trim().is_empty(),
            Self::PhoneFormat => is_phone_suffix(form.phone_suffix().trim()),
            Self::CountryRequired => !form.country().is_empty(),
            Self::MessageRequired => !form.message().trim().is_empty(),
        }
    }
}

fn is_phone_suffix(digits: &str) -> bool {
    digits.len() == PHONE_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Checks the form against every rule and reports the first one that fails.
///
/// # Errors
/// Returns the first failing [`ValidationRule`] in [`ValidationRule::ORDER`].
pub fn validate(form: &FormState) -> Result<(), ValidationRule> {
    ValidationRule::ORDER.into_iter().find(|rule| !rule.holds(form)).map_or(Ok(()), Err)
}

/// The localized message of the first failing rule, or `None` for a valid form.
#[must_use]
pub fn validate_message(form: &FormState, localizer: &dyn Localizer) -> Option<String> {
    validate(form).err().map(|rule| localizer.translate(rule.message_key()))
}

/// Every field that currently breaks a rule. Does not stop at the first failure.
#[must_use]
pub fn audit(form: &FormState) -> FormFields {
    ValidationRule::ORDER
        .into_iter()
        .filter(|rule| !rule.holds(form))
        .fold(FormFields::empty(), |fields, rule| fields | rule.field())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_first_name("Aziz");
        form.set_last_name("Karimov");
        form.set_phone_suffix("912345678");
        form.set_message("Hi");
        form
    }

    #[test]
    fn missing_country_is_reported_after_phone() {
        assert_eq!(validate(&filled()), Err(ValidationRule::CountryRequired));
    }

    #[test]
    fn audit_collects_every_broken_field() {
        let mut form = filled();
        form.set_first_name("   ");
        form.set_phone_suffix("12");
        assert_eq!(audit(&form), FormFields::FIRST_NAME | FormFields::PHONE | FormFields::COUNTRY);
        assert_eq!(audit(&FormState::new()), FormFields::ALL);
    }

    #[test]
    fn phone_rules_share_a_field() {
        assert_eq!(ValidationRule::PhoneRequired.field(), ValidationRule::PhoneFormat.field());
        assert_ne!(
            ValidationRule::PhoneRequired.message_key(),
            ValidationRule::PhoneFormat.message_key()
        );
    }
}
