//! Message lookup for the registration section.
//!
//! The pipeline only sees [`Localizer`], a total `(key, params) -> String` function.
//! [`Catalog`] is the built-in implementation with the page's three languages;
//! lookups fall back to English and then to the key itself.

use fxhash::FxHashMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Languages offered by the page header.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Ru,
    Uz,
}

impl Locale {
    /// Resolves a language tag such as `ru`, `uz-Latn-UZ`, or `en_US`; unknown tags give English.
    #[must_use]
    pub fn resolve(tag: &str) -> Self {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        primary.parse().unwrap_or_default()
    }

    /// All supported locales, in header order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Translates message keys for visitor-facing text.
pub trait Localizer: Send + Sync {
    /// Returns the message for `key`. Must be total: unknown keys still yield a string.
    fn translate(&self, key: &str) -> String;

    /// Like [`Localizer::translate`], replacing `{{name}}` placeholders from `params`.
    fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(&self.translate(key), params)
    }
}

impl<F> Localizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Built-in message catalog for one locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    messages: FxHashMap<&'static str, &'static str>,
    fallback: FxHashMap<&'static str, &'static str>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl Catalog {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            messages: table(locale).iter().copied().collect(),
            fallback: table(Locale::En).iter().copied().collect(),
        }
    }

    /// Catalog for a language tag; see [`Locale::resolve`].
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        Self::new(Locale::resolve(tag))
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Whether `key` has a message in this locale (without falling back).
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }
}

impl Localizer for Catalog {
    fn translate(&self, key: &str) -> String {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map_or_else(|| key.to_owned(), |message| (*message).to_owned())
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_owned(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
    })
}

const fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Ru => RU,
        Locale::Uz => UZ,
    }
}

const EN: &[(&str, &str)] = &[
    ("registerSection.title", "Plan your trip with us"),
    ("registerSection.description", "Leave your details and our manager will contact you."),
    ("registerSection.firstName", "First name"),
    ("registerSection.lastName", "Last name"),
    ("registerSection.phone", "Phone number"),
    ("registerSection.phoneHint", "Enter 9 digits after +998"),
    ("registerSection.country", "Country"),
    ("registerSection.message", "Message"),
    ("registerSection.loadingCountries", "Loading countries..."),
    ("registerSection.placeholders.country", "Select a country"),
    ("registerSection.submit", "Send request"),
    ("registerSection.sending", "Sending..."),
    ("registerSection.success", "Thank you! Your request has been sent."),
    ("registerSection.error", "Something went wrong. Please try again later."),
    ("registerSection.validation.firstName", "Please enter your first name."),
    ("registerSection.validation.lastName", "Please enter your last name."),
    ("registerSection.validation.phone", "Please enter your phone number."),
    ("registerSection.validation.phoneFormat", "The phone number must contain exactly 9 digits."),
    ("registerSection.validation.country", "Please select a country."),
    ("registerSection.validation.message", "Please enter a message."),
    ("registerSection.summary", "{{count}} countries available"),
];

const RU: &[(&str, &str)] = &[
    ("registerSection.title", "Спланируйте поездку вместе с нами"),
    ("registerSection.description", "Оставьте свои данные, и наш менеджер свяжется с вами."),
    ("registerSection.firstName", "Имя"),
    ("registerSection.lastName", "Фамилия"),
    ("registerSection.phone", "Номер телефона"),
    ("registerSection.phoneHint", "Введите 9 цифр после +998"),
    ("registerSection.country", "Страна"),
    ("registerSection.message", "Сообщение"),
    ("registerSection.loadingCountries", "Загрузка стран..."),
    ("registerSection.placeholders.country", "Выберите страну"),
    ("registerSection.submit", "Отправить заявку"),
    ("registerSection.sending", "Отправка..."),
    ("registerSection.success", "Спасибо! Ваша заявка отправлена."),
    ("registerSection.error", "Что-то пошло не так. Попробуйте позже."),
    ("registerSection.validation.firstName", "Пожалуйста, введите имя."),
    ("registerSection.validation.lastName", "Пожалуйста, введите фамилию."),
    ("registerSection.validation.phone", "Пожалуйста, введите номер телефона."),
    ("registerSection.validation.phoneFormat", "Номер телефона должен содержать ровно 9 цифр."),
    ("registerSection.validation.country", "Пожалуйста, выберите страну."),
    ("registerSection.validation.message", "Пожалуйста, введите сообщение."),
    ("registerSection.summary", "Доступно стран: {{count}}"),
];

const UZ: &[(&str, &str)] = &[
    ("registerSection.title", "Sayohatingizni biz bilan rejalashtiring"),
    ("registerSection.description", "Ma'lumotlaringizni qoldiring, menejerimiz siz bilan bog'lanadi."),
    ("registerSection.firstName", "Ism"),
    ("registerSection.lastName", "Familiya"),
    ("registerSection.phone", "Telefon raqami"),
    ("registerSection.phoneHint", "+998 dan keyin 9 ta raqam kiriting"),
    ("registerSection.country", "Davlat"),
    ("registerSection.message", "Xabar"),
    ("registerSection.loadingCountries", "Davlatlar yuklanmoqda..."),
    ("registerSection.placeholders.country", "Davlatni tanlang"),
    ("registerSection.submit", "So'rov yuborish"),
    ("registerSection.sending", "Yuborilmoqda..."),
    ("registerSection.success", "Rahmat! So'rovingiz yuborildi."),
    ("registerSection.error", "Xatolik yuz berdi. Keyinroq qayta urinib ko'ring."),
    ("registerSection.validation.firstName", "Iltimos, ismingizni kiriting."),
    ("registerSection.validation.lastName", "Iltimos, familiyangizni kiriting."),
    ("registerSection.validation.phone", "Iltimos, telefon raqamingizni kiriting."),
    ("registerSection.validation.phoneFormat", "Telefon raqami aynan 9 ta raqamdan iborat bo'lishi kerak."),
    ("registerSection.validation.country", "Iltimos, davlatni tanlang."),
    ("registerSection.validation.message", "Iltimos, xabar yozing."),
];
