//! Fixed values of the intake form.

/// Country calling code prepended to the phone digits.
pub const PHONE_PREFIX: &str = "+998";

/// Exact number of digits the phone suffix must have.
pub const PHONE_DIGITS: usize = 9;

/// Seconds a feedback banner stays visible.
pub const FEEDBACK_TTL_SECS: u64 = 6;

/// Remote country directory, restricted to the name field.
pub const COUNTRY_DIRECTORY_URL: &str = "https://restcountries.com/v3.1/all?fields=name";

/// Lead intake script (write-only; its responses are opaque).
pub const LEAD_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbxjFQkGSY8tB3HKqWORHeol1cAi4PQs7hfIDuSgyDCDMioRW6J7IkXor-f41uZRH8cixw/exec";

/// Used when the country directory cannot be fetched. The agency's home country leads.
pub const FALLBACK_COUNTRIES: [&str; 10] = [
    "Uzbekistan",
    "United States",
    "Russia",
    "United Kingdom",
    "Germany",
    "France",
    "China",
    "India",
    "Japan",
    "Kazakhstan",
];

/// Localization keys used by the registration section.
pub mod keys {
    pub const FIRST_NAME_REQUIRED: &str = "registerSection.validation.firstName";
    pub const LAST_NAME_REQUIRED: &str = "registerSection.validation.lastName";
    pub const PHONE_REQUIRED: &str = "registerSection.validation.phone";
    pub const PHONE_FORMAT: &str = "registerSection.validation.phoneFormat";
    pub const COUNTRY_REQUIRED: &str = "registerSection.validation.country";
    pub const MESSAGE_REQUIRED: &str = "registerSection.validation.message";

    pub const SUCCESS: &str = "registerSection.success";
    pub const ERROR: &str = "registerSection.error";

    pub const TITLE: &str = "registerSection.title";
    pub const LOADING_COUNTRIES: &str = "registerSection.loadingCountries";
    pub const COUNTRY_PLACEHOLDER: &str = "registerSection.placeholders.country";
    pub const PHONE_HINT: &str = "registerSection.phoneHint";
    pub const SUBMIT: &str = "registerSection.submit";
    pub const SENDING: &str = "registerSection.sending";
    pub const SUMMARY: &str = "registerSection.summary";
}
