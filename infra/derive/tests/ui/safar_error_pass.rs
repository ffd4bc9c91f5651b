use safar_derive::safar_error;
use std::borrow::Cow;

#[safar_error]
pub enum DemoError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    raw.parse::<u32>().context("Parsing phone digits")
}

fn main() {
    let err = parse("nine").unwrap_err();
    assert_eq!(err.context_message(), Some("Parsing phone digits"));

    let internal: DemoError = "broken".into();
    assert!(internal.context_message().is_none());

    let wrapped: Result<(), DemoError> = Err(internal);
    let wrapped = wrapped.context("Submitting lead").unwrap_err();
    assert_eq!(wrapped.context_message(), Some("Submitting lead"));
}
