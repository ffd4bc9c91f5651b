#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace:
//!
//! * [`macro@safar_error`] turns an enum into a `thiserror` error with
//!   `.context(...)` support.
//! * [`macro@main`] bootstraps a Tokio runtime profile from `safar-runtime`.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own
//! macros in doctests; the integration tests under `tests/ui` compile them.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, parse_macro_input};

/// Attribute macro to bootstrap a `safar-runtime` Tokio runtime.
///
/// Transforms an `async fn main` returning a `Result` into a synchronous
/// `fn main` that builds the runtime and blocks on the body.
///
/// # Arguments
///
/// * `interactive` - Current-thread runtime, the cooperative event loop of the intake form.
/// * `memory_efficient` - Small multi-threaded pool for background tooling.
/// * `default` - Multi-threaded pool sized from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[safar_runtime::main(interactive)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Declares a crate-level error enum.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait with `.context(...)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every wrapped source error.
/// * **Context Accessor**: Generates `Name::context_message()` returning the attached context.
/// * **Source Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Implements `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Variants carrying a source must also carry `context: Option<Cow<'static, str>>`.
/// 3. Tuple and unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use safar_derive::safar_error;
/// use std::borrow::Cow;
///
/// #[safar_error]
/// pub enum FetchError {
///     #[error("HTTP error{}: {source}", format_context(.context))]
///     Http { source: reqwest::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// async fn fetch(client: &reqwest::Client) -> Result<String, FetchError> {
///     let body = client.get("https://example.com").send().await.context("GET example")?;
///     body.text().await.context("Reading body")
/// }
/// ```
#[proc_macro_attribute]
pub fn safar_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}
