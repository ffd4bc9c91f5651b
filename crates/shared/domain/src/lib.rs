//! # Domain Models
//!
//! Pure types of the registration intake: the form being filled in, the country
//! directory, the lead payload, and the submission outcome shown to the visitor.
//! Dependencies stay at `serde` and `bitflags`; no I/O, networking, or clocks.

pub mod config;
pub mod constants;
pub mod directory;
pub mod fields;
pub mod form;
pub mod outcome;
pub mod payload;
