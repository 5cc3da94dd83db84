//! Domain layer for textkit
//!
//! Pure, stateless helpers over text. Nothing here performs I/O or logs;
//! the only failure is [`TextError::InvalidArgument`] for an out-of-range
//! length bound.
//!
//! # Core Concepts
//!
//! ## Truncation
//!
//! - **Plain**: keep at most `maxLength` chars
//! - **Ellipsis**: keep at most `maxLength` chars with `"..."` reserved at the end
//!
//! Both count `char`s and treat absent text (`None`) as distinct from
//! empty text (`Some("")`).
//!
//! ## Helpers
//!
//! Email/URL validation, title casing, special-character stripping and
//! numeric detection live under [`text`].

pub mod core;
pub mod text;

// Re-export commonly used types
pub use core::{
    error::TextError,
    string::{
        ELLIPSIS, MAX_LENGTH_PARAM, TruncationMode, TruncationPolicy, truncate,
        truncate_with_ellipsis,
    },
};
pub use text::{
    casing::to_title_case,
    filter::remove_special_characters,
    numeric::is_numeric,
    validation::{is_valid_email, is_valid_url},
};
