//! Core domain concepts shared across all helpers.
//!
//! - [`string`] — length-bounded truncation (plain and ellipsis)
//! - [`error::TextError`] — domain-level errors

pub mod error;
pub mod string;
