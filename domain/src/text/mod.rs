//! Validation and transformation helpers over text.
//!
//! Every function treats `None` as "no text": predicates answer `false`,
//! transforms hand `None` back.

pub mod casing;
pub mod filter;
pub mod numeric;
pub mod validation;
