//! Length-bounded truncation.
//!
//! Lengths are measured in `char`s (Unicode scalar values). A cut never
//! lands inside a UTF-8 sequence, but it can split a grapheme cluster made
//! of several scalars, such as a flag emoji or a letter with a combining mark.

use super::error::TextError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Name reported for the bound in [`TextError::InvalidArgument`]
pub const MAX_LENGTH_PARAM: &str = "maxLength";

/// Suffix appended by [`truncate_with_ellipsis`]
pub const ELLIPSIS: &str = "...";

/// Bounded prefix extraction with an optional reserved suffix.
///
/// `minimum_bound` is stated on its own rather than derived from the suffix
/// width, so the two can be tuned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationPolicy {
    minimum_bound: i64,
    suffix: &'static str,
    rejection: &'static str,
}

impl TruncationPolicy {
    /// Cut to the bound, nothing appended
    pub const PLAIN: Self = Self {
        minimum_bound: 0,
        suffix: "",
        rejection: "max length cannot be negative",
    };

    /// Cut to the bound with `"..."` taking the last three slots
    pub const ELLIPSIS: Self = Self {
        minimum_bound: 3,
        suffix: ELLIPSIS,
        rejection: "max length must be at least 3 to accommodate ellipsis",
    };

    /// Smallest bound this policy accepts
    pub fn minimum_bound(&self) -> i64 {
        self.minimum_bound
    }

    /// Number of `char`s the suffix occupies
    pub fn reserved_width(&self) -> usize {
        self.suffix.chars().count()
    }

    /// Check the bound and convert it to a `usize`.
    pub fn validate(&self, max_length: i64) -> Result<usize, TextError> {
        if max_length < self.minimum_bound {
            return Err(TextError::invalid_argument(MAX_LENGTH_PARAM, self.rejection));
        }
        Ok(usize::try_from(max_length).unwrap_or(usize::MAX))
    }

    /// Apply the policy to `text`.
    ///
    /// The bound is validated before `text` is inspected, so an absent text
    /// still reports an out-of-range bound.
    pub fn apply<'a>(
        &self,
        text: Option<&'a str>,
        max_length: i64,
    ) -> Result<Option<Cow<'a, str>>, TextError> {
        let bound = self.validate(max_length)?;
        let Some(text) = text else {
            return Ok(None);
        };

        if fits_within(text, bound) {
            return Ok(Some(Cow::Borrowed(text)));
        }

        let head = char_prefix(text, bound.saturating_sub(self.reserved_width()));
        if self.suffix.is_empty() {
            Ok(Some(Cow::Borrowed(head)))
        } else {
            Ok(Some(Cow::Owned(format!("{}{}", head, self.suffix))))
        }
    }
}

/// Which truncation policy to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationMode {
    #[default]
    Plain,
    Ellipsis,
}

impl TruncationMode {
    pub fn policy(self) -> TruncationPolicy {
        match self {
            TruncationMode::Plain => TruncationPolicy::PLAIN,
            TruncationMode::Ellipsis => TruncationPolicy::ELLIPSIS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TruncationMode::Plain => "plain",
            TruncationMode::Ellipsis => "ellipsis",
        }
    }
}

impl std::fmt::Display for TruncationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Truncate `text` to at most `max_length` chars.
///
/// Returns `Ok(None)` for absent text and `Ok(Some(""))` when `max_length`
/// is zero. Fails with [`TextError::InvalidArgument`] if `max_length` is
/// negative, even when `text` is absent.
pub fn truncate(text: Option<&str>, max_length: i64) -> Result<Option<&str>, TextError> {
    let bound = TruncationPolicy::PLAIN.validate(max_length)?;
    Ok(text.map(|t| char_prefix(t, bound)))
}

/// Truncate `text` so the result, `"..."` included, is at most `max_length`
/// chars.
///
/// Text that already fits is returned unchanged with no suffix. Fails with
/// [`TextError::InvalidArgument`] if `max_length` is below 3.
pub fn truncate_with_ellipsis(
    text: Option<&str>,
    max_length: i64,
) -> Result<Option<Cow<'_, str>>, TextError> {
    TruncationPolicy::ELLIPSIS.apply(text, max_length)
}

fn fits_within(s: &str, max_chars: usize) -> bool {
    s.char_indices().nth(max_chars).is_none()
}

fn char_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
