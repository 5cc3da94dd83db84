//! Numeric-string detection

/// Check whether `text` parses as a finite number.
///
/// Surrounding whitespace is ignored. `NaN` and infinities do not count.
pub fn is_numeric(text: Option<&str>) -> bool {
    let Some(trimmed) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return false;
    };
    trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}
