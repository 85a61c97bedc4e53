//! Numeric normalization utilities.

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Credit as a whole number, truncated toward zero.
///
/// Empty, unparseable and non-finite values give 0.
pub fn parse_credit(value: &str) -> i64 {
    match parse_f64(value) {
        Some(credit) if credit.is_finite() => credit.trunc() as i64,
        _ => 0,
    }
}
