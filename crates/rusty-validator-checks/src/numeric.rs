//! Numeric literal validation functions

/// Validates a base-10 integer literal.
///
/// Surrounding whitespace is ignored. What remains must be an optional
/// sign followed by ASCII digits, nothing else, and fit in an `i64`.
pub fn is_integer_literal(s: &str) -> bool {
    s.trim().parse::<i64>().is_ok()
}

/// Validates a real-number literal.
///
/// Surrounding whitespace is ignored, as for [`is_integer_literal`].
/// Decimal and exponent forms are accepted; `inf`, `NaN` and values that
/// overflow to infinity are not.
pub fn is_numeric_literal(s: &str) -> bool {
    let s = s.trim();

    if !s.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }

    s.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Parses a non-negative length bound such as the `10` in `max:10`
pub fn parse_bound(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok()
}
