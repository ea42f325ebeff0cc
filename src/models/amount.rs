//! Lenient amount parsing and formatting
//!
//! Expense amounts travel as decimal strings typed by the user or produced
//! by receipt extraction. Parsing is forgiving: an optional currency symbol
//! is stripped and anything that still fails to parse counts as zero, so a
//! half-edited field never breaks a running total.

/// Parse an amount string, if possible
///
/// Accepts formats: "10.50", "-3.00", "$10.50", "7"
pub fn parse(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, s)
    };

    let s = s.strip_prefix('$').unwrap_or(s);

    let value: f64 = s.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(if negative { -value } else { value })
}

/// Parse an amount string, treating empty or unparsable input as zero
pub fn parse_or_zero(s: &str) -> f64 {
    parse(s).unwrap_or(0.0)
}

/// Round a value to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a value with exactly 2 decimal places
pub fn format(value: f64) -> String {
    format!("{:.2}", value)
}

/// Reformat an amount string to exactly 2 decimal places
///
/// Malformed input becomes "0.00". Formatting then parsing is idempotent
/// after the first pass: `"7"` -> `"7.00"` -> `7.0` -> `"7.00"`.
pub fn reformat(s: &str) -> String {
    format(parse_or_zero(s))
}
