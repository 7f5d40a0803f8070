//! Number formatting for invoice output.

/// Format a length for display.
///
/// Whole numbers print without a decimal point; other values keep up to
/// three decimals with trailing zeros trimmed.
pub fn format_length(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a currency amount with two decimals.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}
