//! Result formatting.
//!
//! Whole numbers print without a decimal point. Everything else prints with
//! at most ten fractional digits and no trailing zeros.

/// Fractional digits kept for non-integral results.
pub const MAX_FRACTION_DIGITS: usize = 10;

/// Format a finite result for the display.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{:.0}", normalize_zero(value));
    }

    let formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    // Tiny negatives round away to "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a result with thousand separators in the integer part.
///
/// Purely cosmetic; the text is not meant to be fed back in as an operand.
pub fn format_display(value: f64) -> String {
    group_thousands(&format_result(value))
}

/// Insert thousand separators into already formatted number text.
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{sign}{grouped}{frac_part}")
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
