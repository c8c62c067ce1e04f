//! Number formatting for table cells

/// Formats with a `,` thousands separator and the given number of decimals.
///
/// `1234.567` with 2 decimals gives `"1,234.57"`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// "$1,234.50"
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number_with_decimals(-value, 2))
    } else {
        format!("${}", format_number_with_decimals(value, 2))
    }
}

/// Money cell for a lenient text field: numbers are formatted, anything
/// else is shown as sent, blanks as "N/A".
pub fn format_money_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "N/A".to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => format_money(v),
        _ => raw.to_string(),
    }
}
