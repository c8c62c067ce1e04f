//! Utilities for date and time formatting
//!
//! The API sends dates as `YYYY-MM-DD` or ISO datetimes; tables show them in
//! US style.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// "2024-03-15T14:02:26.123Z" -> "03/15/2024, 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%m/%d/%Y, %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, pattern) {
            return dt.format("%m/%d/%Y, %H:%M").to_string();
        }
    }
    datetime_str.to_string()
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "03/15/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Optional API date for a table cell; missing shows as "N/A".
pub fn display_date(date: Option<&str>) -> String {
    match date {
        Some(d) if !d.trim().is_empty() => format_date(d),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "03/15/2024, 14:02");
        assert_eq!(format_datetime("2024-12-31 23:59:59"), "12/31/2024, 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "03/15/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "03/15/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(display_date(None), "N/A");
        assert_eq!(display_date(Some("")), "N/A");
    }
}
