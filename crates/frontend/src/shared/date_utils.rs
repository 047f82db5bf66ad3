//! Utilities for date formatting and parsing at the form boundary.

use chrono::NaiveDate;

/// Format a date for display and for `<input type="date">` values
/// (ISO, YYYY-MM-DD)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date out of form input. Returns `None` for malformed input;
/// callers decide whether that means "no constraint" (filters) or a
/// validation error (forms).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "2024-03-15");
    }

    #[test]
    fn test_parse_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(parse_date(&format_date(date)), Some(date));
        assert_eq!(parse_date(" 2024-12-31 "), Some(date));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date(""), None);
    }
}
