//! # Flexible Date Parsing
//!
//! The legacy UI accepted whatever the machine locale considered a date.
//! We pin that down to an explicit, ordered table of formats so behavior is
//! the same on every machine.

use chrono::NaiveDate;

/// Accepted date formats, tried in order. First match wins.
///
/// ISO (`2024-01-01`) is preferred; day-first forms come before month-first,
/// so an ambiguous `02/03/2024` reads as 2 March 2024.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%m/%d/%Y"];

/// Parses a calendar date in any of the accepted formats.
///
/// ## Example
/// ```rust
/// use superstore_core::dates::parse_date;
///
/// assert!(parse_date("2024-01-01").is_some());
/// assert!(parse_date("01/06/2024").is_some());
/// assert!(parse_date("not a date").is_none());
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_format() {
        assert_eq!(
            parse_date("2024-06-01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_day_first_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert_eq!(parse_date("01-06-2024"), expected);
        assert_eq!(parse_date("01/06/2024"), expected);
    }

    #[test]
    fn test_month_first_fallback() {
        // 06/25/2024 is invalid as day-first, so the month-first form applies
        assert_eq!(
            parse_date("06/25/2024"),
            NaiveDate::from_ymd_opt(2024, 6, 25)
        );
    }

    #[test]
    fn test_ambiguous_dates_read_day_first() {
        assert_eq!(
            parse_date("02/03/2024"),
            NaiveDate::from_ymd_opt(2024, 3, 2)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_date("").is_none());
        assert!(parse_date("   ").is_none());
        assert!(parse_date("soon").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }
}
