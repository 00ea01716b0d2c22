//! Calendar helpers for `MM/DD/YYYY` fields.

use crate::error::FieldError;
use chrono::NaiveDate;

/// Display format of a finished date.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Returns the most days `month` can have in any year (February counts 29).
///
/// Returns 0 for months outside `1..=12`.
#[inline]
pub const fn max_days_in_month(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29,
        _ => 0,
    }
}

/// Parses a finished date, requiring it to format back to the same text.
///
/// Rejects days that don't exist (`02/30/2024`, `02/29/2023`) and loose
/// spellings such as `2/3/2024`.
///
/// # Example
///
/// ```
/// use tfield::date::parse_date;
///
/// assert!(parse_date("02/29/2024").is_ok());
/// assert!(parse_date("02/29/2023").is_err());
/// assert!(parse_date("2/3/2024").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, FieldError> {
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| FieldError::InvalidDate)?;

    if date.format(DATE_FORMAT).to_string() != text {
        return Err(FieldError::InvalidDate);
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_max_days() {
        assert_eq!(max_days_in_month(1), 31);
        assert_eq!(max_days_in_month(2), 29);
        assert_eq!(max_days_in_month(4), 30);
        assert_eq!(max_days_in_month(0), 0);
        assert_eq!(max_days_in_month(13), 0);
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("12/31/1999").unwrap();
        assert_eq!((date.month(), date.day(), date.year()), (12, 31, 1999));

        assert_eq!(parse_date("02/30/2024"), Err(FieldError::InvalidDate));
        assert_eq!(parse_date("13/01/2024"), Err(FieldError::InvalidDate));
        assert_eq!(parse_date("00/10/2024"), Err(FieldError::InvalidDate));
        assert_eq!(parse_date("12/31/99"), Err(FieldError::InvalidDate));
    }

    #[test]
    fn test_leap_years() {
        assert!(parse_date("02/29/2000").is_ok());
        assert!(parse_date("02/29/2024").is_ok());
        assert!(parse_date("02/29/1900").is_err());
        assert!(parse_date("02/29/2023").is_err());
    }
}
