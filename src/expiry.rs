//! Expiration date parsing and the accepted year window.
//!
//! Expiration dates are entered as `MM/YY`. A two-digit year is accepted
//! when some year within twelve years of the current one ends in those two
//! digits, which also resolves the century.
//!
//! # Example
//!
//! ```
//! use tfield::expiry::{parse_expiry, YearWindow};
//!
//! let window = YearWindow::around(2024);
//! let expiry = parse_expiry("01/26", &window).unwrap();
//! assert_eq!(expiry.month(), 1);
//! assert_eq!(expiry.year(), 2026);
//!
//! assert!(parse_expiry("01/40", &window).is_err());
//! ```

use crate::error::FieldError;
use chrono::Datelike;
use std::fmt;
use std::ops::RangeInclusive;

/// Years on either side of the current year an expiration date may fall.
pub const EXPIRY_WINDOW_YEARS: i32 = 12;

/// Returns the current local calendar year.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// An inclusive range of full years an expiration date may fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    start: i32,
    end: i32,
}

impl YearWindow {
    /// Creates the ±12 year window around `year`, clamped to `i32`.
    pub const fn around(year: i32) -> Self {
        Self {
            start: year.saturating_sub(EXPIRY_WINDOW_YEARS),
            end: year.saturating_add(EXPIRY_WINDOW_YEARS),
        }
    }

    /// Creates the window around the current local year.
    pub fn current() -> Self {
        Self::around(current_year())
    }

    /// Creates a window from explicit bounds. Returns `None` if `start > end`.
    pub const fn new(start: i32, end: i32) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// First accepted year.
    #[inline]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Last accepted year.
    #[inline]
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Resolves a two-digit year to the full year inside the window.
    ///
    /// A window spans fewer than 100 years, so at most one year matches.
    ///
    /// # Example
    ///
    /// ```
    /// use tfield::expiry::YearWindow;
    ///
    /// let window = YearWindow::around(2095);
    /// assert_eq!(window.resolve(1), Some(2101));
    /// assert_eq!(window.resolve(90), Some(2090));
    /// assert_eq!(window.resolve(50), None);
    /// ```
    pub fn resolve(&self, two_digit: u32) -> Option<i32> {
        if two_digit > 99 {
            return None;
        }
        let yy = two_digit as i32;
        (self.start..=self.end).find(|y| y.rem_euclid(100) == yy)
    }

    /// Returns true if some year in the window ends in `two_digit`.
    #[inline]
    pub fn contains_two_digit(&self, two_digit: u32) -> bool {
        self.resolve(two_digit).is_some()
    }

    /// Returns true if some two-digit year starting with `tens` is in the
    /// window, i.e. the band `tens0..=tens9` overlaps it.
    ///
    /// # Example
    ///
    /// ```
    /// use tfield::expiry::YearWindow;
    ///
    /// // 2012..=2036 covers 12..=36
    /// let window = YearWindow::around(2024);
    /// assert!(window.accepts_tens_digit(1));
    /// assert!(window.accepts_tens_digit(3));
    /// assert!(!window.accepts_tens_digit(0));
    /// assert!(!window.accepts_tens_digit(4));
    /// ```
    pub fn accepts_tens_digit(&self, tens: u32) -> bool {
        tens <= 9 && tens_band(tens).any(|yy| self.contains_two_digit(yy))
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::current()
    }
}

fn tens_band(tens: u32) -> RangeInclusive<u32> {
    tens * 10..=tens * 10 + 9
}

/// A parsed expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    /// Month (1-12)
    month: u8,
    /// Full year, resolved through the window
    year: i32,
}

impl ExpiryDate {
    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the full year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

/// Parses a finished `MM/YY` expiration date against `window`.
///
/// # Errors
///
/// - [`FieldError::IncompleteDate`] unless the text is exactly 5 characters
/// - [`FieldError::InvalidMonth`] for months outside `1..=12`
/// - [`FieldError::YearOutOfRange`] when the year is outside the window
/// - [`FieldError::Logic`] for non-digits, which filtering rules out
pub fn parse_expiry(text: &str, window: &YearWindow) -> Result<ExpiryDate, FieldError> {
    const STAGE: &str = "result expiration date";

    if text.chars().count() != 5 {
        return Err(FieldError::IncompleteDate);
    }

    let (month_str, year_str) = text
        .split_once('/')
        .filter(|(m, y)| m.len() == 2 && y.len() == 2)
        .ok_or(FieldError::Logic { stage: STAGE })?;

    let month = parse_digits(month_str).ok_or(FieldError::Logic { stage: STAGE })?;
    let yy = parse_digits(year_str).ok_or(FieldError::Logic { stage: STAGE })?;

    if !(1..=12).contains(&month) {
        return Err(FieldError::InvalidMonth);
    }

    let year = window.resolve(yy).ok_or(FieldError::YearOutOfRange)?;

    Ok(ExpiryDate {
        month: month as u8,
        year,
    })
}

/// Parses a run of ASCII digits; `None` if empty or anything else appears.
pub(crate) fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
