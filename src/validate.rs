//! Live and result validation.
//!
//! Both validators take the *formatted* text, i.e. the output of
//! [`reconstruct`](crate::reconstruct), and dispatch on the field kind in a
//! single `match`. Kinds without a constraint say so in their arm.
//!
//! - **Live validation** runs on every edit while the field has focus and
//!   must tolerate incomplete input. Empty text always passes.
//! - **Result validation** runs once when a non-empty field loses focus and
//!   rejects incomplete input. Required-but-empty is handled by
//!   [`Field`](crate::Field), not here.
//!
//! # Example
//!
//! ```
//! use tfield::{validate_live, validate_result, FieldKind};
//!
//! assert!(validate_live(FieldKind::ExpirationDate, "1").is_ok());
//! assert!(validate_live(FieldKind::ExpirationDate, "13/25").is_err());
//!
//! assert!(validate_result(FieldKind::Date, "02/29/2024").is_ok());
//! assert!(validate_result(FieldKind::Date, "02/30/2024").is_err());
//! ```

use crate::age::{check_final_age, check_partial_age};
use crate::date::{max_days_in_month, parse_date};
use crate::error::FieldError;
use crate::expiry::{parse_digits, parse_expiry, YearWindow};
use crate::filter::digits_only;
use crate::kind::{FieldKind, DATE_DIGITS, EXPIRY_DIGITS};
use crate::network::is_network_leading_digit;

/// Validates partial input against the current year's expiry window.
///
/// See [`validate_live_in`].
#[inline]
pub fn validate_live(kind: FieldKind, text: &str) -> Result<(), FieldError> {
    validate_live_in(kind, text, &YearWindow::current())
}

/// Validates partial input while the field has focus.
///
/// `window` bounds expiration-date years; other kinds ignore it.
pub fn validate_live_in(
    kind: FieldKind,
    text: &str,
    window: &YearWindow,
) -> Result<(), FieldError> {
    let result = match kind {
        FieldKind::FreeData | FieldKind::FixedLengthData { .. } => reject_whitespace(text),
        FieldKind::Name => check_name(text),
        FieldKind::CreditCard => check_partial_card(text),
        FieldKind::ExpirationDate => check_partial_expiry(text, window),
        FieldKind::Age { min, max } => check_partial_age(text, min, max, kind.age_digits()),
        FieldKind::Date => check_partial_date(text),
        // Filtering is the only live constraint
        FieldKind::Phrase | FieldKind::Cvv | FieldKind::StreetNumber | FieldKind::StreetName => {
            Ok(())
        }
    };

    if let Err(ref err) = result {
        tracing::trace!(%kind, %err, "live validation failed");
    }
    result
}

/// Validates a finished value against the current year's expiry window.
///
/// See [`validate_result_in`].
#[inline]
pub fn validate_result(kind: FieldKind, text: &str) -> Result<(), FieldError> {
    validate_result_in(kind, text, &YearWindow::current())
}

/// Validates a finished, non-empty value after the field loses focus.
///
/// `window` bounds expiration-date years; other kinds ignore it.
pub fn validate_result_in(
    kind: FieldKind,
    text: &str,
    window: &YearWindow,
) -> Result<(), FieldError> {
    let result = match kind {
        FieldKind::FixedLengthData { length } => check_exact_length(text, length),
        FieldKind::CreditCard => {
            if char_len(text) == char_len(&kind.template()) {
                Ok(())
            } else {
                Err(FieldError::CardIncomplete)
            }
        }
        FieldKind::Cvv => {
            if char_len(text) == char_len(&kind.template()) {
                Ok(())
            } else {
                Err(FieldError::CvvIncomplete)
            }
        }
        FieldKind::ExpirationDate => parse_expiry(text, window).map(|_| ()),
        FieldKind::Age { min, max } => check_final_age(text, min, max),
        FieldKind::Date => parse_date(text).map(|_| ()),
        FieldKind::StreetNumber => check_street_number(text),
        // No stronger constraint once typing ends
        FieldKind::FreeData | FieldKind::Name | FieldKind::Phrase | FieldKind::StreetName => {
            Ok(())
        }
    };

    if let Err(ref err) = result {
        tracing::trace!(%kind, %err, "result validation failed");
    }
    result
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn reject_whitespace(text: &str) -> Result<(), FieldError> {
    if text.chars().any(char::is_whitespace) {
        return Err(FieldError::SpacesNotAllowed);
    }
    Ok(())
}

/// Letters plus the punctuation names actually use.
fn check_name(text: &str) -> Result<(), FieldError> {
    let allowed = |c: char| c.is_alphabetic() || matches!(c, ' ' | '.' | '\'' | '-');

    if text.chars().all(allowed) {
        Ok(())
    } else {
        Err(FieldError::InvalidNameCharacter)
    }
}

/// The first digit must start a known network; later digits are free.
fn check_partial_card(text: &str) -> Result<(), FieldError> {
    let mut digits = text.chars().filter(char::is_ascii_digit);

    match (digits.next(), digits.next()) {
        (Some(first), None) if !is_network_leading_digit(first) => {
            Err(FieldError::InvalidCardNetwork)
        }
        _ => Ok(()),
    }
}

/// Strips the slashes the reconstruct stage inserted, rejecting anything
/// else that isn't a digit.
fn slash_separated_digits(
    text: &str,
    max: usize,
    stage: &'static str,
) -> Result<String, FieldError> {
    if !text.chars().all(|c| c.is_ascii_digit() || c == '/') {
        return Err(FieldError::Logic { stage });
    }

    let digits = digits_only(text, usize::MAX);
    if digits.len() > max {
        return Err(FieldError::Logic { stage });
    }
    Ok(digits)
}

/// Month digit checks shared by expiration dates and dates.
///
/// `digits` holds at least one ASCII digit.
fn check_month_prefix(digits: &str) -> Result<(), FieldError> {
    match digits.len() {
        0 => Ok(()),
        1 => match digits.as_bytes()[0] {
            b'0' | b'1' => Ok(()),
            _ => Err(FieldError::InvalidMonth),
        },
        _ => match parse_digits(&digits[..2]) {
            Some(1..=12) => Ok(()),
            _ => Err(FieldError::InvalidMonth),
        },
    }
}

fn check_partial_expiry(text: &str, window: &YearWindow) -> Result<(), FieldError> {
    let digits = slash_separated_digits(text, EXPIRY_DIGITS, "live expiration date")?;

    check_month_prefix(&digits)?;

    match digits.len() {
        3 => {
            let tens = u32::from(digits.as_bytes()[2] - b'0');
            if window.accepts_tens_digit(tens) {
                Ok(())
            } else {
                Err(FieldError::YearOutOfRange)
            }
        }
        4 => match parse_digits(&digits[2..4]) {
            Some(yy) if window.contains_two_digit(yy) => Ok(()),
            _ => Err(FieldError::YearOutOfRange),
        },
        _ => Ok(()),
    }
}

fn check_partial_date(text: &str) -> Result<(), FieldError> {
    let digits = slash_separated_digits(text, DATE_DIGITS, "live date")?;

    check_month_prefix(&digits)?;

    // Years are unconstrained until the result check
    if digits.len() < 3 {
        return Ok(());
    }

    let month = parse_digits(&digits[..2]).unwrap_or(0);
    let max_day = max_days_in_month(month);
    let day_tens = u32::from(digits.as_bytes()[2] - b'0');

    if day_tens * 10 > max_day {
        return Err(FieldError::InvalidDay);
    }

    if digits.len() >= 4 {
        match parse_digits(&digits[2..4]) {
            Some(day) if (1..=max_day).contains(&day) => {}
            _ => return Err(FieldError::InvalidDay),
        }
    }

    Ok(())
}

fn check_exact_length(text: &str, length: usize) -> Result<(), FieldError> {
    let actual = char_len(text);

    if actual < length {
        Err(FieldError::NotLongEnough { expected: length })
    } else if actual > length {
        Err(FieldError::Logic { stage: "result fixed length" })
    } else {
        Ok(())
    }
}

fn check_street_number(text: &str) -> Result<(), FieldError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::Logic { stage: "result street number" });
    }
    if text.bytes().all(|b| b == b'0') {
        return Err(FieldError::StreetNumberZero);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_2024: YearWindow = YearWindow::around(2024);

    fn live(kind: FieldKind, text: &str) -> Result<(), FieldError> {
        validate_live_in(kind, text, &WINDOW_2024)
    }

    fn result(kind: FieldKind, text: &str) -> Result<(), FieldError> {
        validate_result_in(kind, text, &WINDOW_2024)
    }

    #[test]
    fn test_empty_is_live_valid_for_every_kind() {
        let kinds = [
            FieldKind::FreeData,
            FieldKind::FixedLengthData { length: 3 },
            FieldKind::Name,
            FieldKind::Phrase,
            FieldKind::CreditCard,
            FieldKind::ExpirationDate,
            FieldKind::Cvv,
            FieldKind::Age { min: 65, max: 120 },
            FieldKind::Date,
            FieldKind::StreetNumber,
            FieldKind::StreetName,
        ];
        for kind in kinds {
            assert!(live(kind, "").is_ok(), "{}", kind);
        }
    }

    #[test]
    fn test_live_data_rejects_spaces() {
        assert_eq!(live(FieldKind::FreeData, "a b"), Err(FieldError::SpacesNotAllowed));
        assert!(live(FieldKind::FreeData, "ab").is_ok());
        assert_eq!(
            live(FieldKind::FixedLengthData { length: 4 }, "a\tb"),
            Err(FieldError::SpacesNotAllowed)
        );
    }

    #[test]
    fn test_live_name() {
        assert!(live(FieldKind::Name, "Mary-Kate O'neil Jr.").is_ok());
        assert!(live(FieldKind::Name, "Zoë").is_ok());
        assert_eq!(live(FieldKind::Name, "R2d2"), Err(FieldError::InvalidNameCharacter));
        assert_eq!(live(FieldKind::Name, "Ann!"), Err(FieldError::InvalidNameCharacter));
    }

    #[test]
    fn test_live_credit_card_first_digit() {
        for d in ["3", "4", "5", "6"] {
            assert!(live(FieldKind::CreditCard, d).is_ok());
        }
        for d in ["0", "1", "2", "7", "8", "9"] {
            assert_eq!(live(FieldKind::CreditCard, d), Err(FieldError::InvalidCardNetwork));
        }
        // Only the first keystroke is checked
        assert!(live(FieldKind::CreditCard, "12").is_ok());
        assert!(live(FieldKind::CreditCard, "4111 1").is_ok());
    }

    #[test]
    fn test_live_expiration_month() {
        assert!(live(FieldKind::ExpirationDate, "0").is_ok());
        assert!(live(FieldKind::ExpirationDate, "1").is_ok());
        assert_eq!(live(FieldKind::ExpirationDate, "2"), Err(FieldError::InvalidMonth));
        assert_eq!(live(FieldKind::ExpirationDate, "00"), Err(FieldError::InvalidMonth));
        assert!(live(FieldKind::ExpirationDate, "12").is_ok());
        assert_eq!(live(FieldKind::ExpirationDate, "13"), Err(FieldError::InvalidMonth));
        assert_eq!(live(FieldKind::ExpirationDate, "13/25"), Err(FieldError::InvalidMonth));
    }

    #[test]
    fn test_live_expiration_year() {
        // window 2012..=2036
        assert!(live(FieldKind::ExpirationDate, "01/1").is_ok());
        assert!(live(FieldKind::ExpirationDate, "01/3").is_ok());
        assert_eq!(live(FieldKind::ExpirationDate, "01/0"), Err(FieldError::YearOutOfRange));
        assert_eq!(live(FieldKind::ExpirationDate, "01/4"), Err(FieldError::YearOutOfRange));
        assert!(live(FieldKind::ExpirationDate, "01/36").is_ok());
        assert_eq!(live(FieldKind::ExpirationDate, "01/37"), Err(FieldError::YearOutOfRange));
        assert_eq!(live(FieldKind::ExpirationDate, "01/11"), Err(FieldError::YearOutOfRange));
    }

    #[test]
    fn test_live_expiration_logic_errors() {
        assert!(live(FieldKind::ExpirationDate, "1a").unwrap_err().is_logic_error());
        assert!(live(FieldKind::ExpirationDate, "12/345").unwrap_err().is_logic_error());
    }

    #[test]
    fn test_live_date() {
        assert!(live(FieldKind::Date, "1").is_ok());
        assert_eq!(live(FieldKind::Date, "2"), Err(FieldError::InvalidMonth));
        assert!(live(FieldKind::Date, "12/3").is_ok());
        assert_eq!(live(FieldKind::Date, "12/4"), Err(FieldError::InvalidDay));
        assert!(live(FieldKind::Date, "12/31").is_ok());
        assert!(live(FieldKind::Date, "12/30").is_ok());
        assert_eq!(live(FieldKind::Date, "12/32"), Err(FieldError::InvalidDay));
        assert_eq!(live(FieldKind::Date, "12/00"), Err(FieldError::InvalidDay));
        assert_eq!(live(FieldKind::Date, "04/31"), Err(FieldError::InvalidDay));
        assert_eq!(live(FieldKind::Date, "02/3"), Err(FieldError::InvalidDay));
        assert!(live(FieldKind::Date, "02/29").is_ok());
        assert!(live(FieldKind::Date, "02/29/2").is_ok());
        assert!(live(FieldKind::Date, "02/29/2023").is_ok());
    }

    #[test]
    fn test_live_age() {
        let kind = FieldKind::Age { min: 65, max: 120 };
        assert!(live(kind, "1").is_ok());
        assert!(live(kind, "9").is_ok());
        assert_eq!(live(kind, "2"), Err(FieldError::AgeTooHigh { max: 120 }));
        assert!(live(kind, "110").is_ok());
    }

    #[test]
    fn test_live_unconstrained_kinds() {
        assert!(live(FieldKind::Phrase, "anything at all!").is_ok());
        assert!(live(FieldKind::Cvv, "12").is_ok());
        assert!(live(FieldKind::StreetNumber, "0").is_ok());
        assert!(live(FieldKind::StreetName, "Main St.").is_ok());
    }

    #[test]
    fn test_result_fixed_length() {
        let kind = FieldKind::FixedLengthData { length: 4 };
        assert!(result(kind, "abcd").is_ok());
        assert_eq!(result(kind, "abc"), Err(FieldError::NotLongEnough { expected: 4 }));
        assert!(result(kind, "abcde").unwrap_err().is_logic_error());
    }

    #[test]
    fn test_result_credit_card() {
        assert!(result(FieldKind::CreditCard, "4111 1111 1111 1111").is_ok());
        assert_eq!(
            result(FieldKind::CreditCard, "4111 1111 1111 111"),
            Err(FieldError::CardIncomplete)
        );
    }

    #[test]
    fn test_result_cvv() {
        assert!(result(FieldKind::Cvv, "123").is_ok());
        assert_eq!(result(FieldKind::Cvv, "12"), Err(FieldError::CvvIncomplete));
    }

    #[test]
    fn test_result_expiration_date() {
        assert!(result(FieldKind::ExpirationDate, "01/26").is_ok());
        assert_eq!(result(FieldKind::ExpirationDate, "01/2"), Err(FieldError::IncompleteDate));
        assert_eq!(result(FieldKind::ExpirationDate, "13/26"), Err(FieldError::InvalidMonth));
        assert_eq!(result(FieldKind::ExpirationDate, "01/40"), Err(FieldError::YearOutOfRange));
    }

    #[test]
    fn test_result_age() {
        let kind = FieldKind::Age { min: 65, max: 120 };
        assert_eq!(result(kind, "64"), Err(FieldError::BelowMinimum { min: 65 }));
        assert_eq!(
            result(kind, "64").unwrap_err().to_string(),
            "Value is smaller than 65"
        );
        assert!(result(kind, "65").is_ok());
        assert_eq!(result(kind, "121"), Err(FieldError::AboveMaximum { max: 120 }));
    }

    #[test]
    fn test_result_date() {
        assert_eq!(result(FieldKind::Date, "02/30/2024"), Err(FieldError::InvalidDate));
        assert!(result(FieldKind::Date, "02/29/2024").is_ok());
        assert_eq!(result(FieldKind::Date, "02/29/2023"), Err(FieldError::InvalidDate));
        assert_eq!(result(FieldKind::Date, "12/31/202"), Err(FieldError::InvalidDate));
    }

    #[test]
    fn test_result_street_number() {
        assert_eq!(result(FieldKind::StreetNumber, "0"), Err(FieldError::StreetNumberZero));
        assert_eq!(result(FieldKind::StreetNumber, "000"), Err(FieldError::StreetNumberZero));
        assert!(result(FieldKind::StreetNumber, "12").is_ok());
        assert!(result(FieldKind::StreetNumber, "1a").unwrap_err().is_logic_error());
    }

    #[test]
    fn test_result_unconstrained_kinds() {
        assert!(result(FieldKind::FreeData, "x").is_ok());
        assert!(result(FieldKind::Name, "Al").is_ok());
        assert!(result(FieldKind::Phrase, "a b c").is_ok());
        assert!(result(FieldKind::StreetName, "Elm").is_ok());
    }
}
