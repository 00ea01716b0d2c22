//! The filter stage.
//!
//! Reduces raw field text to canonical data: the unformatted value with
//! formatting characters and disallowed characters removed, truncated to the
//! kind's maximum length. Filtering is total and idempotent.
//!
//! # Example
//!
//! ```
//! use tfield::{filter, FieldKind};
//!
//! assert_eq!(filter(FieldKind::ExpirationDate, "13/25abc"), "1325");
//! assert_eq!(filter(FieldKind::CreditCard, "4111 1111 1111 1111"), "4111111111111111");
//! assert_eq!(filter(FieldKind::Name, "mary o'neil-SMITH"), "Mary O'neil-Smith");
//! ```

use crate::kind::FieldKind;

/// Filters raw text into canonical data for `kind`.
pub fn filter(kind: FieldKind, raw: &str) -> String {
    let data = match kind {
        FieldKind::FreeData => strip_whitespace(raw),
        FieldKind::FixedLengthData { length } => {
            strip_whitespace(raw).chars().take(length).collect()
        }
        FieldKind::Name | FieldKind::StreetName => capitalize_words(raw),
        FieldKind::Phrase => raw.to_string(),
        FieldKind::CreditCard
        | FieldKind::ExpirationDate
        | FieldKind::Cvv
        | FieldKind::Age { .. }
        | FieldKind::Date
        | FieldKind::StreetNumber => {
            // Numeric kinds always carry a cap
            let cap = kind.max_data_len().unwrap_or(usize::MAX);
            digits_only(raw, cap)
        }
    };

    tracing::trace!(%kind, len = data.chars().count(), "filtered");
    data
}

/// Removes every whitespace character.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Keeps the first `max` ASCII digits, dropping everything else.
///
/// # Example
///
/// ```
/// use tfield::filter::digits_only;
///
/// assert_eq!(digits_only("12/31/2024", 8), "12312024");
/// assert_eq!(digits_only("4111-1111", 5), "41111");
/// ```
pub fn digits_only(input: &str, max: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Title-cases every word: the first letter after a word boundary is
/// uppercased, the rest lowercased. Whitespace, hyphens, and periods are
/// boundaries; apostrophes are not.
///
/// Characters whose case mapping is not a single character are left as they
/// are, so the result is stable under repeated application.
///
/// # Example
///
/// ```
/// use tfield::filter::capitalize_words;
///
/// assert_eq!(capitalize_words("jean-luc picard"), "Jean-Luc Picard");
/// assert_eq!(capitalize_words("MAIN st."), "Main St.");
/// ```
pub fn capitalize_words(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if is_word_boundary(c) {
            result.push(c);
            at_word_start = true;
            continue;
        }

        let mapped = if at_word_start {
            single_char(c.to_uppercase())
        } else {
            single_char(c.to_lowercase())
        };
        result.push(mapped.unwrap_or(c));
        at_word_start = false;
    }

    result
}

#[inline]
fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '.'
}

/// Returns the mapped character only when the case mapping is one-to-one.
fn single_char(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    match mapping.next() {
        None => Some(first),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_data_strips_whitespace() {
        assert_eq!(filter(FieldKind::FreeData, " ab  c\td\n"), "abcd");
    }

    #[test]
    fn test_fixed_length_truncates() {
        let kind = FieldKind::FixedLengthData { length: 4 };
        assert_eq!(filter(kind, "ab cd ef"), "abcd");
        assert_eq!(filter(kind, "ab"), "ab");
    }

    #[test]
    fn test_phrase_is_identity() {
        assert_eq!(filter(FieldKind::Phrase, "  Hello, World!  "), "  Hello, World!  ");
    }

    #[test]
    fn test_credit_card() {
        assert_eq!(
            filter(FieldKind::CreditCard, "4111 1111 1111 1111"),
            "4111111111111111"
        );
        assert_eq!(
            filter(FieldKind::CreditCard, "4111-1111-1111-1111-999"),
            "4111111111111111"
        );
    }

    #[test]
    fn test_expiration_date() {
        assert_eq!(filter(FieldKind::ExpirationDate, "13/25abc"), "1325");
        assert_eq!(filter(FieldKind::ExpirationDate, "12/2030"), "1220");
    }

    #[test]
    fn test_cvv_and_age() {
        assert_eq!(filter(FieldKind::Cvv, "12a34"), "123");
        assert_eq!(filter(FieldKind::Age { min: 18, max: 99 }, "123"), "12");
        assert_eq!(filter(FieldKind::Age { min: 65, max: 120 }, "1234"), "123");
    }

    #[test]
    fn test_date_and_street_number() {
        assert_eq!(filter(FieldKind::Date, "02/29/2024 extra 99"), "02292024");
        assert_eq!(filter(FieldKind::StreetNumber, "1234567"), "123456");
        assert_eq!(filter(FieldKind::StreetNumber, "0"), "0");
    }

    #[test]
    fn test_names_are_title_cased() {
        assert_eq!(filter(FieldKind::Name, "john SMITH"), "John Smith");
        assert_eq!(filter(FieldKind::Name, "d'artagnan"), "D'artagnan");
        assert_eq!(filter(FieldKind::StreetName, "elm  street"), "Elm  Street");
        assert_eq!(filter(FieldKind::Name, "émile zola"), "Émile Zola");
    }

    #[test]
    fn test_name_keeps_digits_for_live_validation() {
        assert_eq!(filter(FieldKind::Name, "r2d2"), "R2d2");
    }

    #[test]
    fn test_multi_char_case_mapping_left_alone() {
        // 'ß' uppercases to "SS"
        assert_eq!(capitalize_words("ßa"), "ßa");
        assert_eq!(capitalize_words(&capitalize_words("ßa")), "ßa");
    }

    #[test]
    fn test_idempotent_on_samples() {
        let kinds = [
            FieldKind::FreeData,
            FieldKind::FixedLengthData { length: 3 },
            FieldKind::Name,
            FieldKind::CreditCard,
            FieldKind::Date,
        ];
        for kind in kinds {
            for s in ["", "  4111 1111 abc ", "o'BRIEN-smith jr.", "12/31/1999"] {
                let once = filter(kind, s);
                assert_eq!(filter(kind, &once), once, "{} {:?}", kind, s);
            }
        }
    }
}
