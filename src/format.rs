//! The reconstruct stage.
//!
//! Takes canonical data and pours it back into the kind's display template,
//! producing the text the user sees plus the *partial template*: the template
//! with every position already covered by text blanked out, for the host to
//! draw as ghost text behind the input.
//!
//! # Template Conventions
//!
//! Alphanumeric template characters (`0`, `M`, `D`, `Y`, `X`) are placeholders
//! that consume one data character each. Anything else (`/`, space) is a
//! literal, emitted only once more data follows it:
//!
//! - **Credit card**: `0000 0000 0000 0000`
//! - **Expiration date**: `MM/YY`
//! - **Date**: `MM/DD/YYYY`
//!
//! # Example
//!
//! ```
//! use tfield::{reconstruct, FieldKind};
//!
//! let formatted = reconstruct(FieldKind::ExpirationDate, "132");
//! assert_eq!(formatted.text, "13/2");
//! assert_eq!(formatted.partial_template, "    Y");
//!
//! let formatted = reconstruct(FieldKind::CreditCard, "41111");
//! assert_eq!(formatted.text, "4111 1");
//! assert_eq!(formatted.partial_template, "      000 0000 0000");
//! ```

use crate::filter::capitalize_words;
use crate::kind::FieldKind;

/// Output of the reconstruct stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formatted {
    /// The user-facing text with formatting characters re-inserted.
    pub text: String,
    /// The unfilled remainder of the template, left-padded with one space per
    /// character of `text`. Empty for kinds without a template.
    pub partial_template: String,
}

impl Formatted {
    fn untemplated(text: String) -> Self {
        Self {
            text,
            partial_template: String::new(),
        }
    }

    /// Returns true once no placeholder remains in the partial template.
    ///
    /// Kinds without a template are always complete.
    ///
    /// # Example
    ///
    /// ```
    /// use tfield::{reconstruct, FieldKind};
    ///
    /// assert!(reconstruct(FieldKind::Cvv, "123").is_template_complete());
    /// assert!(!reconstruct(FieldKind::Cvv, "12").is_template_complete());
    /// ```
    pub fn is_template_complete(&self) -> bool {
        self.partial_template.chars().all(|c| !c.is_alphanumeric())
    }
}

/// Reconstructs the display text and partial template for canonical `data`.
///
/// Never fails: data the template cannot hold is passed through unchanged
/// with an empty partial template.
pub fn reconstruct(kind: FieldKind, data: &str) -> Formatted {
    let formatted = match kind {
        FieldKind::FreeData | FieldKind::Phrase | FieldKind::StreetNumber => {
            Formatted::untemplated(data.to_string())
        }
        FieldKind::Name | FieldKind::StreetName => Formatted::untemplated(capitalize_words(data)),
        FieldKind::FixedLengthData { .. }
        | FieldKind::CreditCard
        | FieldKind::ExpirationDate
        | FieldKind::Cvv
        | FieldKind::Age { .. }
        | FieldKind::Date => apply_template(&kind.template(), data),
    };

    tracing::trace!(
        %kind,
        text = %formatted.text,
        partial = %formatted.partial_template,
        "reconstructed"
    );
    formatted
}

/// Pours `data` into `template`.
///
/// Placeholders consume one data character each; literals are copied only
/// while data remains. The partial template always has the template's length,
/// so a full template yields all spaces rather than an empty string. A full
/// `MM/DD/YYYY` date gives ten spaces, not `""`.
///
/// # Example
///
/// ```
/// use tfield::format::apply_template;
///
/// let formatted = apply_template("000-000-0000", "1234");
/// assert_eq!(formatted.text, "123-4");
/// assert_eq!(formatted.partial_template, "     00-0000");
/// ```
pub fn apply_template(template: &str, data: &str) -> Formatted {
    let template: Vec<char> = template.chars().collect();
    let placeholders = template.iter().filter(|c| is_placeholder(**c)).count();

    let data_len = data.chars().count();
    if data_len > placeholders {
        // Nothing upstream should hand us this much data
        return Formatted::untemplated(data.to_string());
    }

    let mut text = String::with_capacity(template.len());
    let mut data_chars = data.chars().peekable();
    let mut consumed = 0;

    for &slot in &template {
        if data_chars.peek().is_none() {
            break;
        }
        if is_placeholder(slot) {
            if let Some(c) = data_chars.next() {
                text.push(c);
            }
        } else {
            text.push(slot);
        }
        consumed += 1;
    }

    let mut partial_template = " ".repeat(consumed);
    partial_template.extend(&template[consumed..]);

    Formatted {
        text,
        partial_template,
    }
}

/// Returns true for template characters that stand for a data character.
#[inline]
pub fn is_placeholder(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(kind: FieldKind, data: &str) -> (String, String) {
        let f = reconstruct(kind, data);
        (f.text, f.partial_template)
    }

    #[test]
    fn test_untemplated_kinds() {
        assert_eq!(pair(FieldKind::FreeData, "abc"), ("abc".into(), "".into()));
        assert_eq!(pair(FieldKind::Phrase, "a b"), ("a b".into(), "".into()));
        assert_eq!(pair(FieldKind::Name, "ann lee"), ("Ann Lee".into(), "".into()));
        assert_eq!(
            pair(FieldKind::StreetNumber, "123456"),
            ("123456".into(), "".into())
        );
    }

    #[test]
    fn test_expiration_date_residuals() {
        let expected = [
            ("", "", "MM/YY"),
            ("1", "1", " M/YY"),
            ("12", "12", "  /YY"),
            ("122", "12/2", "    Y"),
            ("1225", "12/25", "     "),
        ];
        for (data, text, partial) in expected {
            assert_eq!(
                pair(FieldKind::ExpirationDate, data),
                (text.to_string(), partial.to_string()),
                "data {:?}",
                data
            );
        }
    }

    #[test]
    fn test_date_residuals() {
        let expected = [
            ("", "", "MM/DD/YYYY"),
            ("1", "1", " M/DD/YYYY"),
            ("12", "12", "  /DD/YYYY"),
            ("123", "12/3", "    D/YYYY"),
            ("1231", "12/31", "     /YYYY"),
            ("12312", "12/31/2", "       YYY"),
            ("123120", "12/31/20", "        YY"),
            ("1231202", "12/31/202", "         Y"),
            ("12312024", "12/31/2024", "          "),
        ];
        for (data, text, partial) in expected {
            assert_eq!(
                pair(FieldKind::Date, data),
                (text.to_string(), partial.to_string()),
                "data {:?}",
                data
            );
        }
    }

    #[test]
    fn test_cvv_residuals() {
        assert_eq!(pair(FieldKind::Cvv, ""), ("".into(), "000".into()));
        assert_eq!(pair(FieldKind::Cvv, "1"), ("1".into(), " 00".into()));
        assert_eq!(pair(FieldKind::Cvv, "12"), ("12".into(), "  0".into()));
        assert_eq!(pair(FieldKind::Cvv, "123"), ("123".into(), "   ".into()));
    }

    #[test]
    fn test_age_residuals() {
        let two = FieldKind::Age { min: 18, max: 99 };
        assert_eq!(pair(two, ""), ("".into(), "00".into()));
        assert_eq!(pair(two, "4"), ("4".into(), " 0".into()));
        assert_eq!(pair(two, "42"), ("42".into(), "  ".into()));

        let three = FieldKind::Age { min: 65, max: 120 };
        assert_eq!(pair(three, "1"), ("1".into(), " 00".into()));
        assert_eq!(pair(three, "11"), ("11".into(), "  0".into()));
        assert_eq!(pair(three, "110"), ("110".into(), "   ".into()));
    }

    #[test]
    fn test_credit_card_grouping() {
        assert_eq!(
            pair(FieldKind::CreditCard, ""),
            ("".into(), "0000 0000 0000 0000".into())
        );
        assert_eq!(
            pair(FieldKind::CreditCard, "4111"),
            ("4111".into(), "     0000 0000 0000".into())
        );
        let full = reconstruct(FieldKind::CreditCard, "4111111111111111");
        assert_eq!(full.text, "4111 1111 1111 1111");
        assert_eq!(full.partial_template, " ".repeat(19));
        assert!(full.is_template_complete());
    }

    #[test]
    fn test_fixed_length() {
        let kind = FieldKind::FixedLengthData { length: 5 };
        assert_eq!(pair(kind, ""), ("".into(), "XXXXX".into()));
        assert_eq!(pair(kind, "ab"), ("ab".into(), "  XXX".into()));
        assert_eq!(pair(kind, "abcde"), ("abcde".into(), "     ".into()));
    }

    #[test]
    fn test_overlong_data_degrades() {
        assert_eq!(pair(FieldKind::Cvv, "12345"), ("12345".into(), "".into()));
        assert_eq!(
            pair(FieldKind::ExpirationDate, "122530"),
            ("122530".into(), "".into())
        );
    }

    #[test]
    fn test_partial_template_length_invariant() {
        let kinds = [
            FieldKind::FixedLengthData { length: 7 },
            FieldKind::CreditCard,
            FieldKind::ExpirationDate,
            FieldKind::Cvv,
            FieldKind::Age { min: 1, max: 99 },
            FieldKind::Age { min: 1, max: 150 },
            FieldKind::Date,
        ];
        for kind in kinds {
            let template_len = kind.template().chars().count();
            let max = kind.max_data_len().unwrap();
            for len in 0..=max {
                let data = "1".repeat(len);
                let f = reconstruct(kind, &data);
                assert_eq!(f.partial_template.chars().count(), template_len, "{} {}", kind, len);
            }
        }
    }
}
