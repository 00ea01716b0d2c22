//! Field validation errors.
//!
//! Every validator failure carries a short, human-readable message through
//! `Display`. The host shows that message verbatim next to the field.

use std::fmt;

/// Errors produced by the live and result validators and by the field state
/// machine.
///
/// Messages are meant for end users, so `Display` output is short and
/// capitalised the way a form would show it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "error", rename_all = "snake_case"))]
pub enum FieldError {
    /// A required field lost focus while empty.
    Required,

    /// Whitespace reached a kind that forbids it.
    SpacesNotAllowed,

    /// A name contained something other than letters, spaces, periods,
    /// hyphens, or apostrophes.
    InvalidNameCharacter,

    /// The first card digit does not start any supported network.
    InvalidCardNetwork,

    /// Fewer card digits than the full template.
    CardIncomplete,

    /// Fewer CVV digits than the full template.
    CvvIncomplete,

    /// Fixed-length data is shorter than required.
    NotLongEnough {
        /// Required number of characters.
        expected: usize,
    },

    /// Month digits cannot form a month in `1..=12`.
    InvalidMonth,

    /// Day digits cannot form a day of the entered month.
    InvalidDay,

    /// The expiration year falls outside the accepted window.
    YearOutOfRange,

    /// An expiration date without all of its `MM/YY` characters.
    IncompleteDate,

    /// A complete date that does not exist on the Gregorian calendar.
    InvalidDate,

    /// Every completion of a partial age is above the maximum.
    AgeTooHigh {
        /// Largest accepted age.
        max: u32,
    },

    /// Every completion of a partial age is below the minimum.
    AgeTooLow {
        /// Smallest accepted age.
        min: u32,
    },

    /// A finished value is below the minimum.
    BelowMinimum {
        /// Smallest accepted value.
        min: u32,
    },

    /// A finished value is above the maximum.
    AboveMaximum {
        /// Largest accepted value.
        max: u32,
    },

    /// A street number made only of zeros.
    StreetNumberZero,

    /// Input the filter stage should have made impossible reached a
    /// validator.
    ///
    /// Seeing this outside of a test means filtering and validation disagree.
    Logic {
        /// The validator that caught the violation.
        stage: &'static str,
    },
}

impl FieldError {
    /// Returns true for contract violations between filter and validator.
    #[inline]
    pub const fn is_logic_error(&self) -> bool {
        matches!(self, Self::Logic { .. })
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required Entry"),
            Self::SpacesNotAllowed => write!(f, "Spaces not allowed"),
            Self::InvalidNameCharacter => {
                write!(f, "Only letters, spaces, hyphens, and apostrophes")
            }
            Self::InvalidCardNetwork => write!(f, "Invalid credit type"),
            Self::CardIncomplete => write!(f, "Card Number Incomplete"),
            Self::CvvIncomplete => write!(f, "CVV Incomplete"),
            Self::NotLongEnough { .. } => write!(f, "Not Long Enough"),
            Self::InvalidMonth => write!(f, "Invalid Month"),
            Self::InvalidDay => write!(f, "Invalid Day"),
            Self::YearOutOfRange => write!(f, "Year out of range"),
            Self::IncompleteDate => write!(f, "Incomplete Date"),
            Self::InvalidDate => write!(f, "Invalid Date"),
            Self::AgeTooHigh { max } => write!(f, "Age cannot exceed {}", max),
            Self::AgeTooLow { min } => write!(f, "Age must be at least {}", min),
            Self::BelowMinimum { min } => write!(f, "Value is smaller than {}", min),
            Self::AboveMaximum { max } => write!(f, "Value is larger than {}", max),
            Self::StreetNumberZero => write!(f, "Street Number cannot be zero"),
            Self::Logic { stage } => write!(f, "LOGIC ERROR ({})", stage),
        }
    }
}

impl std::error::Error for FieldError {}

/// Error returned when a field kind string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKindError {
    /// The kind name is not in the catalog.
    UnknownKind(String),

    /// The kind needs parameters (e.g. `age:18-99`) that are missing or
    /// malformed.
    InvalidParameters {
        /// The kind whose parameters failed to parse.
        kind: &'static str,
        /// The raw parameter text.
        params: String,
    },
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(name) => write!(f, "unknown field kind '{}'", name),
            Self::InvalidParameters { kind, params } => {
                write!(f, "invalid parameters '{}' for field kind '{}'", params, kind)
            }
        }
    }
}

impl std::error::Error for ParseKindError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(FieldError::Required.to_string(), "Required Entry");
        assert_eq!(FieldError::CardIncomplete.to_string(), "Card Number Incomplete");
        assert_eq!(
            FieldError::BelowMinimum { min: 65 }.to_string(),
            "Value is smaller than 65"
        );
        assert_eq!(
            FieldError::AboveMaximum { max: 120 }.to_string(),
            "Value is larger than 120"
        );
        assert_eq!(
            FieldError::AgeTooHigh { max: 120 }.to_string(),
            "Age cannot exceed 120"
        );
        assert_eq!(
            FieldError::StreetNumberZero.to_string(),
            "Street Number cannot be zero"
        );
    }

    #[test]
    fn test_logic_error_is_flagged() {
        let err = FieldError::Logic { stage: "live age" };
        assert!(err.is_logic_error());
        assert!(err.to_string().starts_with("LOGIC ERROR"));
        assert!(!FieldError::InvalidMonth.is_logic_error());
    }

    #[test]
    fn test_parse_kind_error_display() {
        assert_eq!(
            ParseKindError::UnknownKind("zip".into()).to_string(),
            "unknown field kind 'zip'"
        );
        assert_eq!(
            ParseKindError::InvalidParameters {
                kind: "age",
                params: "x".into()
            }
            .to_string(),
            "invalid parameters 'x' for field kind 'age'"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldError>();
        assert_send_sync::<ParseKindError>();
    }
}
