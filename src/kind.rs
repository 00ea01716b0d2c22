//! The field kind catalog.
//!
//! A [`FieldKind`] is a pure descriptor: it carries no state, only the
//! parameters its constructor was given. Every stage of the engine
//! (filter, reconstruct, live and result validation) dispatches on it.

use crate::error::ParseKindError;
use std::fmt;
use std::str::FromStr;

/// The supported field kinds.
///
/// # Example
///
/// ```
/// use tfield::FieldKind;
///
/// assert_eq!(FieldKind::CreditCard.template(), "0000 0000 0000 0000");
/// assert_eq!(FieldKind::Age { min: 18, max: 99 }.template(), "00");
/// assert_eq!(FieldKind::Age { min: 65, max: 120 }.template(), "000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FieldKind {
    /// A single token with no whitespace.
    #[default]
    FreeData,
    /// A single token of exactly `length` characters.
    FixedLengthData {
        /// Required number of characters.
        length: usize,
    },
    /// A person's name, title-cased.
    Name,
    /// Free text, spaces allowed, no filtering at all.
    Phrase,
    /// A 16 digit card number shown in groups of four.
    CreditCard,
    /// A card expiration date, `MM/YY`.
    ExpirationDate,
    /// A 3 digit card verification value.
    Cvv,
    /// A 2 or 3 digit age within `min..=max`.
    Age {
        /// Smallest accepted age.
        min: u32,
        /// Largest accepted age.
        max: u32,
    },
    /// A calendar date, `MM/DD/YYYY`.
    Date,
    /// Up to 6 digits, never zero.
    StreetNumber,
    /// A street name, title-cased.
    StreetName,
}

/// Keyboard a host should present for a kind, where the platform
/// distinguishes input modalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyboardHint {
    /// The platform's regular text keyboard.
    Default,
    /// A digits-only keypad.
    NumberPad,
}

/// Longest canonical data a credit card field holds.
pub const CARD_DIGITS: usize = 16;

/// Longest canonical data an expiration date field holds (`MMYY`).
pub const EXPIRY_DIGITS: usize = 4;

/// Longest canonical data a CVV field holds.
pub const CVV_DIGITS: usize = 3;

/// Longest canonical data a date field holds (`MMDDYYYY`).
pub const DATE_DIGITS: usize = 8;

/// Longest canonical data a street number field holds.
pub const STREET_NUMBER_DIGITS: usize = 6;

impl FieldKind {
    /// Every kind name accepted by [`FromStr`], in catalog order.
    pub const NAMES: &'static [&'static str] = &[
        "data",
        "fixed:N",
        "name",
        "phrase",
        "credit-card",
        "expiration-date",
        "cvv",
        "age:MIN-MAX",
        "date",
        "street-number",
        "street-name",
    ];

    /// Returns the default display label for this kind.
    ///
    /// Hosts use it when the field was created without a label.
    pub fn label(&self) -> String {
        match self {
            Self::FreeData => "Data".to_string(),
            Self::FixedLengthData { length } => format!("Data({} characters)", length),
            Self::Name => "Name".to_string(),
            Self::Phrase => "Enter Info".to_string(),
            Self::CreditCard => "Credit Card Number".to_string(),
            Self::ExpirationDate => "Expiration Date".to_string(),
            Self::Cvv => "CVV".to_string(),
            Self::Age { min, max } => format!("Age({}-{})", min, max),
            Self::Date => "Date".to_string(),
            Self::StreetNumber => "Street #".to_string(),
            Self::StreetName => "Street Name".to_string(),
        }
    }

    /// Returns the display template. An empty string means no visual mask.
    pub fn template(&self) -> String {
        match self {
            Self::FreeData | Self::Name | Self::Phrase => String::new(),
            Self::FixedLengthData { length } => "X".repeat(*length),
            Self::CreditCard => "0000 0000 0000 0000".to_string(),
            Self::ExpirationDate => "MM/YY".to_string(),
            Self::Cvv => "000".to_string(),
            Self::Age { .. } => "0".repeat(self.age_digits()),
            Self::Date => "MM/DD/YYYY".to_string(),
            Self::StreetNumber | Self::StreetName => String::new(),
        }
    }

    /// Returns true if the kind has a visual mask.
    #[inline]
    pub fn uses_template(&self) -> bool {
        match self {
            Self::FixedLengthData { length } => *length > 0,
            Self::CreditCard | Self::ExpirationDate | Self::Cvv | Self::Age { .. } | Self::Date => {
                true
            }
            Self::FreeData | Self::Name | Self::Phrase | Self::StreetNumber | Self::StreetName => {
                false
            }
        }
    }

    /// Relative priority when the host has to shrink fields to fit a row.
    ///
    /// `1.0` is standard, lower values shrink first.
    pub const fn layout_priority(&self) -> f64 {
        match self {
            Self::FreeData => 1.0,
            Self::FixedLengthData { .. } => 1.1,
            Self::Name => 1.5,
            Self::Phrase => 1.7,
            Self::CreditCard => 1.5,
            Self::ExpirationDate => 0.5,
            Self::Cvv => 0.5,
            Self::Age { .. } => 0.5,
            Self::Date => 1.0,
            Self::StreetNumber => 0.6,
            Self::StreetName => 1.5,
        }
    }

    /// Returns the keyboard hint for this kind.
    pub const fn keyboard(&self) -> KeyboardHint {
        match self {
            Self::FreeData
            | Self::FixedLengthData { .. }
            | Self::Name
            | Self::Phrase
            | Self::StreetName => KeyboardHint::Default,
            Self::CreditCard
            | Self::ExpirationDate
            | Self::Cvv
            | Self::Age { .. }
            | Self::Date
            | Self::StreetNumber => KeyboardHint::NumberPad,
        }
    }

    /// Longest canonical data the filter stage lets through, in characters.
    ///
    /// `None` for kinds with no cap.
    pub const fn max_data_len(&self) -> Option<usize> {
        match self {
            Self::FreeData | Self::Name | Self::Phrase | Self::StreetName => None,
            Self::FixedLengthData { length } => Some(*length),
            Self::CreditCard => Some(CARD_DIGITS),
            Self::ExpirationDate => Some(EXPIRY_DIGITS),
            Self::Cvv => Some(CVV_DIGITS),
            Self::Age { .. } => Some(self.age_digits()),
            Self::Date => Some(DATE_DIGITS),
            Self::StreetNumber => Some(STREET_NUMBER_DIGITS),
        }
    }

    /// Returns true if canonical data for this kind is digits only.
    pub const fn is_numeric(&self) -> bool {
        matches!(self.keyboard(), KeyboardHint::NumberPad)
    }

    /// Digits an age field accepts: 3 when the maximum needs them, else 2.
    #[inline]
    pub(crate) const fn age_digits(&self) -> usize {
        match self {
            Self::Age { max, .. } if *max >= 100 => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FreeData => write!(f, "data"),
            Self::FixedLengthData { length } => write!(f, "fixed:{}", length),
            Self::Name => write!(f, "name"),
            Self::Phrase => write!(f, "phrase"),
            Self::CreditCard => write!(f, "credit-card"),
            Self::ExpirationDate => write!(f, "expiration-date"),
            Self::Cvv => write!(f, "cvv"),
            Self::Age { min, max } => write!(f, "age:{}-{}", min, max),
            Self::Date => write!(f, "date"),
            Self::StreetNumber => write!(f, "street-number"),
            Self::StreetName => write!(f, "street-name"),
        }
    }
}

impl FromStr for FieldKind {
    type Err = ParseKindError;

    /// Parses the syntax produced by `Display`, e.g. `credit-card`,
    /// `fixed:10`, `age:65-120`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, params) = match s.split_once(':') {
            Some((name, params)) => (name, Some(params.trim())),
            None => (s, None),
        };

        let kind = match (name.to_ascii_lowercase().as_str(), params) {
            ("data", None) => Self::FreeData,
            ("name", None) => Self::Name,
            ("phrase", None) => Self::Phrase,
            ("credit-card" | "credit", None) => Self::CreditCard,
            ("expiration-date" | "exp-date", None) => Self::ExpirationDate,
            ("cvv", None) => Self::Cvv,
            ("date", None) => Self::Date,
            ("street-number", None) => Self::StreetNumber,
            ("street-name" | "street", None) => Self::StreetName,
            ("fixed", Some(params)) => {
                let length = params.parse().map_err(|_| ParseKindError::InvalidParameters {
                    kind: "fixed",
                    params: params.to_string(),
                })?;
                Self::FixedLengthData { length }
            }
            ("age", Some(params)) => parse_age(params)?,
            ("fixed" | "age", None) => {
                return Err(ParseKindError::InvalidParameters {
                    kind: if name.eq_ignore_ascii_case("age") { "age" } else { "fixed" },
                    params: String::new(),
                })
            }
            _ => return Err(ParseKindError::UnknownKind(s.to_string())),
        };

        Ok(kind)
    }
}

/// Parses `MIN-MAX` for an age kind.
fn parse_age(params: &str) -> Result<FieldKind, ParseKindError> {
    let invalid = || ParseKindError::InvalidParameters {
        kind: "age",
        params: params.to_string(),
    };

    let (min, max) = params.split_once('-').ok_or_else(invalid)?;
    let min: u32 = min.trim().parse().map_err(|_| invalid())?;
    let max: u32 = max.trim().parse().map_err(|_| invalid())?;

    if min > max || max > 999 {
        return Err(invalid());
    }

    Ok(FieldKind::Age { min, max })
}
