//! Card network detection from the leading digits of a card number.
//!
//! Only the networks a 16 digit card field accepts are recognised. This is a
//! plausibility check for partial input, not an issuer lookup.

use std::fmt;

/// Card networks recognised by the credit card field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardNetwork {
    /// Visa, leading digit 4.
    Visa,
    /// Mastercard, leading digit 5.
    Mastercard,
    /// American Express, prefix 34 or 37.
    Amex,
    /// Discover, leading digit 6.
    Discover,
}

impl CardNetwork {
    /// Returns the display name of the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `digit` can start a card number.
///
/// A leading 3 is accepted even though only 34 and 37 resolve to a network,
/// since the second digit has not been typed yet.
///
/// # Example
///
/// ```
/// use tfield::network::is_network_leading_digit;
///
/// assert!(is_network_leading_digit('4'));
/// assert!(is_network_leading_digit('3'));
/// assert!(!is_network_leading_digit('7'));
/// ```
#[inline]
pub const fn is_network_leading_digit(digit: char) -> bool {
    matches!(digit, '3' | '4' | '5' | '6')
}

/// Detects the network from the digits entered so far.
///
/// Non-digit characters (e.g. group separators) are skipped. Returns `None`
/// when no network matches yet.
///
/// # Example
///
/// ```
/// use tfield::network::{detect_network, CardNetwork};
///
/// assert_eq!(detect_network("4111 1111"), Some(CardNetwork::Visa));
/// assert_eq!(detect_network("37"), Some(CardNetwork::Amex));
/// assert_eq!(detect_network("3"), None);
/// assert_eq!(detect_network(""), None);
/// ```
pub fn detect_network(input: &str) -> Option<CardNetwork> {
    let mut digits = input.chars().filter(char::is_ascii_digit);

    match (digits.next(), digits.next()) {
        (Some('4'), _) => Some(CardNetwork::Visa),
        (Some('5'), _) => Some(CardNetwork::Mastercard),
        (Some('6'), _) => Some(CardNetwork::Discover),
        (Some('3'), Some('4' | '7')) => Some(CardNetwork::Amex),
        _ => None,
    }
}
