//! Age range checks for partial and finished input.
//!
//! While the user types, an age is still plausible if *some* completion of
//! the digits entered so far lands in `min..=max`. Entering `d` digits into
//! an `n` digit field leaves `n - d + 1` candidate bands: the value itself,
//! the value followed by one more digit, and so on.
//!
//! # Example
//!
//! ```
//! use tfield::age::{check_partial_age, check_final_age};
//!
//! // "1" could become 100..=120
//! assert!(check_partial_age("1", 65, 120, 3).is_ok());
//! // "2" could only become 2, 20..=29, or 200..=299
//! assert!(check_partial_age("2", 65, 120, 3).is_err());
//!
//! assert!(check_final_age("64", 65, 120).is_err());
//! assert!(check_final_age("65", 65, 120).is_ok());
//! ```

use crate::error::FieldError;
use crate::expiry::parse_digits;
use std::ops::RangeInclusive;

/// Widest age field: ages top out at 999.
pub const MAX_AGE_DIGITS: usize = 3;

/// Checks whether partially entered age digits can still complete into a
/// value inside `min..=max`, given a field of `field_digits` digits.
///
/// Empty input is always plausible.
///
/// # Errors
///
/// - [`FieldError::AgeTooHigh`] when every completion is above `max`, or the
///   range sits in the gap between completions
/// - [`FieldError::AgeTooLow`] when every completion is below `min`
/// - [`FieldError::Logic`] for non-digits, more digits than the field holds,
///   or a field wider than [`MAX_AGE_DIGITS`]
pub fn check_partial_age(
    digits: &str,
    min: u32,
    max: u32,
    field_digits: usize,
) -> Result<(), FieldError> {
    const STAGE: &str = "live age";

    if field_digits > MAX_AGE_DIGITS {
        return Err(FieldError::Logic { stage: STAGE });
    }
    if digits.is_empty() {
        return Ok(());
    }

    let entered = digits.len();
    if entered > field_digits {
        return Err(FieldError::Logic { stage: STAGE });
    }
    let value = parse_digits(digits).ok_or(FieldError::Logic { stage: STAGE })?;

    let bands = completion_bands(u64::from(value), field_digits - entered);
    let allowed = u64::from(min)..=u64::from(max);

    if bands.iter().any(|band| overlaps(band, &allowed)) {
        return Ok(());
    }

    // Bands ascend, so the first start and the last end bound every completion
    let lowest = bands.first().map_or(0, |band| *band.start());
    let highest = bands.last().map_or(0, |band| *band.end());

    if highest < *allowed.start() {
        Err(FieldError::AgeTooLow { min })
    } else if lowest > *allowed.end() {
        Err(FieldError::AgeTooHigh { max })
    } else {
        // Some completions fall short of min and the rest overshoot max
        Err(FieldError::AgeTooHigh { max })
    }
}

/// Checks a finished age against `min..=max`.
///
/// # Errors
///
/// - [`FieldError::BelowMinimum`] / [`FieldError::AboveMaximum`] outside the range
/// - [`FieldError::Logic`] for anything but digits
pub fn check_final_age(digits: &str, min: u32, max: u32) -> Result<(), FieldError> {
    let value = parse_digits(digits).ok_or(FieldError::Logic { stage: "result age" })?;

    if value < min {
        Err(FieldError::BelowMinimum { min })
    } else if value > max {
        Err(FieldError::AboveMaximum { max })
    } else {
        Ok(())
    }
}

/// Returns the ranges reachable from `value` by appending up to `remaining`
/// digits, in ascending order.
fn completion_bands(value: u64, remaining: usize) -> Vec<RangeInclusive<u64>> {
    let mut bands = Vec::with_capacity(remaining + 1);
    let mut scale = 1u64;

    for _ in 0..=remaining {
        let start = value * scale;
        bands.push(start..=start + scale - 1);
        scale *= 10;
    }

    bands
}

#[inline]
fn overlaps(a: &RangeInclusive<u64>, b: &RangeInclusive<u64>) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}
