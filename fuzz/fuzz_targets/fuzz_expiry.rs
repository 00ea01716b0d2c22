//! Fuzz target for expiry, date, and age parsing.
//!
//! Tests that the parsers never panic and agree with the live checks.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tfield::{
    age::{check_final_age, check_partial_age},
    date::parse_date,
    expiry::{parse_expiry, YearWindow},
};

fuzz_target!(|data: (&str, i16, u16, u16)| {
    let (text, anchor, a, b) = data;
    let window = YearWindow::around(i32::from(anchor));

    // These should never panic
    if let Ok(expiry) = parse_expiry(text, &window) {
        assert!((1..=12).contains(&expiry.month()));
        assert!(expiry.year() >= window.start() && expiry.year() <= window.end());
        let _ = expiry.to_string();
    }

    if let Ok(date) = parse_date(text) {
        assert_eq!(date.format("%m/%d/%Y").to_string(), text);
    }

    let (min, max) = (u32::from(a.min(b) % 1000), u32::from(a.max(b) % 1000));
    let (min, max) = (min.min(max), min.max(max));
    let field_digits = if max >= 100 { 3 } else { 2 };
    let _ = check_partial_age(text, min, max, field_digits);

    if check_final_age(text, min, max).is_ok() && text.len() <= field_digits {
        for end in 1..=text.len() {
            assert!(check_partial_age(&text[..end], min, max, field_digits).is_ok());
        }
    }
});
