//! Fuzz target for live and result validation.
//!
//! Tests that the validators never panic on arbitrary text, and never report
//! a logic error for text the pipeline produced itself.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tfield::{
    expiry::YearWindow, filter, reconstruct, validate_live_in, validate_result_in, FieldKind,
};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    selector: u8,
    min: u16,
    max: u16,
    length: u8,
    anchor: i16,
    text: &'a str,
}

fn kind_for(input: &Input<'_>) -> FieldKind {
    let (min, max) = (u32::from(input.min % 1000), u32::from(input.max % 1000));
    match input.selector % 11 {
        0 => FieldKind::FreeData,
        1 => FieldKind::FixedLengthData {
            length: usize::from(input.length),
        },
        2 => FieldKind::Name,
        3 => FieldKind::Phrase,
        4 => FieldKind::CreditCard,
        5 => FieldKind::ExpirationDate,
        6 => FieldKind::Cvv,
        7 => FieldKind::Age {
            min: min.min(max),
            max: min.max(max),
        },
        8 => FieldKind::Date,
        9 => FieldKind::StreetNumber,
        _ => FieldKind::StreetName,
    }
}

fuzz_target!(|input: Input<'_>| {
    let kind = kind_for(&input);
    let window = YearWindow::around(i32::from(input.anchor));

    // Arbitrary text: no panics
    let _ = validate_live_in(kind, input.text, &window);
    let _ = validate_result_in(kind, input.text, &window);

    // Pipeline text: no logic errors
    let text = reconstruct(kind, &filter(kind, input.text)).text;
    if let Err(e) = validate_live_in(kind, &text, &window) {
        assert!(!e.is_logic_error(), "{}: live {:?} -> {}", kind, text, e);
    }
    if !text.is_empty() {
        if let Err(e) = validate_result_in(kind, &text, &window) {
            assert!(!e.is_logic_error(), "{}: result {:?} -> {}", kind, text, e);
        }
    }
});
