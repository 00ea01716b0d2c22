//! Fuzz target for the filter and reconstruct stages.
//!
//! Tests that filtering never panics, is idempotent, and survives a trip
//! through the template.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tfield::{filter, reconstruct, FieldKind};

const KINDS: [FieldKind; 11] = [
    FieldKind::FreeData,
    FieldKind::FixedLengthData { length: 8 },
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

fuzz_target!(|data: &str| {
    for kind in KINDS {
        let filtered = filter(kind, data);
        assert_eq!(filter(kind, &filtered), filtered, "filter must be idempotent");

        let formatted = reconstruct(kind, &filtered);
        assert_eq!(
            filter(kind, &formatted.text),
            filtered,
            "reconstruct must preserve data"
        );

        let template_len = kind.template().chars().count();
        if template_len > 0 {
            assert_eq!(formatted.partial_template.chars().count(), template_len);
        }

        // Raw, unfiltered data must not panic either
        let _ = reconstruct(kind, data);
    }
});
