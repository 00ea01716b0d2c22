//! Fuzz target for the field state machine.
//!
//! Replays arbitrary focus and text events and checks the state stays
//! consistent with focus and content.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tfield::{expiry::YearWindow, Field, FieldKind, FieldState};

#[derive(Arbitrary, Debug)]
enum Event {
    Focus(bool),
    Text(String),
    Type(char),
    Backspace,
}

#[derive(Arbitrary, Debug)]
struct Session {
    kind: u8,
    required: bool,
    events: Vec<Event>,
}

const KINDS: [FieldKind; 11] = [
    FieldKind::FreeData,
    FieldKind::FixedLengthData { length: 5 },
    FieldKind::Name,
    FieldKind::Phrase,
    FieldKind::CreditCard,
    FieldKind::ExpirationDate,
    FieldKind::Cvv,
    FieldKind::Age { min: 18, max: 99 },
    FieldKind::Date,
    FieldKind::StreetNumber,
    FieldKind::StreetName,
];

fuzz_target!(|session: Session| {
    let kind = KINDS[usize::from(session.kind) % KINDS.len()];
    let mut field = Field::new(kind)
        .required(session.required)
        .year_window(YearWindow::around(2024));

    for event in session.events {
        match event {
            Event::Focus(focused) => {
                field.set_focus(focused);
            }
            Event::Text(text) => {
                field.set_text(&text);
            }
            Event::Type(c) => {
                let mut next = field.text().to_string();
                next.push(c);
                field.set_text(&next);
            }
            Event::Backspace => {
                let mut next = field.text().to_string();
                next.pop();
                field.set_text(&next);
            }
        }

        match field.state() {
            FieldState::Idle => {
                assert!(!field.is_focused());
                assert!(field.text().is_empty());
            }
            FieldState::Focused(_) => assert!(field.is_focused()),
            FieldState::Inactive(_) => {
                assert!(!field.is_focused());
                if let Some(err) = field.state().error() {
                    assert!(!err.is_logic_error(), "{}: {}", kind, err);
                }
            }
        }
    }
});
