//! # tfield
//!
//! Input masking and validation engine for structured text fields. Work in
//! progress.
//!
//! ## Features
//!
//! - Per-kind input filtering (digits only, length caps, title case)
//! - Template reconstruction with a ghost-text partial template
//! - Live validation that tolerates incomplete input
//! - Result validation once the user leaves the field
//! - A focus/validity state machine per field
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use tfield::{filter, reconstruct, validate_result, FieldKind};
//!
//! let data = filter(FieldKind::CreditCard, "4111-1111-1111-1111");
//! assert_eq!(data, "4111111111111111");
//!
//! let formatted = reconstruct(FieldKind::CreditCard, &data);
//! assert_eq!(formatted.text, "4111 1111 1111 1111");
//!
//! assert!(validate_result(FieldKind::CreditCard, &formatted.text).is_ok());
//! ```
//!
//! ## Driving a Field
//!
//! ```rust
//! use tfield::{Field, FieldKind, FieldState, Validity};
//!
//! let mut age = Field::new(FieldKind::Age { min: 65, max: 120 }).label("Retirement Age");
//!
//! age.set_focus(true);
//! age.set_text("2");
//! assert_eq!(age.state().message().as_deref(), Some("Age cannot exceed 120"));
//!
//! age.set_text("7");
//! assert_eq!(age.partial_template(), " 00");
//! age.set_text("70");
//! age.set_focus(false);
//! assert_eq!(age.state(), &FieldState::Inactive(Validity::Valid));
//! ```
//!
//! ## Partial Input
//!
//! ```rust
//! use tfield::{reconstruct, validate_live, FieldKind};
//!
//! let formatted = reconstruct(FieldKind::Date, "0229");
//! assert_eq!(formatted.text, "02/29");
//! assert_eq!(formatted.partial_template, "     /YYYY");
//! assert!(validate_live(FieldKind::Date, &formatted.text).is_ok());
//!
//! assert!(validate_live(FieldKind::Date, "02/3").is_err());
//! ```
//!
//! ## Supported Kinds
//!
//! | Kind | Template | Data |
//! |------|----------|------|
//! | `FreeData` | | no whitespace |
//! | `FixedLengthData { length }` | `X` × length | no whitespace, ≤ length |
//! | `Name` | | title case |
//! | `Phrase` | | verbatim |
//! | `CreditCard` | `0000 0000 0000 0000` | 16 digits |
//! | `ExpirationDate` | `MM/YY` | 4 digits |
//! | `Cvv` | `000` | 3 digits |
//! | `Age { min, max }` | `00` or `000` | 2 or 3 digits |
//! | `Date` | `MM/DD/YYYY` | 8 digits |
//! | `StreetNumber` | | 6 digits, not zero |
//! | `StreetName` | | title case |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize kinds, configs, and states |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - `Field` zeroizes its buffers when dropped or overwritten
//! - `Debug` for `Field` shows the content length only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod age;
pub mod date;
pub mod error;
pub mod expiry;
pub mod filter;
pub mod format;
pub mod kind;
pub mod network;
pub mod state;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use error::{FieldError, ParseKindError};
pub use expiry::YearWindow;
pub use filter::filter;
pub use format::{reconstruct, Formatted};
pub use kind::{FieldKind, KeyboardHint};
pub use state::{Field, FieldConfig, FieldState, Validity};
pub use validate::{validate_live, validate_live_in, validate_result, validate_result_in};
