//! The field validity state machine.
//!
//! A [`Field`] owns one input's text, partial template, and
//! [`FieldState`]. The host feeds it two kinds of events, text changes and
//! focus changes, and reads back the formatted text, the partial template
//! to draw behind it, and the state that drives presentation.
//!
//! ```text
//!            focus / edit                 blur, text
//!   Idle ─────────────────▶ Focused(v) ─────────────▶ Inactive(v)
//!    ▲                          │    ▲                     │
//!    │   blur, empty, optional  │    └──── focus ──────────┘
//!    └──────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use tfield::{Field, FieldKind, FieldState, Validity};
//!
//! let mut field = Field::new(FieldKind::ExpirationDate).required(true);
//! assert_eq!(field.state(), &FieldState::Idle);
//!
//! field.set_focus(true);
//! field.set_text("1");
//! assert_eq!(field.text(), "1");
//! assert_eq!(field.partial_template(), " M/YY");
//! assert_eq!(field.state(), &FieldState::Focused(Validity::Valid));
//!
//! field.set_text("");
//! field.set_focus(false);
//! assert_eq!(field.state().message().as_deref(), Some("Required Entry"));
//! ```

use crate::error::FieldError;
use crate::expiry::YearWindow;
use crate::filter::filter;
use crate::format::reconstruct;
use crate::kind::FieldKind;
use crate::validate::{validate_live_in, validate_result_in};
use std::fmt;
use zeroize::Zeroize;

/// Validity of a field's current content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "validity", content = "error", rename_all = "snake_case"))]
pub enum Validity {
    /// Nothing entered.
    Empty,
    /// The content passed the applicable validator.
    Valid,
    /// The content failed; the error's `Display` is the message to show.
    Invalid(FieldError),
}

/// Where a field is in its focus/validation lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", content = "validity", rename_all = "snake_case"))]
pub enum FieldState {
    /// Untouched, or left empty by an optional field.
    #[default]
    Idle,
    /// Being edited; validity comes from live validation.
    Focused(Validity),
    /// Lost focus; validity comes from result validation.
    Inactive(Validity),
}

impl FieldState {
    /// Returns the validity carried by the state. `Idle` is `Empty`.
    pub fn validity(&self) -> &Validity {
        match self {
            Self::Idle => &Validity::Empty,
            Self::Focused(validity) | Self::Inactive(validity) => validity,
        }
    }

    /// Returns the error, if the state is invalid.
    pub fn error(&self) -> Option<&FieldError> {
        match self.validity() {
            Validity::Invalid(err) => Some(err),
            Validity::Empty | Validity::Valid => None,
        }
    }

    /// Returns the error message, if the state is invalid.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Returns true for either invalid state.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.error().is_some()
    }

    /// Returns true while the field has focus.
    #[inline]
    pub fn is_focused(&self) -> bool {
        matches!(self, Self::Focused(_))
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Valid => write!(f, "valid"),
            Self::Invalid(err) => write!(f, "invalid({})", err),
        }
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Focused(validity) => write!(f, "focused({})", validity),
            Self::Inactive(validity) => write!(f, "inactive({})", validity),
        }
    }
}

/// Caller-supplied settings for one field instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// An empty field becomes invalid when it loses focus.
    pub required: bool,
    /// Label shown instead of the kind's default label.
    pub label: Option<String>,
}

/// One input field: its kind, settings, content, and validity state.
///
/// Every stage is re-run from scratch on each event, so the field never
/// patches its partial template incrementally.
#[derive(Clone)]
pub struct Field {
    kind: FieldKind,
    config: FieldConfig,
    window: Option<YearWindow>,
    text: String,
    partial_template: String,
    focused: bool,
    state: FieldState,
}

impl Field {
    /// Creates an empty, optional, idle field.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            config: FieldConfig::default(),
            window: None,
            text: String::new(),
            partial_template: kind.template(),
            focused: false,
            state: FieldState::Idle,
        }
    }

    /// Creates an idle field from a configuration.
    pub fn with_config(kind: FieldKind, config: FieldConfig) -> Self {
        let mut field = Self::new(kind);
        field.config = config;
        field
    }

    /// Creates an idle field holding `initial` text, filtered and formatted.
    ///
    /// # Example
    ///
    /// ```
    /// use tfield::{Field, FieldKind, FieldState};
    ///
    /// let field = Field::with_text(FieldKind::CreditCard, "4111111111111111");
    /// assert_eq!(field.text(), "4111 1111 1111 1111");
    /// assert_eq!(field.state(), &FieldState::Idle);
    /// ```
    pub fn with_text(kind: FieldKind, initial: &str) -> Self {
        let mut field = Self::new(kind);
        field.text = initial.to_string();
        field.reformat();
        field
    }

    /// Marks the field required.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.config.required = required;
        self
    }

    /// Sets the label shown instead of the kind's default.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Pins the expiration-date year window instead of deriving it from the
    /// clock on each event.
    #[must_use]
    pub fn year_window(mut self, window: YearWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Returns the field kind.
    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns the field settings.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Returns the label to display: the configured one, or the kind's.
    pub fn display_label(&self) -> String {
        match &self.config.label {
            Some(label) if !label.is_empty() => label.clone(),
            _ => self.kind.label(),
        }
    }

    /// Returns the formatted text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the template overlay for the unfilled part of the input.
    #[inline]
    pub fn partial_template(&self) -> &str {
        &self.partial_template
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Returns true while the field has focus.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the canonical data behind the formatted text.
    pub fn data(&self) -> String {
        filter(self.kind, &self.text)
    }

    /// Handles a focus change from the host.
    pub fn set_focus(&mut self, focused: bool) -> &FieldState {
        self.focused = focused;
        self.update_state();
        &self.state
    }

    /// Handles a text change from the host. `raw` is the whole new content.
    pub fn set_text(&mut self, raw: &str) -> &FieldState {
        self.text.zeroize();
        self.text.push_str(raw);
        self.update_state();
        &self.state
    }

    fn window(&self) -> YearWindow {
        self.window.unwrap_or_else(YearWindow::current)
    }

    /// Filters and reconstructs the current text in place.
    fn reformat(&mut self) {
        let data = filter(self.kind, &self.text);
        let formatted = reconstruct(self.kind, &data);

        self.text.zeroize();
        self.partial_template.zeroize();
        self.text = formatted.text;
        self.partial_template = formatted.partial_template;
    }

    fn update_state(&mut self) {
        let previous = std::mem::take(&mut self.state);

        // Emptiness is judged on the filtered text, so "abc" in a numeric
        // field counts as empty
        self.reformat();

        self.state = if self.focused {
            match validate_live_in(self.kind, &self.text, &self.window()) {
                Ok(()) => FieldState::Focused(Validity::Valid),
                Err(err) => FieldState::Focused(Validity::Invalid(err)),
            }
        } else if self.text.is_empty() {
            if self.config.required {
                FieldState::Inactive(Validity::Invalid(FieldError::Required))
            } else {
                FieldState::Idle
            }
        } else {
            self.partial_template.clear();
            match validate_result_in(self.kind, &self.text, &self.window()) {
                Ok(()) => FieldState::Inactive(Validity::Valid),
                Err(err) => FieldState::Inactive(Validity::Invalid(err)),
            }
        };

        if previous != self.state {
            tracing::debug!(
                kind = %self.kind,
                from = %previous,
                to = %self.state,
                "field state changed"
            );
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Content may be card data, so only its length is shown
        f.debug_struct("Field")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("text_len", &self.text.chars().count())
            .field("partial_template", &self.partial_template)
            .field("focused", &self.focused)
            .field("state", &self.state)
            .finish()
    }
}

impl Drop for Field {
    fn drop(&mut self) {
        self.text.zeroize();
        self.partial_template.zeroize();
    }
}
