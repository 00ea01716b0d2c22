//! WebAssembly bindings for browser hosts.
//!
//! The host wires its input element's `input`, `focus`, and `blur` events
//! to a [`WasmField`] and renders what it reads back.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { WasmField, kinds } from 'tfield';
//!
//! await init();
//!
//! const field = new WasmField("expiration-date", true, "Exp Date");
//! input.addEventListener("focus", () => render(field.setFocus(true)));
//! input.addEventListener("blur", () => render(field.setFocus(false)));
//! input.addEventListener("input", () => render(field.setText(input.value)));
//!
//! function render(state) {
//!     input.value = field.text;
//!     overlay.textContent = field.partialTemplate;
//!     error.textContent = field.message ?? "";
//! }
//! ```

#![cfg(feature = "wasm")]

use crate::network::detect_network;
use crate::{Field, FieldKind, KeyboardHint};
use wasm_bindgen::prelude::*;

fn parse_kind(kind: &str) -> Result<FieldKind, JsValue> {
    kind.parse::<FieldKind>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// A field handle owned by JavaScript.
#[wasm_bindgen]
pub struct WasmField {
    inner: Field,
}

#[wasm_bindgen]
impl WasmField {
    /// Creates a field from a kind string such as `"age:65-120"`.
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str, required: bool, label: Option<String>) -> Result<WasmField, JsValue> {
        let mut inner = Field::new(parse_kind(kind)?).required(required);
        if let Some(label) = label {
            inner = inner.label(label);
        }
        Ok(WasmField { inner })
    }

    /// Handles a text change. Returns the new state name.
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, raw: &str) -> String {
        self.inner.set_text(raw).to_string()
    }

    /// Handles a focus change. Returns the new state name.
    #[wasm_bindgen(js_name = setFocus)]
    pub fn set_focus(&mut self, focused: bool) -> String {
        self.inner.set_focus(focused).to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.text().to_string()
    }

    #[wasm_bindgen(getter, js_name = partialTemplate)]
    pub fn partial_template(&self) -> String {
        self.inner.partial_template().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.inner.state().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> Option<String> {
        self.inner.state().message()
    }

    #[wasm_bindgen(getter)]
    pub fn invalid(&self) -> bool {
        self.inner.state().is_invalid()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.inner.display_label()
    }

    #[wasm_bindgen(getter)]
    pub fn numeric(&self) -> bool {
        self.inner.kind().keyboard() == KeyboardHint::NumberPad
    }

    /// Card network for credit card fields, once the prefix identifies one.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        match self.inner.kind() {
            FieldKind::CreditCard => detect_network(self.inner.text()).map(|n| n.to_string()),
            _ => None,
        }
    }
}

/// Filters raw text into canonical data.
#[wasm_bindgen]
pub fn filter(kind: &str, raw: &str) -> Result<String, JsValue> {
    Ok(crate::filter(parse_kind(kind)?, raw))
}

/// Reconstructs formatted text; returns `[text, partialTemplate]`.
#[wasm_bindgen]
pub fn reconstruct(kind: &str, data: &str) -> Result<js_sys::Array, JsValue> {
    let formatted = crate::reconstruct(parse_kind(kind)?, data);
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_str(&formatted.text));
    pair.push(&JsValue::from_str(&formatted.partial_template));
    Ok(pair)
}

/// Live-validates formatted text. Returns the error message, or `undefined`.
#[wasm_bindgen(js_name = validateLive)]
pub fn validate_live(kind: &str, text: &str) -> Result<Option<String>, JsValue> {
    Ok(crate::validate_live(parse_kind(kind)?, text)
        .err()
        .map(|e| e.to_string()))
}

/// Result-validates formatted text. Returns the error message, or `undefined`.
#[wasm_bindgen(js_name = validateResult)]
pub fn validate_result(kind: &str, text: &str) -> Result<Option<String>, JsValue> {
    Ok(crate::validate_result(parse_kind(kind)?, text)
        .err()
        .map(|e| e.to_string()))
}

/// Returns the template for a kind.
#[wasm_bindgen]
pub fn template(kind: &str) -> Result<String, JsValue> {
    Ok(parse_kind(kind)?.template())
}

/// Lists every kind string accepted by the constructor.
#[wasm_bindgen]
pub fn kinds() -> js_sys::Array {
    FieldKind::NAMES
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect()
}
