//! Clipboard access and the per-field "copied" indicators

use std::collections::HashMap;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub const COPY_ICON: &str = "📋";
pub const COPIED_ICON: &str = "✔";
/// How long a field shows the copied mark before reverting
pub const COPY_RESET_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyField {
    All,
    Name,
    Email,
    Phone,
    Address,
}

/// A copy button: which contact in the list, and which of its fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyKey {
    pub index: usize,
    pub field: CopyField,
}

impl CopyKey {
    pub fn new(index: usize, field: CopyField) -> Self {
        Self { index, field }
    }
}

/// Tracks which buttons currently show the copied mark.
///
/// Each mark gets a token so that a reset scheduled by an earlier click
/// does not clear the mark of a later one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyIndicators {
    marked: HashMap<CopyKey, u64>,
    next_token: u64,
}

impl CopyIndicators {
    pub fn mark(&mut self, key: CopyKey) -> u64 {
        self.next_token += 1;
        self.marked.insert(key, self.next_token);
        self.next_token
    }

    pub fn reset(&mut self, key: CopyKey, token: u64) {
        if self.marked.get(&key) == Some(&token) {
            self.marked.remove(&key);
        }
    }

    pub fn clear(&mut self) {
        self.marked.clear();
    }

    pub fn icon(&self, key: CopyKey) -> &'static str {
        if self.marked.contains_key(&key) {
            COPIED_ICON
        } else {
            COPY_ICON
        }
    }
}

/// `navigator.clipboard.writeText(text)`
pub async fn write_text(text: &str) -> Result<(), String> {
    let navigator = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("navigator"))
        .map_err(describe)?;
    let clipboard =
        js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(describe)?;
    if clipboard.is_undefined() {
        return Err("Clipboard API not available".to_string());
    }
    let write = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(describe)?
        .dyn_into::<js_sys::Function>()
        .map_err(describe)?;
    let promise = write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(describe)?
        .dyn_into::<js_sys::Promise>()
        .map_err(describe)?;
    JsFuture::from(promise).await.map_err(describe)?;
    Ok(())
}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
