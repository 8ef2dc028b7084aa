//! Clipboard access.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::dom;
use crate::core::error::ClipboardError;

/// Write `text` verbatim to the system clipboard.
///
/// Fails when the page has no clipboard access (insecure context) or the
/// browser rejects the write (permission denied, document not focused).
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = dom::window().ok_or(ClipboardError::NoWindow)?;
    let navigator = window.navigator();

    let available = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .is_ok_and(|clipboard| !clipboard.is_undefined() && !clipboard.is_null());
    if !available {
        return Err(ClipboardError::Unavailable);
    }

    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
}
