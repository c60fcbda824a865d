//! WASM bindings for the browser editor.
//!
//! Templates cross the boundary as JSON strings in the same
//! `{ "rows": [...], "styles": {...} }` shape the editor saves.

use wasm_bindgen::prelude::*;

use crate::background::Background;
use crate::export::serialize;
use crate::import::parse;
use crate::template::Template;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Render template JSON to email HTML.
#[wasm_bindgen(js_name = renderTemplate)]
pub fn render_template(json: &str) -> Result<String, JsValue> {
    let doc = Template::from_json(json).map_err(to_js)?.into_document();
    Ok(serialize(&doc))
}

/// Rebuild template JSON from email HTML. Never fails on markup; unknown
/// structure yields an empty template.
#[wasm_bindgen(js_name = importHtml)]
pub fn import_html(html: &str) -> Result<String, JsValue> {
    Template::from(parse(html)).to_json().map_err(to_js)
}

/// Canonical form of a background value, or `undefined` when invalid.
#[wasm_bindgen(js_name = normalizeBackground)]
pub fn normalize_background(value: &str) -> Option<String> {
    Background::decode(value).map(|b| b.encode())
}

/// Whether a string is a CSS color the editor accepts.
#[wasm_bindgen(js_name = isColor)]
pub fn is_color(value: &str) -> bool {
    crate::background::is_color(value)
}
