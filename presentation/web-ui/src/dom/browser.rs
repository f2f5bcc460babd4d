use anyhow::{Context, anyhow};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

pub fn window() -> anyhow::Result<Window> {
    web_sys::window().context("no global window")
}

pub fn document() -> anyhow::Result<Document> {
    window()?.document().context("window has no document")
}

/// JavaScript exceptions carry no Rust error type; keep their debug form.
pub fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}
