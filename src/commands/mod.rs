//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

mod widget;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejects when the backend aborts the request.
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Text of a rejected `invoke`
fn rejection(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use widget::*;
