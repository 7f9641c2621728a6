//! Widget Commands
//!
//! Frontend bindings for loading the widget and saving notes/tasks.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{SaveResponse, Task, WidgetBootstrap};
use super::{invoke, rejection};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SaveNotesArgs<'a> {
    token: &'a str,
    #[serde(rename = "userId")]
    user_id: u64,
    notes: &'a str,
}

#[derive(Serialize)]
struct SaveTasksArgs<'a> {
    token: &'a str,
    #[serde(rename = "userId")]
    user_id: u64,
    /// Full list, JSON-encoded
    tasks: String,
}

// ========================
// Commands
// ========================

pub async fn load_widget() -> Result<WidgetBootstrap, String> {
    let result = invoke("load_widget", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_notes(token: &str, user_id: u64, notes: &str) -> Result<SaveResponse, String> {
    let js_args = serde_wasm_bindgen::to_value(&SaveNotesArgs { token, user_id, notes })
        .map_err(|e| e.to_string())?;
    let result = invoke("save_notes", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_tasks(token: &str, user_id: u64, tasks: &[Task]) -> Result<SaveResponse, String> {
    let tasks = serde_json::to_string(tasks).map_err(|e| e.to_string())?;
    let js_args = serde_wasm_bindgen::to_value(&SaveTasksArgs { token, user_id, tasks })
        .map_err(|e| e.to_string())?;
    let result = invoke("save_tasks", js_args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Replacement anti-forgery token after the bootstrap token expired
pub async fn refresh_token() -> Result<String, String> {
    let result = invoke("refresh_token", JsValue::NULL).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
