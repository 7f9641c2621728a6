//! Tauri Commands for the Tasks & Notes Widget
//!
//! `save_notes` and `save_tasks` reject aborted requests (bad token, missing
//! privilege) with an error string; validation problems come back as a
//! failed `SaveResponse`.

use tauri::State;

use crate::domain::UserId;
use crate::gateway::{GatewayRequest, SaveResponse, WidgetBootstrap};
use crate::AppState;

/// Notes, tasks, token and strings for the first render
#[tauri::command]
pub async fn load_widget(state: State<'_, AppState>) -> Result<WidgetBootstrap, String> {
    state
        .gateway
        .load_widget(&state.strings)
        .await
        .map_err(|e| e.to_string())
}

/// Replacement token once the bootstrap token has expired
#[tauri::command]
pub fn refresh_token(state: State<'_, AppState>) -> Result<String, String> {
    state.gateway.refresh_token().map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_notes(
    state: State<'_, AppState>,
    token: String,
    user_id: u64,
    notes: String,
) -> Result<SaveResponse, String> {
    state
        .gateway
        .save_notes(GatewayRequest::new(token, UserId(user_id), notes))
        .await
        .map_err(|e| e.to_string())
}

/// `tasks` is the full list serialized as JSON
#[tauri::command]
pub async fn save_tasks(
    state: State<'_, AppState>,
    token: String,
    user_id: u64,
    tasks: String,
) -> Result<SaveResponse, String> {
    state
        .gateway
        .save_tasks(GatewayRequest::new(token, UserId(user_id), tasks))
        .await
        .map_err(|e| e.to_string())
}
