//! Diagnostics Commands

/// Most recent backend log lines, oldest first
#[tauri::command]
pub fn recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
