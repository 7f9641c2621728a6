//! Tasks & Notes Backend
//!
//! Layered architecture:
//! - domain: Per-user records and core abstractions
//! - repository: Record store abstraction and its SQLite implementation
//! - security: Session, privilege and anti-forgery token checks
//! - gateway: Validates and persists save requests
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::Manager;

mod commands;
mod config;
mod domain;
mod gateway;
mod repository;
mod sanitize;
mod security;

use config::AppConfig;
use domain::WidgetStrings;
use gateway::PersistenceGateway;
use repository::{init_db, SqliteRecordStore};
use security::{LocalSession, TokenIssuer};

pub type Gateway = PersistenceGateway<SqliteRecordStore, LocalSession>;

/// Application state shared across commands
pub struct AppState {
    pub gateway: Gateway,
    pub strings: WidgetStrings,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("tasks_notes.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "TasksNotes")?;

            let config_dir = app_handle.path().app_config_dir()?;
            let config = AppConfig::load_or_init(&config_dir)?;
            let secret = config::load_or_create_secret(&config_dir)?;
            log::info!(
                "Loaded config for user {} ({}), administrator={}",
                config.user_id,
                config.display_name,
                config.administrator
            );

            let db_path = get_db_path(&app_handle)?;
            let db_state = tauri::async_runtime::block_on(init_db(&db_path))?;
            log::info!("Database ready at {}", db_state.path.display());

            let session = LocalSession::new(
                config.user(),
                config.administrator,
                TokenIssuer::new(&secret, config.token_lifetime_secs),
            );
            let store = SqliteRecordStore::new(db_state.conn.clone());

            app.manage(AppState {
                gateway: PersistenceGateway::new(store, session),
                strings: config.strings,
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::load_widget,
            commands::save_notes,
            commands::save_tasks,
            commands::refresh_token,
            commands::recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
