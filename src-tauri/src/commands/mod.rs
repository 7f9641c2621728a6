//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod log_cmd;
mod widget_cmd;

pub use log_cmd::*;
pub use widget_cmd::*;
