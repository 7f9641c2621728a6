//! Frontend Models
//!
//! Data structures matching backend responses.

use serde::Deserialize;

pub use task_reconciler::{Task, WidgetStrings};

/// Initial widget data (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetBootstrap {
    pub user_id: u64,
    pub token: String,
    pub notes: String,
    pub tasks: Vec<Task>,
    pub strings: WidgetStrings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseData {
    pub message: String,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Tagged save result (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub data: ResponseData,
}
