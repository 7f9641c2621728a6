//! Gateway Request and Response Shapes

use serde::{Deserialize, Serialize};

use crate::domain::{Task, UserId, WidgetStrings};

pub const NOTES_SAVED_MESSAGE: &str = "Notes saved successfully";
pub const TASKS_SAVED_MESSAGE: &str = "Tasks saved successfully";
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid user or data";

/// A save request as received from the widget
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub token: String,
    /// Whose record the caller wants to write
    pub user_id: UserId,
    /// Notes text, or the task list serialized as JSON
    pub payload: String,
}

impl GatewayRequest {
    pub fn new(token: impl Into<String>, user_id: UserId, payload: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id,
            payload: payload.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseData {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Tagged success/failure result returned for every non-aborted request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub data: ResponseData,
}

impl SaveResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: ResponseData {
                message: message.into(),
                count: None,
            },
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: ResponseData {
                message: message.into(),
                count: None,
            },
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.data.count = Some(count);
        self
    }
}

/// Everything the widget needs for its first render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetBootstrap {
    pub user_id: UserId,
    pub token: String,
    pub notes: String,
    pub tasks: Vec<Task>,
    pub strings: WidgetStrings,
}
