//! Task wire shape and list summary.

use serde::{Deserialize, Serialize};

/// A checklist entry as exchanged with the back end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// Completed / total counters shown under the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub completed: usize,
    pub total: usize,
}

impl TaskSummary {
    /// The summary line is hidden for an empty list.
    pub fn is_visible(&self) -> bool {
        self.total > 0
    }
}
