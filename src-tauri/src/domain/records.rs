//! Notes and Task List Records
//!
//! One of each per user. Both are overwritten wholesale on every save.

use super::entity::Record;
use super::{Task, UserId};

/// Free-text notes of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesRecord {
    pub user_id: UserId,
    pub text: String,
}

impl NotesRecord {
    pub fn new(user_id: UserId, text: impl Into<String>) -> Self {
        Self {
            user_id,
            text: text.into(),
        }
    }
}

impl Record for NotesRecord {
    const KIND: &'static str = "notes";
    type Value = String;

    fn owner(&self) -> UserId {
        self.user_id
    }

    fn value(&self) -> &String {
        &self.text
    }

    fn from_value(owner: UserId, value: String) -> Self {
        Self::new(owner, value)
    }
}

/// Ordered checklist of a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListRecord {
    pub user_id: UserId,
    pub tasks: Vec<Task>,
}

impl TaskListRecord {
    pub fn new(user_id: UserId, tasks: Vec<Task>) -> Self {
        Self { user_id, tasks }
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

impl Record for TaskListRecord {
    const KIND: &'static str = "tasks";
    type Value = Vec<Task>;

    fn owner(&self) -> UserId {
        self.user_id
    }

    fn value(&self) -> &Vec<Task> {
        &self.tasks
    }

    fn from_value(owner: UserId, value: Vec<Task>) -> Self {
        Self::new(owner, value)
    }
}
