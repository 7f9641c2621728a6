//! Domain Layer
//!
//! Contains the per-user records and core abstractions.
//! This layer has no storage or IPC dependencies, only serde and thiserror.

mod entity;
mod records;
mod user;

pub use entity::{DomainError, DomainResult, Record};
pub use records::{NotesRecord, TaskListRecord};
pub use user::UserId;

// Wire shapes shared with the front end.
pub use task_reconciler::{Task, WidgetStrings};
