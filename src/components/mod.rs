//! UI Components
//!
//! Leptos components of the widget.

mod save_button;
mod notes_section;
mod tasks_section;
mod task_row;

pub use save_button::SaveButton;
pub use notes_section::NotesSection;
pub use tasks_section::TasksSection;
pub use task_row::TaskRowView;
