//! Client-visible strings, injected by the back end at load time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetStrings {
    pub widget_title: String,
    pub notes_title: String,
    pub tasks_title: String,
    pub notes_placeholder: String,
    pub task_placeholder: String,
    pub save_notes: String,
    pub add_task: String,
    pub edit_task: String,
    pub delete_task: String,
    pub confirm_delete: String,
    pub saving: String,
    pub saved: String,
    pub save_error: String,
    pub no_tasks: String,
    pub tasks_completed: String,
}

impl Default for WidgetStrings {
    fn default() -> Self {
        Self {
            widget_title: "Tasks & Notes".into(),
            notes_title: "Personal Notes".into(),
            tasks_title: "Task List".into(),
            notes_placeholder: "Write your notes here...".into(),
            task_placeholder: "Enter new task...".into(),
            save_notes: "Save Notes".into(),
            add_task: "Add Task".into(),
            edit_task: "Edit Task".into(),
            delete_task: "Delete Task".into(),
            confirm_delete: "Are you sure you want to delete this task?".into(),
            saving: "Saving...".into(),
            saved: "Saved!".into(),
            save_error: "Error saving data. Please try again.".into(),
            no_tasks: "No tasks yet. Add your first task above!".into(),
            tasks_completed: "tasks completed".into(),
        }
    }
}
