//! View Snapshot and Task Actions
//!
//! `TaskListView` mirrors what is rendered: one `TaskRow` per visible row,
//! in display order. Task identity is positional, so every action addresses
//! a row by its position in scan order at the time of the action and the
//! canonical list is always rebuilt with [`reconstruct`].

use crate::escape::decode_entities;
use crate::task::{Task, TaskSummary};

/// Render key of a row. Only used to find a row's current position.
pub type RowKey = u64;

/// Text cell of a row: the static label or the inline editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowText {
    Display(String),
    Editing { draft: String, original: String },
}

impl RowText {
    /// Text the row currently shows (label or editor contents)
    pub fn current(&self) -> &str {
        match self {
            RowText::Display(text) => text,
            RowText::Editing { draft, .. } => draft,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, RowText::Editing { .. })
    }
}

/// A single rendered task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub key: RowKey,
    pub text: RowText,
    /// The row's "completed" styling
    pub completed_marker: bool,
    pub checkbox_checked: bool,
}

impl TaskRow {
    fn new(key: RowKey, text: String, completed: bool) -> Self {
        Self {
            key,
            text: RowText::Display(text),
            completed_marker: completed,
            checkbox_checked: completed,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_marker || self.checkbox_checked
    }
}

/// User interactions on the task list. `row` is a scan-order position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Add the contents of the new-task input
    Add,
    Toggle { row: usize, checked: bool },
    BeginEdit { row: usize },
    UpdateDraft { row: usize, draft: String },
    /// Blur or Enter in the inline editor
    CommitEdit { row: usize },
    /// Escape in the inline editor
    CancelEdit { row: usize },
    /// Issued only after the user confirmed the deletion
    Delete { row: usize },
}

/// Outcome of applying an action: next view and, if any, the full list to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub view: TaskListView,
    pub save: Option<Vec<Task>>,
}

/// Snapshot of the rendered task list and the new-task input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskListView {
    pub rows: Vec<TaskRow>,
    pub new_task_input: String,
    next_key: RowKey,
}

/// Rebuild the canonical task list by scanning rows in display order.
pub fn reconstruct(view: &TaskListView) -> Vec<Task> {
    view.rows
        .iter()
        .map(|row| Task {
            text: row.text.current().trim().to_string(),
            completed: row.is_completed(),
        })
        .collect()
}

impl TaskListView {
    /// Initial render of a stored list. Stored text carries entities for
    /// characters the back end encoded; rows hold the text as typed.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let rows = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| TaskRow::new(i as RowKey, decode_entities(&task.text), task.completed))
            .collect::<Vec<_>>();
        let next_key = rows.len() as RowKey;
        Self {
            rows,
            new_task_input: String::new(),
            next_key,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current scan-order position of a rendered row
    pub fn position_of(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            completed: self.rows.iter().filter(|row| row.completed_marker).count(),
            total: self.rows.len(),
        }
    }

    /// Apply one action to a copy of this view.
    pub fn apply(&self, action: TaskAction) -> Step {
        let mut view = self.clone();
        let save = match action {
            TaskAction::Add => view.add(),
            TaskAction::Toggle { row, checked } => Some(view.toggle(row, checked)),
            TaskAction::BeginEdit { row } => {
                view.begin_edit(row);
                None
            }
            TaskAction::UpdateDraft { row, draft } => {
                if let Some(RowText::Editing { draft: current, .. }) =
                    view.rows.get_mut(row).map(|r| &mut r.text)
                {
                    *current = draft;
                }
                None
            }
            TaskAction::CommitEdit { row } => view.commit_edit(row),
            TaskAction::CancelEdit { row } => {
                view.cancel_edit(row);
                None
            }
            TaskAction::Delete { row } => view.delete(row),
        };
        Step { view, save }
    }

    fn add(&mut self) -> Option<Vec<Task>> {
        let text = self.new_task_input.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let mut tasks = reconstruct(self);
        tasks.push(Task::new(text.clone()));

        self.new_task_input.clear();
        let key = self.next_key;
        self.next_key += 1;
        self.rows.push(TaskRow::new(key, text, false));

        Some(tasks)
    }

    fn toggle(&mut self, row: usize, checked: bool) -> Vec<Task> {
        // Styling follows the checkbox before the list is rebuilt.
        if let Some(r) = self.rows.get_mut(row) {
            r.checkbox_checked = checked;
            r.completed_marker = checked;
        }

        let mut tasks = reconstruct(self);
        // Out-of-range rows skip the mutation but the list is still saved.
        if let Some(task) = tasks.get_mut(row) {
            task.completed = checked;
        }
        tasks
    }

    fn begin_edit(&mut self, row: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            if let RowText::Display(text) = &r.text {
                r.text = RowText::Editing {
                    draft: text.clone(),
                    original: text.clone(),
                };
            }
        }
    }

    fn commit_edit(&mut self, row: usize) -> Option<Vec<Task>> {
        let r = self.rows.get_mut(row)?;
        let RowText::Editing { draft, original } = &r.text else {
            return None;
        };

        let text = draft.trim().to_string();
        if text.is_empty() {
            r.text = RowText::Display(original.clone());
            return None;
        }
        r.text = RowText::Display(text.clone());

        let mut tasks = reconstruct(self);
        if let Some(task) = tasks.get_mut(row) {
            task.text = text;
        }
        Some(tasks)
    }

    fn cancel_edit(&mut self, row: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            if let RowText::Editing { original, .. } = &r.text {
                r.text = RowText::Display(original.clone());
            }
        }
    }

    fn delete(&mut self, row: usize) -> Option<Vec<Task>> {
        if row >= self.rows.len() {
            return None;
        }
        let mut tasks = reconstruct(self);
        tasks.remove(row);
        self.rows.remove(row);
        Some(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::escape_html;
    use proptest::prelude::*;

    fn view_of(items: &[(&str, bool)]) -> TaskListView {
        let tasks = items
            .iter()
            .map(|(text, completed)| Task {
                text: text.to_string(),
                completed: *completed,
            })
            .collect::<Vec<_>>();
        TaskListView::from_tasks(&tasks)
    }

    fn texts(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_and_clears_input() {
        let mut view = view_of(&[("a", true)]);
        view.new_task_input = "  buy milk ".to_string();

        let step = view.apply(TaskAction::Add);
        let saved = step.save.expect("add saves");

        assert_eq!(texts(&saved), vec!["a", "buy milk"]);
        assert!(!saved[1].completed);
        assert_eq!(step.view.new_task_input, "");
        assert_eq!(step.view.rows.len(), 2);
        assert_eq!(step.view.rows[1].text, RowText::Display("buy milk".into()));
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let mut view = view_of(&[("a", false)]);
        view.new_task_input = " \t ".to_string();

        let step = view.apply(TaskAction::Add);
        assert!(step.save.is_none());
        assert_eq!(step.view, view);
    }

    #[test]
    fn test_added_rows_get_fresh_keys() {
        let mut view = view_of(&[("a", false), ("b", false)]);
        view = view.apply(TaskAction::Delete { row: 0 }).view;
        view.new_task_input = "c".into();
        view = view.apply(TaskAction::Add).view;

        let keys: Vec<RowKey> = view.rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![1, 2]);
        assert_eq!(view.position_of(2), Some(1));
        assert_eq!(view.position_of(0), None);
    }

    #[test]
    fn test_toggle_updates_marker_and_list() {
        let view = view_of(&[("a", false), ("b", false)]);
        let step = view.apply(TaskAction::Toggle { row: 1, checked: true });

        assert!(step.view.rows[1].completed_marker);
        assert_eq!(
            step.save.unwrap(),
            vec![
                Task { text: "a".into(), completed: false },
                Task { text: "b".into(), completed: true },
            ]
        );
        assert_eq!(step.view.summary(), TaskSummary { completed: 1, total: 2 });
    }

    #[test]
    fn test_toggle_uncheck_clears_completion() {
        let view = view_of(&[("a", true)]);
        let step = view.apply(TaskAction::Toggle { row: 0, checked: false });
        assert!(!step.save.unwrap()[0].completed);
        assert!(!step.view.rows[0].is_completed());
    }

    #[test]
    fn test_toggle_out_of_range_still_saves() {
        let view = view_of(&[("a", true), ("b", false)]);
        let step = view.apply(TaskAction::Toggle { row: 7, checked: true });

        assert_eq!(step.save, Some(reconstruct(&view)));
        assert_eq!(step.view, view);
    }

    #[test]
    fn test_edit_commit_trims_and_saves() {
        let view = view_of(&[("a", false), ("b", true)]);
        let view = view.apply(TaskAction::BeginEdit { row: 1 }).view;
        assert_eq!(
            view.rows[1].text,
            RowText::Editing { draft: "b".into(), original: "b".into() }
        );

        let view = view
            .apply(TaskAction::UpdateDraft { row: 1, draft: "  better b ".into() })
            .view;
        let step = view.apply(TaskAction::CommitEdit { row: 1 });

        assert_eq!(step.view.rows[1].text, RowText::Display("better b".into()));
        assert_eq!(
            step.save.unwrap(),
            vec![
                Task { text: "a".into(), completed: false },
                Task { text: "better b".into(), completed: true },
            ]
        );
    }

    #[test]
    fn test_edit_to_empty_reverts_without_save() {
        let view = view_of(&[("keep me", false)]);
        let view = view.apply(TaskAction::BeginEdit { row: 0 }).view;
        let view = view
            .apply(TaskAction::UpdateDraft { row: 0, draft: "   ".into() })
            .view;

        let step = view.apply(TaskAction::CommitEdit { row: 0 });
        assert!(step.save.is_none());
        assert_eq!(step.view.rows[0].text, RowText::Display("keep me".into()));
    }

    #[test]
    fn test_escape_cancels_edit() {
        let view = view_of(&[("orig", false)]);
        let view = view.apply(TaskAction::BeginEdit { row: 0 }).view;
        let view = view
            .apply(TaskAction::UpdateDraft { row: 0, draft: "changed".into() })
            .view;

        let step = view.apply(TaskAction::CancelEdit { row: 0 });
        assert!(step.save.is_none());
        assert_eq!(step.view.rows[0].text, RowText::Display("orig".into()));
    }

    #[test]
    fn test_commit_after_commit_is_noop() {
        // Enter commits, then the editor's blur arrives for the same row.
        let view = view_of(&[("a", false)]);
        let view = view.apply(TaskAction::BeginEdit { row: 0 }).view;
        let view = view
            .apply(TaskAction::UpdateDraft { row: 0, draft: "a2".into() })
            .view;
        let view = view.apply(TaskAction::CommitEdit { row: 0 }).view;

        let step = view.apply(TaskAction::CommitEdit { row: 0 });
        assert!(step.save.is_none());
        assert_eq!(step.view, view);
    }

    #[test]
    fn test_editing_row_contributes_its_draft() {
        let mut view = view_of(&[("a", false)]);
        view = view.apply(TaskAction::BeginEdit { row: 0 }).view;
        view = view
            .apply(TaskAction::UpdateDraft { row: 0, draft: " draft ".into() })
            .view;
        view.new_task_input = "b".into();

        let saved = view.apply(TaskAction::Add).save.unwrap();
        assert_eq!(texts(&saved), vec!["draft", "b"]);
    }

    #[test]
    fn test_delete_shifts_later_rows() {
        let view = view_of(&[("a", false), ("b", true), ("c", false), ("d", true)]);
        let step = view.apply(TaskAction::Delete { row: 1 });

        let saved = step.save.unwrap();
        assert_eq!(texts(&saved), vec!["a", "c", "d"]);
        assert!(saved[2].completed);
        assert_eq!(step.view.rows.len(), 3);
    }

    #[test]
    fn test_toggle_after_delete_hits_the_clicked_row() {
        let view = view_of(&[("a", false), ("b", false), ("c", false)]);
        let view = view.apply(TaskAction::Delete { row: 0 }).view;

        // "b" was rendered at position 1; after the delete it sits at 0.
        let b_key = view.rows[0].key;
        let row = view.position_of(b_key).unwrap();
        let saved = view.apply(TaskAction::Toggle { row, checked: true }).save.unwrap();

        assert_eq!(
            saved,
            vec![
                Task { text: "b".into(), completed: true },
                Task { text: "c".into(), completed: false },
            ]
        );
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let view = view_of(&[("a", false)]);
        let step = view.apply(TaskAction::Delete { row: 3 });
        assert!(step.save.is_none());
        assert_eq!(step.view, view);
    }

    #[test]
    fn test_stored_entities_render_as_typed() {
        let view = view_of(&[("a &lt; b", false)]);
        assert_eq!(view.rows[0].text, RowText::Display("a < b".into()));
        assert_eq!(escape_html(view.rows[0].text.current()), "a &lt; b");

        let step = view.apply(TaskAction::BeginEdit { row: 0 });
        assert_eq!(step.view.rows[0].text.current(), "a < b");
    }

    #[test]
    fn test_summary_counts_marker() {
        let view = view_of(&[("a", true), ("b", false), ("c", true)]);
        let summary = view.summary();
        assert_eq!(summary, TaskSummary { completed: 2, total: 3 });
        assert!(summary.is_visible());
        assert!(!TaskListView::default().summary().is_visible());
    }

    fn action_strategy() -> impl Strategy<Value = TaskAction> {
        prop_oneof![
            Just(TaskAction::Add),
            (0usize..6, any::<bool>()).prop_map(|(row, checked)| TaskAction::Toggle { row, checked }),
            (0usize..6).prop_map(|row| TaskAction::BeginEdit { row }),
            (0usize..6, "[ a-z]{0,6}").prop_map(|(row, draft)| TaskAction::UpdateDraft { row, draft }),
            (0usize..6).prop_map(|row| TaskAction::CommitEdit { row }),
            (0usize..6).prop_map(|row| TaskAction::CancelEdit { row }),
            (0usize..6).prop_map(|row| TaskAction::Delete { row }),
        ]
    }

    proptest! {
        #[test]
        fn saved_list_matches_rendered_rows(
            actions in proptest::collection::vec((action_strategy(), "[ a-z]{0,5}"), 1..40)
        ) {
            let mut view = view_of(&[("seed", false)]);
            for (action, input) in actions {
                view.new_task_input = input;
                let before = view.rows.len();
                let is_delete = matches!(action, TaskAction::Delete { .. });
                let step = view.apply(action);

                if let Some(saved) = &step.save {
                    prop_assert_eq!(saved, &reconstruct(&step.view));
                    if is_delete {
                        prop_assert_eq!(saved.len(), before - 1);
                    }
                }
                view = step.view;
            }
        }
    }
}
