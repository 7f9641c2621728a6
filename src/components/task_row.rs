//! Task Row Component
//!
//! One rendered task: checkbox, label or inline editor, edit and delete.
//! Events resolve the row's current position from its key when they fire.

use leptos::html::Input;
use leptos::prelude::*;
use task_reconciler::{escape_html, RowKey, TaskAction};

use crate::store::{apply_to_row, use_widget_store, WidgetStateStoreFields};

#[component]
pub fn TaskRowView(row_key: RowKey) -> impl IntoView {
    let store = use_widget_store();
    let strings = store.strings();

    let row = Memo::new(move |_| {
        store.tasks().read().rows.iter().find(|row| row.key == row_key).cloned()
    });
    let editing = Memo::new(move |_| row.get().is_some_and(|r| r.text.is_editing()));
    let text = Memo::new(move |_| row.get().map(|r| r.text.current().to_string()).unwrap_or_default());
    let completed = Memo::new(move |_| row.get().is_some_and(|r| r.completed_marker));
    let checked = Memo::new(move |_| row.get().is_some_and(|r| r.checkbox_checked));

    let confirm_and_delete = move |_| {
        let message = strings.read_untracked().confirm_delete.clone();
        if window().confirm_with_message(&message).unwrap_or(false) {
            apply_to_row(store, row_key, |row| TaskAction::Delete { row });
        }
    };

    view! {
        <li class=move || if completed.get() { "tn-task tn-completed" } else { "tn-task" }>
            <input
                type="checkbox"
                class="tn-task-checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    apply_to_row(store, row_key, |row| TaskAction::Toggle { row, checked });
                }
            />

            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="tn-task-text" inner_html=move || escape_html(&text.get())></span>
                }
            >
                <TaskEditInput row_key=row_key draft=text />
            </Show>

            <span class="tn-task-actions">
                <button
                    type="button"
                    class="tn-icon-button"
                    title=move || strings.read().edit_task.clone()
                    on:click=move |_| apply_to_row(store, row_key, |row| TaskAction::BeginEdit { row })
                >
                    "✎"
                </button>
                <button
                    type="button"
                    class="tn-icon-button tn-delete"
                    title=move || strings.read().delete_task.clone()
                    on:click=confirm_and_delete
                >
                    "×"
                </button>
            </span>
        </li>
    }
}

/// Inline editor, focused with its text selected on open
#[component]
fn TaskEditInput(row_key: RowKey, draft: Memo<String>) -> impl IntoView {
    let store = use_widget_store();
    let input_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    view! {
        <input
            type="text"
            class="tn-task-edit"
            node_ref=input_ref
            prop:value=move || draft.get()
            on:input=move |ev| {
                let draft = event_target_value(&ev);
                apply_to_row(store, row_key, |row| TaskAction::UpdateDraft { row, draft });
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                "Enter" => {
                    ev.prevent_default();
                    apply_to_row(store, row_key, |row| TaskAction::CommitEdit { row });
                }
                "Escape" => apply_to_row(store, row_key, |row| TaskAction::CancelEdit { row }),
                _ => {}
            }
            // A blur after Enter or Escape finds the row no longer editing.
            on:blur=move |_| apply_to_row(store, row_key, |row| TaskAction::CommitEdit { row })
        />
    }
}
