//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The task list
//! exists only as the rendered `TaskListView`; saves send whatever
//! `TaskListView::apply` rebuilt from it.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use task_reconciler::{
    FeedbackSlot, NotesAutosave, RowKey, SaveFeedback, TaskAction, TaskListView, AUTOSAVE_QUIET_MS,
};

use crate::commands;
use crate::models::{Task, WidgetBootstrap, WidgetStrings};

/// Credentials every save carries
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: u64,
}

/// Widget state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct WidgetState {
    pub session: Session,
    pub strings: WidgetStrings,
    pub notes: NotesAutosave,
    pub notes_feedback: FeedbackSlot,
    pub tasks: TaskListView,
}

impl WidgetState {
    pub fn from_bootstrap(bootstrap: WidgetBootstrap) -> Self {
        Self {
            session: Session {
                token: bootstrap.token,
                user_id: bootstrap.user_id,
            },
            strings: bootstrap.strings,
            notes: NotesAutosave::new(bootstrap.notes),
            notes_feedback: FeedbackSlot::default(),
            tasks: TaskListView::from_tasks(&bootstrap.tasks),
        }
    }
}

/// Type alias for the store
pub type WidgetStore = Store<WidgetState>;

/// Get the widget store from context
pub fn use_widget_store() -> WidgetStore {
    expect_context::<WidgetStore>()
}

// ========================
// Tasks
// ========================

/// Apply a task action and persist the rebuilt list if the action produced one.
pub fn apply_task_action(store: WidgetStore, action: TaskAction) {
    let step = store.tasks().read_untracked().apply(action);
    *store.tasks().write() = step.view;
    if let Some(tasks) = step.save {
        persist_tasks(store, tasks);
    }
}

/// Resolve a rendered row to its current position, then apply `action`.
pub fn apply_to_row(store: WidgetStore, key: RowKey, action: impl FnOnce(usize) -> TaskAction) {
    let position = store.tasks().read_untracked().position_of(key);
    if let Some(row) = position {
        apply_task_action(store, action(row));
    }
}

/// Send a save with the session token. An aborted request, usually an
/// expired token, is retried once with a freshly issued token.
async fn with_token_retry<T, F, Fut>(store: WidgetStore, send: F) -> Result<T, String>
where
    F: Fn(Session) -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    match send(store.session().get_untracked()).await {
        Err(e) => {
            web_sys::console::warn_1(&format!("Save aborted ({}), refreshing token", e).into());
            let token = commands::refresh_token().await?;
            store.session().write().token = token;
            send(store.session().get_untracked()).await
        }
        sent => sent,
    }
}

/// Fire-and-forget save of the full list. Failures are only logged.
fn persist_tasks(store: WidgetStore, tasks: Vec<Task>) {
    let count = tasks.len();
    spawn_local(async move {
        let sent = with_token_retry(store, move |session| {
            let tasks = tasks.clone();
            async move { commands::save_tasks(&session.token, session.user_id, &tasks).await }
        })
        .await;

        match sent {
            Ok(response) if response.success => web_sys::console::log_1(
                &format!("[TASKS] Saved {} tasks", response.data.count.unwrap_or(count)).into(),
            ),
            Ok(response) => web_sys::console::error_1(
                &format!("Error saving tasks: {}", response.data.message).into(),
            ),
            Err(e) => web_sys::console::error_1(&format!("Transport error saving tasks: {}", e).into()),
        }
    });
}

// ========================
// Notes
// ========================

/// Save `text` now, driving the notes button feedback.
pub fn save_notes(store: WidgetStore, text: String) {
    store.notes_feedback().write().show(SaveFeedback::Saving);

    spawn_local(async move {
        let payload = text.clone();
        let sent = with_token_retry(store, move |session| {
            let notes = payload.clone();
            async move { commands::save_notes(&session.token, session.user_id, &notes).await }
        })
        .await;

        let result = match sent {
            Ok(response) if response.success => {
                store.notes().write().record_saved(text);
                Ok(())
            }
            Ok(response) => Err(response.data.message),
            Err(e) => {
                web_sys::console::warn_1(&format!("Transport error saving notes: {}", e).into());
                // Empty message shows the generic save error.
                Err(String::new())
            }
        };

        let feedback = SaveFeedback::from_result(result);
        let reset_after = feedback.reset_after_ms();
        let ticket = store.notes_feedback().write().show(feedback);

        if let Some(ms) = reset_after {
            TimeoutFuture::new(ms).await;
            store.notes_feedback().write().expire(ticket);
        }
    });
}

/// Blur handler: save after the quiet period unless superseded or unchanged.
pub fn schedule_notes_autosave(store: WidgetStore) {
    let ticket = store.notes().write().schedule();
    spawn_local(async move {
        TimeoutFuture::new(AUTOSAVE_QUIET_MS).await;
        let due = store.notes().read_untracked().take_due(ticket);
        if let Some(text) = due {
            save_notes(store, text);
        }
    });
}
