//! Tasks Section Component
//!
//! New-task input, the rendered rows and the completion summary.

use leptos::prelude::*;
use task_reconciler::TaskAction;

use crate::components::TaskRowView;
use crate::store::{apply_task_action, use_widget_store, WidgetStateStoreFields};

#[component]
pub fn TasksSection() -> impl IntoView {
    let store = use_widget_store();
    let strings = store.strings();
    let tasks = store.tasks();

    let row_keys = move || tasks.read().rows.iter().map(|row| row.key).collect::<Vec<_>>();
    let summary = Memo::new(move |_| tasks.read().summary());

    view! {
        <section class="tn-tasks">
            <h3>{move || strings.read().tasks_title.clone()}</h3>

            <div class="tn-new-task">
                <input
                    type="text"
                    class="tn-new-task-input"
                    placeholder=move || strings.read().task_placeholder.clone()
                    prop:value=move || tasks.read().new_task_input.clone()
                    on:input=move |ev| tasks.write().new_task_input = event_target_value(&ev)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            apply_task_action(store, TaskAction::Add);
                        }
                    }
                />
                <button
                    type="button"
                    class="tn-button"
                    on:click=move |_| apply_task_action(store, TaskAction::Add)
                >
                    {move || strings.read().add_task.clone()}
                </button>
            </div>

            <Show
                when=move || !tasks.read().is_empty()
                fallback=move || view! { <p class="tn-empty">{move || strings.read().no_tasks.clone()}</p> }
            >
                <ul class="tn-task-list">
                    <For
                        each=row_keys
                        key=|key| *key
                        children=move |key| view! { <TaskRowView row_key=key /> }
                    />
                </ul>
            </Show>

            <Show when=move || summary.get().is_visible()>
                <p class="tn-summary">
                    {move || {
                        let s = summary.get();
                        format!("{}/{} {}", s.completed, s.total, strings.read().tasks_completed)
                    }}
                </p>
            </Show>
        </section>
    }
}
