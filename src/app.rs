//! Tasks & Notes Frontend App
//!
//! Loads the widget bootstrap, then renders the notes and task columns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{NotesSection, TasksSection};
use crate::store::{WidgetState, WidgetStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(WidgetState::default());
    provide_context(store);

    let (loaded, set_loaded) = signal(false);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    // Load bootstrap data on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::load_widget().await {
                Ok(bootstrap) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} tasks for user {}", bootstrap.tasks.len(), bootstrap.user_id).into(),
                    );
                    *store.write() = WidgetState::from_bootstrap(bootstrap);
                    set_loaded.set(true);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load widget: {}", e).into());
                    set_load_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="tn-widget">
            {move || load_error.get().map(|e| view! { <p class="tn-error">{e}</p> })}

            <Show when=move || loaded.get()>
                <h2 class="tn-title">{move || store.strings().read().widget_title.clone()}</h2>
                <div class="tn-columns">
                    <NotesSection />
                    <TasksSection />
                </div>
            </Show>
        </div>
    }
}
