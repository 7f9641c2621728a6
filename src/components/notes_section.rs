//! Notes Section Component
//!
//! Free-text notes with explicit save and blur-driven auto-save.

use leptos::prelude::*;

use crate::components::SaveButton;
use crate::store::{save_notes, schedule_notes_autosave, use_widget_store, WidgetStateStoreFields};

#[component]
pub fn NotesSection() -> impl IntoView {
    let store = use_widget_store();
    let strings = store.strings();

    let save_now = move |_| {
        let text = store.notes().read_untracked().value().to_string();
        save_notes(store, text);
    };

    view! {
        <section class="tn-notes">
            <h3>{move || strings.read().notes_title.clone()}</h3>
            <textarea
                class="tn-notes-input"
                rows="8"
                placeholder=move || strings.read().notes_placeholder.clone()
                prop:value=move || store.notes().read().value().to_string()
                on:input=move |ev| store.notes().write().set_value(event_target_value(&ev))
                on:blur=move |_| schedule_notes_autosave(store)
            ></textarea>
            <SaveButton
                feedback=Signal::derive(move || store.notes_feedback().read().current().clone())
                idle_label=Signal::derive(move || strings.read().save_notes.clone())
                on_click=Callback::new(save_now)
            />
        </section>
    }
}
