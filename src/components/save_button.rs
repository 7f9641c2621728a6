//! Save Button Component
//!
//! Button that mirrors the state of its save request.

use leptos::prelude::*;
use task_reconciler::SaveFeedback;

use crate::store::{use_widget_store, WidgetStateStoreFields};

/// Save button with request feedback
///
/// # Arguments
/// * `feedback` - State of the request this button issues
/// * `idle_label` - Label shown while no request is pending or reported
/// * `on_click` - Starts the save
#[component]
pub fn SaveButton(
    #[prop(into)] feedback: Signal<SaveFeedback>,
    #[prop(into)] idle_label: Signal<String>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let store = use_widget_store();

    let class = move || match feedback.get() {
        SaveFeedback::Saved => "tn-button tn-saved",
        SaveFeedback::Failed(_) => "tn-button tn-failed",
        SaveFeedback::Idle | SaveFeedback::Saving => "tn-button",
    };
    let label = move || feedback.get().label(&store.strings().read(), &idle_label.get());

    view! {
        <button
            type="button"
            class=class
            disabled=move || feedback.get().is_busy()
            on:click=move |_| on_click.run(())
        >
            <Show when=move || feedback.get().is_busy()>
                <span class="tn-loader">"⏳"</span>
                " "
            </Show>
            {label}
        </button>
    }
}
