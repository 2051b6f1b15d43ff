//! Search Filter Form Component
//!
//! Controlled filter input with a clear button.

use leptos::prelude::*;

/// Filter input narrowing the visible task list by name
#[component]
pub fn SearchFilterForm(
    filter_text: ReadSignal<String>,
    set_filter_text: WriteSignal<String>,
) -> impl IntoView {
    let clear_filters = move |_| set_filter_text.set(String::new());

    view! {
        <div class="filter-form">
            <input
                type="text"
                placeholder="Search tasks..."
                prop:value=move || filter_text.get()
                on:input=move |ev| set_filter_text.set(event_target_value(&ev))
            />
            <button class="clear-btn" on:click=clear_filters>
                "Clear filters"
            </button>
        </div>
    }
}
