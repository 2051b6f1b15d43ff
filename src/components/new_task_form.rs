//! New Task Form Component
//!
//! Form for appending new tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Form appending a task named after the input text
#[component]
pub fn NewTaskForm(
    new_task_text: ReadSignal<String>,
    set_new_task_text: WriteSignal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Any text is accepted, empty included
    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_task(&new_task_text.get());
        set_new_task_text.set(String::new());
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                placeholder="New task"
                prop:value=move || new_task_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_task_text.set(input.value());
                }
            />
            <button type="submit" class="add-btn">"+"</button>
        </form>
    }
}
