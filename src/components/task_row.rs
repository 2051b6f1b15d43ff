//! Task Row Component
//!
//! A single task row in the list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;

/// One task: completion checkbox, name, delete button
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let done = task.done;
    let name = task.name.clone();

    view! {
        <li class=move || if done { "task-row completed" } else { "task-row" }>
            <div class="task-row-main">
                <input
                    type="checkbox"
                    checked=done
                    on:change=move |_| ctx.toggle_task(id)
                />
                <p class="task-name">{name}</p>
            </div>
            <button class="delete-btn" on:click=move |_| ctx.delete_task(id)>
                "×"
            </button>
        </li>
    }
}
