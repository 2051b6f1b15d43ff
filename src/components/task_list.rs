//! Task List Component
//!
//! Renders the subset of tasks matching the filter text.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::models::Task;
use crate::tasklist::filter_tasks;

/// Visible task list, narrowed by the filter text
#[component]
pub fn TaskList(
    tasks: ReadSignal<Vec<Task>>,
    filter_text: ReadSignal<String>,
) -> impl IntoView {
    let visible_tasks = move || filter_tasks(&tasks.get(), &filter_text.get());

    view! {
        <ul class="task-list">
            <For
                each=visible_tasks
                // Key on the mutable fields too so a toggle re-renders the row
                key=|task| (task.id, task.done, task.name.clone())
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
