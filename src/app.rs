//! To-Do App
//!
//! Root application component owning all state.

use leptos::prelude::*;

use crate::components::{Navbar, NewTaskForm, SearchFilterForm, TaskList, Title};
use crate::context::AppContext;
use crate::models::seed_tasks;
use crate::tasklist::IdCounter;

#[component]
pub fn App() -> impl IntoView {
    let seed = seed_tasks();
    let counter = IdCounter::seeded_from(&seed);

    // State
    let (tasks, set_tasks) = signal(seed);
    let (filter_text, set_filter_text) = signal(String::new());
    let (new_task_text, set_new_task_text) = signal(String::new());
    let (_id_counter, set_id_counter) = signal(counter);

    // Provide task actions to all children
    provide_context(AppContext::new(set_tasks, set_id_counter));

    view! {
        <Navbar />
        <div class="app-wrapper">
            <Title>"To-Do App"</Title>
            <SearchFilterForm filter_text=filter_text set_filter_text=set_filter_text />
            <TaskList tasks=tasks filter_text=filter_text />
            <NewTaskForm new_task_text=new_task_text set_new_task_text=set_new_task_text />
        </div>
    }
}
