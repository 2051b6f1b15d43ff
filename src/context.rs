//! Application Context
//!
//! Task actions provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Task;
use crate::tasklist::{self, IdCounter};

/// App-wide task actions provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The task sequence - write
    set_tasks: WriteSignal<Vec<Task>>,
    /// Id source for new tasks - write
    set_id_counter: WriteSignal<IdCounter>,
}

impl AppContext {
    pub fn new(
        set_tasks: WriteSignal<Vec<Task>>,
        set_id_counter: WriteSignal<IdCounter>,
    ) -> Self {
        Self {
            set_tasks,
            set_id_counter,
        }
    }

    /// Append a new task named after the form text
    pub fn add_task(&self, name: &str) {
        let mut id = 0;
        self.set_id_counter.update(|counter| id = counter.next());
        web_sys::console::log_1(&format!("[APP] add task id={}", id).into());
        let name = name.to_string();
        self.set_tasks
            .update(|tasks| *tasks = tasklist::with_task_added(tasks, id, &name));
    }

    /// Drop the task with the given id
    pub fn delete_task(&self, id: u32) {
        web_sys::console::log_1(&format!("[APP] delete task id={}", id).into());
        self.set_tasks
            .update(|tasks| *tasks = tasklist::without_task(tasks, id));
    }

    /// Flip the done flag of the task with the given id
    pub fn toggle_task(&self, id: u32) {
        web_sys::console::log_1(&format!("[APP] toggle task id={}", id).into());
        self.set_tasks
            .update(|tasks| *tasks = tasklist::with_task_toggled(tasks, id));
    }
}
