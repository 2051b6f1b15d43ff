//! Task List Operations
//!
//! Pure functions over the task sequence. Each operation returns a fresh
//! Vec and the caller replaces the old sequence wholesale.

use crate::models::Task;

/// Monotonic id source for new tasks, seeded at the initial list length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdCounter(u32);

impl IdCounter {
    pub fn seeded_from(tasks: &[Task]) -> Self {
        Self(tasks.len() as u32)
    }

    /// Increment, then hand out the new id
    pub fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

/// Append a new task with the given id; the done flag starts false
pub fn with_task_added(tasks: &[Task], id: u32, name: &str) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(Task::new(id, name.to_string()));
    next
}

/// Drop the task with the given id; no-op when absent
pub fn without_task(tasks: &[Task], id: u32) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

/// Flip one task's done flag within a freshly copied sequence
pub fn with_task_toggled(tasks: &[Task], id: u32) -> Vec<Task> {
    let mut next = tasks.to_vec();
    if let Some(task) = next.iter_mut().find(|task| task.id == id) {
        task.done = !task.done;
    }
    next
}

/// Case-insensitive substring match on a task name
pub fn matches_filter(name: &str, filter: &str) -> bool {
    name.to_lowercase().contains(&filter.to_lowercase())
}

/// Tasks whose name contains the filter text; an empty filter keeps all
pub fn filter_tasks(tasks: &[Task], filter: &str) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches_filter(&task.name, filter))
        .cloned()
        .collect()
}
