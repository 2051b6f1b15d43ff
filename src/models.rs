//! Task Model
//!
//! Data structures for the to-do list.

use serde::{Deserialize, Serialize};

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub done: bool,
    pub name: String,
    /// Declared for seed data parity; nothing reads these yet
    pub tags: Option<Vec<String>>,
}

impl Task {
    /// Create a new task with default values
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            done: false,
            name,
            tags: None,
        }
    }
}

/// The four tasks the list resets to on every reload
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            done: true,
            name: "Hacer la colada".to_string(),
            tags: Some(vec!["important".to_string()]),
        },
        Task {
            id: 2,
            done: false,
            name: "Pintar la habitación".to_string(),
            tags: Some(vec!["important".to_string()]),
        },
        Task {
            id: 3,
            done: true,
            name: "Leer 30 minutos".to_string(),
            tags: Some(vec!["not important".to_string()]),
        },
        Task {
            id: 4,
            done: false,
            name: "Acabar la TodoApp".to_string(),
            tags: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(5, "Test task".to_string());
        assert_eq!(task.id, 5);
        assert_eq!(task.name, "Test task");
        assert!(!task.done);
        assert!(task.tags.is_none());
    }

    #[test]
    fn test_seed_tasks_shape() {
        let seed = seed_tasks();
        assert_eq!(seed.len(), 4);

        let ids: Vec<u32> = seed.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let done: Vec<bool> = seed.iter().map(|task| task.done).collect();
        assert_eq!(done, vec![true, false, true, false]);

        assert_eq!(seed[0].tags.as_deref(), Some(&["important".to_string()][..]));
        assert_eq!(seed[2].tags.as_deref(), Some(&["not important".to_string()][..]));
        assert!(seed[3].tags.is_none());
    }

    #[test]
    fn test_task_json_round_trip() {
        let task = Task {
            id: 2,
            done: false,
            name: "Pintar la habitación".to_string(),
            tags: Some(vec!["important".to_string()]),
        };
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
