use std::collections::BTreeMap;

use crate::task::{normalized_description, Status, Task, ValidationError};

/// In-memory task collection with an auto-incrementing id counter.
///
/// Identifiers start at 1, grow strictly, and are never reused: deleting
/// a task retires its id for the lifetime of the registry. Every
/// validation check runs before any mutation, so a failed call leaves the
/// registry untouched.
#[derive(Debug)]
pub struct TaskRegistry {
    items: BTreeMap<u64, Task>,
    next_id: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        TaskRegistry {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Add a task with the next free id and return a copy of it.
    pub fn add(&mut self, description: &str) -> Result<Task, ValidationError> {
        let task = Task::new(self.next_id, description)?;
        self.next_id += 1;
        self.items.insert(task.id(), task.clone());
        Ok(task)
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.items.get(&id)
    }

    /// Replace a task's description in place. Validation runs before the
    /// existence check; an unknown id is `Ok(false)`, not an error.
    pub fn update(&mut self, id: u64, new_description: &str) -> Result<bool, ValidationError> {
        let description = normalized_description(new_description)?;
        match self.items.get_mut(&id) {
            Some(task) => {
                task.replace_description(description);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn complete(&mut self, id: u64) -> bool {
        match self.items.get_mut(&id) {
            Some(task) => {
                task.complete();
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: u64) -> bool {
        self.items.remove(&id).is_some()
    }

    /// All tasks, ascending by id.
    pub fn all(&self) -> Vec<&Task> {
        self.items.values().collect()
    }

    pub fn pending(&self) -> Vec<&Task> {
        self.items
            .values()
            .filter(|task| task.status() == Status::Pending)
            .collect()
    }

    pub fn completed(&self) -> Vec<&Task> {
        self.items
            .values()
            .filter(|task| task.status() == Status::Completed)
            .collect()
    }

    /// The id the next successful `add` will use. Inspection only.
    pub fn peek_next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        TaskRegistry::new()
    }
}
