//! In-memory task store
//!
//! Owns the ID → task map and the next-ID counter. IDs are assigned
//! sequentially starting at 1 and are never reused, even after deletion.
//! The store is a plain owned value with no interior mutability; the
//! console session is single-threaded so no locking is needed.

use std::collections::HashMap;

use chrono::Utc;

use crate::{Error, Result};

use super::model::{validate_description, validate_title, Task};

/// In-memory collection of tasks with sequential ID assignment
#[derive(Debug)]
pub struct TaskStore {
    tasks: HashMap<u64, Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Create an empty store. The first task gets ID 1.
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a new task with the given title and optional description.
    ///
    /// Both fields are validated before any state changes, so a failed add
    /// leaves the store (and the ID counter) untouched. The new task gets
    /// the next sequential ID and starts out `Pending`.
    pub fn add(&mut self, title: &str, description: &str) -> Result<Task> {
        let title = validate_title(title)?;
        let description = validate_description(description)?;

        let id = self.next_id;
        self.next_id += 1;
        let task = Task::new(id, title, description);
        self.tasks.insert(task.id, task.clone());

        tracing::debug!("Created task {}", task.id);
        Ok(task)
    }

    /// Get all tasks in creation (ID) order.
    pub fn list(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.values().cloned().collect();
        tasks.sort_by_key(|t| t.id);
        tasks
    }

    /// Look up a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Update the title and/or description of an existing task.
    ///
    /// `None` keeps the current value of a field. Status and ID are never
    /// touched. Validation runs before any field is written, so a failed
    /// update leaves the record unchanged.
    pub fn update(
        &mut self,
        id: u64,
        new_title: Option<&str>,
        new_description: Option<&str>,
    ) -> Result<Task> {
        let new_title = new_title.map(validate_title).transpose()?;
        let new_description = new_description.map(validate_description).transpose()?;

        let task = self.tasks.get_mut(&id).ok_or(Error::TaskNotFound(id))?;
        if let Some(title) = new_title {
            task.title = title;
        }
        if let Some(description) = new_description {
            task.description = description;
        }
        task.updated_at = Utc::now();

        tracing::debug!("Updated task {}", id);
        Ok(task.clone())
    }

    /// Permanently remove a task by ID, returning the removed record.
    ///
    /// The ID is never reassigned to a later task.
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let task = self.tasks.remove(&id).ok_or(Error::TaskNotFound(id))?;
        tracing::debug!("Deleted task {}", id);
        Ok(task)
    }

    /// Flip a task between `Pending` and `Completed`.
    pub fn toggle_status(&mut self, id: u64) -> Result<Task> {
        let task = self.tasks.get_mut(&id).ok_or(Error::TaskNotFound(id))?;
        task.status = task.status.toggled();
        task.updated_at = Utc::now();

        tracing::debug!("Task {} marked as {}", id, task.status);
        Ok(task.clone())
    }

    /// Number of tasks currently in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
