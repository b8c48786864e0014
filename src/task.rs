//! Task list storage.
//!
//! The authoritative task list is a JSON array of `{id, text, completed}`
//! objects in the `todos` slot, insertion order preserved. Every operation
//! re-reads the stored list, applies at most one change, and writes the
//! whole list back; there is no cached copy between calls and no partial
//! update. An operation either commits its full rewrite or leaves the slot
//! untouched.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::storage::KeyValue;

/// Storage slot holding the serialized task list.
pub const TASKS_KEY: &str = "todos";

/// Task identifier: creation time in milliseconds, bumped past every id
/// already in the list so rapid sequential creates stay unique.
pub type TaskId = i64;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

/// Totals reported by [`TaskStore::count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
}

/// The task list and its CRUD operations over a [`KeyValue`] port.
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
    storage: S,
}

impl<S: KeyValue> TaskStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the full task list from storage.
    ///
    /// A missing slot reads as the empty list. A stored value that no
    /// longer parses also degrades to the empty list, with a warning,
    /// rather than failing every subsequent operation.
    pub fn load_all(&self) -> Result<Vec<Task>> {
        let Some(raw) = self.storage.get(TASKS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(key = TASKS_KEY, %err, "stored task list is unreadable, treating it as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Append a task with the trimmed `text` and return it.
    pub fn create(&self, text: &str) -> Result<Task> {
        let text = trimmed_text(text)?;
        let mut tasks = self.load_all()?;
        let task = Task {
            id: next_id(&tasks),
            text,
            completed: false,
        };
        tasks.push(task.clone());
        self.save_all(&tasks)?;
        Ok(task)
    }

    /// Flip a task between completed and pending.
    pub fn toggle_completed(&self, id: TaskId) -> Result<Task> {
        let mut tasks = self.load_all()?;
        let task = find_task(&mut tasks, id)?;
        task.completed = !task.completed;
        let updated = task.clone();
        self.save_all(&tasks)?;
        Ok(updated)
    }

    /// Replace a task's text with the trimmed `new_text`.
    pub fn rename(&self, id: TaskId, new_text: &str) -> Result<Task> {
        let new_text = trimmed_text(new_text)?;
        let mut tasks = self.load_all()?;
        let task = find_task(&mut tasks, id)?;
        task.text = new_text;
        let updated = task.clone();
        self.save_all(&tasks)?;
        Ok(updated)
    }

    /// Remove the task with the given id, preserving the order of the rest.
    ///
    /// The filtered list is written back whether or not anything matched;
    /// the return value reports whether a task was actually removed.
    pub fn delete(&self, id: TaskId) -> Result<bool> {
        let mut tasks = self.load_all()?;
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        let removed = tasks.len() < before;
        self.save_all(&tasks)?;
        Ok(removed)
    }

    /// Count stored tasks and how many of them are completed. Pure read.
    pub fn count(&self) -> Result<TaskCounts> {
        let tasks = self.load_all()?;
        Ok(TaskCounts {
            total: tasks.len(),
            completed: tasks.iter().filter(|task| task.completed).count(),
        })
    }

    fn save_all(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string(tasks)?;
        self.storage.set(TASKS_KEY, &json)
    }
}

fn trimmed_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyTaskText);
    }
    Ok(trimmed.to_string())
}

fn find_task(tasks: &mut [Task], id: TaskId) -> Result<&mut Task> {
    tasks
        .iter_mut()
        .find(|task| task.id == id)
        .ok_or(Error::TaskNotFound(id))
}

/// Ids derive from the wall clock but never repeat: a create landing in
/// the same millisecond as the previous one gets the next integer up.
fn next_id(tasks: &[Task]) -> TaskId {
    let now = Utc::now().timestamp_millis();
    match tasks.iter().map(|task| task.id).max() {
        Some(max) if max >= now => max + 1,
        _ => now,
    }
}
