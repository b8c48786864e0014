//! Pure rendering of the task list.
//!
//! Maps tasks to a data-only view model and then to text lines. Nothing
//! here touches storage or knows about the command layer, so any front
//! end can reuse the same rows.

use serde::Serialize;

use crate::task::{Task, TaskCounts, TaskId};

/// One displayable row of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}

/// Map the task list to rows, insertion order preserved.
pub fn view_model(tasks: &[Task]) -> Vec<TaskRow> {
    tasks.iter().map(TaskRow::from).collect()
}

/// Checkbox-style lines, one per row.
pub fn render_lines(rows: &[TaskRow]) -> Vec<String> {
    rows.iter()
        .map(|row| {
            let mark = if row.completed { 'x' } else { ' ' };
            format!("[{mark}] {} {}", row.id, row.text)
        })
        .collect()
}

/// Counter line shown after every list change.
pub fn render_count(counts: TaskCounts) -> String {
    format!("{} tasks ({} completed)", counts.total, counts.completed)
}
