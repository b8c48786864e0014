//! todos task command implementations.
//!
//! Every command here follows the same shape: check the login gate, run
//! one operation on the task store, reload the list, and re-render it.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, OutputOptions};
use crate::session::SessionStore;
use crate::storage::FileStore;
use crate::task::{Task, TaskCounts, TaskId, TaskStore};
use crate::view::{self, TaskRow};

pub struct AddOptions {
    pub text: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ToggleOptions {
    pub id: TaskId,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RenameOptions {
    pub id: TaskId,
    pub text: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct RmOptions {
    pub id: TaskId,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct CountOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct AddOutput {
    task: TaskRow,
    tasks: Vec<TaskRow>,
    counts: TaskCounts,
}

#[derive(Serialize)]
struct ListOutput {
    tasks: Vec<TaskRow>,
    counts: TaskCounts,
}

#[derive(Serialize)]
struct ToggleOutput {
    task: TaskRow,
    tasks: Vec<TaskRow>,
    counts: TaskCounts,
}

#[derive(Serialize)]
struct RenameOutput {
    task: TaskRow,
    tasks: Vec<TaskRow>,
    counts: TaskCounts,
}

#[derive(Serialize)]
struct RmOutput {
    removed: bool,
    tasks: Vec<TaskRow>,
    counts: TaskCounts,
}

pub fn run_add(opts: AddOptions) -> Result<()> {
    let store = open_gated_store(opts.data_dir.as_deref())?;

    let task = store.create(&opts.text)?;
    let (rows, counts) = reload(&store)?;

    let mut lines = vec![format!("Added task {}", task.id)];
    push_rendered_list(&mut lines, &rows, counts);

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "add",
        &AddOutput { task: TaskRow::from(&task), tasks: rows, counts },
        &lines,
    )
}

pub fn run_list(opts: ListOptions) -> Result<()> {
    let store = open_gated_store(opts.data_dir.as_deref())?;

    let (rows, counts) = reload(&store)?;

    let mut lines = Vec::new();
    if rows.is_empty() {
        lines.push("No tasks yet.".to_string());
        lines.push(view::render_count(counts));
    } else {
        push_rendered_list(&mut lines, &rows, counts);
    }

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "list",
        &ListOutput { tasks: rows, counts },
        &lines,
    )
}

pub fn run_toggle(opts: ToggleOptions) -> Result<()> {
    let store = open_gated_store(opts.data_dir.as_deref())?;

    let task = store.toggle_completed(opts.id)?;
    let (rows, counts) = reload(&store)?;

    let state = if task.completed { "completed" } else { "pending" };
    let mut lines = vec![format!("Task {} is now {state}", task.id)];
    push_rendered_list(&mut lines, &rows, counts);

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "toggle",
        &ToggleOutput { task: TaskRow::from(&task), tasks: rows, counts },
        &lines,
    )
}

pub fn run_rename(opts: RenameOptions) -> Result<()> {
    let store = open_gated_store(opts.data_dir.as_deref())?;

    let task = store.rename(opts.id, &opts.text)?;
    let (rows, counts) = reload(&store)?;

    let mut lines = vec![format!("Renamed task {}", task.id)];
    push_rendered_list(&mut lines, &rows, counts);

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "rename",
        &RenameOutput { task: TaskRow::from(&task), tasks: rows, counts },
        &lines,
    )
}

pub fn run_rm(opts: RmOptions) -> Result<()> {
    let store = open_gated_store(opts.data_dir.as_deref())?;

    let removed = store.delete(opts.id)?;
    let (rows, counts) = reload(&store)?;

    let mut lines = vec![if removed {
        format!("Deleted task {}", opts.id)
    } else {
        format!("No task matched {}", opts.id)
    }];
    push_rendered_list(&mut lines, &rows, counts);

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "rm",
        &RmOutput { removed, tasks: rows, counts },
        &lines,
    )
}

pub fn run_count(opts: CountOptions) -> Result<()> {
    let store = open_gated_store(opts.data_dir.as_deref())?;

    let counts = store.count()?;

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "count",
        &counts,
        &[view::render_count(counts)],
    )
}

/// Open the task store after the session gate has passed.
fn open_gated_store(data_dir: Option<&std::path::Path>) -> Result<TaskStore<FileStore>> {
    let (_config, storage) = super::open_storage(data_dir)?;
    SessionStore::new(storage.clone()).require_login()?;
    Ok(TaskStore::new(storage))
}

/// Full reload after an operation, mapped to view rows.
fn reload(store: &TaskStore<FileStore>) -> Result<(Vec<TaskRow>, TaskCounts)> {
    let tasks: Vec<Task> = store.load_all()?;
    let counts = store.count()?;
    Ok((view::view_model(&tasks), counts))
}

fn push_rendered_list(lines: &mut Vec<String>, rows: &[TaskRow], counts: TaskCounts) {
    lines.extend(view::render_lines(rows));
    lines.push(view::render_count(counts));
}
