//! todos - Persistent To-Do List Library
//!
//! This library provides the core functionality for the todos CLI tool:
//! a single-user task list persisted through a key-value port, behind a
//! mock login gate.
//!
//! # Core Concepts
//!
//! - **Storage slots**: all persistent state is three string slots
//!   (`todos`, `isLoggedIn`, `username`) behind the `KeyValue` port
//! - **Task list**: an ordered list of `{id, text, completed}` entries;
//!   every operation re-reads the list, mutates it, and rewrites it whole
//! - **Session gate**: task commands require an active session, started
//!   by a mock credential check
//! - **Pure views**: rendering maps the list to data-only rows, so no
//!   front end is baked into the store
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `config.toml`
//! - `error`: error types and result aliases
//! - `output`: shared CLI output formatting
//! - `session`: mock login gate over the session slots
//! - `storage`: key-value port with file and in-memory adapters
//! - `task`: the task list and its CRUD operations
//! - `view`: pure rendering of the task list

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod session;
pub mod storage;
pub mod task;
pub mod view;

pub use error::{Error, Result};
