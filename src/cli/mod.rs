//! Command-line interface for todos
//!
//! This module defines the CLI structure using clap derive macros.
//! Task commands live in `task`, session commands in `session`.

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::storage::FileStore;
use crate::task::TaskId;

mod session;
mod task;

/// Load the config and open the file-backed storage every command uses.
pub(crate) fn open_storage(data_dir: Option<&Path>) -> Result<(Config, FileStore)> {
    let config = Config::load_default();
    let dir = config.resolve_data_dir(data_dir)?;
    Ok((config, FileStore::new(dir)))
}

/// todos - a persistent to-do list behind a mock login gate
///
/// Tasks and session state live in plain files under a data directory;
/// task commands require an active session.
#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the stored list and session state
    #[arg(long, global = true, env = "TODOS_DATA_DIR")]
    pub data_dir: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the list
    Add {
        /// Task text (leading/trailing whitespace is trimmed)
        text: String,
    },

    /// Show the task list
    List,

    /// Flip a task between completed and pending
    Toggle {
        /// Task id (see `todos list`)
        id: TaskId,
    },

    /// Replace a task's text
    Rename {
        /// Task id
        id: TaskId,

        /// Replacement text
        text: String,
    },

    /// Delete a task
    Rm {
        /// Task id
        id: TaskId,
    },

    /// Show task totals
    Count,

    /// Start a session
    Login {
        /// Username
        username: String,

        /// Password
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { text } => task::run_add(task::AddOptions {
                text,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List => task::run_list(task::ListOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Toggle { id } => task::run_toggle(task::ToggleOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rename { id, text } => task::run_rename(task::RenameOptions {
                id,
                text,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Rm { id } => task::run_rm(task::RmOptions {
                id,
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Count => task::run_count(task::CountOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Login { username, password } => {
                session::run_login(session::LoginOptions {
                    username,
                    password,
                    data_dir: self.data_dir,
                    json: self.json,
                    quiet: self.quiet,
                })
            }
            Commands::Logout => session::run_logout(session::LogoutOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::Whoami => session::run_whoami(session::WhoamiOptions {
                data_dir: self.data_dir,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}
