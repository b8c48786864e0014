//! todos session command implementations.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::{emit_success, OutputOptions};
use crate::session::SessionStore;

pub struct LoginOptions {
    pub username: String,
    pub password: String,
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct LogoutOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct WhoamiOptions {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct SessionOutput {
    username: String,
}

#[derive(Serialize)]
struct LogoutOutput {
    was_logged_in: bool,
}

pub fn run_login(opts: LoginOptions) -> Result<()> {
    let (config, storage) = super::open_storage(opts.data_dir.as_deref())?;
    let session = SessionStore::new(storage);

    let username = session.login(&config.auth, &opts.username, &opts.password)?;

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "login",
        &SessionOutput { username: username.clone() },
        &[format!("Logged in as {username}")],
    )
}

pub fn run_logout(opts: LogoutOptions) -> Result<()> {
    let (_config, storage) = super::open_storage(opts.data_dir.as_deref())?;
    let session = SessionStore::new(storage);

    let was_logged_in = session.is_logged_in()?;
    session.logout()?;

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "logout",
        &LogoutOutput { was_logged_in },
        &["Logged out".to_string()],
    )
}

pub fn run_whoami(opts: WhoamiOptions) -> Result<()> {
    let (_config, storage) = super::open_storage(opts.data_dir.as_deref())?;
    let session = SessionStore::new(storage);

    let username = session.current_user()?.ok_or(Error::NotLoggedIn)?;

    emit_success(
        OutputOptions { json: opts.json, quiet: opts.quiet },
        "whoami",
        &SessionOutput { username: username.clone() },
        &[format!("Logged in as {username}")],
    )
}
