//! Mock session gate.
//!
//! Login state is two storage slots: `isLoggedIn` holds the literal string
//! `"true"` while a session is active, and `username` holds the name given
//! at login. Any other value in `isLoggedIn`, or its absence, reads as
//! logged out. The credential check is a plain comparison against the
//! configured pair; this is a convenience gate for a single-user tool, not
//! authentication.

use tracing::debug;

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::storage::KeyValue;

/// Storage slot holding the session flag.
pub const LOGIN_KEY: &str = "isLoggedIn";

/// Storage slot holding the logged-in username.
pub const USERNAME_KEY: &str = "username";

const LOGGED_IN_VALUE: &str = "true";

/// Session state over a [`KeyValue`] port.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValue> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whether a session is currently active.
    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.storage.get(LOGIN_KEY)?.as_deref() == Some(LOGGED_IN_VALUE))
    }

    /// The logged-in username, or `None` when logged out.
    pub fn current_user(&self) -> Result<Option<String>> {
        if !self.is_logged_in()? {
            return Ok(None);
        }
        self.storage.get(USERNAME_KEY)
    }

    /// Check `username`/`password` against the configured pair and mark
    /// the session active. A mismatch fails with `InvalidCredentials` and
    /// writes nothing.
    pub fn login(&self, auth: &AuthConfig, username: &str, password: &str) -> Result<String> {
        if username != auth.username || password != auth.password {
            return Err(Error::InvalidCredentials);
        }

        self.storage.set(LOGIN_KEY, LOGGED_IN_VALUE)?;
        self.storage.set(USERNAME_KEY, username)?;
        debug!(username, "session started");
        Ok(username.to_string())
    }

    /// Clear both session slots. Safe to call when already logged out.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(LOGIN_KEY)?;
        self.storage.remove(USERNAME_KEY)?;
        debug!("session cleared");
        Ok(())
    }

    /// The gate task commands call before touching the list: the
    /// logged-in username, or `NotLoggedIn`.
    pub fn require_login(&self) -> Result<String> {
        if !self.is_logged_in()? {
            return Err(Error::NotLoggedIn);
        }
        Ok(self.storage.get(USERNAME_KEY)?.unwrap_or_default())
    }
}
