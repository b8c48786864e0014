//! Configuration loading and management
//!
//! Handles parsing of the `config.toml` file in the platform config
//! directory, plus resolution of the data directory holding the storage
//! slots.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Override for the directory holding the storage slots
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Login gate credentials
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Credential pair checked at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the platform config directory, or return
    /// defaults when no file exists or it fails to parse.
    pub fn load_default() -> Self {
        match config_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the data directory: explicit override first, then the
    /// config file, then the platform default.
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        default_data_dir()
    }

    fn validate(&self) -> Result<()> {
        if self.auth.username.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "auth.username cannot be empty".to_string(),
            ));
        }
        if self.auth.password.is_empty() {
            return Err(Error::InvalidConfig(
                "auth.password cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Path of the config file in the platform config directory
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "todos").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Platform default for the data directory
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "todos")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            Error::InvalidConfig(
                "could not determine a data directory; pass --data-dir".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_expected() {
        let cfg = Config::default();
        assert!(cfg.data_dir.is_none());
        assert_eq!(cfg.auth.username, "admin");
        assert_eq!(cfg.auth.password, "password");
    }

    #[test]
    fn load_parses_overrides() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let content = r#"
data_dir = "/tmp/todos-data"

[auth]
username = "alice"
password = "s3cret"
"#;
        fs::write(&path, content.trim()).expect("write config");

        let cfg = Config::load(&path).expect("load config");
        assert_eq!(cfg.data_dir, Some(PathBuf::from("/tmp/todos-data")));
        assert_eq!(cfg.auth.username, "alice");
        assert_eq!(cfg.auth.password, "s3cret");
    }

    #[test]
    fn partial_file_keeps_credential_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = \"/somewhere\"").expect("write config");

        let cfg = Config::load(&path).expect("load config");
        assert_eq!(cfg.auth.username, "admin");
        assert_eq!(cfg.auth.password, "password");
    }

    #[test]
    fn empty_credentials_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let content = r#"
[auth]
username = "   "
password = "password"
"#;
        fs::write(&path, content.trim()).expect("write config");

        let err = Config::load(&path).expect_err("invalid config");
        match err {
            Error::InvalidConfig(_) => {}
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn resolve_data_dir_prefers_explicit_override() {
        let cfg = Config {
            data_dir: Some(PathBuf::from("/from-config")),
            ..Config::default()
        };

        let resolved = cfg
            .resolve_data_dir(Some(Path::new("/from-flag")))
            .expect("resolve");
        assert_eq!(resolved, PathBuf::from("/from-flag"));

        let resolved = cfg.resolve_data_dir(None).expect("resolve");
        assert_eq!(resolved, PathBuf::from("/from-config"));
    }

    #[test]
    fn save_writes_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let cfg = Config::default();
        cfg.save(&path).expect("save config");

        let written = fs::read_to_string(&path).expect("read config");
        assert!(written.contains("username = \"admin\""));
    }
}
