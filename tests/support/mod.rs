use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home for one test: its own data directory and config
/// directory, so nothing on the host machine leaks in.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("todos").expect("binary");
        cmd.env("TODOS_DATA_DIR", self.data_dir());
        cmd.env("HOME", self.dir.path());
        cmd.env("XDG_CONFIG_HOME", self.config_dir());
        cmd.env("XDG_DATA_HOME", self.dir.path().join("data-home"));
        cmd
    }

    /// Log in with the default credentials.
    pub fn login(&self) {
        self.cmd()
            .args(["login", "admin", "password"])
            .assert()
            .success();
    }

    pub fn read_slot(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.data_dir().join(key)).ok()
    }

    pub fn write_slot(&self, key: &str, contents: &str) {
        let dir = self.data_dir();
        fs::create_dir_all(&dir).expect("create data dir");
        fs::write(dir.join(key), contents).expect("write slot");
    }

    /// Place a config file where the binary will find it.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_dir().join("todos");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), contents).expect("write config");
    }
}
