#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated HOME/XDG config and a scratch working directory per test.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("seemstome");
        cmd.current_dir(&self.work)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.work.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work.join(rel)).expect("read output")
    }

    /// Install a shell script as the scaffolder via `.seemstome.toml`.
    ///
    /// The script runs as `sh <script> scaffold <payload>`.
    pub fn scaffolder(&self, body: &str) -> PathBuf {
        let script = self.write("fake-scaffolder.sh", body);
        self.write(
            ".seemstome.toml",
            format!(
                "[scaffolder]\nprogram = \"sh\"\nargs = [{:?}]\n",
                script.display().to_string()
            ),
        );
        script
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.work.join(rel)
    }
}

