//! Shared testing utilities for elvite CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Scratch directory outside the project.
    pub fn outside_dir(&self) -> PathBuf {
        let dir = self.root.path().join("outside");
        fs::create_dir_all(&dir).expect("Failed to create outside directory");
        dir
    }

    /// Build a command for invoking the compiled `elvite` binary within the project directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `elvite` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("elvite").expect("Failed to locate elvite binary");
        cmd.current_dir(dir.as_ref()).env("RUST_LOG", "off");
        cmd
    }

    /// Scaffold an Electron project named `demo`.
    pub fn init_project(&self) {
        self.cli().args(["new", "demo"]).assert().success();
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", name, err))
    }

    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.work_dir.join(name), content)
            .unwrap_or_else(|err| panic!("Failed to write {}: {}", name, err));
    }

    pub fn exists(&self, name: &str) -> bool {
        self.work_dir.join(name).exists()
    }

    /// Parsed package.json of the project.
    pub fn manifest(&self) -> serde_json::Value {
        serde_json::from_str(&self.read("package.json")).expect("package.json should be valid JSON")
    }
}
