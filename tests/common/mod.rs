#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper struct to run listview commands against an isolated state directory
pub struct ListviewTest {
    pub temp_dir: TempDir,
}

impl ListviewTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ListviewTest { temp_dir }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.temp_dir.path().join("state")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_listview"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("LISTVIEW_STATE_DIR", self.state_dir())
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute listview command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut args = args.to_vec();
        args.push("--json");
        let stdout = self.run_success(&args);
        serde_json::from_str(&stdout).expect("Command output should be valid JSON")
    }

    /// Write a file relative to the temp directory and return its path
    pub fn write_file(&self, name: &str, content: &str) -> String {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path.to_string_lossy().to_string()
    }

    pub fn read_state_file(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.state_dir().join(name)).ok()
    }
}

impl Default for ListviewTest {
    fn default() -> Self {
        Self::new()
    }
}
