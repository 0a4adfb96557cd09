//! Common test utilities for ac integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated project, source directory and home directory
pub struct TestWorkspace {
    pub temp: TempDir,
    /// Target project directory; commands run here
    pub path: PathBuf,
    /// Source directory passed with `--source`
    pub source: PathBuf,
    /// `$HOME` for the spawned binary
    pub home: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let source = temp.path().join("source");
        let home = temp.path().join("home");
        for dir in [&path, &source, &home] {
            std::fs::create_dir_all(dir).expect("Failed to create directory");
        }
        Self {
            temp,
            path,
            source,
            home,
        }
    }

    /// Workspace whose source holds one document, two skills and one subagent
    pub fn with_source() -> Self {
        let workspace = Self::new();
        workspace.write_source("AGENTS.md", "# Shared rules");
        workspace.write_source(
            "skills/review/SKILL.md",
            "---\nname: review\ndescription: Review code\n---\n\nReview carefully.",
        );
        workspace.write_source("skills/review/checklist.md", "- tests");
        workspace.write_source("skills/notes/README.md", "notes");
        workspace.write_source("subagents/planner.md", "# Planner");
        workspace
    }

    /// Write a file relative to the project directory
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    /// Write a file relative to the source directory
    pub fn write_source(&self, path: &str, content: &str) {
        write(&self.source.join(path), content);
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Settings file location for the spawned binary
    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        write(&self.config_path(), content);
    }

    /// `ac` running in the project directory, isolated from the developer's
    /// environment and settings
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ac").expect("Failed to find ac binary");
        cmd.current_dir(&self.path);
        cmd.env_remove("AC_SOURCE");
        cmd.env_remove("AC_TARGET");
        cmd.env_remove("AC_LOG");
        cmd.env("AC_CONFIG", self.config_path());
        cmd.env("HOME", &self.home);
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// `ac copy --source <source> <args>`
    pub fn copy(&self, args: &[&str]) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("copy").arg("--source").arg(&self.source).args(args);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

fn write(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
