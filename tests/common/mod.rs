//! Shared testing utilities for timetabler CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Form content for the reference submission.
pub const SAMPLE_FORM: &str = r#"
"timetable-name" = "T1"
classDays = "Mon-Fri"
morningPeriods = "4"
afternoonPeriods = "4"
gradeClass = "G1"
subject = "Math"
teacher = "Alice"
classroom = "R101"
"#;

/// Reply body with two entries, as sent by the scheduling service.
pub const TWO_ENTRY_REPLY: &str = r#"{
    "success": true,
    "schedule": [
        {"class": "G1", "subject": "Math", "teacher": "Alice", "classroom": "R101",
         "weekday": "一", "period": 1, "time": "08:00-08:45"},
        {"class": "G1", "subject": "Math", "teacher": "Alice", "classroom": "R101",
         "weekday": "三", "period": 2, "time": "08:55-09:40"}
    ],
    "errors": null
}"#;

/// Testing harness providing an isolated working directory for CLI exercises.
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

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `timetabler` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("timetabler").expect("Failed to locate timetabler binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Build a `submit` command signed in as a test operator.
    pub fn submit(&self) -> Command {
        let mut cmd = self.cli();
        cmd.args(["submit", "--username", "admin", "--password", "admin"]);
        cmd
    }

    /// Write a file relative to the work directory and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write `.timetabler/form.toml`.
    pub fn write_default_form(&self, content: &str) -> PathBuf {
        self.write_file(".timetabler/form.toml", content)
    }

    /// Write `.timetabler/config.toml`.
    pub fn write_config(&self, content: &str) -> PathBuf {
        self.write_file(".timetabler/config.toml", content)
    }

    /// HTML files rendered into `dir` (relative to the work directory), sorted by name.
    pub fn rendered_files_in(&self, dir: &str) -> Vec<PathBuf> {
        let dir = self.work_dir.join(dir);
        if !dir.exists() {
            return vec![];
        }
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .expect("Failed to read output directory")
            .map(|entry| entry.expect("Failed to read directory entry").path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
            .collect();
        files.sort();
        files
    }

    /// HTML files rendered into the default output directory.
    pub fn rendered_files(&self) -> Vec<PathBuf> {
        self.rendered_files_in("timetables")
    }

    /// Read a rendered document.
    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read rendered file")
    }
}

/// Count table rows in a rendered document.
#[allow(dead_code)]
pub fn table_rows(markup: &str) -> usize {
    markup.matches("<tr>").count()
}
