#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the chartjs binary.
#[macro_export]
macro_rules! chartjs {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("chartjs"))
    };
}

/// A bubble chart with one dataset on explicit X and Y axes.
pub const BUBBLE_DOC: &str = r#"{
    "title": "Bubbles",
    "charts": [
        {
            "type": "bubble",
            "label": "test-chart",
            "xAxes": [{"type": "linear", "position": "bottom"}],
            "yAxes": [{"type": "linear", "position": "right"}],
            "datasets": [
                {
                    "x": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
                    "y": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
                    "r": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
                    "xAxis": 0,
                    "yAxis": 0,
                    "label": "HHIHIHI",
                    "backgroundColor": "rgba(0, 255, 0, 0.784)"
                }
            ]
        }
    ]
}"#;

/// Two bar charts described in TOML.
pub const BARS_TOML: &str = r##"
title = "Bars"

[[charts]]
type = "bar"
labels = ["0", "1", "2"]

[[charts.datasets]]
x = [0, 1, 2]
label = "first"

[[charts]]
type = "horizontalBar"
labels = ["a", "b"]

[[charts.datasets]]
x = [5, 6]
backgroundColor = "#ff000080"
"##;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.chartjs.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".chartjs.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
