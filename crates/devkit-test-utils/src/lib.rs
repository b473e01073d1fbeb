//! [`TestPackage`] builder for devkit test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary package directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use devkit_test_utils::TestPackage;
///
/// let pkg = TestPackage::with_manifest(r#"{"name": "demo"}"#);
/// pkg.assert_file_exists("package.json");
/// ```
pub struct TestPackage {
    temp_dir: TempDir,
}

impl Default for TestPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPackage {
    /// Create an empty temporary directory with no manifest.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestPackage: failed to create temp dir"),
        }
    }

    /// Create a temporary directory containing the given `package.json`
    /// content.
    pub fn with_manifest(content: &str) -> Self {
        let pkg = Self::new();
        pkg.write_file("package.json", content);
        pkg
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the package root, creating parent
    /// directories as needed.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("TestPackage: failed to create parent dirs");
        }
        fs::write(&path, content).expect("TestPackage: failed to write file");
    }

    /// Read a file relative to the package root.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("TestPackage: failed to read file")
    }

    /// Read and parse `package.json`.
    pub fn manifest_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("package.json"))
            .expect("TestPackage: package.json is not valid JSON")
    }

    /// Resolve a path relative to the package root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Assert a file exists relative to the package root.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.path(relative).exists(),
            "expected {relative} to exist in test package"
        );
    }

    /// Assert a file does not exist relative to the package root.
    pub fn assert_file_absent(&self, relative: &str) {
        assert!(
            !self.path(relative).exists(),
            "expected {relative} to be absent in test package"
        );
    }
}
