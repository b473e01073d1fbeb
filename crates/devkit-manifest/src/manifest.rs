//! The package manifest: an ordered JSON object loaded from `package.json`.
//!
//! The manifest is mutated in place during an invocation and written back
//! exactly once, and only if its rendered form differs from the form it had
//! at load time. Rendering uses two-space indentation plus a trailing
//! newline, matching the convention of the ecosystem the manifest belongs to.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The canonical filename for package manifests.
pub const MANIFEST_FILENAME: &str = "package.json";

/// An in-memory package manifest bound to its on-disk location.
///
/// Key order is preserved as found on disk, so untouched sections render
/// byte-identically on save.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    root: Map<String, Value>,
    /// Rendered form captured at load time; `None` for freshly created
    /// manifests, which are always written on save.
    loaded_form: Option<String>,
}

impl Manifest {
    /// Read and parse a manifest from `dir/package.json`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if !path.exists() {
            return Err(Error::ManifestNotFound(path));
        }
        let content = std::fs::read_to_string(&path)?;
        Self::from_str_at(&content, path)
    }

    /// Parse a manifest from a JSON string, bound to the given path.
    pub fn from_str_at(content: &str, path: PathBuf) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(root) = value else {
            return Err(Error::NotAnObject(path));
        };
        let mut manifest = Self {
            path,
            root,
            loaded_form: None,
        };
        manifest.loaded_form = Some(manifest.render());
        Ok(manifest)
    }

    /// Create a new, empty manifest that will be written to
    /// `dir/package.json` on save regardless of content.
    pub fn create(dir: &Path) -> Self {
        Self {
            path: dir.join(MANIFEST_FILENAME),
            root: Map::new(),
            loaded_form: None,
        }
    }

    /// The on-disk location of this manifest.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a top-level value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Get a mutable top-level value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.root.get_mut(key)
    }

    /// Insert or replace a top-level value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.root.insert(key.into(), value);
    }

    /// Remove a top-level key. Returns the removed value, if any.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.root.remove(key)
    }

    /// Whether a top-level key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// Get a top-level section as an object, if present.
    ///
    /// Returns an error if the key exists but is not a JSON object.
    pub fn section(&self, key: &str) -> Result<Option<&Map<String, Value>>> {
        match self.root.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(Error::SectionNotAnObject {
                section: key.to_string(),
            }),
        }
    }

    /// Whether `dep` exists as a key in the section named `key`.
    pub fn section_has_key(&self, key: &str, dep: &str) -> bool {
        matches!(self.root.get(key), Some(Value::Object(map)) if map.contains_key(dep))
    }

    /// Render the manifest with two-space indentation and a trailing newline.
    pub fn render(&self) -> String {
        let mut rendered = serde_json::to_string_pretty(&Value::Object(self.root.clone()))
            .unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }

    /// Whether the manifest's rendered form differs from the form captured
    /// at load time.
    pub fn is_dirty(&self) -> bool {
        match &self.loaded_form {
            Some(loaded) => *loaded != self.render(),
            None => true,
        }
    }

    /// Write the manifest back to disk if it changed since load.
    ///
    /// Returns `true` when a write actually happened.
    pub fn save(&mut self) -> Result<bool> {
        let rendered = self.render();
        if self.loaded_form.as_deref() == Some(rendered.as_str()) {
            tracing::debug!(path = %self.path.display(), "manifest unchanged, skipping write");
            return Ok(false);
        }
        std::fs::write(&self.path, &rendered)?;
        tracing::debug!(path = %self.path.display(), "manifest written");
        self.loaded_form = Some(rendered);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const BASIC: &str = r#"{
  "name": "demo",
  "version": "1.0.0"
}
"#;

    #[test]
    fn test_load_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILENAME), "{ not json").unwrap();
        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ManifestParse(_)));
    }

    #[test]
    fn test_load_non_object_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILENAME), "[1, 2, 3]").unwrap();
        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, Error::NotAnObject(_)));
    }

    #[test]
    fn test_render_two_space_indent_trailing_newline() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(MANIFEST_FILENAME), BASIC).unwrap();
        let manifest = Manifest::load(temp.path()).unwrap();
        assert_eq!(manifest.render(), BASIC);
    }

    #[test]
    fn test_save_skips_unchanged_manifest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILENAME);
        std::fs::write(&path, BASIC).unwrap();

        let mut manifest = Manifest::load(temp.path()).unwrap();
        assert!(!manifest.is_dirty());
        assert!(!manifest.save().unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), BASIC);
    }

    #[test]
    fn test_save_writes_changed_manifest_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILENAME);
        std::fs::write(&path, BASIC).unwrap();

        let mut manifest = Manifest::load(temp.path()).unwrap();
        manifest.insert("description", Value::String("demo package".to_string()));
        assert!(manifest.is_dirty());
        assert!(manifest.save().unwrap());
        // Second save is a no-op
        assert!(!manifest.save().unwrap());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"description\": \"demo package\""));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_create_always_writes() {
        let temp = TempDir::new().unwrap();
        let mut manifest = Manifest::create(temp.path());
        manifest.insert("name", Value::String("fresh".to_string()));
        assert!(manifest.is_dirty());
        assert!(manifest.save().unwrap());
        assert!(temp.path().join(MANIFEST_FILENAME).exists());
    }

    #[test]
    fn test_key_order_preserved() {
        let temp = TempDir::new().unwrap();
        let content = "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}\n";
        std::fs::write(temp.path().join(MANIFEST_FILENAME), content).unwrap();
        let manifest = Manifest::load(temp.path()).unwrap();
        assert_eq!(manifest.render(), content);
    }

    #[test]
    fn test_section_rejects_non_object() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILENAME),
            "{\n  \"dependencies\": \"oops\"\n}\n",
        )
        .unwrap();
        let manifest = Manifest::load(temp.path()).unwrap();
        let err = manifest.section("dependencies").unwrap_err();
        assert!(matches!(err, Error::SectionNotAnObject { .. }));
    }
}
