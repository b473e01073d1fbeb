//! Side-file scaffolding.
//!
//! Every side file is created once with defaults when absent and never
//! overwritten afterwards. The one exception is `tsconfig.json`, which is
//! merged rather than replaced: missing default keys are filled in while
//! user customizations always win.

use std::path::Path;

use serde_json::Value;

use devkit_manifest::Manifest;

use crate::error::{Error, Result};

/// TypeScript project configuration filename.
pub const TSCONFIG_FILENAME: &str = "tsconfig.json";
/// ESLint rule configuration filename.
pub const ESLINTRC_FILENAME: &str = ".eslintrc.json";
/// Prettier configuration filename.
pub const PRETTIERRC_FILENAME: &str = ".prettierrc.json";
/// Ignore-list filename.
pub const GITIGNORE_FILENAME: &str = ".gitignore";
/// Task-runner bootstrap script, relative to the project root.
pub const BOOTSTRAP_SCRIPT: &str = "scripts/bootstrap.mjs";

const DEFAULT_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2019",
    "module": "commonjs",
    "outDir": "dist",
    "strict": true,
    "esModuleInterop": true,
    "declaration": true,
    "sourceMap": true
  },
  "include": ["src"],
  "exclude": ["node_modules", "dist"]
}
"#;

const DEFAULT_ESLINTRC: &str = r#"{
  "extends": ["standard"],
  "env": {
    "node": true
  },
  "parserOptions": {
    "ecmaVersion": 2020,
    "sourceType": "module"
  }
}
"#;

const DEFAULT_PRETTIERRC: &str = r#"{
  "singleQuote": true,
  "semi": false
}
"#;

const DEFAULT_GITIGNORE: &str = "node_modules/\n";

const DEFAULT_BOOTSTRAP: &str = r#"#!/usr/bin/env node
// Task-runner entry point. Generated once; edit freely.
import { spawn } from 'node:child_process'

const [task, ...args] = process.argv.slice(2)
const child = spawn('npx', ['devkit', task, ...args], { stdio: 'inherit' })
child.on('exit', (code) => process.exit(code ?? 1))
"#;

/// Write `content` to `path` unless the file already exists.
///
/// Returns `true` when the file was created. Parent directories are
/// created as needed.
pub fn write_if_absent(path: &Path, content: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "side file created");
    Ok(true)
}

/// Create `package.json` with minimal metadata when absent.
///
/// The package name is derived from the directory name. Returns `true`
/// when a manifest was created.
pub fn ensure_package_json(root: &Path) -> Result<bool> {
    if root.join(devkit_manifest::MANIFEST_FILENAME).exists() {
        return Ok(false);
    }
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "package".to_string());
    let mut manifest = Manifest::create(root);
    manifest.insert("name", Value::String(name));
    manifest.insert("version", Value::String("0.0.1".to_string()));
    manifest.save()?;
    Ok(true)
}

/// Create `tsconfig.json` with defaults, or fill missing default keys into
/// an existing one without disturbing user values.
///
/// Returns `true` when the file was created or changed.
pub fn ensure_tsconfig(root: &Path) -> Result<bool> {
    let path = root.join(TSCONFIG_FILENAME);
    if write_if_absent(&path, DEFAULT_TSCONFIG)? {
        return Ok(true);
    }

    let existing = std::fs::read_to_string(&path)?;
    let user: Value = serde_json::from_str(&existing).map_err(|source| Error::SideFileParse {
        path: path.clone(),
        source,
    })?;

    // Defaults form the base; the user's file is overlaid on top and wins
    // every conflict.
    let mut merged: Value =
        serde_json::from_str(DEFAULT_TSCONFIG).expect("default tsconfig is valid JSON");
    deep_merge_value(&mut merged, &user);

    if merged == user {
        return Ok(false);
    }
    let mut rendered = serde_json::to_string_pretty(&merged).map_err(|source| {
        Error::SideFileParse {
            path: path.clone(),
            source,
        }
    })?;
    rendered.push('\n');
    std::fs::write(&path, rendered)?;
    tracing::debug!(path = %path.display(), "tsconfig defaults merged");
    Ok(true)
}

/// Create `.eslintrc.json` with defaults when absent.
pub fn ensure_eslintrc(root: &Path) -> Result<bool> {
    write_if_absent(&root.join(ESLINTRC_FILENAME), DEFAULT_ESLINTRC)
}

/// Create `.prettierrc.json` with defaults when absent.
pub fn ensure_prettierrc(root: &Path) -> Result<bool> {
    write_if_absent(&root.join(PRETTIERRC_FILENAME), DEFAULT_PRETTIERRC)
}

/// Create the task-runner bootstrap script when absent.
pub fn ensure_bootstrap(root: &Path) -> Result<bool> {
    write_if_absent(&root.join(BOOTSTRAP_SCRIPT), DEFAULT_BOOTSTRAP)
}

/// Make sure each of `entries` appears as a line in `.gitignore`.
///
/// The file is created with defaults when absent; existing lines are never
/// rewritten or reordered.
pub fn ensure_gitignore_entries(root: &Path, entries: &[&str]) -> Result<bool> {
    let path = root.join(GITIGNORE_FILENAME);
    let mut content = if path.exists() {
        std::fs::read_to_string(&path)?
    } else {
        DEFAULT_GITIGNORE.to_string()
    };

    let existing: Vec<&str> = content.lines().collect();
    let missing: Vec<&str> = entries
        .iter()
        .filter(|entry| !existing.contains(*entry))
        .copied()
        .collect();
    if path.exists() && missing.is_empty() {
        return Ok(false);
    }

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for entry in missing {
        content.push_str(entry);
        content.push('\n');
    }
    std::fs::write(&path, content)?;
    Ok(true)
}

/// Deep-merge `overlay` into `base`. Objects merge recursively; any other
/// overlay value replaces the base value.
fn deep_merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge_value(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base_value, overlay_value) => {
            *base_value = overlay_value.clone();
        }
    }
}
