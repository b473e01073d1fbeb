//! Dependency-section merging.
//!
//! A section is a top-level object in the manifest holding keyed dependency
//! entries (`dependencies`, `devDependencies`). Mutated sections always come
//! out duplicate-free and lexicographically sorted; a section emptied by
//! removal is deleted from the manifest rather than left as `{}`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::manifest::Manifest;

/// Add every entry of `deps` into the section named `key`.
///
/// Existing entries with the same name are overwritten (last write wins).
/// The section is created if absent and written back with keys sorted
/// ascending. An empty `deps` leaves the manifest untouched.
pub fn add_section(manifest: &mut Manifest, deps: &BTreeMap<String, String>, key: &str) -> Result<()> {
    if deps.is_empty() {
        return Ok(());
    }

    let mut section = manifest
        .section(key)?
        .cloned()
        .unwrap_or_default();
    for (name, spec) in deps {
        section.insert(name.clone(), Value::String(spec.clone()));
    }
    manifest.insert(key, Value::Object(sorted(section)));
    Ok(())
}

/// Remove every key of `deps` from the section named `key`.
///
/// Keys not present are skipped. When the section ends up empty it is
/// deleted from the manifest entirely; otherwise the sorted remainder is
/// written back.
pub fn remove_section(
    manifest: &mut Manifest,
    deps: &BTreeMap<String, String>,
    key: &str,
) -> Result<()> {
    let mut section = manifest
        .section(key)?
        .cloned()
        .unwrap_or_default();
    for name in deps.keys() {
        section.remove(name);
    }
    if section.is_empty() {
        manifest.remove(key);
    } else {
        manifest.insert(key, Value::Object(sorted(section)));
    }
    Ok(())
}

/// Rebuild an object map with keys sorted ascending by string comparison.
fn sorted(map: Map<String, Value>) -> Map<String, Value> {
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries.into_iter().collect()
}
