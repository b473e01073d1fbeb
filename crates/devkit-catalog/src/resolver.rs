//! Single-pass feature implication resolution.
//!
//! Given the currently active feature set and a list of names to add or
//! remove, computes the closed set to apply. Implication checks run against
//! the post-change set, so the two hard-coded levels of chaining (typedoc
//! pulls in typescript, which in turn unlocks the companion rules) resolve
//! in one pass. This is deliberately not a fixed-point loop; rule ordering
//! is what makes the chain work, and deeper chains are unsupported.

use crate::descriptor::names::{
    ESLINT, JEST, MOCHA, TS_JEST, TYPEDOC, TYPESCRIPT, TYPESCRIPT_ESLINT,
};

/// Compute the closed active set after enabling `requested`.
///
/// The result preserves the order of `current`, with newly requested and
/// implied features appended in the order they were introduced.
pub fn resolve_add(current: &[String], requested: &[String]) -> Vec<String> {
    let mut resolved: Vec<String> = current.to_vec();
    for name in requested {
        push_unique(&mut resolved, name);
    }

    // typedoc's docs generation runs through the typed toolchain. Evaluated
    // first so the companion rules below see the implied typescript.
    if has(&resolved, TYPEDOC) {
        push_unique(&mut resolved, TYPESCRIPT);
    }
    if has(&resolved, TYPESCRIPT) && has(&resolved, ESLINT) {
        push_unique(&mut resolved, TYPESCRIPT_ESLINT);
    }
    if has(&resolved, TYPESCRIPT) && has(&resolved, JEST) {
        push_unique(&mut resolved, TS_JEST);
    }

    resolved
}

/// Compute the closed active set after disabling `requested`.
///
/// Companion and dependent features whose prerequisites left the set are
/// cascaded out; implied removals of features that were never active are
/// silently ignored.
pub fn resolve_remove(current: &[String], requested: &[String]) -> Vec<String> {
    let mut resolved: Vec<String> = current
        .iter()
        .filter(|name| !requested.iter().any(|r| r == *name))
        .cloned()
        .collect();

    if !has(&resolved, TYPESCRIPT) {
        drop_name(&mut resolved, TYPEDOC);
    }
    if !has(&resolved, TYPESCRIPT) || !has(&resolved, ESLINT) {
        drop_name(&mut resolved, TYPESCRIPT_ESLINT);
    }
    if !has(&resolved, TYPESCRIPT) || !has(&resolved, JEST) {
        drop_name(&mut resolved, TS_JEST);
    }

    resolved
}

/// The test-runner feature that should receive `test` dispatch, if any.
///
/// When both runners are somehow active, jest wins; it is the runner with a
/// typed companion and the one `init` prefers when asked for both.
pub fn active_test_runner(active: &[String]) -> Option<&'static str> {
    if has(active, JEST) {
        Some(JEST)
    } else if has(active, MOCHA) {
        Some(MOCHA)
    } else {
        None
    }
}

fn has(set: &[String], name: &str) -> bool {
    set.iter().any(|n| n == name)
}

fn push_unique(set: &mut Vec<String>, name: &str) {
    if !has(set, name) {
        set.push(name.to_string());
    }
}

fn drop_name(set: &mut Vec<String>, name: &str) {
    set.retain(|n| n != name);
}
