//! Feature toggle command implementation

use std::path::Path;

use colored::Colorize;

use devkit_catalog::FeatureCatalog;
use devkit_core::{Engine, HookRegistry};

use crate::error::Result;

/// Run the feature command: enable `name`, or disable it when `remove` is
/// set. Implied features are handled by the engine's resolver.
pub fn run_feature(root: &Path, name: &str, remove: bool) -> Result<()> {
    let verb = if remove { "Disabling" } else { "Enabling" };
    println!("{} {} feature: {}", "=>".blue().bold(), verb, name.cyan());

    let mut engine = Engine::load(
        root,
        FeatureCatalog::builtin()?,
        HookRegistry::with_builtins(),
    )?;

    let requested = vec![name.to_string()];
    if remove {
        engine.remove_features(&requested)?;
    } else {
        engine.add_features(&requested)?;
    }
    let report = engine.finish()?;

    super::print_report(&report);
    Ok(())
}
