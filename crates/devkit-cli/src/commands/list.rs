//! List command implementation

use std::path::Path;

use colored::Colorize;

use devkit_catalog::FeatureCatalog;
use devkit_core::{Engine, HookRegistry};

use crate::error::Result;

/// Run the list command: print every catalog feature, marking the ones
/// active for the manifest in `root`.
pub fn run_list(root: &Path) -> Result<()> {
    let catalog = FeatureCatalog::builtin()?;

    // Active markers need a manifest; listing still works without one.
    let active: Vec<String> =
        match Engine::load(root, catalog.clone(), HookRegistry::with_builtins()) {
            Ok(engine) => engine.active().to_vec(),
            Err(devkit_core::Error::Manifest(devkit_manifest::Error::ManifestNotFound(_))) => {
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

    println!("{} Available features:", "=>".blue().bold());
    for feature in catalog.features() {
        let marker = if active.iter().any(|a| a == &feature.name) {
            "*".green().bold().to_string()
        } else {
            " ".to_string()
        };
        let dep_count = feature.runtime.len() + feature.dev.len();
        println!(
            "  {} {:<20} {} dependencies",
            marker,
            feature.name.cyan(),
            dep_count
        );
    }
    Ok(())
}
