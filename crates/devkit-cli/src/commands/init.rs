//! Init command implementation
//!
//! Bootstraps a package: creates package.json when absent, writes the
//! task-runner bootstrap script, and enables the selected feature set.

use std::path::Path;

use colored::Colorize;

use devkit_catalog::{FeatureCatalog, names};
use devkit_core::{Engine, HookRegistry, scaffold};

use crate::error::Result;

/// One boolean per feature, as surfaced by the init flags.
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub typescript: bool,
    pub typedoc: bool,
    pub mocha: bool,
    pub eslint: bool,
    pub jest: bool,
    pub prettier: bool,
}

impl Default for InitOptions {
    /// Defaults: typescript, typedoc, and mocha on; the rest off.
    fn default() -> Self {
        Self {
            typescript: true,
            typedoc: true,
            mocha: true,
            eslint: false,
            jest: false,
            prettier: false,
        }
    }
}

impl InitOptions {
    /// The feature names selected by these options.
    pub fn selected(&self) -> Vec<String> {
        let flags = [
            (self.typescript, names::TYPESCRIPT),
            (self.typedoc, names::TYPEDOC),
            (self.mocha, names::MOCHA),
            (self.eslint, names::ESLINT),
            (self.jest, names::JEST),
            (self.prettier, names::PRETTIER),
        ];
        flags
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Run the init command
pub fn run_init(root: &Path, options: &InitOptions) -> Result<()> {
    println!("{} Bootstrapping package", "=>".blue().bold());

    if scaffold::ensure_package_json(root)? {
        println!("{} Created package.json", "OK".green().bold());
    }
    scaffold::ensure_bootstrap(root)?;
    scaffold::ensure_gitignore_entries(root, &[])?;

    let mut engine = Engine::load(
        root,
        FeatureCatalog::builtin()?,
        HookRegistry::with_builtins(),
    )?;
    engine.add_features(&options.selected())?;
    let report = engine.finish()?;

    super::print_report(&report);
    Ok(())
}
