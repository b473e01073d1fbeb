//! Activation and deactivation hooks.
//!
//! Hooks run after the manifest mutation has settled, once per feature that
//! entered or left the active set. They own the side files: each one is
//! created with defaults when absent and never overwritten afterwards, so
//! deactivation hooks never delete anything the user may have customized.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use devkit_catalog::names;

use crate::error::Result;
use crate::scaffold;

/// Context handed to hooks: the project root the side files live under.
#[derive(Debug, Clone)]
pub struct HookContext {
    root: PathBuf,
}

impl HookContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Per-feature setup/teardown behavior.
///
/// Both methods default to no-ops; most features only need one of them,
/// and several need neither.
pub trait FeatureHooks: Send + Sync {
    fn on_activate(&self, _ctx: &HookContext) -> Result<()> {
        Ok(())
    }

    fn on_deactivate(&self, _ctx: &HookContext) -> Result<()> {
        Ok(())
    }
}

/// Registry mapping feature names to their hooks.
///
/// Built explicitly at startup and threaded through the engine; features
/// without a registered hook simply have no side effects beyond the
/// manifest.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Box<dyn FeatureHooks>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with hooks for all built-in features.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(names::TYPESCRIPT, TypescriptHooks);
        registry.register(names::ESLINT, EslintHooks);
        registry.register(names::PRETTIER, PrettierHooks);
        registry.register(names::JEST, TestRunnerHooks);
        registry.register(names::MOCHA, TestRunnerHooks);
        registry
    }

    /// Register (or replace) the hooks for a feature.
    pub fn register(&mut self, name: impl Into<String>, hooks: impl FeatureHooks + 'static) {
        self.hooks.insert(name.into(), Box::new(hooks));
    }

    /// Run the activation hook for `name`, if one is registered.
    pub fn activate(&self, name: &str, ctx: &HookContext) -> Result<()> {
        if let Some(hooks) = self.hooks.get(name) {
            tracing::debug!(feature = name, "running activation hook");
            hooks.on_activate(ctx)?;
        }
        Ok(())
    }

    /// Run the deactivation hook for `name`, if one is registered.
    pub fn deactivate(&self, name: &str, ctx: &HookContext) -> Result<()> {
        if let Some(hooks) = self.hooks.get(name) {
            tracing::debug!(feature = name, "running deactivation hook");
            hooks.on_deactivate(ctx)?;
        }
        Ok(())
    }
}

/// Scaffolds `tsconfig.json` (merge, user values win) and ignores the
/// compiler output directory.
pub struct TypescriptHooks;

impl FeatureHooks for TypescriptHooks {
    fn on_activate(&self, ctx: &HookContext) -> Result<()> {
        scaffold::ensure_tsconfig(ctx.root())?;
        scaffold::ensure_gitignore_entries(ctx.root(), &["dist/"])?;
        Ok(())
    }
}

/// Scaffolds `.eslintrc.json` once.
pub struct EslintHooks;

impl FeatureHooks for EslintHooks {
    fn on_activate(&self, ctx: &HookContext) -> Result<()> {
        scaffold::ensure_eslintrc(ctx.root())?;
        Ok(())
    }
}

/// Scaffolds `.prettierrc.json` once.
pub struct PrettierHooks;

impl FeatureHooks for PrettierHooks {
    fn on_activate(&self, ctx: &HookContext) -> Result<()> {
        scaffold::ensure_prettierrc(ctx.root())?;
        Ok(())
    }
}

/// Shared by both test runners: ignores the coverage output directory.
pub struct TestRunnerHooks;

impl FeatureHooks for TestRunnerHooks {
    fn on_activate(&self, ctx: &HookContext) -> Result<()> {
        scaffold::ensure_gitignore_entries(ctx.root(), &["coverage/", ".nyc_output/"])?;
        Ok(())
    }
}
