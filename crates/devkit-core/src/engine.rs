//! The feature reconciliation engine.
//!
//! One engine instance owns the manifest for the duration of a single tool
//! invocation: load, any number of add/remove calls, then a single
//! `finish()` that runs hooks and persists the manifest. `finish` consumes
//! the engine, so the write can only ever happen once.

use serde_json::{Map, Value};

use devkit_catalog::{FeatureCatalog, RUNTIME_SECTION, DEV_SECTION, resolve_add, resolve_remove};
use devkit_manifest::{Manifest, add_section, remove_section};

use crate::error::Result;
use crate::hooks::{HookContext, HookRegistry};

/// Top-level manifest key holding devkit's own block.
pub const CONFIG_KEY: &str = "devkit";
/// Key inside the devkit block storing the explicit active feature list.
const FEATURES_KEY: &str = "features";

/// Engine lifecycle. `Finalizing` and the implicit terminal state are
/// internal to `finish()`, which consumes the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Manifest loaded, active set derived, nothing mutated yet.
    Loaded,
    /// At least one add/remove call has run.
    Mutating,
    /// Hooks are running and the manifest is about to be persisted.
    Finalizing,
}

/// Summary returned by [`Engine::finish`].
#[derive(Debug, Clone)]
pub struct FinishReport {
    /// Whether the manifest file was rewritten.
    pub wrote_manifest: bool,
    /// Union of all features whose dependency membership changed during
    /// the invocation, in the order they were touched.
    pub changed: Vec<String>,
    /// The final active feature set.
    pub active: Vec<String>,
}

impl FinishReport {
    /// Whether the caller should reinstall node modules: some dependency
    /// set changed and the manifest was actually rewritten.
    pub fn reinstall_needed(&self) -> bool {
        self.wrote_manifest && !self.changed.is_empty()
    }
}

/// Reconciles a requested feature set against the loaded manifest.
pub struct Engine {
    ctx: HookContext,
    catalog: FeatureCatalog,
    hooks: HookRegistry,
    manifest: Manifest,
    active: Vec<String>,
    /// Features that entered the active set, in addition order.
    added: Vec<String>,
    /// Features that left the active set, in removal order.
    removed: Vec<String>,
    /// Union of added and removed, in touch order.
    changed: Vec<String>,
    state: EngineState,
}

impl Engine {
    /// Load the manifest from `root` and derive the active feature set.
    ///
    /// A feature is considered active when it appears in the manifest's
    /// devkit block, or when every dependency it declares is already
    /// present in the manifest. Stored names without a catalog entry are
    /// ignored with a warning.
    pub fn load(
        root: impl Into<std::path::PathBuf>,
        catalog: FeatureCatalog,
        hooks: HookRegistry,
    ) -> Result<Self> {
        let ctx = HookContext::new(root);
        let manifest = Manifest::load(ctx.root())?;
        Ok(Self::with_manifest(ctx, catalog, hooks, manifest))
    }

    /// Build an engine around an already loaded (or freshly created)
    /// manifest.
    pub fn with_manifest(
        ctx: HookContext,
        catalog: FeatureCatalog,
        hooks: HookRegistry,
        manifest: Manifest,
    ) -> Self {
        let active = derive_active(&catalog, &manifest);
        tracing::debug!(?active, "active feature set derived");
        Self {
            ctx,
            catalog,
            hooks,
            manifest,
            active,
            added: Vec::new(),
            removed: Vec::new(),
            changed: Vec::new(),
            state: EngineState::Loaded,
        }
    }

    /// The currently active feature set.
    pub fn active(&self) -> &[String] {
        &self.active
    }

    /// The engine's lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The catalog this engine resolves against.
    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    /// The manifest being reconciled.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Enable the named features, plus whatever the implication rules pull
    /// in. Unknown names abort before any mutation.
    pub fn add_features(&mut self, names: &[String]) -> Result<()> {
        self.catalog.validate_names(names)?;
        let resolved = resolve_add(&self.active, names);
        for name in &resolved {
            if self.active.contains(name) {
                continue;
            }
            // Catalog membership is guaranteed: requested names were
            // validated and implied names are built-in constants.
            if let Some(descriptor) = self.catalog.get(name) {
                add_section(&mut self.manifest, &descriptor.runtime, RUNTIME_SECTION)?;
                add_section(&mut self.manifest, &descriptor.dev, DEV_SECTION)?;
            }
            tracing::info!(feature = %name, "feature enabled");
            self.added.push(name.clone());
            record_change(&mut self.changed, name);
        }
        self.active = resolved;
        self.state = EngineState::Mutating;
        Ok(())
    }

    /// Disable the named features and cascade out dependents whose
    /// prerequisites left the set. Unknown names abort before any mutation.
    pub fn remove_features(&mut self, names: &[String]) -> Result<()> {
        self.catalog.validate_names(names)?;
        let resolved = resolve_remove(&self.active, names);
        let current = self.active.clone();
        for name in &current {
            if resolved.contains(name) {
                continue;
            }
            if let Some(descriptor) = self.catalog.get(name) {
                remove_section(&mut self.manifest, &descriptor.runtime, RUNTIME_SECTION)?;
                remove_section(&mut self.manifest, &descriptor.dev, DEV_SECTION)?;
            }
            tracing::info!(feature = %name, "feature disabled");
            self.removed.push(name.clone());
            record_change(&mut self.changed, name);
        }
        self.active = resolved;
        self.state = EngineState::Mutating;
        Ok(())
    }

    /// Run deactivation hooks (removal order), then activation hooks
    /// (addition order), persist the active set into the manifest's devkit
    /// block, and write the manifest back if it changed.
    ///
    /// A failing hook aborts before the write, leaving the on-disk
    /// manifest untouched.
    pub fn finish(mut self) -> Result<FinishReport> {
        self.state = EngineState::Finalizing;

        for name in &self.removed {
            self.hooks.deactivate(name, &self.ctx)?;
        }
        for name in &self.added {
            self.hooks.activate(name, &self.ctx)?;
        }

        store_active(&mut self.manifest, &self.active);
        let wrote_manifest = self.manifest.save()?;

        Ok(FinishReport {
            wrote_manifest,
            changed: self.changed,
            active: self.active,
        })
    }
}

/// Derive the active set from the stored feature list plus presence
/// detection against the dependency sections.
fn derive_active(catalog: &FeatureCatalog, manifest: &Manifest) -> Vec<String> {
    let mut active = Vec::new();

    if let Some(Value::Object(block)) = manifest.get(CONFIG_KEY)
        && let Some(Value::Array(stored)) = block.get(FEATURES_KEY)
    {
        for value in stored {
            let Value::String(name) = value else { continue };
            if !catalog.contains(name) {
                tracing::warn!(feature = %name, "ignoring stored feature with no catalog entry");
                continue;
            }
            if !active.contains(name) {
                active.push(name.clone());
            }
        }
    }

    for descriptor in catalog.features() {
        if !active.contains(&descriptor.name) && descriptor.check_presence(manifest) {
            active.push(descriptor.name.clone());
        }
    }

    active
}

/// Persist the active set into the devkit block. An empty set removes the
/// list (and the block, when nothing else lives in it) so untouched
/// manifests stay byte-identical.
fn store_active(manifest: &mut Manifest, active: &[String]) {
    if active.is_empty() {
        let block_emptied = match manifest.get_mut(CONFIG_KEY) {
            Some(Value::Object(block)) => {
                block.remove(FEATURES_KEY);
                block.is_empty()
            }
            _ => false,
        };
        if block_emptied {
            manifest.remove(CONFIG_KEY);
        }
        return;
    }

    let list = Value::Array(
        active
            .iter()
            .map(|name| Value::String(name.clone()))
            .collect(),
    );
    match manifest.get_mut(CONFIG_KEY) {
        Some(Value::Object(block)) => {
            block.insert(FEATURES_KEY.to_string(), list);
        }
        _ => {
            let mut block = Map::new();
            block.insert(FEATURES_KEY.to_string(), list);
            manifest.insert(CONFIG_KEY, Value::Object(block));
        }
    }
}

fn record_change(changed: &mut Vec<String>, name: &str) {
    if !changed.iter().any(|c| c == name) {
        changed.push(name.to_string());
    }
}
