//! Reconciliation engine for devkit.
//!
//! Orchestrates feature add/remove against a loaded package manifest:
//! resolves the closed feature set, merges dependency sections, runs
//! activation/deactivation hooks after the mutation settles, and persists
//! the manifest at most once per invocation.

pub mod engine;
pub mod error;
pub mod hooks;
pub mod scaffold;

pub use engine::{CONFIG_KEY, Engine, EngineState, FinishReport};
pub use error::{Error, Result};
pub use hooks::{FeatureHooks, HookContext, HookRegistry};
