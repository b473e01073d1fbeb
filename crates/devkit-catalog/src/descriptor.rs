//! Static description of one optional capability.

use std::collections::BTreeMap;

use serde::Deserialize;

use devkit_manifest::Manifest;

/// Well-known feature names. The resolver's implication rules key off these.
pub mod names {
    pub const TYPESCRIPT: &str = "typescript";
    pub const ESLINT: &str = "eslint";
    pub const TYPESCRIPT_ESLINT: &str = "typescript-eslint";
    pub const JEST: &str = "jest";
    pub const TS_JEST: &str = "ts-jest";
    pub const MOCHA: &str = "mocha";
    pub const TYPEDOC: &str = "typedoc";
    pub const PRETTIER: &str = "prettier";
}

/// Manifest section receiving runtime dependency entries.
pub const RUNTIME_SECTION: &str = "dependencies";
/// Manifest section receiving development dependency entries.
pub const DEV_SECTION: &str = "devDependencies";

/// Immutable record of one feature: its name and the dependency entries it
/// contributes to the package manifest. Built once from the bundled catalog.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FeatureDescriptor {
    /// Feature name; filled in from the catalog key after parsing.
    #[serde(skip)]
    pub name: String,
    /// Entries contributed to `dependencies`.
    #[serde(default)]
    pub runtime: BTreeMap<String, String>,
    /// Entries contributed to `devDependencies`.
    #[serde(default)]
    pub dev: BTreeMap<String, String>,
}

impl FeatureDescriptor {
    /// Whether every dependency this feature declares is already present in
    /// the manifest's corresponding sections.
    ///
    /// This is how "already enabled" features are detected on load without
    /// relying solely on the stored feature list. No side effects.
    pub fn check_presence(&self, manifest: &Manifest) -> bool {
        self.runtime
            .keys()
            .all(|dep| manifest.section_has_key(RUNTIME_SECTION, dep))
            && self
                .dev
                .keys()
                .all(|dep| manifest.section_has_key(DEV_SECTION, dep))
    }
}
