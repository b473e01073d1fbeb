//! The feature catalog: the closed world of toggleable features.
//!
//! The catalog is parsed once from the bundled `catalog.toml` resource and
//! threaded through the reconciliation engine as an explicit value. It is
//! the single source of truth for feature lookup and name validation.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::descriptor::{FeatureDescriptor, names};
use crate::error::{Error, Result};

/// Bundled catalog resource.
const BUILTIN_CATALOG: &str = include_str!("../catalog.toml");

/// Presentation order for the built-in features. Catalog entries outside
/// this list are appended in alphabetical order.
const DISPLAY_ORDER: &[&str] = &[
    names::TYPESCRIPT,
    names::ESLINT,
    names::TYPESCRIPT_ESLINT,
    names::JEST,
    names::TS_JEST,
    names::MOCHA,
    names::TYPEDOC,
    names::PRETTIER,
];

#[derive(Debug, Deserialize)]
struct CatalogFile {
    features: BTreeMap<String, FeatureDescriptor>,
}

/// Ordered collection of feature descriptors.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    features: Vec<FeatureDescriptor>,
}

impl FeatureCatalog {
    /// Parse the bundled catalog resource.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut by_name = file.features;
        for (name, descriptor) in by_name.iter_mut() {
            descriptor.name = name.clone();
            if descriptor.runtime.is_empty() && descriptor.dev.is_empty() {
                return Err(Error::EmptyFeature { name: name.clone() });
            }
        }

        let mut features = Vec::with_capacity(by_name.len());
        for &name in DISPLAY_ORDER {
            if let Some(descriptor) = by_name.remove(name) {
                features.push(descriptor);
            }
        }
        // BTreeMap iteration keeps any remaining entries alphabetical
        features.extend(by_name.into_values());

        tracing::debug!(count = features.len(), "feature catalog parsed");
        Ok(Self { features })
    }

    /// Look up a feature by name.
    pub fn get(&self, name: &str) -> Option<&FeatureDescriptor> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Whether a feature with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All descriptors in presentation order.
    pub fn features(&self) -> &[FeatureDescriptor] {
        &self.features
    }

    /// All feature names in presentation order.
    pub fn names(&self) -> Vec<&str> {
        self.features.iter().map(|f| f.name.as_str()).collect()
    }

    /// Validate that every requested name has a catalog entry.
    ///
    /// Collects all offenders into a single error so the caller can report
    /// them in one pass, before any manifest mutation happens.
    pub fn validate_names<S: AsRef<str>>(&self, requested: &[S]) -> Result<()> {
        let unknown: Vec<String> = requested
            .iter()
            .map(|n| n.as_ref())
            .filter(|n| !self.contains(n))
            .map(str::to_string)
            .collect();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(Error::UnknownFeatures { names: unknown })
        }
    }
}
