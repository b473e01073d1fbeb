//! Feature catalog and implication resolution for devkit.
//!
//! A feature is a named, optional development capability bundled with the
//! dependency entries it contributes to the package manifest. The catalog
//! is the closed world of features; the resolver applies the hard-coded
//! implication rules between them in a single pass.

pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod resolver;

pub use catalog::FeatureCatalog;
pub use descriptor::{DEV_SECTION, FeatureDescriptor, RUNTIME_SECTION, names};
pub use error::{Error, Result};
pub use resolver::{active_test_runner, resolve_add, resolve_remove};
