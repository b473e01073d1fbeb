//! Package manifest handling for devkit.
//!
//! This crate owns the in-memory representation of `package.json` — an
//! ordered JSON object bound to its on-disk location — and the generic
//! dependency-section merger used when features are toggled.

pub mod error;
pub mod manifest;
pub mod sections;

pub use error::{Error, Result};
pub use manifest::{MANIFEST_FILENAME, Manifest};
pub use sections::{add_section, remove_section};
