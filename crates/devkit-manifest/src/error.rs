use std::path::PathBuf;

/// Errors that can occur while loading or mutating a package manifest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse the package manifest JSON.
    #[error("failed to parse package manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// Package manifest file not found at the expected path.
    #[error("package manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// The manifest root must be a JSON object.
    #[error("package manifest root must be a JSON object: {0}")]
    NotAnObject(PathBuf),

    /// A section that should hold keyed entries is not a JSON object.
    #[error("manifest section '{section}' is not a JSON object")]
    SectionNotAnObject { section: String },

    /// I/O error reading or writing the manifest.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
