use std::path::PathBuf;

/// Errors that can occur in the reconciliation engine and its hooks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the manifest layer.
    #[error(transparent)]
    Manifest(#[from] devkit_manifest::Error),

    /// Error from the feature catalog.
    #[error(transparent)]
    Catalog(#[from] devkit_catalog::Error),

    /// A side file holds JSON that could not be parsed.
    #[error("failed to parse {path}: {source}")]
    SideFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// I/O error reading or writing side files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
