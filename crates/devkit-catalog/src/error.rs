/// Errors that can occur in the feature catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to parse the bundled catalog TOML.
    #[error("failed to parse feature catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// One or more requested feature names have no catalog entry.
    #[error("unknown feature(s): {}", names.join(", "))]
    UnknownFeatures { names: Vec<String> },

    /// A catalog entry declares no dependencies at all.
    ///
    /// Presence detection treats an empty dependency set as vacuously
    /// satisfied, so such a feature would look permanently enabled.
    #[error("feature '{name}' declares no dependencies")]
    EmptyFeature { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;
