use thiserror::Error;

/// Errors that can occur while loading or parsing a recipe corpus
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Corpus text for a cuisine could not be read
    #[error("Failed to read '{identifier}': {source}")]
    FileAccess {
        identifier: String,
        #[source]
        source: std::io::Error,
    },

    /// A section could not be reduced to a recipe
    #[error("Failed to parse section: {0}")]
    SectionParse(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
