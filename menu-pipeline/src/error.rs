//! Loader and configuration errors.
//!
//! The derivations themselves are total and never produce these; only
//! reading analysis documents, menu CSVs and config files can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Failed to open '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid analysis JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parse error at line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type alias for loader operations.
pub type MenuResult<T> = Result<T, MenuError>;
