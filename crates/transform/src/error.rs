//! Error types for the transform library.

use thiserror::Error;

/// Result type alias using TransformError.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Errors raised while resolving and running transform plugins.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The configuration names a plugin key that no constructor was
    /// registered under.
    #[error("unknown {registry} type: '{key}'")]
    UnknownPlugin {
        registry: &'static str,
        key: String,
    },

    /// A mapping-shaped plugin configuration has no `type` key.
    #[error("plugin configuration is missing a `type` key")]
    MissingTypeKey,

    /// The plugin constructor rejected its options.
    #[error("invalid plugin options: {0}")]
    InvalidConfig(String),

    /// A declared filter input matched none of the upstream fields.
    #[error("filter '{filter}' found no field with param '{param}'")]
    MissingInput {
        filter: &'static str,
        param: String,
    },
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
