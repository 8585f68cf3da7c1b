//! Error types for the Presentify library.

use thiserror::Error;

/// Root error type for Presentify operations.
#[derive(Error, Debug)]
pub enum PresentifyError {
    /// Model construction errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Presenter resolution errors
    #[error("Presenter error: {0}")]
    Presenter(#[from] PresenterError),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

/// Errors that can occur when wrapping a source record into a model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Source value is not an object-like record
    #[error("Model should be an object or a map, got {0}")]
    NotAnObject(&'static str),

    /// Source value could not be serialized into the canonical keyed form
    #[error("Model serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur when resolving presenter attributes.
#[derive(Error, Debug)]
pub enum PresenterError {
    /// Attribute is not declared in the attribute map
    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    /// Presenters are read-only views; writes are always rejected
    #[error("Attribute modification is not allowed: {0}")]
    ModificationDenied(String),

    /// A derivation callback failed
    #[error("Derivation failed for attribute: {attribute}")]
    Derivation {
        /// Attribute whose derivation failed
        attribute: String,
        /// Original cause returned by the derivation
        #[source]
        source: BoxError,
    },

    /// JSON encoding failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<String> for PresentifyError {
    fn from(msg: String) -> Self {
        PresentifyError::Other(msg)
    }
}

impl From<&str> for PresentifyError {
    fn from(msg: &str) -> Self {
        PresentifyError::Other(msg.to_string())
    }
}

/// Boxed error type carried as the cause of a failed derivation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for model construction.
pub type ModelResult<T> = Result<T, ModelError>;

/// Result type alias for presenter operations.
pub type PresenterResult<T> = Result<T, PresenterError>;

/// Result type alias for general Presentify operations.
pub type PresentifyResult<T> = Result<T, PresentifyError>;
