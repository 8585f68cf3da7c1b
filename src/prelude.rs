//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! from Presentify for convenient glob imports.
//!
//! # Example
//!
//! ```rust
//! use presentify::prelude::*;
//! ```

// Models
pub use crate::model::Model;

// Attribute declarations
pub use crate::attributes::{AttributeMap, AttributeMapBuilder, AttributeSpec, Derivation};

// Presenters
pub use crate::presenter::{Present, Presenter};

// Collections
pub use crate::collection::{CollectionExt, Presented};

// Errors
pub use crate::error::{
    BoxError, ModelError, ModelResult, PresenterError, PresenterResult, PresentifyError,
    PresentifyResult,
};

// Re-export serde_json essentials for convenience
pub use serde_json::{json, Value};
