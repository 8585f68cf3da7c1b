//! # Presentify
//!
//! **Presentify** is a declarative presenter (view-model) layer for building
//! curated, read-only JSON views of Rust data.
//!
//! ## Overview
//!
//! A presenter pairs a wrapped source record with a declared attribute map
//! and exposes exactly the attributes the map names:
//! - **Curated surface**: Consumers only see declared attributes
//! - **Declarative mapping**: Dot-separated paths into the source record
//! - **Custom derivations**: Computed attributes from arbitrary logic
//! - **Read-only by contract**: Every write through a presenter is denied
//!
//! ## Resolution Rules
//!
//! ```text
//! declared path, full match     -> the value at that path
//! declared path, partial match  -> null (absent-as-null)
//! declared derivation           -> the derivation's result, or its error
//! undeclared attribute          -> AttributeNotFound error
//! any write                     -> ModificationDenied error
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use presentify::prelude::*;
//!
//! struct UserPresenter;
//!
//! impl Present for UserPresenter {
//!     fn attribute_map() -> AttributeMap {
//!         AttributeMap::builder()
//!             .path("name", "username")
//!             .path("email", "profile.email")
//!             .derived("full_name", |model| {
//!                 let first = model.path("first_name").and_then(|v| v.as_str()).unwrap_or_default();
//!                 let last = model.path("last_name").and_then(|v| v.as_str()).unwrap_or_default();
//!                 Ok(json!(format!("{} {}", first, last)))
//!             })
//!             .build()
//!     }
//! }
//!
//! # fn main() -> Result<(), PresentifyError> {
//! let user = json!({
//!     "username": "anna",
//!     "first_name": "Anna",
//!     "last_name": "P.",
//!     "profile": { "email": "anna@example.com" },
//! });
//!
//! let presenter = UserPresenter::present(&user)?;
//! assert_eq!(presenter.get("name")?, json!("anna"));
//! assert_eq!(presenter.get("full_name")?, json!("Anna P."));
//! assert_eq!(
//!     presenter.to_json()?,
//!     r#"{"name":"anna","email":"anna@example.com","full_name":"Anna P."}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - Declarative `AttributeMap` of path specifiers and derivations
//! - Validated `Model` wrapper with dot-path traversal
//! - `Presenter` with strict attribute lookup and ordered serialization
//! - Collection mapping through `Present::present_all` / `CollectionExt`

mod attributes;
mod collection;
mod error;
mod model;
mod presenter;

pub mod prelude;

// Re-export core types
pub use attributes::{AttributeMap, AttributeMapBuilder, AttributeSpec, Derivation};
pub use collection::{CollectionExt, Presented};
pub use error::{
    BoxError, ModelError, ModelResult, PresenterError, PresenterResult, PresentifyError,
    PresentifyResult,
};
pub use model::Model;
pub use presenter::{Present, Presenter};

// Re-export serde_json essentials for convenience
pub use serde_json::{json, Value};
