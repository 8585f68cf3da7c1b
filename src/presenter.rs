//! Presenters and the attribute-resolution protocol.
//!
//! A [`Presenter`] binds a wrapped model to a declared attribute map and
//! resolves reads against it. [`Present`] is the declaration trait
//! presenter types implement to name their attribute surface once.

use std::fmt;

use serde::ser::SerializeMap;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::attributes::{AttributeMap, AttributeSpec};
use crate::collection::Presented;
use crate::error::{ModelResult, PresenterError, PresenterResult, PresentifyResult};
use crate::model::Model;

/// A read-only view binding a wrapped model to a declared attribute map.
///
/// Reads follow the resolution protocol: undeclared names are an error,
/// missing nested data resolves to `null`, and a failing derivation
/// surfaces with its cause attached. Writes are rejected unconditionally.
///
/// # Example
///
/// ```rust
/// use presentify::{AttributeMap, Presenter};
/// use serde_json::json;
///
/// let map = AttributeMap::builder()
///     .path("name", "username")
///     .path("city", "address.city")
///     .build();
///
/// let presenter = Presenter::wrap(map, json!({
///     "username": "anna",
///     "password": "secret",
///     "address": { "city": "Kyiv" },
/// })).unwrap();
///
/// assert_eq!(presenter.get("name").unwrap(), json!("anna"));
/// assert_eq!(presenter.get("city").unwrap(), json!("Kyiv"));
/// // "password" is not declared, so it is not visible
/// assert!(presenter.get("password").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Presenter {
    map: AttributeMap,
    model: Model,
}

impl Presenter {
    /// Bind an attribute map to an already-validated model.
    pub fn new(map: AttributeMap, model: Model) -> Self {
        Self { map, model }
    }

    /// Wrap a serializable source and bind it to the given map in one step.
    ///
    /// Inherits [`Model::wrap`]'s validation: sources that do not
    /// serialize to an object are rejected.
    pub fn wrap<T: Serialize>(map: AttributeMap, source: T) -> ModelResult<Self> {
        Ok(Self::new(map, Model::wrap(source)?))
    }

    /// Resolve a declared attribute to its value.
    ///
    /// Path specs traverse the model; a path that finds no data resolves
    /// to `Value::Null` rather than an error. Derived specs invoke their
    /// derivation with the model; a derivation failure is returned as
    /// [`PresenterError::Derivation`] with the cause attached. Names not
    /// declared in the map always fail with
    /// [`PresenterError::AttributeNotFound`].
    pub fn get(&self, name: &str) -> PresenterResult<Value> {
        let spec = self
            .map
            .get(name)
            .ok_or_else(|| PresenterError::AttributeNotFound(name.to_string()))?;

        match spec {
            AttributeSpec::Path(path) => {
                trace!(attribute = name, path = path.as_str(), "resolving attribute via path");
                Ok(self.model.path(path).cloned().unwrap_or(Value::Null))
            }
            AttributeSpec::Derived(derivation) => {
                trace!(attribute = name, "resolving attribute via derivation");
                derivation(&self.model).map_err(|source| PresenterError::Derivation {
                    attribute: name.to_string(),
                    source,
                })
            }
        }
    }

    /// Reject an attribute write.
    ///
    /// Presenters are immutable views: every call returns
    /// [`PresenterError::ModificationDenied`], for declared and undeclared
    /// names alike. The `&self` receiver means the wrapped model cannot be
    /// touched either way.
    pub fn set(&self, name: &str, _value: Value) -> PresenterResult<()> {
        Err(PresenterError::ModificationDenied(name.to_string()))
    }

    /// Get the wrapped model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Get the declared attribute map.
    pub fn attribute_map(&self) -> &AttributeMap {
        &self.map
    }

    /// Resolve every declared attribute into an ordered map.
    ///
    /// Keys are exactly the declared names in declaration order; each
    /// value is exactly what [`Presenter::get`] returns for that name.
    pub fn to_map(&self) -> PresenterResult<Map<String, Value>> {
        let mut output = Map::new();
        for name in self.map.names() {
            output.insert(name.to_string(), self.get(name)?);
        }
        Ok(output)
    }

    /// Resolve the presenter into a JSON object value.
    pub fn to_value(&self) -> PresenterResult<Value> {
        Ok(Value::Object(self.to_map()?))
    }

    /// Encode the presenter as a JSON string.
    pub fn to_json(&self) -> PresenterResult<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    /// Encode the presenter as a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> PresenterResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}

impl Serialize for Presenter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_map(Some(self.map.len()))?;
        for name in self.map.names() {
            match self.get(name) {
                Ok(value) => state.serialize_entry(name, &value)?,
                Err(err) => return Err(serde::ser::Error::custom(err)),
            }
        }
        state.end()
    }
}

impl fmt::Display for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Declaration trait for presenter types.
///
/// Implementors are zero-sized marker types that name a view and declare
/// its attribute surface once; the provided methods construct presenters
/// through the standard validation path.
///
/// # Example
///
/// ```rust
/// use presentify::{AttributeMap, Present};
/// use serde_json::json;
///
/// struct UserPresenter;
///
/// impl Present for UserPresenter {
///     fn attribute_map() -> AttributeMap {
///         AttributeMap::builder()
///             .path("name", "username")
///             .path("email", "profile.email")
///             .derived("full_name", |model| {
///                 let first = model.path("first_name").and_then(|v| v.as_str()).unwrap_or_default();
///                 let last = model.path("last_name").and_then(|v| v.as_str()).unwrap_or_default();
///                 Ok(json!(format!("{} {}", first, last)))
///             })
///             .build()
///     }
/// }
///
/// let user = json!({
///     "username": "anna",
///     "first_name": "Anna",
///     "last_name": "P.",
///     "profile": { "email": "anna@example.com" },
/// });
///
/// let presenter = UserPresenter::present(&user).unwrap();
/// assert_eq!(presenter.get("full_name").unwrap(), json!("Anna P."));
/// ```
pub trait Present {
    /// Declare the attribute map exposed by presenters of this type.
    fn attribute_map() -> AttributeMap;

    /// Present a single source record.
    ///
    /// The source is wrapped into a [`Model`] (inheriting its validation)
    /// and bound to this type's declared map.
    fn present<T: Serialize>(source: T) -> PresentifyResult<Presenter> {
        let model = Model::wrap(source)?;
        Ok(Presenter::new(Self::attribute_map(), model))
    }

    /// Present an ordered sequence of source records.
    ///
    /// Produces one presenter per record, in input order. Construction is
    /// fail-fast: the first record that fails validation aborts the whole
    /// call, and no partial collection is returned. The declared map is
    /// built once and shared across all elements.
    fn present_all<I>(items: I) -> PresentifyResult<Presented>
    where
        I: IntoIterator,
        I::Item: Serialize,
    {
        let map = Self::attribute_map();
        let presenters = items
            .into_iter()
            .map(|item| {
                let model = Model::wrap(item)?;
                Ok(Presenter::new(map.clone(), model))
            })
            .collect::<PresentifyResult<Vec<Presenter>>>()?;
        trace!(count = presenters.len(), "presented collection");
        Ok(Presented::from(presenters))
    }
}
