//! Wrapped source records.
//!
//! A [`Model`] is the canonical form of the record a presenter exposes: an
//! insertion-ordered JSON object. Any `Serialize` value whose serialized
//! form is an object can be wrapped; everything else is rejected at
//! construction time.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};

/// The wrapped source record backing a presenter.
///
/// Models are immutable: there are no mutating accessors, and presenters
/// only ever read from them. Both keyed structures (`serde_json` maps) and
/// record-like Rust values (structs, ORM rows) normalize into the same
/// object form here, so attribute resolution has a single shape to
/// traverse.
///
/// # Example
///
/// ```rust
/// use presentify::Model;
/// use serde_json::json;
///
/// let model = Model::new(json!({
///     "username": "anna",
///     "profile": { "email": "anna@example.com" },
/// })).unwrap();
///
/// assert_eq!(model.get("username"), Some(&json!("anna")));
/// assert_eq!(model.path("profile.email"), Some(&json!("anna@example.com")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    fields: Map<String, Value>,
}

impl Model {
    /// Create a model from an already-built JSON value.
    ///
    /// Only `Value::Object` is accepted; any other variant fails with
    /// [`ModelError::NotAnObject`] naming the offending kind.
    pub fn new(value: Value) -> ModelResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ModelError::NotAnObject(value_kind(&other))),
        }
    }

    /// Wrap any serializable record into a model.
    ///
    /// The source is serialized into the canonical object form first, so
    /// structs, maps, and borrowed references all work. Sources that
    /// serialize to something other than an object (scalars, sequences)
    /// are rejected the same way [`Model::new`] rejects them.
    pub fn wrap<T: Serialize>(source: T) -> ModelResult<Self> {
        let value = serde_json::to_value(source)?;
        Self::new(value)
    }

    /// Get a top-level field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Resolve a dot-separated path specifier against the model.
    ///
    /// Traversal descends one segment at a time. A segment matches only
    /// when the current value is an object with that exact key present.
    /// A missing key short-circuits the whole path to `None`, as does a
    /// non-object intermediate value such as a string or an array. An
    /// empty or all-whitespace path resolves to `None` without
    /// traversing. A present key holding JSON `null` is a hit, not a miss.
    ///
    /// Absence is a data outcome, never an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use presentify::Model;
    /// use serde_json::json;
    ///
    /// let model = Model::new(json!({"a": {"b": "x"}})).unwrap();
    ///
    /// assert_eq!(model.path("a.b"), Some(&json!("x")));
    /// assert_eq!(model.path("a.c"), None);
    /// assert_eq!(model.path(""), None);
    /// ```
    pub fn path(&self, path: &str) -> Option<&Value> {
        if path.trim().is_empty() {
            return None;
        }

        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Object(fields) => fields.get(segment)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Check if a top-level field exists.
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Get the number of top-level fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the model has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the top-level field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Borrow the underlying object.
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the model, returning the underlying JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl TryFrom<Value> for Model {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Map<String, Value>> for Model {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.fields.serialize(serializer)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
