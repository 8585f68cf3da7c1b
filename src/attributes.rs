//! Declarative attribute maps.
//!
//! An [`AttributeMap`] declares, in order, which attributes a presenter
//! exposes and how each one resolves: either through a dot-path specifier
//! into the wrapped model or through a derivation computing the value.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::BoxError;
use crate::model::Model;

/// Shared derivation callable computing an attribute value from the model.
///
/// Derivations are `Arc`-backed so that specs, maps, and the presenters
/// holding them stay cheaply cloneable; presenting a collection shares one
/// declared map across every element.
pub type Derivation = Arc<dyn Fn(&Model) -> Result<Value, BoxError> + Send + Sync>;

/// How a single declared attribute resolves to a value.
#[derive(Clone)]
pub enum AttributeSpec {
    /// Dot-separated path specifier into the wrapped model
    Path(String),
    /// Custom logic computing the value from the wrapped model
    Derived(Derivation),
}

impl AttributeSpec {
    /// Create a path spec.
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Create a derived spec from a closure.
    pub fn derived<F>(derivation: F) -> Self
    where
        F: Fn(&Model) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::Derived(Arc::new(derivation))
    }
}

impl fmt::Debug for AttributeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Derived(_) => f.debug_tuple("Derived").field(&"..").finish(),
        }
    }
}

impl From<&str> for AttributeSpec {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for AttributeSpec {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// An ordered mapping from presenter attribute names to their specs.
///
/// The map remembers declaration order, which is the order `to_map` and
/// the JSON output use. Attribute names are unique: re-declaring a name
/// replaces its spec in place without moving it.
///
/// # Example
///
/// ```rust
/// use presentify::AttributeMap;
/// use serde_json::json;
///
/// let map = AttributeMap::builder()
///     .path("name", "username")
///     .path("email", "profile.email")
///     .derived("shouting_name", |model| {
///         let name = model.path("username").and_then(|v| v.as_str()).unwrap_or("");
///         Ok(json!(name.to_uppercase()))
///     })
///     .build();
///
/// assert_eq!(map.names(), vec!["name", "email", "shouting_name"]);
/// assert!(map.contains("shouting_name"));
/// ```
#[derive(Debug, Clone)]
pub struct AttributeMap {
    specs: HashMap<String, AttributeSpec>,
    ordered: Vec<String>,
}

impl AttributeMap {
    /// Create a new empty attribute map.
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
            ordered: Vec::new(),
        }
    }

    /// Create a builder for fluent declaration.
    pub fn builder() -> AttributeMapBuilder {
        AttributeMapBuilder::new()
    }

    /// Declare an attribute.
    ///
    /// If an attribute with the same name is already declared, its spec is
    /// replaced and the original declaration position is kept.
    pub fn declare(&mut self, name: impl Into<String>, spec: impl Into<AttributeSpec>) {
        let name = name.into();
        if !self.specs.contains_key(&name) {
            self.ordered.push(name.clone());
        }
        self.specs.insert(name, spec.into());
    }

    /// Get the spec for an attribute name.
    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.specs.get(name)
    }

    /// Check if an attribute name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Get all declared attribute names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.ordered.iter().map(|s| s.as_str()).collect()
    }

    /// Get the number of declared attributes.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Check if the map has no declared attributes.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over declared attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeSpec)> {
        self.ordered
            .iter()
            .filter_map(move |name| self.specs.get(name).map(|spec| (name.as_str(), spec)))
    }
}

impl Default for AttributeMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for declaring attribute maps with a fluent API.
pub struct AttributeMapBuilder {
    map: AttributeMap,
}

impl AttributeMapBuilder {
    /// Create a new attribute map builder.
    pub fn new() -> Self {
        Self {
            map: AttributeMap::new(),
        }
    }

    /// Declare a path-resolved attribute.
    pub fn path(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.map.declare(name, AttributeSpec::path(path));
        self
    }

    /// Declare a derived attribute.
    pub fn derived<F>(mut self, name: impl Into<String>, derivation: F) -> Self
    where
        F: Fn(&Model) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        self.map.declare(name, AttributeSpec::derived(derivation));
        self
    }

    /// Declare an attribute from an explicit spec.
    pub fn spec(mut self, name: impl Into<String>, spec: impl Into<AttributeSpec>) -> Self {
        self.map.declare(name, spec);
        self
    }

    /// Build the map.
    pub fn build(self) -> AttributeMap {
        self.map
    }
}

impl Default for AttributeMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
