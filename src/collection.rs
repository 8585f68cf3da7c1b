//! Collections of presenters.
//!
//! This module provides `Presented`, the ordered collection returned by
//! bulk presentation, and `CollectionExt`, the extension trait that lets
//! any iterable of source records be presented in a single call.

use std::ops::Index;

use serde::Serialize;
use serde_json::Value;

use crate::error::{PresenterResult, PresentifyResult};
use crate::presenter::{Present, Presenter};

/// An ordered collection of presenters.
///
/// `Presented` is returned by [`Present::present_all`] and
/// [`CollectionExt::present`]. It preserves input order and serializes as
/// a JSON array of each element's presentation.
#[derive(Debug, Clone)]
pub struct Presented {
    items: Vec<Presenter>,
}

impl Presented {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of presenters in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the presenter at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Presenter> {
        self.items.get(index)
    }

    /// Iterate over the presenters in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Presenter> {
        self.items.iter()
    }

    /// Resolve every element and collect the results into a JSON array.
    ///
    /// Element order is preserved. The first element whose resolution
    /// fails aborts the call with that element's error.
    pub fn to_value(&self) -> PresenterResult<Value> {
        let values = self
            .items
            .iter()
            .map(Presenter::to_value)
            .collect::<PresenterResult<Vec<Value>>>()?;
        Ok(Value::Array(values))
    }

    /// Encode the collection as a compact JSON array.
    pub fn to_json(&self) -> PresenterResult<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    /// Encode the collection as a pretty-printed JSON array.
    pub fn to_json_pretty(&self) -> PresenterResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }

    /// Unwrap into the underlying vector of presenters.
    pub fn into_vec(self) -> Vec<Presenter> {
        self.items
    }
}

impl Default for Presented {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Presenter>> for Presented {
    fn from(items: Vec<Presenter>) -> Self {
        Self { items }
    }
}

impl Index<usize> for Presented {
    type Output = Presenter;

    fn index(&self, index: usize) -> &Presenter {
        &self.items[index]
    }
}

impl IntoIterator for Presented {
    type Item = Presenter;
    type IntoIter = std::vec::IntoIter<Presenter>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Presented {
    type Item = &'a Presenter;
    type IntoIter = std::slice::Iter<'a, Presenter>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Serialize for Presented {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

/// Extension trait for presenting iterables of source records.
///
/// Any `IntoIterator` of serializable items gains a `present` method that
/// maps every element through a presenter type's declared attribute map.
///
/// # Example
///
/// ```rust
/// use presentify::{AttributeMap, CollectionExt, Present};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct City {
///     name: String,
///     country: String,
/// }
///
/// struct CityPresenter;
///
/// impl Present for CityPresenter {
///     fn attribute_map() -> AttributeMap {
///         AttributeMap::builder().path("name", "name").build()
///     }
/// }
///
/// let cities = vec![
///     City { name: "Kyiv".to_string(), country: "Ukraine".to_string() },
///     City { name: "Lviv".to_string(), country: "Ukraine".to_string() },
/// ];
///
/// let presented = cities.present::<CityPresenter>().unwrap();
/// assert_eq!(presented.len(), 2);
/// assert_eq!(presented.to_json().unwrap(), r#"[{"name":"Kyiv"},{"name":"Lviv"}]"#);
/// ```
pub trait CollectionExt: IntoIterator {
    /// Present every element through `P`'s declared attribute map.
    ///
    /// Equivalent to [`Present::present_all`], written so call sites read
    /// left to right.
    fn present<P: Present>(self) -> PresentifyResult<Presented>
    where
        Self: Sized,
        Self::Item: Serialize,
    {
        P::present_all(self)
    }
}

impl<I: IntoIterator> CollectionExt for I {}
