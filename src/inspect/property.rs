//! Property and property set types.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A single named value read from a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name exactly as the target exposes it.
    pub name: String,
    /// Value captured at inspection time.
    pub value: Value,
}

impl Property {
    /// Create a new property.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> From<(K, V)> for Property {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}

/// The properties of one target.
///
/// Ordering follows whatever produced the set and carries no meaning.
/// Names are not deduplicated, so a caller-supplied set may repeat a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySet {
    properties: Vec<Property>,
}

impl PropertySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property.
    pub fn push(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Get the value of the first property with exactly this name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Iterate over the properties.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    /// Number of properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if the set has no properties.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Serialize for PropertySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.properties.iter().map(|p| (&p.name, &p.value)))
    }
}

impl<P: Into<Property>> FromIterator<P> for PropertySet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<Property>> Extend<P> for PropertySet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.properties.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for PropertySet {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
