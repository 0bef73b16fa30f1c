//! Inspect module - turns a target value into named properties.
//!
//! Rust has no runtime reflection, so the public "properties" of a target are
//! whatever its `Serialize` implementation exposes at the top level:
//!
//! - a `#[derive(Serialize)]` struct yields one property per field
//! - a `serde_json::json!({...})` object or a string-keyed map yields its entries
//! - `None`, `()` and unit structs serialize to `null` and count as no target at all
//! - any other value (numbers, strings, sequences) has no properties
//!
//! Callers that already hold name/value pairs can skip serialization and
//! collect them into a [`PropertySet`] directly.
//!
//! # Example
//!
//! ```
//! use argreflect::inspect::inspect;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Options {
//!     email: &'static str,
//!     is_citizen: bool,
//! }
//!
//! let props = inspect(&Options { email: "john@john.com", is_citizen: true })
//!     .unwrap()
//!     .expect("struct targets are never null");
//!
//! assert_eq!(props.len(), 2);
//! assert_eq!(props.get("email").unwrap(), "john@john.com");
//! ```

mod property;

pub use property::{Property, PropertySet};

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Read the public properties of `target`.
///
/// Returns `Ok(None)` when the target serializes to `null`.
///
/// # Errors
///
/// Returns [`ReflectError::Inspect`](crate::ReflectError::Inspect) if the
/// target cannot be serialized (for example a map with non-string keys).
pub fn inspect<T: Serialize + ?Sized>(target: &T) -> Result<Option<PropertySet>> {
    match serde_json::to_value(target)? {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map.into_iter().collect())),
        other => {
            tracing::debug!("Target is a {} and exposes no properties", kind_of(&other));
            Ok(Some(PropertySet::new()))
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Serialize)]
    struct Options {
        first_name: String,
        page: u32,
    }

    #[derive(Serialize)]
    struct Marker;

    #[test]
    fn test_inspect_struct_fields() {
        let target = Options {
            first_name: "John".to_string(),
            page: 2,
        };

        let props = inspect(&target).unwrap().unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props.get("first_name"), Some(&json!("John")));
        assert_eq!(props.get("page"), Some(&json!(2)));
    }

    #[test]
    fn test_inspect_json_object() {
        let props = inspect(&json!({ "key": "value" })).unwrap().unwrap();

        assert_eq!(props.len(), 1);
        assert_eq!(props.get("key"), Some(&json!("value")));
    }

    #[test]
    fn test_inspect_string_keyed_map() {
        let mut target = BTreeMap::new();
        target.insert("a", 1);
        target.insert("b", 2);

        let props = inspect(&target).unwrap().unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props.get("b"), Some(&json!(2)));
    }

    #[test]
    fn test_inspect_null_targets() {
        assert!(inspect(&()).unwrap().is_none());
        assert!(inspect(&Marker).unwrap().is_none());
        assert!(inspect(&None::<Options>).unwrap().is_none());
        assert!(inspect(&Value::Null).unwrap().is_none());
    }

    #[test]
    fn test_inspect_some_is_transparent() {
        let target = Some(json!({ "key": 1 }));

        let props = inspect(&target).unwrap().unwrap();

        assert_eq!(props.get("key"), Some(&json!(1)));
    }

    #[test]
    fn test_inspect_scalar_has_no_properties() {
        assert!(inspect(&42).unwrap().unwrap().is_empty());
        assert!(inspect("text").unwrap().unwrap().is_empty());
        assert!(inspect(&vec![1, 2, 3]).unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_inspect_empty_object() {
        let props = inspect(&json!({})).unwrap().unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_inspect_non_string_keys_fail() {
        let mut target = HashMap::new();
        target.insert(vec![1u8], "value");

        assert!(matches!(
            inspect(&target),
            Err(crate::ReflectError::Inspect(_))
        ));
    }
}
