//! Property values of a subject resource
//!
//! A closed tagged variant replaces loose runtime type dispatch: serialization
//! over [`PropertyValue`] is a total, exhaustively matched function.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::vocab::IRI;

/// Value of a resource property
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Scalar string literal, subject to CURIE handling and type coercion
    Str(String),
    /// Boolean literal
    Bool(bool),
    /// Numeric literal
    Number(Number),
    /// Typed-IRI reference, serialized as a one-key `{"@iri": ...}` object
    Reference(String),
    /// Homogeneous string array; every element gets CURIE handling
    Strings(Vec<String>),
    /// Heterogeneous array of arbitrary values
    Array(Vec<PropertyValue>),
    /// Nested resource-like map
    Map(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Construct a typed-IRI reference value.
    pub fn iri(iri: impl Into<String>) -> Self {
        PropertyValue::Reference(iri.into())
    }

    /// Convert to a plain JSON value with no CURIE handling or coercion.
    ///
    /// Used for values the serializer passes through unchanged, e.g. scalar
    /// elements of heterogeneous arrays.
    pub fn to_raw_value(&self) -> Value {
        match self {
            PropertyValue::Str(s) => Value::String(s.clone()),
            PropertyValue::Bool(b) => Value::Bool(*b),
            PropertyValue::Number(n) => Value::Number(n.clone()),
            PropertyValue::Reference(iri) => {
                let mut obj = serde_json::Map::new();
                obj.insert(IRI.to_string(), Value::String(iri.clone()));
                Value::Object(obj)
            }
            PropertyValue::Strings(list) => Value::Array(
                list.iter()
                    .map(|s| Value::String(s.clone()))
                    .collect(),
            ),
            PropertyValue::Array(list) => {
                Value::Array(list.iter().map(PropertyValue::to_raw_value).collect())
            }
            PropertyValue::Map(map) => {
                let mut obj = serde_json::Map::new();
                for (key, value) in map {
                    obj.insert(key.clone(), value.to_raw_value());
                }
                Value::Object(obj)
            }
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(Number::from(value))
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(Number::from(value))
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::Number(Number::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => PropertyValue::Number(n),
            // Non-finite floats have no JSON representation
            None => PropertyValue::Str(value.to_string()),
        }
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(value: Vec<String>) -> Self {
        PropertyValue::Strings(value)
    }
}

impl From<Vec<&str>> for PropertyValue {
    fn from(value: Vec<&str>) -> Self {
        PropertyValue::Strings(value.into_iter().map(String::from).collect())
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(value: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(value)
    }
}

impl From<BTreeMap<String, PropertyValue>> for PropertyValue {
    fn from(value: BTreeMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_conversions() {
        assert_eq!(PropertyValue::from("x"), PropertyValue::Str("x".to_string()));
        assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
        assert_eq!(PropertyValue::from(7i64), PropertyValue::Number(7.into()));
        assert_eq!(
            PropertyValue::from(vec!["a", "b"]),
            PropertyValue::Strings(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_raw_value_scalars() {
        assert_eq!(PropertyValue::from("x").to_raw_value(), json!("x"));
        assert_eq!(PropertyValue::from(false).to_raw_value(), json!(false));
        assert_eq!(PropertyValue::from(7i64).to_raw_value(), json!(7));
    }

    #[test]
    fn test_raw_value_reference() {
        assert_eq!(
            PropertyValue::iri("http://example.org/a").to_raw_value(),
            json!({"@iri": "http://example.org/a"})
        );
    }

    #[test]
    fn test_raw_value_nested() {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), PropertyValue::from("Bob"));
        let value = PropertyValue::Array(vec![PropertyValue::Map(map), PropertyValue::from(1i64)]);
        assert_eq!(value.to_raw_value(), json!([{"name": "Bob"}, 1]));
    }

    #[test]
    fn test_non_finite_float_falls_back_to_string() {
        assert!(matches!(
            PropertyValue::from(f64::NAN),
            PropertyValue::Str(_)
        ));
    }
}
