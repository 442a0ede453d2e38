//! Subject resources
//!
//! A [`JsonLdResource`] is one subject node of a document: an optional subject
//! identifier, an optional profile identifier, a deduplicated set of type
//! labels, an ordered property map and a coercion map registering datatype
//! IRIs per property.

use std::collections::{BTreeMap, BTreeSet};

use crate::value::PropertyValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonLdResource {
    subject: Option<String>,
    profile: Option<String>,
    types: BTreeSet<String>,
    properties: BTreeMap<String, PropertyValue>,
    coercion: BTreeMap<String, String>,
}

impl JsonLdResource {
    /// Create an anonymous resource (no subject identifier).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resource with the given subject identifier.
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = Some(subject.into());
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn set_profile(&mut self, profile: impl Into<String>) {
        self.profile = Some(profile.into());
    }

    /// Register a type label. Duplicates are ignored; labels are kept in
    /// lexicographic order.
    pub fn add_type(&mut self, type_label: impl Into<String>) {
        self.types.insert(type_label.into());
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn has_types(&self) -> bool {
        !self.types.is_empty()
    }

    /// Set a property value, replacing any previous value for that key.
    pub fn put_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    /// Register a datatype IRI for a property, used when type coercion is
    /// applied during serialization.
    pub fn coerce_property(&mut self, key: impl Into<String>, datatype: impl Into<String>) {
        self.coercion.insert(key.into(), datatype.into());
    }

    pub fn coercion_type(&self, key: &str) -> Option<&str> {
        self.coercion.get(key).map(String::as_str)
    }

    pub fn coercion_map(&self) -> &BTreeMap<String, String> {
        &self.coercion
    }
}
