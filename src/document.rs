//! JSON-LD document building and serialization
//!
//! A [`JsonLd`] document collects subject resources and serializes them to a
//! canonical, deterministically ordered JSON text in either of two layouts:
//!
//! - **Joint graph** (default): one shared object. A single subject becomes
//!   the top-level object itself; multiple subjects are wrapped in an array
//!   under the reserved `@` key. One shared namespace block covers all
//!   subjects.
//! - **Disjoint graph**: a top-level array with one self-contained object per
//!   subject, each carrying its own copy of the namespace block.
//!
//! Serialization is a pure read traversal; it never mutates the document and
//! can be repeated at will.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce::{annotate, coerce, CoercedValue};
use crate::error::JsonLdError;
use crate::ns::NamespaceMap;
use crate::resource::JsonLdResource;
use crate::value::PropertyValue;
use crate::vocab::{COERCION_TYPES, CONTEXT, IRI, PROFILE, SUBJECT, TYPE};

/// Ordering override for subjects in the serialized document
pub type SubjectComparator = fn(&str, &str) -> Ordering;

/// A JSON-LD document under construction
#[derive(Debug, Clone)]
pub struct JsonLd {
    namespaces: NamespaceMap,
    // subject identifier -> resource; anonymous resource under ""
    resources: BTreeMap<String, JsonLdResource>,
    apply_namespaces: bool,
    use_joint_graphs: bool,
    use_type_coercion: bool,
    represents_profile: bool,
    subject_comparator: Option<SubjectComparator>,
}

impl Default for JsonLd {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonLd {
    /// Create an empty data-graph document.
    pub fn new() -> Self {
        Self {
            namespaces: NamespaceMap::new(),
            resources: BTreeMap::new(),
            apply_namespaces: true,
            use_joint_graphs: true,
            use_type_coercion: false,
            represents_profile: false,
            subject_comparator: None,
        }
    }

    /// Create a profile (context) document. Profiles omit per-subject
    /// identifiers in joint-graph output.
    pub fn profile() -> Self {
        Self {
            represents_profile: true,
            ..Self::new()
        }
    }

    /// Add a resource keyed by its subject identifier.
    ///
    /// A resource without a subject is stored under the empty-string key;
    /// if that key is already taken the call fails with
    /// [`JsonLdError::DuplicateAnonymousSubject`].
    pub fn add_resource(&mut self, resource: JsonLdResource) -> Result<(), JsonLdError> {
        match resource.subject() {
            Some(subject) => {
                let subject = subject.to_string();
                self.resources.insert(subject, resource);
                Ok(())
            }
            None if !self.resources.contains_key("") => {
                self.resources.insert(String::new(), resource);
                Ok(())
            }
            None => Err(JsonLdError::DuplicateAnonymousSubject),
        }
    }

    /// Add a resource under an explicit key, silently overwriting any
    /// resource already stored there.
    pub fn insert_resource(&mut self, key: impl Into<String>, resource: JsonLdResource) {
        self.resources.insert(key.into(), resource);
    }

    /// Look up a resource by subject identifier.
    pub fn resource(&self, subject: &str) -> Option<&JsonLdResource> {
        self.resources.get(subject)
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Register a namespace and the prefix used to contract it.
    pub fn set_namespace_prefix(&mut self, namespace: impl Into<String>, prefix: impl Into<String>) {
        self.namespaces.insert(namespace, prefix);
    }

    pub fn namespace_map(&self) -> &NamespaceMap {
        &self.namespaces
    }

    /// Replace the whole namespace table.
    pub fn set_namespace_map(&mut self, namespaces: NamespaceMap) {
        self.namespaces = namespaces;
    }

    /// Whether IRIs are contracted to CURIEs during serialization. Default on.
    ///
    /// Set to `false` if property keys and values were already put in with
    /// prefix notation; serialization then expands them back to full IRIs.
    pub fn apply_namespaces(&self) -> bool {
        self.apply_namespaces
    }

    pub fn set_apply_namespaces(&mut self, apply_namespaces: bool) {
        self.apply_namespaces = apply_namespaces;
    }

    /// Whether joint-graph output is used. Default on.
    pub fn use_joint_graphs(&self) -> bool {
        self.use_joint_graphs
    }

    pub fn set_use_joint_graphs(&mut self, use_joint_graphs: bool) {
        self.use_joint_graphs = use_joint_graphs;
    }

    /// Whether registered coercion types are applied to literals. Default off.
    pub fn use_type_coercion(&self) -> bool {
        self.use_type_coercion
    }

    pub fn set_use_type_coercion(&mut self, use_type_coercion: bool) {
        self.use_type_coercion = use_type_coercion;
    }

    /// Whether this document represents a JSON-LD profile.
    pub fn represents_profile(&self) -> bool {
        self.represents_profile
    }

    /// Override the order in which subjects are serialized. The default is
    /// lexicographic on the subject key, anonymous (empty) key first.
    pub fn set_subject_comparator(&mut self, comparator: SubjectComparator) {
        self.subject_comparator = Some(comparator);
    }

    /// Build the JSON value for this document, joint or disjoint.
    pub fn to_value(&self) -> Value {
        if self.use_joint_graphs {
            self.joint_graph()
        } else {
            self.disjoint_graph()
        }
    }

    /// Serialize to compact JSON text.
    pub fn to_json_string(&self) -> Result<String, JsonLdError> {
        Ok(serde_json::to_string(&self.to_value())?)
    }

    /// Serialize to indented JSON text with the given indentation width per
    /// nesting level.
    pub fn to_json_string_indented(&self, indent: usize) -> Result<String, JsonLdError> {
        let value = self.to_value();
        let indent_bytes = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }

    // Resources in document order: lexicographic on subject key unless a
    // comparator override is set.
    fn ordered_resources(&self) -> Vec<&JsonLdResource> {
        let mut entries: Vec<(&str, &JsonLdResource)> = self
            .resources
            .iter()
            .map(|(key, resource)| (key.as_str(), resource))
            .collect();
        if let Some(comparator) = self.subject_comparator {
            entries.sort_by(|(a, _), (b, _)| comparator(a, b));
        }
        entries.into_iter().map(|(_, resource)| resource).collect()
    }

    fn disjoint_graph(&self) -> Value {
        let mut subjects = Vec::new();

        for resource in self.ordered_resources() {
            let mut subject_object = Map::new();

            // Each subject carries its own copy of the namespace block
            if !self.namespaces.is_empty() || self.use_type_coercion {
                let ns_object = self.namespace_block(resource.coercion_map());
                subject_object.insert(CONTEXT.to_string(), Value::Object(ns_object));
            }

            // The profile flag has no effect in disjoint mode
            if let Some(subject) = resource.subject().filter(|s| !s.is_empty()) {
                subject_object.insert(SUBJECT.to_string(), Value::String(self.curie(subject)));
            }

            if let Some(profile) = resource.profile().filter(|p| !p.is_empty()) {
                subject_object.insert(PROFILE.to_string(), Value::String(self.curie(profile)));
            }

            self.put_types(&mut subject_object, resource);
            self.put_properties(&mut subject_object, resource.properties(), resource.coercion_map());

            subjects.push(Value::Object(subject_object));
        }

        Value::Array(subjects)
    }

    fn joint_graph(&self) -> Value {
        let mut json = Map::new();
        // Coercion entries collected across all subjects, local to this call
        let mut coercion_acc: BTreeMap<String, String> = BTreeMap::new();

        if !self.resources.is_empty() {
            let mut subjects = Vec::new();

            for resource in self.ordered_resources() {
                let mut subject_object = Map::new();

                if !self.represents_profile {
                    if let Some(subject) = resource.subject().filter(|s| !s.is_empty()) {
                        subject_object
                            .insert(SUBJECT.to_string(), Value::String(self.curie(subject)));
                    }
                }

                if let Some(profile) = resource.profile().filter(|p| !p.is_empty()) {
                    subject_object
                        .insert(PROFILE.to_string(), Value::String(self.curie(profile)));
                }

                self.put_types(&mut subject_object, resource);

                if self.use_type_coercion {
                    for (key, datatype) in resource.coercion_map() {
                        coercion_acc.insert(key.clone(), datatype.clone());
                    }
                }

                self.put_properties(
                    &mut subject_object,
                    resource.properties(),
                    resource.coercion_map(),
                );

                subjects.push(Value::Object(subject_object));
            }

            // A single subject becomes the top-level object itself
            if subjects.len() == 1 {
                if let Some(Value::Object(single)) = subjects.pop() {
                    json = single;
                }
            } else {
                json.insert(SUBJECT.to_string(), Value::Array(subjects));
            }
        }

        if !self.namespaces.is_empty() || (self.use_type_coercion && !coercion_acc.is_empty()) {
            let ns_object = self.namespace_block(&coercion_acc);
            json.insert(CONTEXT.to_string(), Value::Object(ns_object));
        }

        Value::Object(json)
    }

    // Namespace block: prefix -> namespace IRI, plus the coercion-type map
    // when type coercion is on and entries exist.
    fn namespace_block(&self, coercion: &BTreeMap<String, String>) -> Map<String, Value> {
        let mut ns_object = Map::new();
        for (namespace, prefix) in self.namespaces.iter() {
            ns_object.insert(prefix.to_string(), Value::String(namespace.to_string()));
        }
        if self.use_type_coercion && !coercion.is_empty() {
            let mut types_object = Map::new();
            for (key, datatype) in coercion {
                types_object.insert(self.curie(key), Value::String(self.curie(datatype)));
            }
            ns_object.insert(COERCION_TYPES.to_string(), Value::Object(types_object));
        }
        ns_object
    }

    fn put_types(&self, subject_object: &mut Map<String, Value>, resource: &JsonLdResource) {
        if !resource.has_types() {
            return;
        }
        let mut types: Vec<String> = resource.types().map(|t| self.curie(t)).collect();
        if types.len() == 1 {
            subject_object.insert(TYPE.to_string(), Value::String(types.remove(0)));
        } else {
            // Sorted after contraction, so CURIE form decides the order
            types.sort();
            subject_object.insert(
                TYPE.to_string(),
                Value::Array(types.into_iter().map(Value::String).collect()),
            );
        }
    }

    fn put_properties(
        &self,
        output: &mut Map<String, Value>,
        properties: &BTreeMap<String, PropertyValue>,
        coercion: &BTreeMap<String, String>,
    ) {
        for (key, value) in properties {
            let serialized = match value {
                PropertyValue::Str(s) => self.serialize_literal(s, coercion.get(key)),
                PropertyValue::Bool(b) => match coercion.get(key) {
                    Some(datatype) => self.serialize_literal(&b.to_string(), Some(datatype)),
                    None => Value::Bool(*b),
                },
                PropertyValue::Number(n) => match coercion.get(key) {
                    Some(datatype) => self.serialize_literal(&n.to_string(), Some(datatype)),
                    None => Value::Number(n.clone()),
                },
                PropertyValue::Reference(iri) => self.reference_object(iri),
                PropertyValue::Strings(list) => Value::Array(
                    list.iter()
                        .map(|s| Value::String(self.curie(s)))
                        .collect(),
                ),
                PropertyValue::Array(list) => Value::Array(
                    list.iter()
                        .map(|element| self.serialize_array_element(element, coercion))
                        .collect(),
                ),
                PropertyValue::Map(map) => {
                    let mut sub_object = Map::new();
                    self.put_properties(&mut sub_object, map, coercion);
                    Value::Object(sub_object)
                }
            };
            output.insert(self.curie(key), serialized);
        }
    }

    // Elements of a heterogeneous array: maps recurse, references wrap,
    // everything else passes through unchanged.
    fn serialize_array_element(
        &self,
        element: &PropertyValue,
        coercion: &BTreeMap<String, String>,
    ) -> Value {
        match element {
            PropertyValue::Map(map) => {
                let mut sub_object = Map::new();
                self.put_properties(&mut sub_object, map, coercion);
                Value::Object(sub_object)
            }
            PropertyValue::Reference(iri) => self.reference_object(iri),
            other => other.to_raw_value(),
        }
    }

    // A scalar literal with an optional registered coercion type.
    //
    // With coercion enabled the annotation is stripped and the value parsed
    // to a native JSON scalar; disabled, the annotation is attached so no
    // type information is lost. Either way CURIE handling applies to string
    // results.
    fn serialize_literal(&self, value: &str, datatype: Option<&String>) -> Value {
        match datatype {
            Some(datatype) if self.use_type_coercion => {
                match coerce(value, datatype, &self.namespaces) {
                    CoercedValue::Str(s) => Value::String(self.curie(&s)),
                    CoercedValue::Int(n) => Value::Number(n.into()),
                    CoercedValue::Bool(b) => Value::Bool(b),
                }
            }
            Some(datatype) => {
                Value::String(self.curie(&annotate(value, datatype, &self.namespaces)))
            }
            None => Value::String(self.curie(value)),
        }
    }

    fn reference_object(&self, iri: &str) -> Value {
        let mut iri_object = Map::new();
        iri_object.insert(IRI.to_string(), Value::String(self.curie(iri)));
        Value::Object(iri_object)
    }

    fn curie(&self, value: &str) -> String {
        self.namespaces.apply(value, self.apply_namespaces)
    }
}
