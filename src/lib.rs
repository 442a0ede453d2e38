//! JSON-LD Document Builder
//!
//! This library provides an in-memory API for building JSON-LD object
//! structures and serializing them to canonical, deterministically ordered
//! JSON text, following the early JSON-LD convention (ED 20110201,
//! <http://www.json-ld.org/spec/ED/20110201/>).
//!
//! # Overview
//!
//! A [`JsonLd`] document collects [`JsonLdResource`] subject nodes and
//! serializes them by:
//!
//! 1. Ordering subjects deterministically (lexicographic by default)
//! 2. Contracting IRIs to CURIEs against the document's namespace table
//!    (or expanding CURIEs back, when namespaces are not applied)
//! 3. Optionally coercing typed literals to native JSON scalars
//! 4. Emitting either one joint graph or a disjoint array of subject objects
//!
//! # Usage
//!
//! ```
//! use jsonld_builder::{JsonLd, JsonLdResource};
//!
//! let mut person = JsonLdResource::with_subject("http://example.org/ns#bob");
//! person.add_type("http://example.org/ns#Person");
//! person.put_property("http://example.org/ns#name", "Bob");
//!
//! let mut doc = JsonLd::new();
//! doc.set_namespace_prefix("http://example.org/ns#", "ex");
//! doc.add_resource(person)?;
//!
//! assert_eq!(
//!     doc.to_json_string()?,
//!     r##"{"#":{"ex":"http://example.org/ns#"},"@":"ex:bob","a":"ex:Person","ex:name":"Bob"}"##
//! );
//! # Ok::<(), jsonld_builder::JsonLdError>(())
//! ```

pub mod coerce;
pub mod document;
pub mod error;
pub mod ns;
pub mod resource;
pub mod value;
pub mod vocab;

// Re-export main types for convenience
pub use crate::coerce::CoercedValue;
pub use crate::document::{JsonLd, SubjectComparator};
pub use crate::error::JsonLdError;
pub use crate::ns::NamespaceMap;
pub use crate::resource::JsonLdResource;
pub use crate::value::PropertyValue;
