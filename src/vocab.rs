//! Reserved keys of the early (ED 20110201) JSON-LD convention
//!
//! These are the only keys a serialized subject object may carry besides
//! the subject's own property keys.

/// Namespace/context block of a subject object or joint graph
pub const CONTEXT: &str = "#";

/// Subject identifier, or the subjects array in joint multi-subject mode
pub const SUBJECT: &str = "@";

/// Profile identifier of a subject
pub const PROFILE: &str = "@profile";

/// Wrapper key for typed-IRI reference objects
pub const IRI: &str = "@iri";

/// Type singleton or sorted type list of a subject
pub const TYPE: &str = "a";

/// Coercion-type map inside the namespace block
pub const COERCION_TYPES: &str = "#types";

/// XML Schema datatype namespace, the usual source of coercion types
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// xsd:integer datatype IRI
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// xsd:boolean datatype IRI
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
