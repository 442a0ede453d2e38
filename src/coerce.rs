//! Literal type coercion
//!
//! Coercion uses the typed-literal suffix convention `"lexical"^^<datatype>`.
//! With coercion enabled, annotated literals are stripped down to plain JSON
//! values (integer, then boolean, then string, best effort). With coercion
//! disabled, plain literals are annotated with their registered datatype so no
//! type information is lost. The two directions are inverses for a fixed
//! datatype registration.

use crate::ns::NamespaceMap;

/// Result of coercing a literal: a plain JSON-ready scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercedValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// Strip the datatype suffix from a literal and parse it into a native value.
///
/// Parsing is best effort: integer first, then boolean (case-insensitive),
/// falling back to the bare string. Never fails.
pub fn coerce(value: &str, datatype: &str, namespaces: &NamespaceMap) -> CoercedValue {
    let suffix = format!("^^<{}>", namespaces.expand(datatype));
    let stripped = value.replace(&suffix, "").replace('"', "");
    parse_native(&stripped)
}

/// Annotate a literal with its datatype suffix unless already present.
pub fn annotate(value: &str, datatype: &str, namespaces: &NamespaceMap) -> String {
    let expanded = namespaces.expand(datatype);
    let suffix = format!("^^<{}>", expanded);
    if value.ends_with(&suffix) {
        value.to_string()
    } else {
        format!("\"{}\"^^<{}>", value, expanded)
    }
}

fn parse_native(value: &str) -> CoercedValue {
    if let Ok(n) = value.parse::<i64>() {
        return CoercedValue::Int(n);
    }
    if value.eq_ignore_ascii_case("true") {
        return CoercedValue::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return CoercedValue::Bool(false);
    }
    CoercedValue::Str(value.to_string())
}
