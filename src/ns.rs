//! Namespace table and CURIE rewriting
//!
//! A [`NamespaceMap`] maps namespace IRIs to short prefixes and performs the
//! contraction (IRI -> `prefix:local`) and expansion (`prefix:local` -> IRI)
//! rewrites used throughout serialization. The map is owned by the document
//! and only ever borrowed read-only during a traversal, so a caller cannot
//! mutate it mid-serialization.
//!
//! Rewrites visit namespace entries longest-IRI-first (ties broken
//! lexicographically), so the result does not depend on map insertion order
//! even when one namespace IRI is a prefix of another.

use std::collections::BTreeMap;

/// Mapping from namespace IRI to prefix string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    // namespace IRI -> prefix
    entries: BTreeMap<String, String>,
}

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a namespace under the given prefix, replacing any previous
    /// prefix for that namespace.
    pub fn insert(&mut self, namespace: impl Into<String>, prefix: impl Into<String>) {
        self.entries.insert(namespace.into(), prefix.into());
    }

    /// Look up the prefix registered for a namespace IRI.
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.entries.get(namespace).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate `(namespace, prefix)` pairs in lexicographic namespace order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(ns, prefix)| (ns.as_str(), prefix.as_str()))
    }

    // Entries ordered for rewriting: longest namespace IRI first so that the
    // most specific namespace wins when one IRI is a prefix of another.
    fn rewrite_order(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries
    }

    /// Contract occurrences of known namespace IRIs to `prefix:` form.
    ///
    /// A value that already starts with a registered prefix is left alone for
    /// that entry, so contracting an already-contracted value is a no-op.
    pub fn contract(&self, value: &str) -> String {
        let mut result = value.to_string();
        for (namespace, prefix) in self.rewrite_order() {
            let curie_prefix = format!("{}:", prefix);
            if !result.starts_with(&curie_prefix) {
                result = result.replace(namespace, &curie_prefix);
            }
        }
        result
    }

    /// Expand CURIEs back to full namespace IRIs.
    ///
    /// A namespace entry applies only when the value starts with its prefix;
    /// once it applies, every occurrence of `prefix:` in the value is
    /// rewritten, not just the leading one.
    pub fn expand(&self, value: &str) -> String {
        let mut result = value.to_string();
        for (namespace, prefix) in self.rewrite_order() {
            let curie_prefix = format!("{}:", prefix);
            if result.starts_with(&curie_prefix) {
                result = result.replace(&curie_prefix, namespace);
            }
        }
        result
    }

    /// Contract or expand depending on whether namespaces are applied.
    pub fn apply(&self, value: &str, contract: bool) -> String {
        if contract {
            self.contract(value)
        } else {
            self.expand(value)
        }
    }
}

impl FromIterator<(String, String)> for NamespaceMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_map() -> NamespaceMap {
        let mut ns = NamespaceMap::new();
        ns.insert("http://example.org/ns#", "ex");
        ns
    }

    #[test]
    fn test_contract() {
        let ns = example_map();
        assert_eq!(ns.contract("http://example.org/ns#name"), "ex:name");
    }

    #[test]
    fn test_expand() {
        let ns = example_map();
        assert_eq!(ns.expand("ex:name"), "http://example.org/ns#name");
    }

    #[test]
    fn test_round_trip() {
        let ns = example_map();
        let iri = "http://example.org/ns#name";
        assert_eq!(ns.expand(&ns.contract(iri)), iri);
    }

    #[test]
    fn test_contract_idempotent() {
        let ns = example_map();
        assert_eq!(ns.contract("ex:name"), "ex:name");
    }

    #[test]
    fn test_unknown_namespace_unchanged() {
        let ns = example_map();
        assert_eq!(ns.contract("http://other.org/x"), "http://other.org/x");
        assert_eq!(ns.expand("foo:x"), "foo:x");
    }

    #[test]
    fn test_longest_namespace_wins() {
        let mut ns = NamespaceMap::new();
        ns.insert("http://example.org/", "e");
        ns.insert("http://example.org/ns#", "ex");

        // The longer, more specific namespace is applied first regardless of
        // map iteration order.
        assert_eq!(ns.contract("http://example.org/ns#name"), "ex:name");
        assert_eq!(ns.contract("http://example.org/other"), "e:other");
    }

    #[test]
    fn test_expand_rewrites_all_occurrences_after_leading_match() {
        let ns = example_map();
        assert_eq!(
            ns.expand("ex:a ex:b"),
            "http://example.org/ns#a http://example.org/ns#b"
        );
        // No leading prefix, no rewrite at all
        assert_eq!(ns.expand("see ex:a"), "see ex:a");
    }

    #[test]
    fn test_apply_dispatch() {
        let ns = example_map();
        assert_eq!(ns.apply("http://example.org/ns#name", true), "ex:name");
        assert_eq!(ns.apply("ex:name", false), "http://example.org/ns#name");
    }
}
