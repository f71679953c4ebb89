//! Deep scan of a node record for string references to other nodes.

use std::collections::{HashMap, HashSet};

use serde_json::Value as JsonValue;

use super::{ID_KEY, WIRES_KEY};

/// Keys never scanned: links are handled explicitly and the id would
/// reference the node itself.
pub(crate) fn is_reserved_key(key: &str) -> bool {
    key == ID_KEY || key == WIRES_KEY
}

/// Collect the indices of nodes referenced anywhere under `value`.
///
/// `key` is the field `value` was found under (arrays pass their own key
/// down to their elements); a key listed in `ignored_labels` hides its whole
/// subtree. Every string equal to a known id yields that node's index, in
/// traversal order. Repeats are kept; the caller decides about duplicates.
pub fn scan_references(
    value: &JsonValue,
    key: &str,
    id_to_index: &HashMap<String, usize>,
    ignored_labels: &HashSet<String>,
) -> Vec<usize> {
    if !key.is_empty() && ignored_labels.contains(key) {
        return Vec::new();
    }

    match value {
        JsonValue::Object(map) => map
            .iter()
            .filter(|(child_key, _)| !is_reserved_key(child_key))
            .flat_map(|(child_key, child)| {
                scan_references(child, child_key, id_to_index, ignored_labels)
            })
            .collect(),
        JsonValue::Array(items) => items
            .iter()
            .flat_map(|child| scan_references(child, key, id_to_index, ignored_labels))
            .collect(),
        JsonValue::String(text) => id_to_index.get(text).copied().into_iter().collect(),
        JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => Vec::new(),
    }
}
