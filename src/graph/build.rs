//! Graph construction from a JSON array of node records.

use std::collections::{HashMap, HashSet};

use serde_json::Value as JsonValue;

use super::scan::{is_reserved_key, scan_references};
use super::{Graph, Node, ID_KEY, WIRES_KEY};

/// Build a graph from an array of node records.
///
/// Records that are not objects with a string `id` are skipped and do not
/// consume an index. Edges come from the `wires` groups (only the first
/// group unless `use_all_wires`) and from a deep scan of every other field
/// (see [`scan_references`]). A node gets at most one edge to any target.
///
/// Anything other than an array yields an empty graph.
pub fn build_graph(
    records: &JsonValue,
    ignored_labels: &HashSet<String>,
    use_all_wires: bool,
) -> Graph {
    let Some(records) = records.as_array() else {
        return Graph::default();
    };

    let mut nodes = Vec::new();
    let mut id_to_index = HashMap::new();
    for record in records {
        if !record.is_object() {
            continue;
        }
        let Some(id) = record.get(ID_KEY).and_then(JsonValue::as_str) else {
            continue;
        };
        id_to_index.insert(id.to_string(), nodes.len());
        nodes.push(Node {
            id: id.to_string(),
            data: record.clone(),
        });
    }

    let mut graph = Graph::with_nodes(nodes, id_to_index);

    for from in 0..graph.len() {
        let targets = outgoing_targets(&graph, from, ignored_labels, use_all_wires);
        for to in targets {
            graph.add_edge(from, to);
        }
    }

    graph
}

/// Distinct targets of `from`: wire targets first, then scanned references.
fn outgoing_targets(
    graph: &Graph,
    from: usize,
    ignored_labels: &HashSet<String>,
    use_all_wires: bool,
) -> Vec<usize> {
    let record = &graph.nodes[from].data;
    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    let wired = wire_targets(record, &graph.id_to_index, use_all_wires);
    let scanned = record
        .as_object()
        .into_iter()
        .flatten()
        .filter(|(key, _)| !is_reserved_key(key))
        .flat_map(|(key, value)| {
            scan_references(value, key, &graph.id_to_index, ignored_labels)
        });

    for to in wired.into_iter().chain(scanned) {
        if seen.insert(to) {
            targets.push(to);
        }
    }
    targets
}

/// Known node indices named in the record's `wires` groups.
fn wire_targets(
    record: &JsonValue,
    id_to_index: &HashMap<String, usize>,
    use_all_wires: bool,
) -> Vec<usize> {
    let Some(groups) = record.get(WIRES_KEY).and_then(JsonValue::as_array) else {
        return Vec::new();
    };
    let take = if use_all_wires { groups.len() } else { 1 };

    groups
        .iter()
        .take(take)
        .filter_map(JsonValue::as_array)
        .flatten()
        .filter_map(JsonValue::as_str)
        .filter_map(|target| id_to_index.get(target).copied())
        .collect()
}
