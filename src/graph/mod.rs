//! Flow graph: nodes parsed from JSON records and their references.
//!
//! Each accepted record becomes a [`Node`] with a dense index. References
//! between nodes are kept twice: as directed edges (used for the closure
//! check) and as their undirected closure (used for connectivity).

mod build;
mod scan;

pub use build::build_graph;
pub use scan::scan_references;

use std::collections::HashMap;

use serde_json::Value as JsonValue;

/// Field holding the node identifier.
pub const ID_KEY: &str = "id";
/// Field holding the explicit link groups.
pub const WIRES_KEY: &str = "wires";

/// One accepted input record.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Value of the record's string `id` field.
    pub id: String,
    /// The complete original record, kept for output.
    pub data: JsonValue,
}

/// Adjacency-list graph over the accepted records of one input file.
///
/// Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    id_to_index: HashMap<String, usize>,
    directed: Vec<Vec<usize>>,
    undirected: Vec<Vec<usize>>,
}

impl Graph {
    fn with_nodes(nodes: Vec<Node>, id_to_index: HashMap<String, usize>) -> Self {
        let count = nodes.len();
        Self {
            nodes,
            id_to_index,
            directed: vec![Vec::new(); count],
            undirected: vec![Vec::new(); count],
        }
    }

    /// Record `from -> to`. A self-loop appears once in the undirected list.
    fn add_edge(&mut self, from: usize, to: usize) {
        self.directed[from].push(to);
        self.undirected[from].push(to);
        if from != to {
            self.undirected[to].push(from);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Index of the node with the given id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// Targets of the directed edges leaving `index`, in discovery order.
    pub fn directed(&self, index: usize) -> &[usize] {
        &self.directed[index]
    }

    /// Neighbours of `index` ignoring edge direction.
    pub fn undirected(&self, index: usize) -> &[usize] {
        &self.undirected[index]
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.directed.iter().map(Vec::len).sum()
    }

    /// Whether no directed edge leaves the subset described by `in_set`.
    ///
    /// `in_set` must have one entry per node. A self-loop on a member is
    /// trivially satisfied since its target is the member itself.
    pub fn is_closed(&self, in_set: &[bool]) -> bool {
        debug_assert_eq!(in_set.len(), self.nodes.len());
        (0..self.nodes.len())
            .filter(|&index| in_set[index])
            .all(|index| self.directed[index].iter().all(|&target| in_set[target]))
    }

    /// Membership vector for a list of node indices.
    pub fn membership(&self, members: &[usize]) -> Vec<bool> {
        let mut in_set = vec![false; self.nodes.len()];
        for &member in members {
            in_set[member] = true;
        }
        in_set
    }

    /// Ids of the given node indices, in the same order.
    pub fn ids_of(&self, members: &[usize]) -> Vec<&str> {
        members
            .iter()
            .map(|&index| self.nodes[index].id.as_str())
            .collect()
    }

    /// Log node count, edge count and node ids at debug level.
    pub fn log_summary(&self) {
        log::debug!("Nodes: {}", self.len());
        log::debug!("Directed edges: {}", self.edge_count());
        let ids: Vec<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        log::debug!("Node ids: {}", ids.join(" "));
    }
}
