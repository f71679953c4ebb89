//! Enumeration of closed, size-bounded node subsets.
//!
//! A subset is *closed* when no directed edge leaves it. Two search modes
//! exist: connected subsets only (the default, see [`connected`]) and any
//! subset at all (see [`disconnected`], exponential in the node count).

mod connected;
mod disconnected;

use crate::error::{FlowmodError, Result};
use crate::graph::Graph;

/// One enumerated subset, as node indices in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    pub nodes: Vec<usize>,
}

impl Subgraph {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Member indices in ascending order.
    pub fn sorted_nodes(&self) -> Vec<usize> {
        let mut nodes = self.nodes.clone();
        nodes.sort_unstable();
        nodes
    }
}

/// Validated inclusive size range for enumerated subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub lower: usize,
    pub upper: usize,
}

impl SizeBounds {
    /// Validate user-supplied bounds: both positive, `lower <= upper`.
    pub fn new(lower: i64, upper: i64) -> Result<Self> {
        if lower <= 0 || upper <= 0 {
            return Err(FlowmodError::InvalidInput(format!(
                "size bounds must be positive integers (got {} and {})",
                lower, upper
            )));
        }
        if lower > upper {
            return Err(FlowmodError::InvalidInput(format!(
                "lower bound {} is greater than upper bound {}",
                lower, upper
            )));
        }
        let convert = |value: i64| {
            usize::try_from(value)
                .map_err(|_| FlowmodError::InvalidInput(format!("size bound {} is too large", value)))
        };
        Ok(Self {
            lower: convert(lower)?,
            upper: convert(upper)?,
        })
    }

    pub fn contains(&self, size: usize) -> bool {
        self.lower <= size && size <= self.upper
    }
}

/// Enumerate every closed subset with `lower <= size <= upper`.
///
/// With `allow_disconnected` every subset of the node set is considered;
/// otherwise only subsets connected through undirected edges. No member set
/// is reported twice. Returns nothing for an empty graph, `lower > upper`
/// or `upper == 0`.
pub fn enumerate_subgraphs(
    graph: &Graph,
    lower: usize,
    upper: usize,
    allow_disconnected: bool,
) -> Vec<Subgraph> {
    if graph.is_empty() || lower > upper || upper == 0 {
        return Vec::new();
    }
    let bounds = SizeBounds { lower, upper };

    if allow_disconnected {
        log::debug!(
            "Enumerating arbitrary subsets of {} nodes (exponential in node count)",
            graph.len()
        );
        disconnected::enumerate(graph, bounds)
    } else {
        connected::enumerate(graph, bounds)
    }
}

/// Working state shared by both searches: the current path plus its
/// membership vector, kept in sync by `push`/`pop`.
struct Selection<'g> {
    graph: &'g Graph,
    bounds: SizeBounds,
    current: Vec<usize>,
    in_set: Vec<bool>,
    output: Vec<Subgraph>,
}

impl<'g> Selection<'g> {
    fn new(graph: &'g Graph, bounds: SizeBounds) -> Self {
        Self {
            graph,
            bounds,
            current: Vec::with_capacity(bounds.upper.min(graph.len())),
            in_set: vec![false; graph.len()],
            output: Vec::new(),
        }
    }

    fn push(&mut self, index: usize) {
        self.current.push(index);
        self.in_set[index] = true;
    }

    fn pop(&mut self) {
        if let Some(index) = self.current.pop() {
            self.in_set[index] = false;
        }
    }

    fn len(&self) -> usize {
        self.current.len()
    }

    /// Record the current selection if it fits the bounds and is closed.
    fn record_if_valid(&mut self) {
        if !self.bounds.contains(self.current.len()) {
            return;
        }
        let closed = self.current.iter().all(|&member| {
            self.graph
                .directed(member)
                .iter()
                .all(|&target| self.in_set[target])
        });
        if !closed {
            return;
        }
        self.output.push(Subgraph {
            nodes: self.current.clone(),
        });
    }
}
