//! Arbitrary-subset search: include-or-exclude every node in index order.
//!
//! This walks up to 2^N assignments; the size bounds are the only thing
//! keeping it tractable. Each level picks the next node to include, so the
//! recursion is never deeper than `upper`.

use super::{SizeBounds, Selection, Subgraph};
use crate::graph::Graph;

pub(super) fn enumerate(graph: &Graph, bounds: SizeBounds) -> Vec<Subgraph> {
    let mut selection = Selection::new(graph, bounds);
    extend(&mut selection, 0);
    selection.output
}

/// Try every superset of the selection drawn from `start..`, then the
/// selection itself. Supersets come first, which keeps include-first order.
fn extend(selection: &mut Selection<'_>, start: usize) {
    let count = selection.graph.len();

    if selection.len() < selection.bounds.upper {
        for next in start..count {
            // Taking `next` and everything after it still falls short.
            if selection.len() + (count - next) < selection.bounds.lower {
                break;
            }
            selection.push(next);
            extend(selection, next + 1);
            selection.pop();
        }
    }

    selection.record_if_valid();
}
