//! Connected-subset search rooted at each anchor node.
//!
//! Every connected subset is grown from its lowest-indexed member (the
//! anchor) and only ever extended with nodes whose index is greater than the
//! anchor. That restriction is what makes each subset appear under exactly
//! one anchor; removing it re-emits the same set once per member.
//!
//! Within one anchor, a branch only adds neighbours of the newly included
//! node that are not already adjacent to the selection, and later sibling
//! branches no longer see candidates tried by earlier ones. Together these
//! guarantee each member set is reached along a single path, whatever order
//! its nodes could have been added in.

use super::{SizeBounds, Selection, Subgraph};
use crate::graph::Graph;

pub(super) fn enumerate(graph: &Graph, bounds: SizeBounds) -> Vec<Subgraph> {
    let mut selection = Selection::new(graph, bounds);

    for anchor in 0..graph.len() {
        let mut candidates = Vec::new();
        for &neighbor in graph.undirected(anchor) {
            if neighbor > anchor && !candidates.contains(&neighbor) {
                candidates.push(neighbor);
            }
        }

        selection.push(anchor);
        extend(&mut selection, anchor, candidates);
        selection.pop();
    }

    selection.output
}

fn extend(selection: &mut Selection<'_>, anchor: usize, mut candidates: Vec<usize>) {
    selection.record_if_valid();
    if selection.len() >= selection.bounds.upper {
        return;
    }

    while !candidates.is_empty() {
        let next = candidates.remove(0);

        let mut extended = candidates.clone();
        for &neighbor in selection.graph.undirected(next) {
            if neighbor > anchor
                && !selection.in_set[neighbor]
                && !touches_selection(selection, neighbor)
                && !extended.contains(&neighbor)
            {
                extended.push(neighbor);
            }
        }

        selection.push(next);
        extend(selection, anchor, extended);
        selection.pop();
    }
}

/// Whether `node` is adjacent to any currently selected node.
fn touches_selection(selection: &Selection<'_>, node: usize) -> bool {
    selection
        .graph
        .undirected(node)
        .iter()
        .any(|&neighbor| selection.in_set[neighbor])
}
