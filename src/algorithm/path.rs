use serde::{Deserialize, Serialize};

use crate::graph::Weight;

/// One hop of a route: an edge traversed from `from` to `to`
///
/// `cost` is the cost of this hop alone, not the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment<W> {
    pub from: usize,
    pub to: usize,
    pub cost: W,
}

impl<W> PathSegment<W> {
    pub fn new(from: usize, to: usize, cost: W) -> Self {
        PathSegment { from, to, cost }
    }
}

/// Sums the per-segment costs of a route; zero for an empty route
///
/// `None` when the sum does not fit `W`.
pub fn total_cost<W: Weight>(segments: &[PathSegment<W>]) -> Option<W> {
    segments
        .iter()
        .try_fold(W::zero(), |total, segment| total.add_cost(segment.cost))
}

/// Rebuilds the route to `destination` from a parent table
///
/// Walks parent links back from the destination until a vertex without a
/// parent, then reverses. Returns an empty route when the destination was never
/// reached or is the source itself.
pub fn reconstruct_path<W: Weight>(
    distances: &[Option<W>],
    predecessors: &[Option<usize>],
    destination: usize,
) -> Vec<PathSegment<W>> {
    let mut segments = Vec::new();
    let mut current = destination;
    let mut hops = 0;

    while let Some(parent) = predecessors.get(current).copied().flatten() {
        let to_dist = distances.get(current).copied().flatten();
        let from_dist = distances.get(parent).copied().flatten();
        if let (Some(to_dist), Some(from_dist)) = (to_dist, from_dist) {
            segments.push(PathSegment::new(parent, current, to_dist - from_dist));
        }
        current = parent;
        hops += 1;

        // A well-formed parent table is a tree; never walk more hops than vertices
        if hops > predecessors.len() {
            log::warn!("cycle detected in parent table at vertex {}", current);
            return Vec::new();
        }
    }

    segments.reverse();
    segments
}
