use log::debug;
use rayon::prelude::*;

use crate::algorithm::path::PathSegment;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Answers many (source, destination) queries against one graph in parallel
///
/// Each query runs its own independent search; results come back in the same
/// order as `queries`, one `Result` per query, so an invalid pair does not
/// affect the others.
pub fn shortest_paths_batch<W, G, A>(
    algorithm: &A,
    graph: &G,
    queries: &[(usize, usize)],
) -> Vec<Result<Vec<PathSegment<W>>>>
where
    W: Weight + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
{
    debug!(
        "running {} {} queries on a graph with {} vertices",
        queries.len(),
        algorithm.name(),
        graph.vertex_count()
    );

    queries
        .par_iter()
        .map(|&(source, destination)| algorithm.shortest_path(graph, source, destination))
        .collect()
}
