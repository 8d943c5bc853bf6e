use log::{debug, warn};

use crate::algorithm::path::{reconstruct_path, PathSegment};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// The frontier is a lazy-deletion min-heap: improved distances are pushed as
/// new entries. Relaxation always reads the live distance table, so stale
/// entries popped later cannot lower any distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the search from `source`, stopping once `target` is extracted
    fn search<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: Option<usize>,
    ) -> Result<ShortestPathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if source >= n {
            return Err(Error::InvalidVertex {
                vertex: source,
                vertex_count: n,
            });
        }

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = Some(W::zero());

        let mut queue = MinHeap::new();
        queue.push(source, W::zero());

        let mut extracted = 0usize;
        let mut relaxed = 0usize;
        let mut overflowed = 0usize;

        while let Some((u, _)) = queue.pop() {
            extracted += 1;

            if Some(u) == target {
                break;
            }

            // Live distance, not the popped priority
            let dist_u = match distances[u] {
                Some(d) => d,
                None => continue,
            };

            for (v, weight) in graph.neighbors(u) {
                // A cost that does not fit W is never an improvement
                let new_dist = match dist_u.add_cost(weight) {
                    Some(d) => d,
                    None => {
                        overflowed += 1;
                        continue;
                    }
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                    relaxed += 1;
                }
            }
        }

        if overflowed > 0 {
            warn!(
                "dijkstra from {}: skipped {} relaxations whose cost overflowed",
                source, overflowed
            );
        }

        debug!(
            "dijkstra from {}: {} entries extracted, {} relaxations, {} left queued",
            source,
            extracted,
            relaxed,
            queue.len()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.search(graph, source, None)
    }

    fn shortest_path(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
    ) -> Result<Vec<PathSegment<W>>> {
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex {
                vertex: destination,
                vertex_count: graph.vertex_count(),
            });
        }

        // The destination's distance and parent chain are final once it is extracted
        let result = self.search(graph, source, Some(destination))?;
        Ok(reconstruct_path(
            &result.distances,
            &result.predecessors,
            destination,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::total_cost;
    use crate::graph::{MutableGraph, UndirectedGraph};

    fn easyway_graph() -> UndirectedGraph<u32> {
        UndirectedGraph::from_edges(
            6,
            &[(0, 1, 10), (0, 3, 20), (1, 2, 20), (1, 3, 20), (3, 4, 10), (3, 5, 10)],
        )
        .unwrap()
    }

    #[test]
    fn test_distances_from_source() {
        let graph = easyway_graph();
        let result = Dijkstra::new().compute_shortest_paths(&graph, 2).unwrap();

        let expected = [Some(30), Some(20), Some(0), Some(40), Some(50), Some(50)];
        assert_eq!(result.distances, expected);
        assert_eq!(result.predecessors[2], None);
        assert_eq!(result.predecessors[4], Some(3));
        assert_eq!(result.predecessors[3], Some(1));
        assert_eq!(result.reachable_count(), 6);
        assert_eq!(result.vertex_path(4), Some(vec![2, 1, 3, 4]));
    }

    #[test]
    fn test_shortest_path_segments() {
        let graph = easyway_graph();
        let path = Dijkstra::new().shortest_path(&graph, 2, 4).unwrap();

        assert_eq!(
            path,
            vec![
                PathSegment::new(2, 1, 20),
                PathSegment::new(1, 3, 20),
                PathSegment::new(3, 4, 10),
            ]
        );
        assert_eq!(total_cost(&path), Some(50));
    }

    #[test]
    fn test_early_exit_matches_full_search() {
        let graph = easyway_graph();
        let dijkstra = Dijkstra::new();

        for source in 0..6 {
            let full = dijkstra.compute_shortest_paths(&graph, source).unwrap();
            for destination in 0..6 {
                let path = dijkstra.shortest_path(&graph, source, destination).unwrap();
                assert_eq!(
                    total_cost(&path),
                    full.distance_to(destination),
                    "route {} -> {}",
                    source,
                    destination
                );
            }
        }
    }

    #[test]
    fn test_source_equals_destination() {
        let graph = easyway_graph();
        assert!(Dijkstra::new().shortest_path(&graph, 3, 3).unwrap().is_empty());

        let single = UndirectedGraph::<u32>::new(1).unwrap();
        assert!(Dijkstra::new().shortest_path(&single, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_destination() {
        let mut graph = UndirectedGraph::new(4).unwrap();
        graph.add_edge(0, 1, 5u32).unwrap();
        graph.add_edge(2, 3, 5).unwrap();

        let dijkstra = Dijkstra::new();
        assert!(dijkstra.shortest_path(&graph, 0, 3).unwrap().is_empty());

        let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distance_to(3), None);
        assert_eq!(result.vertex_path(3), None);
        assert_eq!(result.reachable_count(), 2);
    }

    #[test]
    fn test_out_of_range_endpoints() {
        let graph = easyway_graph();
        let dijkstra = Dijkstra::new();

        assert_eq!(
            dijkstra.shortest_path(&graph, 6, 0).unwrap_err(),
            Error::InvalidVertex { vertex: 6, vertex_count: 6 }
        );
        assert_eq!(
            dijkstra.shortest_path(&graph, 0, 9).unwrap_err(),
            Error::InvalidVertex { vertex: 9, vertex_count: 6 }
        );
        assert!(dijkstra.compute_shortest_paths(&graph, 42).is_err());
    }

    #[test]
    fn test_zero_weight_edges_and_self_loops() {
        let graph = UndirectedGraph::from_edges(
            3,
            &[(0, 0, 0u32), (0, 1, 0), (1, 2, 4), (0, 2, 4)],
        )
        .unwrap();

        let path = Dijkstra::new().shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(total_cost(&path), Some(4));
        assert_eq!(path.last().map(|s| s.to), Some(2));
    }

    #[test]
    fn test_overflowing_cost_is_not_an_improvement() {
        let big = u32::MAX / 2 + 1;
        let graph = UndirectedGraph::from_edges(3, &[(0, 1, big), (1, 2, big)]).unwrap();
        let dijkstra = Dijkstra::new();

        // 0 -> 2 only exists at a cost u32 cannot hold
        assert!(dijkstra.shortest_path(&graph, 0, 2).unwrap().is_empty());
        assert_eq!(total_cost(&dijkstra.shortest_path(&graph, 0, 1).unwrap()), Some(big));

        let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(result.distance_to(2), None);
    }

    #[test]
    fn test_overflow_falls_back_to_representable_route() {
        let big = u32::MAX / 2 + 1;
        let graph = UndirectedGraph::from_edges(
            4,
            &[(0, 1, big), (1, 3, big), (0, 2, u32::MAX - 1), (2, 3, 1)],
        )
        .unwrap();

        let path = Dijkstra::new().shortest_path(&graph, 0, 3).unwrap();
        assert_eq!(path, vec![PathSegment::new(0, 2, u32::MAX - 1), PathSegment::new(2, 3, 1)]);
        assert_eq!(total_cost(&path), Some(u32::MAX));
    }

    #[test]
    fn test_parallel_edges_use_cheapest() {
        let graph = UndirectedGraph::from_edges(2, &[(0, 1, 9u32), (1, 0, 2)]).unwrap();
        let path = Dijkstra::new().shortest_path(&graph, 0, 1).unwrap();
        assert_eq!(path, vec![PathSegment::new(0, 1, 2)]);
    }
}
