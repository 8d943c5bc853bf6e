use crate::algorithm::path::{reconstruct_path, PathSegment};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex; `None` means not reached
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Cost of the cheapest path to `target`, if it was reached
    pub fn distance_to(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// The route to `target` as ordered segments
    ///
    /// Empty when `target` is unreachable or is the source.
    pub fn path_to(&self, target: usize) -> Result<Vec<PathSegment<W>>> {
        self.check_target(target)?;
        Ok(reconstruct_path(&self.distances, &self.predecessors, target))
    }

    /// The route to `target` as a vertex sequence starting at the source
    pub fn vertex_path(&self, target: usize) -> Option<Vec<usize>> {
        self.distance_to(target)?;

        let segments = reconstruct_path(&self.distances, &self.predecessors, target);
        let mut path = Vec::with_capacity(segments.len() + 1);
        path.push(self.source);
        path.extend(segments.iter().map(|segment| segment.to));
        Some(path)
    }

    fn check_target(&self, target: usize) -> Result<()> {
        if target < self.distances.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex: target,
                vertex_count: self.distances.len(),
            })
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the cheapest route from source to destination as ordered segments
    ///
    /// Both endpoints must be vertices of the graph. An unreachable destination,
    /// or one equal to the source, gives an empty route.
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

        let result = self.compute_shortest_paths(graph, source)?;
        result.path_to(destination)
    }
}
