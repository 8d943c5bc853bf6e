use log::trace;
use std::cmp::Ordering;

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// An undirected graph implementation using adjacency lists
///
/// The vertex count is fixed at construction. Every edge is stored once in
/// each endpoint's list, so a self-loop appears twice in its vertex's list.
/// Parallel edges are kept as inserted.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Weight,
{
    /// Adjacency for each vertex: vertex_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of undirected edges added so far
    edge_count: usize,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidVertexCount(vertex_count));
        }

        Ok(UndirectedGraph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        })
    }

    /// Creates a graph and adds every `(from, to, weight)` edge in order
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count)?;
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the adjacency list of a vertex
    pub fn adjacency(&self, vertex: usize) -> Result<&[(usize, W)]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Fails with `InvalidVertex` unless `vertex` is in `[0, V)`
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        // Unordered weights (NaN) are rejected along with negative ones
        match weight.partial_cmp(&W::zero()) {
            Some(Ordering::Less) | None => {
                return Err(Error::NegativeWeight(format!("{:?}", weight)));
            }
            _ => {}
        }

        self.adjacency[from].push((to, weight));
        self.adjacency[to].push((from, weight));
        self.edge_count += 1;

        trace!("added edge {} <-> {} with weight {:?}", from, to, weight);
        Ok(())
    }
}
