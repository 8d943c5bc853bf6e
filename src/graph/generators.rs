use crate::graph::{MutableGraph, UndirectedGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a connected random undirected graph with n vertices
///
/// A spanning path 0-1-...-(n-1) keeps every vertex reachable from vertex 0;
/// about `edge_factor * n` further random edges are added on top. Weights are
/// integers in 1..100. The same seed always yields the same graph.
pub fn generate_random_graph(n: usize, edge_factor: f64, seed: u64) -> Result<UndirectedGraph<u64>> {
    let mut graph = UndirectedGraph::new(n)?;
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 1..n {
        let weight = rng.gen_range(1..100);
        graph.add_edge(v - 1, v, weight)?;
    }

    let extra_edges = (edge_factor * n as f64) as usize;
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..100);
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates an 8-connected grid graph of width*height vertices
///
/// Vertex (x, y) has index `y * width + x`. Cardinal moves cost 1.0 and
/// diagonal moves cost 1.4.
pub fn generate_grid(width: usize, height: usize) -> Result<UndirectedGraph<OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::new(width * height)?;

    // Each undirected edge is added once, from its lower-index endpoint
    let directions = [(1i64, 0i64, 1.0), (0, 1, 1.0), (1, 1, 1.4), (-1, 1, 1.4)];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost))?;
                }
            }
        }
    }

    Ok(graph)
}
