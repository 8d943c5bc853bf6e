use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::ops::Sub;

/// Bound for edge weights and path costs
///
/// Weights only need a partial order: integer fares and `OrderedFloat` costs
/// both qualify, as does plain `f64`.
pub trait Weight: Copy + Debug + PartialOrd + Zero + Sub<Output = Self> {
    /// Adds two costs, or `None` when the sum does not fit the type
    fn add_cost(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn add_cost(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

// Floats saturate to infinity instead of wrapping
macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn add_cost(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64, OrderedFloat<f32>, OrderedFloat<f64>);

/// Trait representing a weighted undirected graph with a fixed vertex space
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the (neighbor, weight) pairs of a vertex,
    /// in edge insertion order
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the edges between two vertices
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |best, weight| match best {
                Some(b) if b <= weight => Some(b),
                _ => Some(weight),
            })
    }
}

/// Trait for the build phase of a graph
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds an undirected edge between vertices with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> crate::Result<()>;
}
