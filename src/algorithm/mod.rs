pub mod traits;
pub mod path;
pub mod dijkstra;
pub mod batch;

pub use path::{total_cost, PathSegment};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
