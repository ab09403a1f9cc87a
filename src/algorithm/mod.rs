pub mod dag;
pub mod dijkstra;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
