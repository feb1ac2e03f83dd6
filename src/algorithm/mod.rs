pub mod traits;
pub mod dijkstra;
pub mod bottom_up;

pub use traits::{MinimalPath, MinimalPathAlgorithm};
