pub mod coordinate;
pub mod generators;
pub mod triangle;

pub use coordinate::Coordinate;
pub use triangle::{cell_count, TriangleGrid, ADJACENT_NODE_MAXIMUM};
