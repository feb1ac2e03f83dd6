//! Minimal Triangle Path - specialised Dijkstra over a number triangle
//!
//! A triangle of N rows holds one integer per cell. A path starts at the apex and
//! moves, row by row, to one of the two cells directly below. This library finds a
//! path whose node values have the minimal sum.
//!
//! The costs live on the nodes rather than on the edges, every base cell is a
//! target, and the optimal path is recovered afterwards by walking the finalized
//! costs back up to the apex. The frontier is a sorted pair of flat arrays instead
//! of a heap so that a 500 row triangle is solved well under a second.

pub mod algorithm;
pub mod config;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod grid;
pub mod loader;
pub mod output;
pub mod web;

pub use algorithm::{
    bottom_up::BottomUpSolver, dijkstra::TriangleDijkstra, MinimalPath, MinimalPathAlgorithm,
};
pub use config::SolverConfig;
/// Re-export main types for convenient use
pub use grid::{Coordinate, TriangleGrid};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid coordinate ({row}, {index}) in a triangle of {rows} rows")]
    InvalidCoordinate { row: usize, index: usize, rows: usize },

    #[error("Illegal input. Line has unexpected number of spaces. Row number = {row}")]
    BadSpacing { row: usize },

    #[error("Illegal input. Faulty line reading. Row number = {row}")]
    BadLine {
        row: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Illegal input. Node value is not a number. Row number = {row}, Node number = {index}")]
    BadNumber { row: usize, index: usize },

    #[error("Illegal input. Node value is negative. Row number = {row}, Node number = {index}")]
    NegativeValue { row: usize, index: usize },

    #[error("Row {row} has {found} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Triangle has already been relaxed")]
    AlreadyRelaxed,

    #[error("Triangle of {rows} rows exceeds engine capacity of {capacity} rows")]
    CapacityExceeded { rows: usize, capacity: usize },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
