use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a cell in a triangle: `(row, index)` with both parts starting at 1.
///
/// `(1, 1)` is the apex and `(n, n)` the bottom-right cell of an `n` row triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row number, 1 for the apex
    pub row: usize,

    /// Position inside the row, between 1 and `row`
    pub index: usize,
}

impl Coordinate {
    /// The apex of every non-empty triangle
    pub const APEX: Coordinate = Coordinate { row: 1, index: 1 };

    /// Creates a new coordinate
    pub const fn new(row: usize, index: usize) -> Self {
        Coordinate { row, index }
    }

    /// Cells reachable one row down: `(row + 1, index)` and `(row + 1, index + 1)`
    pub fn below(self) -> [Coordinate; 2] {
        [
            Coordinate::new(self.row + 1, self.index),
            Coordinate::new(self.row + 1, self.index + 1),
        ]
    }

    /// Cells one row up that lead here, left first. Edge cells only have one.
    pub fn above(self) -> impl Iterator<Item = Coordinate> {
        let left = (self.row > 1 && self.index > 1)
            .then(|| Coordinate::new(self.row - 1, self.index - 1));
        let right = (self.row > 1 && self.index < self.row)
            .then(|| Coordinate::new(self.row - 1, self.index));
        left.into_iter().chain(right)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.index)
    }
}
