use std::fmt::Debug;

use num_traits::PrimInt;

use crate::grid::TriangleGrid;
use crate::Result;

/// Node values along a minimal path, apex first
///
/// An empty path means the triangle had no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalPath<W>
where
    W: PrimInt + Debug,
{
    values: Vec<W>,
}

impl<W> MinimalPath<W>
where
    W: PrimInt + Debug,
{
    /// Wraps node values that are already in apex-to-base order
    pub fn new(values: Vec<W>) -> Self {
        MinimalPath { values }
    }

    /// The path of a triangle without rows
    pub fn empty() -> Self {
        MinimalPath { values: Vec::new() }
    }

    pub fn values(&self) -> &[W] {
        &self.values
    }

    pub fn into_values(self) -> Vec<W> {
        self.values
    }

    /// Returns the number of nodes on the path, which is the row count of the triangle
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the node values along the path
    pub fn total(&self) -> W {
        self.values
            .iter()
            .fold(W::zero(), |total, &value| total.saturating_add(value))
    }
}

/// Trait for minimal path algorithms over a number triangle
pub trait MinimalPathAlgorithm<W>
where
    W: PrimInt + Debug,
{
    /// Find a minimal apex-to-base path.
    ///
    /// Algorithms may record their intermediate costs in the grid, so a grid
    /// should only be handed to one run.
    fn find_minimal_path(&mut self, grid: &mut TriangleGrid<W>) -> Result<MinimalPath<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Build a triangle from its rows and find its minimal path
    fn solve_rows(&mut self, rows: &[Vec<W>]) -> Result<MinimalPath<W>> {
        let mut grid = TriangleGrid::from_rows(rows)?;
        self.find_minimal_path(&mut grid)
    }
}
