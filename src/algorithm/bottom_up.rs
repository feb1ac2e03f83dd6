use std::fmt::Debug;

use num_traits::PrimInt;

use crate::algorithm::{MinimalPath, MinimalPathAlgorithm};
use crate::grid::{Coordinate, TriangleGrid};
use crate::Result;

/// Row by row dynamic programming over the triangle
///
/// Every cell is visited exactly once, so this is the reference the Dijkstra
/// engine is checked against. Path costs are kept in a private table and the
/// grid is left untouched. Ties resolve like [`crate::TriangleDijkstra`]:
/// leftmost base cell, left predecessor first. Sums saturate at
/// `W::max_value()` instead of overflowing.
#[derive(Debug, Default, Clone, Copy)]
pub struct BottomUpSolver;

impl BottomUpSolver {
    /// Creates a new solver instance
    pub fn new() -> Self {
        BottomUpSolver
    }

    /// Computes a minimal path without mutating `grid`
    pub fn solve<W>(&self, grid: &TriangleGrid<W>) -> MinimalPath<W>
    where
        W: PrimInt + Debug,
    {
        let rows = grid.row_count();
        if rows == 0 {
            return MinimalPath::empty();
        }

        // costs[r - 1][i - 1]: cheapest sum of values above (r, i)
        let mut costs: Vec<Vec<W>> = Vec::with_capacity(rows);
        costs.push(vec![W::zero()]);
        for row in 2..=rows {
            let previous = &costs[row - 2];
            let current = (1..=row)
                .map(|index| {
                    Coordinate::new(row, index)
                        .above()
                        .map(|parent| previous[parent.index - 1].saturating_add(grid.value(parent)))
                        .min()
                        .unwrap_or_else(W::max_value)
                })
                .collect();
            costs.push(current);
        }

        let mut best_index = 1;
        let mut best_total = W::max_value();
        for (offset, &cost) in costs[rows - 1].iter().enumerate() {
            let total = cost.saturating_add(grid.value(Coordinate::new(rows, offset + 1)));
            if total < best_total {
                best_index = offset + 1;
                best_total = total;
            }
        }

        let mut current = Coordinate::new(rows, best_index);
        let mut values = Vec::with_capacity(rows);
        values.push(grid.value(current));
        while current.row > 1 {
            // the cheapest parent is the one the cost table was built from,
            // min_by_key keeps the left one on ties
            let Some(previous) = current.above().min_by_key(|parent| {
                costs[parent.row - 1][parent.index - 1].saturating_add(grid.value(*parent))
            }) else {
                break;
            };
            values.push(grid.value(previous));
            current = previous;
        }

        values.reverse();
        MinimalPath::new(values)
    }
}

impl<W> MinimalPathAlgorithm<W> for BottomUpSolver
where
    W: PrimInt + Debug,
{
    fn find_minimal_path(&mut self, grid: &mut TriangleGrid<W>) -> Result<MinimalPath<W>> {
        Ok(self.solve(grid))
    }

    fn name(&self) -> &'static str {
        "Bottom-up"
    }
}
