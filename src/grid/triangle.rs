use std::fmt::Debug;

use num_traits::PrimInt;

use crate::grid::Coordinate;
use crate::{Error, Result};

/// Any cell has at most two neighbours in a given direction (below or above).
pub const ADJACENT_NODE_MAXIMUM: usize = 2;

/// Number of cells in a triangle of `row_count` rows
pub fn cell_count(row_count: usize) -> usize {
    row_count * (row_count + 1) / 2
}

/// A triangle of integer cells stored in flat arrays
///
/// Cells are addressed by [`Coordinate`] from the outside. Internally every row
/// starts at a precomputed offset in three parallel arrays holding, per cell:
/// - the constant node value set by the loader
/// - the path cost needed to reach the cell from the apex, excluding its own value
/// - whether that path cost is final
///
/// Path costs start at `W::max_value()`, which stands for "not reached yet",
/// except for the apex which starts at zero.
#[derive(Debug, Clone)]
pub struct TriangleGrid<W>
where
    W: PrimInt + Debug,
{
    /// Flat index of the first cell of each row
    row_offsets: Vec<usize>,

    /// Node values, row after row
    node_values: Vec<W>,

    /// Tentative or final path costs
    path_costs: Vec<W>,

    /// Finalization flags
    final_flags: Vec<bool>,
}

impl<W> TriangleGrid<W>
where
    W: PrimInt + Debug,
{
    /// Creates a triangle of `row_count` rows with every node value at zero.
    ///
    /// The last valid coordinate is `(row_count, row_count)`.
    pub fn new(row_count: usize) -> Self {
        let cells = cell_count(row_count);
        let row_offsets = (0..row_count).map(cell_count).collect();
        let mut path_costs = vec![W::max_value(); cells];
        if let Some(apex) = path_costs.first_mut() {
            *apex = W::zero();
        }

        TriangleGrid {
            row_offsets,
            node_values: vec![W::zero(); cells],
            path_costs,
            final_flags: vec![false; cells],
        }
    }

    /// Builds a triangle from its rows, checking the shape and the sign of every value
    pub fn from_rows(rows: &[Vec<W>]) -> Result<Self> {
        let mut grid = TriangleGrid::new(rows.len());
        for (row_idx, values) in rows.iter().enumerate() {
            let row = row_idx + 1;
            if values.len() != row {
                return Err(Error::RowLength {
                    row,
                    expected: row,
                    found: values.len(),
                });
            }
            for (value_idx, &value) in values.iter().enumerate() {
                if value < W::zero() {
                    return Err(Error::NegativeValue {
                        row,
                        index: value_idx + 1,
                    });
                }
                grid.set_value(Coordinate::new(row, value_idx + 1), value);
            }
        }
        Ok(grid)
    }

    /// Returns the number of rows
    pub fn row_count(&self) -> usize {
        self.row_offsets.len()
    }

    /// Returns the number of cells
    pub fn cell_count(&self) -> usize {
        self.node_values.len()
    }

    /// Returns true if the triangle has no rows
    pub fn is_empty(&self) -> bool {
        self.node_values.is_empty()
    }

    /// Returns true if the coordinate designates a cell of this triangle
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row >= 1 && coord.row <= self.row_count() && coord.index >= 1 && coord.index <= coord.row
    }

    pub fn set_value(&mut self, coord: Coordinate, value: W) {
        let idx = self.flat_index(coord);
        self.node_values[idx] = value;
    }

    pub fn value(&self, coord: Coordinate) -> W {
        self.node_values[self.flat_index(coord)]
    }

    /// Like [`TriangleGrid::value`] but reports out of range coordinates as an error
    pub fn checked_value(&self, coord: Coordinate) -> Result<W> {
        if !self.contains(coord) {
            return Err(Error::InvalidCoordinate {
                row: coord.row,
                index: coord.index,
                rows: self.row_count(),
            });
        }
        Ok(self.value(coord))
    }

    pub fn set_path_cost(&mut self, coord: Coordinate, cost: W) {
        let idx = self.flat_index(coord);
        self.path_costs[idx] = cost;
    }

    pub fn path_cost(&self, coord: Coordinate) -> W {
        self.path_costs[self.flat_index(coord)]
    }

    /// Marks the path cost of a cell as final. Marking twice is harmless.
    pub fn mark_final(&mut self, coord: Coordinate) {
        let idx = self.flat_index(coord);
        self.final_flags[idx] = true;
    }

    pub fn is_final(&self, coord: Coordinate) -> bool {
        self.final_flags[self.flat_index(coord)]
    }

    /// True once an algorithm has started finalizing cells, i.e. the apex is final
    pub fn is_relaxed(&self) -> bool {
        self.final_flags.first().copied().unwrap_or(false)
    }

    /// Finds the adjacent cells of `coord` whose finalization flag equals `want_final`.
    ///
    /// With `want_final == false` the candidates are the two cells below (relaxation
    /// direction); with `want_final == true` they are the cells above (path
    /// reconstruction direction), left before right. Results are written to `out`
    /// and the number of coordinates written is returned.
    pub fn adjacent_coordinates(
        &self,
        coord: Coordinate,
        want_final: bool,
        out: &mut [Coordinate; ADJACENT_NODE_MAXIMUM],
    ) -> usize {
        self.assert_contains(coord);
        let mut count = 0;

        if want_final {
            for candidate in coord.above() {
                if self.is_final(candidate) {
                    out[count] = candidate;
                    count += 1;
                }
            }
        } else if coord.row < self.row_count() {
            for candidate in coord.below() {
                if !self.is_final(candidate) {
                    out[count] = candidate;
                    count += 1;
                }
            }
        }

        count
    }

    /// Index in the last row of the base cell with minimal `path cost + value`.
    ///
    /// Ties go to the leftmost cell. Returns `None` for an empty triangle.
    pub fn minimal_cost_base_index(&self) -> Option<usize> {
        let base_offset = *self.row_offsets.last()?;
        let mut best: Option<(usize, W)> = None;

        let base_costs = self.path_costs[base_offset..].iter();
        let base_values = self.node_values[base_offset..].iter();
        for (offset, (&cost, &value)) in base_costs.zip(base_values).enumerate() {
            let total = cost.saturating_add(value);
            match best {
                Some((_, best_total)) if best_total <= total => {}
                _ => best = Some((offset + 1, total)),
            }
        }

        best.map(|(index, _)| index)
    }

    /// Coordinates of the last row, left to right
    pub fn base_coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let rows = self.row_count();
        (1..=rows).map(move |index| Coordinate::new(rows, index))
    }

    /// Copies the node values out, one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.row_offsets
            .iter()
            .enumerate()
            .map(|(row_idx, &offset)| self.node_values[offset..=offset + row_idx].to_vec())
            .collect()
    }

    #[track_caller]
    fn assert_contains(&self, coord: Coordinate) {
        assert!(
            self.contains(coord),
            "coordinate {} outside a triangle of {} rows",
            coord,
            self.row_count()
        );
    }

    #[track_caller]
    fn flat_index(&self, coord: Coordinate) -> usize {
        self.assert_contains(coord);
        self.row_offsets[coord.row - 1] + coord.index - 1
    }
}
