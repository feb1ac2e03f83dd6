use std::fmt::Debug;

use log::{debug, trace};
use num_traits::PrimInt;

use crate::algorithm::{MinimalPath, MinimalPathAlgorithm};
use crate::data_structures::NeighbourSet;
use crate::grid::{cell_count, Coordinate, TriangleGrid, ADJACENT_NODE_MAXIMUM};
use crate::{Error, Result};

/// Counters collected during one run of [`TriangleDijkstra`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Cells popped from the frontier and marked final
    pub finalized_cells: usize,

    /// Cells of the last row marked final, never more than the row count
    pub finalized_base_cells: usize,

    /// Times a cell received a cheaper tentative cost
    pub relaxations: usize,

    /// Frontier entries removed because a cheaper cost superseded them
    pub stale_entries_replaced: usize,

    /// Largest frontier size observed
    pub peak_frontier_len: usize,

    /// Finalized cells whose cost plus value does not fit in the value type.
    /// Paths through them are dropped.
    pub overflowing_cells: usize,
}

/// Dijkstra's algorithm specialised for number triangles
///
/// Differences with the textbook algorithm:
/// - the cost to minimize is stored in the nodes, not in the links between them
/// - every cell of the last row is a target, the loop stops once all are final
/// - relaxation only fills costs into the grid, the minimal path is then
///   recovered by walking up from the cheapest base cell
///
/// The frontier is a [`NeighbourSet`] sized for the whole triangle, allocated
/// once and reused by every run. Whether a cell has a tentative cost is tracked
/// in a separate buffer, so a cost equal to `W::max_value()` is still a cost.
#[derive(Debug)]
pub struct TriangleDijkstra {
    /// Largest triangle the frontier buffers were sized for
    row_capacity: usize,

    frontier: NeighbourSet,

    /// Cells holding a tentative or final cost, in flat row-major order
    reached: Vec<bool>,

    stats: RunStats,
}

// Row-major position of a cell, matching the grid's layout
fn flat_slot(coord: Coordinate) -> usize {
    cell_count(coord.row - 1) + coord.index - 1
}

impl TriangleDijkstra {
    /// Creates an engine able to solve triangles of up to `row_count` rows
    pub fn new(row_count: usize) -> Self {
        TriangleDijkstra {
            row_capacity: row_count,
            frontier: NeighbourSet::with_capacity(cell_count(row_count)),
            reached: Vec::with_capacity(cell_count(row_count)),
            stats: RunStats::default(),
        }
    }

    /// Creates an engine sized for `grid`
    pub fn for_grid<W>(grid: &TriangleGrid<W>) -> Self
    where
        W: PrimInt + Debug,
    {
        TriangleDijkstra::new(grid.row_count())
    }

    pub fn row_capacity(&self) -> usize {
        self.row_capacity
    }

    /// Statistics of the most recent run
    pub fn last_stats(&self) -> RunStats {
        self.stats
    }

    /// Fills path costs and finalization flags into `grid` and returns the node
    /// values of a minimal path, apex first.
    ///
    /// A grid can only be relaxed once: a grid whose apex is already final is
    /// rejected with [`Error::AlreadyRelaxed`].
    pub fn run<W>(&mut self, grid: &mut TriangleGrid<W>) -> Result<MinimalPath<W>>
    where
        W: PrimInt + Debug,
    {
        let rows = grid.row_count();
        if rows > self.row_capacity {
            return Err(Error::CapacityExceeded {
                rows,
                capacity: self.row_capacity,
            });
        }
        if grid.is_relaxed() {
            return Err(Error::AlreadyRelaxed);
        }

        self.frontier.clear();
        self.reached.clear();
        self.reached.resize(grid.cell_count(), false);
        self.stats = RunStats::default();

        if rows == 0 {
            debug!("Empty triangle, no path to compute");
            return Ok(MinimalPath::empty());
        }

        self.relax(grid);
        debug!("Relaxed a triangle of {} rows: {:?}", rows, self.stats);

        self.travel_back_from_minimal_base(grid)
    }

    fn relax<W>(&mut self, grid: &mut TriangleGrid<W>)
    where
        W: PrimInt + Debug,
    {
        let rows = grid.row_count();

        grid.set_path_cost(Coordinate::APEX, W::zero());
        self.reached[flat_slot(Coordinate::APEX)] = true;
        self.frontier.insert(grid, Coordinate::APEX);

        let mut neighbours = [Coordinate::APEX; ADJACENT_NODE_MAXIMUM];

        // stop once every base cell has a final cost
        while self.stats.finalized_base_cells < rows {
            let Some(current) = self.frontier.pop_first() else {
                break;
            };

            grid.mark_final(current);
            self.stats.finalized_cells += 1;
            if current.row == rows {
                self.stats.finalized_base_cells += 1;
            }

            let current_cost = grid.path_cost(current);
            let Some(tentative_cost) = current_cost.checked_add(&grid.value(current)) else {
                // every path through this cell sums past W::max_value()
                self.stats.overflowing_cells += 1;
                continue;
            };

            let count = grid.adjacent_coordinates(current, false, &mut neighbours);
            for &neighbour in &neighbours[..count] {
                let slot = flat_slot(neighbour);
                if self.reached[slot] {
                    let neighbour_cost = grid.path_cost(neighbour);
                    if tentative_cost >= neighbour_cost {
                        continue;
                    }
                    let removed = self.frontier.remove(grid, neighbour, neighbour_cost);
                    debug_assert!(removed, "{} missing from the frontier", neighbour);
                    self.stats.stale_entries_replaced += 1;
                }

                trace!("{} -> {} at cost {:?}", current, neighbour, tentative_cost);
                grid.set_path_cost(neighbour, tentative_cost);
                self.reached[slot] = true;
                self.frontier.insert(grid, neighbour);
                self.stats.relaxations += 1;
            }

            self.stats.peak_frontier_len = self.stats.peak_frontier_len.max(self.frontier.len());
        }
    }

    /// Picks the base cell the path ends in.
    ///
    /// Without overflow every base cell is final with an exact total, and the
    /// grid's own scan applies. Otherwise only final base cells whose total fits
    /// in `W` compete, leftmost first on ties.
    fn minimal_base<W>(&self, grid: &TriangleGrid<W>) -> Result<Coordinate>
    where
        W: PrimInt + Debug,
    {
        let rows = grid.row_count();
        if self.stats.overflowing_cells == 0 && self.stats.finalized_base_cells == rows {
            return grid
                .minimal_cost_base_index()
                .map(|index| Coordinate::new(rows, index))
                .ok_or_else(|| Error::AlgorithmError("triangle has no base row".to_string()));
        }

        grid.base_coordinates()
            .filter(|&coord| grid.is_final(coord))
            .filter_map(|coord| {
                let total = grid.path_cost(coord).checked_add(&grid.value(coord))?;
                Some((coord, total))
            })
            .min_by_key(|&(_, total)| total)
            .map(|(coord, _)| coord)
            .ok_or_else(|| {
                Error::AlgorithmError(format!(
                    "every path sums past {:?}",
                    W::max_value()
                ))
            })
    }

    /// Walks from the cheapest base cell up to the apex.
    ///
    /// At each step the predecessor is a final cell above whose cost plus value
    /// equals the current cost; the left one wins when both qualify.
    fn travel_back_from_minimal_base<W>(&self, grid: &TriangleGrid<W>) -> Result<MinimalPath<W>>
    where
        W: PrimInt + Debug,
    {
        let mut current = self.minimal_base(grid)?;
        let mut current_cost = grid.path_cost(current);
        let mut values = Vec::with_capacity(grid.row_count());
        values.push(grid.value(current));

        let mut adjacent = [Coordinate::APEX; ADJACENT_NODE_MAXIMUM];
        while current.row > 1 {
            let count = grid.adjacent_coordinates(current, true, &mut adjacent);
            let previous = adjacent[..count]
                .iter()
                .copied()
                .find(|&candidate| {
                    grid.path_cost(candidate).checked_add(&grid.value(candidate))
                        == Some(current_cost)
                })
                .ok_or_else(|| {
                    Error::AlgorithmError(format!("no final predecessor found for {}", current))
                })?;

            current = previous;
            current_cost = grid.path_cost(previous);
            values.push(grid.value(previous));
        }

        values.reverse();
        Ok(MinimalPath::new(values))
    }
}

impl<W> MinimalPathAlgorithm<W> for TriangleDijkstra
where
    W: PrimInt + Debug,
{
    fn find_minimal_path(&mut self, grid: &mut TriangleGrid<W>) -> Result<MinimalPath<W>> {
        self.run(grid)
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
