use std::fmt::Debug;

use num_traits::PrimInt;

use crate::grid::{Coordinate, TriangleGrid};

/// Sorted set of reached but not yet final cells, used as the Dijkstra frontier
///
/// Coordinates are kept in two parallel arrays (rows and indices) sorted by the
/// current path cost of the cell they point to in a [`TriangleGrid`]. The cost is
/// not copied: it is read from the grid during the binary search, so the cost of
/// a cell must not change while the cell is in the set. Callers remove the entry,
/// update the cost, then insert it again.
///
/// Insert and remove shift the tail of both arrays. With at most one entry per
/// cell and the arrays allocated once for the whole triangle, this stays in cache
/// and beats a pointer based heap for the triangle sizes we target.
#[derive(Debug, Clone)]
pub struct NeighbourSet {
    /// Row coordinates, sorted by referenced path cost
    rows: Vec<usize>,

    /// Index coordinates, parallel to `rows`
    indices: Vec<usize>,
}

impl NeighbourSet {
    /// Creates an empty set able to hold `capacity` cells without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        NeighbourSet {
            rows: Vec::with_capacity(capacity),
            indices: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of cells the set can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.rows.capacity().min(self.indices.capacity())
    }

    /// Returns the number of cells in the set
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.rows.clear();
        self.indices.clear();
    }

    /// Returns the coordinate stored at `position`
    pub fn get(&self, position: usize) -> Option<Coordinate> {
        Some(Coordinate::new(*self.rows.get(position)?, self.indices[position]))
    }

    /// Returns the cheapest coordinate without removing it
    pub fn peek_first(&self) -> Option<Coordinate> {
        self.get(0)
    }

    /// Iterates over the coordinates from cheapest to most expensive
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.rows
            .iter()
            .zip(&self.indices)
            .map(|(&row, &index)| Coordinate::new(row, index))
    }

    /// Returns true if the coordinate is in the set. Linear scan.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.iter().any(|c| c == coord)
    }

    /// Binary search for the first position whose referenced cost is not below `cost`
    ///
    /// This is both where an entry of that cost is inserted and where the search
    /// for an existing entry of that cost starts.
    pub fn position_for<W>(&self, grid: &TriangleGrid<W>, cost: W) -> usize
    where
        W: PrimInt + Debug,
    {
        let mut low = 0;
        let mut high = self.len();
        while low < high {
            let mid = low + (high - low) / 2;
            if self.cost_at(grid, mid) < cost {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// Inserts `coord` at the position matching its current path cost in `grid`.
    ///
    /// The new entry goes before any entry of equal cost.
    pub fn insert<W>(&mut self, grid: &TriangleGrid<W>, coord: Coordinate)
    where
        W: PrimInt + Debug,
    {
        debug_assert!(!self.contains(coord), "{} is already in the frontier", coord);
        let position = self.position_for(grid, grid.path_cost(coord));
        self.rows.insert(position, coord.row);
        self.indices.insert(position, coord.index);
    }

    /// Removes `coord`, whose path cost in `grid` must still be `cost`.
    ///
    /// Returns false if the coordinate was not found among the entries of that cost.
    pub fn remove<W>(&mut self, grid: &TriangleGrid<W>, coord: Coordinate, cost: W) -> bool
    where
        W: PrimInt + Debug,
    {
        let mut position = self.position_for(grid, cost);
        while position < self.len() && self.cost_at(grid, position) == cost {
            if self.rows[position] == coord.row && self.indices[position] == coord.index {
                self.rows.remove(position);
                self.indices.remove(position);
                return true;
            }
            position += 1;
        }
        false
    }

    /// Extracts the coordinate with the smallest path cost
    pub fn pop_first(&mut self) -> Option<Coordinate> {
        if self.is_empty() {
            return None;
        }
        let row = self.rows.remove(0);
        let index = self.indices.remove(0);
        Some(Coordinate::new(row, index))
    }

    fn cost_at<W>(&self, grid: &TriangleGrid<W>, position: usize) -> W
    where
        W: PrimInt + Debug,
    {
        grid.path_cost(Coordinate::new(self.rows[position], self.indices[position]))
    }
}
