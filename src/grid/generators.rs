use std::fmt::{Debug, Display};

use num_traits::PrimInt;
use rand::prelude::*;

use crate::grid::{Coordinate, TriangleGrid};

/// Generates a triangle of `row_count` rows with values drawn uniformly from `0..=max_value`
pub fn generate_triangle(row_count: usize, max_value: i64) -> TriangleGrid<i64> {
    generate_with_rng(row_count, max_value, &mut rand::thread_rng())
}

/// Same as [`generate_triangle`] but reproducible for a given seed
pub fn generate_triangle_seeded(row_count: usize, max_value: i64, seed: u64) -> TriangleGrid<i64> {
    generate_with_rng(row_count, max_value, &mut StdRng::seed_from_u64(seed))
}

/// Generates a random triangle using the provided random number generator
pub fn generate_with_rng<R>(row_count: usize, max_value: i64, rng: &mut R) -> TriangleGrid<i64>
where
    R: Rng + ?Sized,
{
    assert!(max_value >= 0, "max_value must not be negative");

    let mut grid = TriangleGrid::new(row_count);
    for row in 1..=row_count {
        for index in 1..=row {
            grid.set_value(Coordinate::new(row, index), rng.gen_range(0..=max_value));
        }
    }

    grid
}

/// Renders the node values in the text format accepted by the loader:
/// one line per row, values separated by a single space.
pub fn render_triangle<W>(grid: &TriangleGrid<W>) -> String
where
    W: PrimInt + Debug + Display,
{
    let mut text = String::new();
    for row in grid.to_rows() {
        let line: Vec<String> = row.iter().map(|value| value.to_string()).collect();
        text.push_str(&line.join(" "));
        text.push('\n');
    }
    text
}
