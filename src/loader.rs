//! Text input for triangles.
//!
//! One line per row, row `r` holding exactly `r` integers separated by a single
//! space:
//!
//! ```text
//! 7
//! 6 3
//! 3 8 5
//! ```

use std::fmt::Debug;
use std::io::BufRead;
use std::str::FromStr;

use log::{debug, warn};
use num_traits::PrimInt;

use crate::config::SolverConfig;
use crate::grid::{Coordinate, TriangleGrid};
use crate::{Error, Result};

const INPUT_NODE_SEPARATOR: char = ' ';

/// Parses a whole triangle held in memory
pub fn parse_triangle<W>(input: &str) -> Result<TriangleGrid<W>>
where
    W: PrimInt + Debug + FromStr,
{
    let config = SolverConfig::default();
    let lines: Vec<&str> = input.lines().collect();
    make_triangle(&lines, &config)
}

/// Reads every line from `reader`, then builds the triangle.
///
/// The input is collected before parsing so the grid is allocated once with
/// its final row count.
pub fn read_triangle<W, R>(reader: R) -> Result<TriangleGrid<W>>
where
    W: PrimInt + Debug + FromStr,
    R: BufRead,
{
    read_triangle_with_config(reader, &SolverConfig::default())
}

/// Like [`read_triangle`] with an explicit configuration
pub fn read_triangle_with_config<W, R>(reader: R, config: &SolverConfig) -> Result<TriangleGrid<W>>
where
    W: PrimInt + Debug + FromStr,
    R: BufRead,
{
    let mut raw_lines: Vec<String> = Vec::with_capacity(config.performance_row_target);
    for line in reader.lines() {
        let line = line.map_err(|source| Error::BadLine {
            row: raw_lines.len() + 1,
            source,
        })?;
        raw_lines.push(line);
    }

    let lines: Vec<&str> = raw_lines.iter().map(String::as_str).collect();
    make_triangle(&lines, config)
}

fn make_triangle<W>(lines: &[&str], config: &SolverConfig) -> Result<TriangleGrid<W>>
where
    W: PrimInt + Debug + FromStr,
{
    if lines.len() > config.performance_row_target {
        warn!(
            "Triangle has {} rows, more than the {} rows the solver is tuned for",
            lines.len(),
            config.performance_row_target
        );
    }

    let mut grid = TriangleGrid::new(lines.len());
    for (row_idx, &line) in lines.iter().enumerate() {
        let row = row_idx + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        // row n has n values separated by n - 1 spaces, trailing separators are ignored
        let mut tokens: Vec<&str> = line.split(INPUT_NODE_SEPARATOR).collect();
        if tokens.len() > 1 {
            while tokens.last().map_or(false, |token| token.is_empty()) {
                tokens.pop();
            }
        }
        if tokens.len() != row {
            return Err(Error::BadSpacing { row });
        }

        for (token_idx, token) in tokens.iter().enumerate() {
            let index = token_idx + 1;
            let value: W = token
                .parse()
                .map_err(|_| Error::BadNumber { row, index })?;
            if value < W::zero() {
                return Err(Error::NegativeValue { row, index });
            }
            grid.set_value(Coordinate::new(row, index), value);
        }
    }

    debug!("Loaded a triangle of {} rows", grid.row_count());
    Ok(grid)
}
