use libc::c_int;

use crate::algorithm::dijkstra::TriangleDijkstra;
use crate::grid::{cell_count, Coordinate, TriangleGrid};

pub const MTP_OK: c_int = 0;
pub const MTP_NULL_POINTER: c_int = -1;
pub const MTP_NOT_TRIANGULAR: c_int = -2;
pub const MTP_NEGATIVE_VALUE: c_int = -3;
pub const MTP_BUFFER_TOO_SMALL: c_int = -4;
pub const MTP_ALGORITHM_FAILED: c_int = -5;

/// Smallest row count whose triangle holds exactly `value_count` cells
fn row_count_for(value_count: usize) -> Option<usize> {
    let mut rows = 0;
    while cell_count(rows) < value_count {
        rows += 1;
    }
    (cell_count(rows) == value_count).then_some(rows)
}

/// Solves a triangle given row after row in `values`.
///
/// On success the node values of the minimal path are written to `out_path`,
/// their number to `out_len`, and `MTP_OK` is returned.
///
/// # Safety
/// `values` must point to `value_count` readable integers and `out_path` to
/// `out_capacity` writable ones.
#[no_mangle]
pub unsafe extern "C" fn mtp_solve(
    values: *const i64,
    value_count: usize,
    out_path: *mut i64,
    out_capacity: usize,
    out_len: *mut usize,
) -> c_int {
    if out_len.is_null() || (value_count > 0 && (values.is_null() || out_path.is_null())) {
        return MTP_NULL_POINTER;
    }
    let Some(rows) = row_count_for(value_count) else {
        return MTP_NOT_TRIANGULAR;
    };
    if out_capacity < rows {
        return MTP_BUFFER_TOO_SMALL;
    }

    let input: &[i64] = if value_count == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(values, value_count)
    };
    let mut grid = TriangleGrid::new(rows);
    let mut cells = input.iter();
    for row in 1..=rows {
        for index in 1..=row {
            let value = cells.next().copied().unwrap_or_default();
            if value < 0 {
                return MTP_NEGATIVE_VALUE;
            }
            grid.set_value(Coordinate::new(row, index), value);
        }
    }

    let path = match TriangleDijkstra::for_grid(&grid).run(&mut grid) {
        Ok(path) => path,
        Err(_) => return MTP_ALGORITHM_FAILED,
    };

    if !path.is_empty() {
        let out = std::slice::from_raw_parts_mut(out_path, out_capacity);
        out[..path.len()].copy_from_slice(path.values());
    }
    *out_len = path.len();
    MTP_OK
}
