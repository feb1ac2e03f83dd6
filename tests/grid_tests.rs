use min_triangle_path::grid::{Coordinate, TriangleGrid, ADJACENT_NODE_MAXIMUM};
use min_triangle_path::Error;

fn classic_grid() -> TriangleGrid<i64> {
    TriangleGrid::from_rows(&[vec![1], vec![2, 3], vec![4, 1, 4]]).unwrap()
}

#[test]
fn test_set_value_then_value_returns_stored_value() {
    let mut grid: TriangleGrid<i64> = TriangleGrid::new(6);
    for row in 1..=6 {
        for index in 1..=row {
            grid.set_value(Coordinate::new(row, index), (row * 10 + index) as i64);
        }
    }

    for row in 1..=6 {
        for index in 1..=row {
            assert_eq!(grid.value(Coordinate::new(row, index)), (row * 10 + index) as i64);
        }
    }
    assert_eq!(grid.cell_count(), 21);
    assert_eq!(grid.row_count(), 6);
}

#[test]
fn test_fresh_grid_has_sentinel_costs_and_no_final_cells() {
    let grid: TriangleGrid<i32> = TriangleGrid::new(4);

    assert_eq!(grid.path_cost(Coordinate::APEX), 0, "Apex starts at cost zero");
    for row in 1..=4 {
        for index in 1..=row {
            let coord = Coordinate::new(row, index);
            assert!(!grid.is_final(coord));
            if coord != Coordinate::APEX {
                assert_eq!(grid.path_cost(coord), i32::MAX, "{} should be unreached", coord);
            }
        }
    }
    assert!(!grid.is_relaxed());
}

#[test]
fn test_mark_final_is_idempotent() {
    let mut grid = classic_grid();
    let coord = Coordinate::new(3, 2);

    grid.mark_final(coord);
    grid.mark_final(coord);

    assert!(grid.is_final(coord));
    assert!(!grid.is_final(Coordinate::new(3, 1)));
}

#[test]
fn test_downward_adjacency_skips_final_cells() {
    let mut grid = classic_grid();
    let mut out = [Coordinate::APEX; ADJACENT_NODE_MAXIMUM];

    let count = grid.adjacent_coordinates(Coordinate::new(2, 1), false, &mut out);
    assert_eq!(&out[..count], &[Coordinate::new(3, 1), Coordinate::new(3, 2)]);

    grid.mark_final(Coordinate::new(3, 1));
    let count = grid.adjacent_coordinates(Coordinate::new(2, 1), false, &mut out);
    assert_eq!(&out[..count], &[Coordinate::new(3, 2)]);

    let count = grid.adjacent_coordinates(Coordinate::new(3, 2), false, &mut out);
    assert_eq!(count, 0, "Base cells have nothing below");
}

#[test]
fn test_upward_adjacency_only_returns_final_cells() {
    let mut grid = classic_grid();
    let mut out = [Coordinate::APEX; ADJACENT_NODE_MAXIMUM];

    let count = grid.adjacent_coordinates(Coordinate::new(3, 2), true, &mut out);
    assert_eq!(count, 0, "Nothing is final yet");

    grid.mark_final(Coordinate::new(2, 1));
    grid.mark_final(Coordinate::new(2, 2));
    let count = grid.adjacent_coordinates(Coordinate::new(3, 2), true, &mut out);
    assert_eq!(&out[..count], &[Coordinate::new(2, 1), Coordinate::new(2, 2)], "Left comes first");

    // edge cells have a single parent
    let count = grid.adjacent_coordinates(Coordinate::new(3, 1), true, &mut out);
    assert_eq!(&out[..count], &[Coordinate::new(2, 1)]);
    let count = grid.adjacent_coordinates(Coordinate::new(3, 3), true, &mut out);
    assert_eq!(&out[..count], &[Coordinate::new(2, 2)]);

    let count = grid.adjacent_coordinates(Coordinate::APEX, true, &mut out);
    assert_eq!(count, 0, "The apex has nothing above");
}

#[test]
fn test_adjacency_never_leaves_the_triangle() {
    for rows in 1..=8 {
        let mut grid: TriangleGrid<i64> = TriangleGrid::new(rows);
        // mark a checkerboard of cells final so both filters see mixed states
        for row in 1..=rows {
            for index in 1..=row {
                if (row + index) % 2 == 0 {
                    grid.mark_final(Coordinate::new(row, index));
                }
            }
        }

        let mut out = [Coordinate::APEX; ADJACENT_NODE_MAXIMUM];
        for row in 1..=rows {
            for index in 1..=row {
                for want_final in [false, true] {
                    let count = grid.adjacent_coordinates(Coordinate::new(row, index), want_final, &mut out);
                    assert!(count <= ADJACENT_NODE_MAXIMUM);
                    for &neighbour in &out[..count] {
                        assert!(grid.contains(neighbour), "{} is outside {} rows", neighbour, rows);
                        assert_eq!(grid.is_final(neighbour), want_final);
                    }
                }
            }
        }
    }
}

#[test]
fn test_minimal_cost_base_index_prefers_leftmost_tie() {
    let mut grid: TriangleGrid<i64> = TriangleGrid::from_rows(&[vec![0], vec![5, 1], vec![2, 3, 2]]).unwrap();
    grid.set_path_cost(Coordinate::new(3, 1), 6);
    grid.set_path_cost(Coordinate::new(3, 2), 5);
    grid.set_path_cost(Coordinate::new(3, 3), 6);

    // totals are 8, 8 and 8
    assert_eq!(grid.minimal_cost_base_index(), Some(1));

    grid.set_path_cost(Coordinate::new(3, 3), 1);
    assert_eq!(grid.minimal_cost_base_index(), Some(3));
}

#[test]
fn test_minimal_cost_base_index_of_empty_grid() {
    let grid: TriangleGrid<i64> = TriangleGrid::new(0);
    assert!(grid.is_empty());
    assert_eq!(grid.minimal_cost_base_index(), None);
    assert_eq!(grid.base_coordinates().count(), 0);
}

#[test]
fn test_from_rows_rejects_bad_shapes_and_negative_values() {
    let result = TriangleGrid::<i64>::from_rows(&[vec![1], vec![2]]);
    assert!(matches!(
        result,
        Err(Error::RowLength { row: 2, expected: 2, found: 1 })
    ));

    let result = TriangleGrid::<i64>::from_rows(&[vec![1], vec![2, -3]]);
    assert!(matches!(result, Err(Error::NegativeValue { row: 2, index: 2 })));
}

#[test]
fn test_to_rows_returns_loaded_values() {
    let rows = vec![vec![7], vec![6, 3], vec![3, 8, 5]];
    let grid = TriangleGrid::from_rows(&rows).unwrap();
    assert_eq!(grid.to_rows(), rows);
    assert_eq!(
        grid.base_coordinates().collect::<Vec<_>>(),
        vec![Coordinate::new(3, 1), Coordinate::new(3, 2), Coordinate::new(3, 3)]
    );
}

#[test]
fn test_checked_value_reports_invalid_coordinates() {
    let grid = classic_grid();
    assert_eq!(grid.checked_value(Coordinate::new(3, 3)).unwrap(), 4);

    let err = grid.checked_value(Coordinate::new(3, 4)).unwrap_err();
    assert!(matches!(err, Error::InvalidCoordinate { row: 3, index: 4, rows: 3 }));
    assert!(grid.checked_value(Coordinate::new(4, 1)).is_err());
    assert!(grid.checked_value(Coordinate::new(0, 0)).is_err());
}

#[test]
#[should_panic(expected = "outside a triangle of 3 rows")]
fn test_value_panics_past_the_end_of_a_row() {
    let grid = classic_grid();
    grid.value(Coordinate::new(2, 3));
}

#[test]
#[should_panic(expected = "outside a triangle of 3 rows")]
fn test_set_path_cost_panics_below_the_base() {
    let mut grid = classic_grid();
    grid.set_path_cost(Coordinate::new(4, 1), 0);
}

#[test]
fn test_coordinate_neighbours() {
    assert_eq!(
        Coordinate::new(2, 2).below(),
        [Coordinate::new(3, 2), Coordinate::new(3, 3)]
    );
    assert_eq!(
        Coordinate::new(3, 2).above().collect::<Vec<_>>(),
        vec![Coordinate::new(2, 1), Coordinate::new(2, 2)]
    );
    assert_eq!(Coordinate::APEX.above().count(), 0);
    assert_eq!(Coordinate::new(4, 1).to_string(), "(4, 1)");
}
