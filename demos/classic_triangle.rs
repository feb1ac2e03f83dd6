use colored::*;
use min_triangle_path::grid::Coordinate;
use min_triangle_path::loader::parse_triangle;
use min_triangle_path::output::format_path;
use min_triangle_path::{SolverConfig, TriangleDijkstra, TriangleGrid};

const TRIANGLE: &str = "7\n6 3\n3 8 5\n11 2 10 9\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("{}", "🔺 Minimal Triangle Path".bold().cyan());
    println!("{}", "========================".cyan());

    let mut grid: TriangleGrid<i64> = parse_triangle(TRIANGLE)?;
    let mut dijkstra = TriangleDijkstra::for_grid(&grid);
    let path = dijkstra.run(&mut grid)?;

    // walk the path again to know which cell of each row to highlight
    let mut highlighted = Vec::with_capacity(path.len());
    let mut index = 1;
    for (row_idx, &value) in path.values().iter().enumerate() {
        let row = row_idx + 1;
        if row > 1 && grid.value(Coordinate::new(row, index)) != value {
            index += 1;
        }
        highlighted.push(index);
    }

    let row_count = grid.row_count();
    for row in 1..=row_count {
        let cells: Vec<String> = (1..=row)
            .map(|index| {
                let text = format!("{:>3}", grid.value(Coordinate::new(row, index)));
                if highlighted[row - 1] == index {
                    text.green().bold().to_string()
                } else {
                    text.dimmed().to_string()
                }
            })
            .collect();
        println!("{}{}", "  ".repeat(row_count - row), cells.join(" "));
    }

    println!();
    if let Some(line) = format_path(&path, &SolverConfig::default()) {
        println!("{}", line.yellow());
    }
    println!("{} {:?}", "Engine statistics:".blue(), dijkstra.last_stats());

    Ok(())
}
