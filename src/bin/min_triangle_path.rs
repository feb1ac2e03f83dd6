use std::io::{self, BufWriter, Write};
use std::process;

use log::{error, info};
use min_triangle_path::loader::read_triangle_with_config;
use min_triangle_path::output::write_path;
use min_triangle_path::{SolverConfig, TriangleDijkstra, TriangleGrid};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        error!("{}", err);
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SolverConfig::default();

    let stdin = io::stdin();
    let mut grid: TriangleGrid<i64> = read_triangle_with_config(stdin.lock(), &config)?;
    info!("Read a triangle of {} rows", grid.row_count());

    let mut dijkstra = TriangleDijkstra::for_grid(&grid);
    let path = dijkstra.run(&mut grid)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_path(&mut out, &path, &config)?;
    out.flush()?;

    Ok(())
}
