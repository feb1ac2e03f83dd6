use std::env;
use std::time::{Duration, Instant};

use log::info;
use rayon::prelude::*;

use min_triangle_path::config::ROW_COUNT_PERFORMANCE_TARGET;
use min_triangle_path::grid::generators::generate_triangle_seeded;
use min_triangle_path::{BottomUpSolver, MinimalPathAlgorithm, TriangleDijkstra};

const MAX_NODE_VALUE: i64 = 99;

struct Measurement {
    seed: u64,
    dijkstra_time: Duration,
    bottom_up_time: Duration,
    dijkstra_total: i64,
    bottom_up_total: i64,
}

// Solve one generated triangle with both algorithms
fn measure(row_count: usize, seed: u64) -> Result<Measurement, min_triangle_path::Error> {
    let mut grid = generate_triangle_seeded(row_count, MAX_NODE_VALUE, seed);

    let mut bottom_up = BottomUpSolver::new();
    let start = Instant::now();
    let bottom_up_path = bottom_up.find_minimal_path(&mut grid)?;
    let bottom_up_time = start.elapsed();

    let mut dijkstra = TriangleDijkstra::for_grid(&grid);
    let start = Instant::now();
    let dijkstra_path = dijkstra.run(&mut grid)?;
    let dijkstra_time = start.elapsed();
    info!("Seed {}: {:?}", seed, dijkstra.last_stats());

    Ok(Measurement {
        seed,
        dijkstra_time,
        bottom_up_time,
        dijkstra_total: dijkstra_path.total(),
        bottom_up_total: bottom_up_path.total(),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let row_count = if args.len() > 1 {
        args[1].parse().unwrap_or(ROW_COUNT_PERFORMANCE_TARGET)
    } else {
        ROW_COUNT_PERFORMANCE_TARGET
    };
    let triangle_count: u64 = if args.len() > 2 {
        args[2].parse().unwrap_or(10)
    } else {
        10
    };

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs bottom-up");
    println!("{} triangles of {} rows, values in 0..={}", triangle_count, row_count, MAX_NODE_VALUE);
    println!("=====================================================");

    // Every triangle owns its grid and engine, so they can be solved in parallel
    let wall_clock = Instant::now();
    let results: Vec<Measurement> = (0..triangle_count)
        .into_par_iter()
        .map(|seed| measure(row_count, seed))
        .collect::<Result<_, _>>()?;
    let elapsed = wall_clock.elapsed();

    println!("{:<10} | {:<15} | {:<15} | {:<10} | {:<10}",
             "Seed", "Dijkstra (ms)", "Bottom-up (ms)", "Total", "Agree");
    println!("-----------------------------------------------------");

    let mut disagreements = 0;
    for m in &results {
        let agree = m.dijkstra_total == m.bottom_up_total;
        if !agree {
            disagreements += 1;
        }
        println!("{:<10} | {:<15.3} | {:<15.3} | {:<10} | {:<10}",
                 m.seed,
                 m.dijkstra_time.as_secs_f64() * 1000.0,
                 m.bottom_up_time.as_secs_f64() * 1000.0,
                 m.dijkstra_total,
                 agree);
    }

    let slowest = results.iter().map(|m| m.dijkstra_time).max().unwrap_or_default();
    println!("\nSlowest Dijkstra run: {:?}", slowest);
    println!("Wall clock for all triangles: {:?}", elapsed);

    if disagreements > 0 {
        return Err(format!("{} triangles where the algorithms disagree", disagreements).into());
    }

    Ok(())
}
