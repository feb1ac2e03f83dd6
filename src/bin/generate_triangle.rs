use std::env;
use std::io::{self, Write};

use min_triangle_path::grid::generators::{generate_triangle, generate_triangle_seeded, render_triangle};

fn print_usage() {
    println!("Usage: generate_triangle <rowCount> <maxNodeValue> [seed]");
    println!("<rowCount> mandatory, strictly positive integer");
    println!("<maxNodeValue> mandatory, strictly positive integer");
    println!("[seed] optional, makes the output reproducible");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 3 {
        print_usage();
        return Ok(());
    }

    let row_count: usize = args[0].parse().unwrap_or(0);
    let max_value: i64 = args[1].parse().unwrap_or(0);
    if row_count == 0 || max_value <= 0 {
        print_usage();
        return Ok(());
    }

    let grid = match args.get(2).map(|seed| seed.parse::<u64>()) {
        Some(Ok(seed)) => generate_triangle_seeded(row_count, max_value, seed),
        Some(Err(_)) => {
            print_usage();
            return Ok(());
        }
        None => generate_triangle(row_count, max_value),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(render_triangle(&grid).as_bytes())?;
    out.flush()?;

    Ok(())
}
