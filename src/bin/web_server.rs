use min_triangle_path::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(defaults.port)
    } else {
        defaults.port
    };
    let max_rows = if args.len() > 2 {
        args[2].parse().unwrap_or(defaults.max_rows)
    } else {
        defaults.max_rows
    };

    let config = ServerConfig {
        port,
        max_rows,
        ..defaults
    };

    println!("Starting triangle path web server...");
    println!("Configuration:");
    println!("   Port: {}", config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max rows: {}", config.max_rows);
    println!("   Stored solutions: {}", config.max_stored_solutions);
    println!();

    // Start the server
    start_server(config).await?;

    Ok(())
}
