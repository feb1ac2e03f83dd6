use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ROW_COUNT_PERFORMANCE_TARGET;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    /// Largest triangle accepted by the solve and generate endpoints
    pub max_rows: usize,
    pub max_stored_solutions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_rows: 4 * ROW_COUNT_PERFORMANCE_TARGET,
            max_stored_solutions: 1000,
        }
    }
}

/// Build the application with its middleware
pub fn build_app(config: ServerConfig) -> Router {
    let enable_cors = config.enable_cors;
    let app = create_router().with_state(AppState::new(config));

    if !enable_cors {
        return app;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    app.layer(ServiceBuilder::new().layer(cors).into_inner())
}

/// Start the web server with custom configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let app = build_app(config);

    info!("Triangle path server listening on http://{}", addr);
    info!("Health check available at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
