use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::bottom_up::BottomUpSolver;
use crate::algorithm::dijkstra::TriangleDijkstra;
use crate::algorithm::{MinimalPath, MinimalPathAlgorithm};
use crate::config::SolverConfig;
use crate::grid::generators::{generate_triangle, generate_triangle_seeded, render_triangle};
use crate::grid::TriangleGrid;
use crate::output::format_path;
use crate::web::models::*;
use crate::web::server::ServerConfig;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Solutions kept for later retrieval, oldest evicted first
#[derive(Debug, Default)]
pub struct SolutionStore {
    capacity: usize,
    solutions: HashMap<Uuid, SolveResponse>,
    order: VecDeque<Uuid>,
}

impl SolutionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            solutions: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn insert(&mut self, solution: SolveResponse) {
        if self.capacity == 0 {
            return;
        }
        while self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.solutions.remove(&oldest);
            }
        }
        self.order.push_back(solution.solution_id);
        self.solutions.insert(solution.solution_id, solution);
    }

    pub fn get(&self, id: &Uuid) -> Option<&SolveResponse> {
        self.solutions.get(id)
    }

    /// Summaries from oldest to newest
    pub fn summaries(&self) -> Vec<SolutionSummary> {
        self.order
            .iter()
            .filter_map(|id| self.solutions.get(id))
            .map(SolutionSummary::from)
            .collect()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub solutions: Arc<Mutex<SolutionStore>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let store = SolutionStore::new(config.max_stored_solutions);
        Self {
            config: Arc::new(config),
            solutions: Arc::new(Mutex::new(store)),
        }
    }

    fn store(&self) -> MutexGuard<'_, SolutionStore> {
        self.solutions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/triangles/solve", post(solve_triangle))
        .route("/api/triangles/generate", post(generate))
        .route("/api/solutions", get(list_solutions))
        .route("/api/solutions/:solution_id", get(get_solution))
        .route("/api/health", get(health_check))
}

fn api_error(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }),
    )
}

struct SolveOutcome {
    algorithm: &'static str,
    path: MinimalPath<i64>,
    metrics: Option<RunMetrics>,
    execution_time_ms: f64,
}

fn run_solver(algorithm: &str, mut grid: TriangleGrid<i64>) -> Result<SolveOutcome, ApiError> {
    let start = Instant::now();
    let (name, path, metrics) = match algorithm {
        "dijkstra" => {
            let mut engine = TriangleDijkstra::for_grid(&grid);
            let path = engine.run(&mut grid).map_err(|err| {
                api_error(StatusCode::INTERNAL_SERVER_ERROR, "algorithm_failed", err.to_string())
            })?;
            let name = <TriangleDijkstra as MinimalPathAlgorithm<i64>>::name(&engine);
            (name, path, Some(RunMetrics::from(engine.last_stats())))
        }
        "bottom-up" => {
            let solver = BottomUpSolver::new();
            let name = <BottomUpSolver as MinimalPathAlgorithm<i64>>::name(&solver);
            (name, solver.solve(&grid), None)
        }
        other => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_algorithm",
                format!("Unknown algorithm: {}", other),
            ));
        }
    };

    Ok(SolveOutcome {
        algorithm: name,
        path,
        metrics,
        execution_time_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

/// Solve a triangle and store the solution
pub async fn solve_triangle(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let row_count = request.rows.len();
    if row_count > state.config.max_rows {
        return Err(api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "triangle_too_large",
            format!("Triangle has {} rows, at most {} are accepted", row_count, state.config.max_rows),
        ));
    }

    let grid = TriangleGrid::from_rows(&request.rows)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, "invalid_triangle", err.to_string()))?;

    let algorithm = request.algorithm.clone();
    let outcome = tokio::task::spawn_blocking(move || run_solver(&algorithm, grid))
        .await
        .map_err(|err| {
            warn!("Solver task failed: {}", err);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "solver_panicked", err.to_string())
        })??;

    let response = SolveResponse {
        solution_id: Uuid::new_v4(),
        algorithm: outcome.algorithm.to_string(),
        row_count,
        total: outcome.path.total(),
        formatted: format_path(&outcome.path, &SolverConfig::default()),
        path: outcome.path.into_values(),
        execution_time_ms: outcome.execution_time_ms,
        metrics: outcome.metrics,
        solved_at: Utc::now(),
    };
    info!(
        "Solved a triangle of {} rows with {} in {:.3} ms",
        row_count, response.algorithm, response.execution_time_ms
    );

    state.store().insert(response.clone());
    Ok(Json(response))
}

/// Generate a random triangle
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if request.row_count > state.config.max_rows {
        return Err(api_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "triangle_too_large",
            format!("At most {} rows can be generated", state.config.max_rows),
        ));
    }
    if request.max_value < 0 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_max_value",
            "max_value must not be negative",
        ));
    }

    let grid = match request.seed {
        Some(seed) => generate_triangle_seeded(request.row_count, request.max_value, seed),
        None => generate_triangle(request.row_count, request.max_value),
    };

    Ok(Json(GenerateResponse {
        row_count: grid.row_count(),
        text: render_triangle(&grid),
        rows: grid.to_rows(),
    }))
}

/// List the stored solutions
pub async fn list_solutions(State(state): State<AppState>) -> Json<Vec<SolutionSummary>> {
    Json(state.store().summaries())
}

/// Get a stored solution
pub async fn get_solution(
    State(state): State<AppState>,
    Path(solution_id): Path<Uuid>,
) -> Result<Json<SolveResponse>, ApiError> {
    match state.store().get(&solution_id) {
        Some(solution) => Ok(Json(solution.clone())),
        None => Err(api_error(StatusCode::NOT_FOUND, "solution_not_found", "Solution not found")),
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}
