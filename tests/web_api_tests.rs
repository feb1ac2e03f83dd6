use axum::body::{to_bytes, Body};
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use axum::Json;
use tower::ServiceExt;
use uuid::Uuid;

use min_triangle_path::web::api::{
    generate, get_solution, health_check, list_solutions, solve_triangle, AppState, SolutionStore,
};
use min_triangle_path::web::models::{GenerateRequest, SolveRequest, SolveResponse};
use min_triangle_path::web::{build_app, ServerConfig};

fn classic_request(algorithm: &str) -> SolveRequest {
    SolveRequest {
        rows: vec![vec![1], vec![2, 3], vec![4, 1, 4]],
        algorithm: algorithm.to_string(),
    }
}

#[tokio::test]
async fn test_solve_returns_and_stores_the_path() {
    let state = AppState::new(ServerConfig::default());

    let Json(response) = solve_triangle(State(state.clone()), Json(classic_request("dijkstra")))
        .await
        .unwrap();

    assert_eq!(response.path, vec![1, 2, 1]);
    assert_eq!(response.total, 4);
    assert_eq!(response.row_count, 3);
    assert_eq!(response.algorithm, "Dijkstra");
    assert_eq!(response.formatted.as_deref(), Some("Minimal path is: 1 + 2 + 1 = 4"));
    assert_eq!(response.metrics.as_ref().map(|m| m.finalized_base_cells), Some(3));

    let Json(stored) = get_solution(State(state.clone()), Path(response.solution_id))
        .await
        .unwrap();
    assert_eq!(stored.path, response.path);

    let Json(summaries) = list_solutions(State(state)).await;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].solution_id, response.solution_id);
}

#[tokio::test]
async fn test_solve_with_bottom_up() {
    let state = AppState::new(ServerConfig::default());
    let Json(response) = solve_triangle(State(state), Json(classic_request("bottom-up")))
        .await
        .unwrap();

    assert_eq!(response.algorithm, "Bottom-up");
    assert_eq!(response.path, vec![1, 2, 1]);
    assert!(response.metrics.is_none());
}

#[tokio::test]
async fn test_solve_empty_triangle() {
    let state = AppState::new(ServerConfig::default());
    let request = SolveRequest {
        rows: Vec::new(),
        algorithm: "dijkstra".to_string(),
    };
    let Json(response) = solve_triangle(State(state), Json(request)).await.unwrap();

    assert!(response.path.is_empty());
    assert_eq!(response.total, 0);
    assert!(response.formatted.is_none());
}

#[tokio::test]
async fn test_solve_rejects_bad_requests() {
    let state = AppState::new(ServerConfig {
        max_rows: 2,
        ..ServerConfig::default()
    });

    let (status, Json(error)) = solve_triangle(State(state.clone()), Json(classic_request("dijkstra")))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(error.error, "triangle_too_large");

    let request = SolveRequest {
        rows: vec![vec![1], vec![2]],
        algorithm: "dijkstra".to_string(),
    };
    let (status, Json(error)) = solve_triangle(State(state.clone()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "invalid_triangle");

    let request = SolveRequest {
        rows: vec![vec![1]],
        algorithm: "a-star".to_string(),
    };
    let (status, Json(error)) = solve_triangle(State(state.clone()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "invalid_algorithm");

    let Json(summaries) = list_solutions(State(state)).await;
    assert!(summaries.is_empty(), "Failed requests store nothing");
}

#[tokio::test]
async fn test_unknown_solution_is_not_found() {
    let state = AppState::new(ServerConfig::default());
    let (status, Json(error)) = get_solution(State(state), Path(Uuid::new_v4())).await.unwrap_err();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error.error, "solution_not_found");
}

#[tokio::test]
async fn test_generate_is_reproducible_with_seed() {
    let state = AppState::new(ServerConfig::default());
    let request = GenerateRequest {
        row_count: 6,
        max_value: 9,
        seed: Some(11),
    };

    let Json(first) = generate(State(state.clone()), Json(request.clone())).await.unwrap();
    let Json(second) = generate(State(state.clone()), Json(request)).await.unwrap();

    assert_eq!(first.row_count, 6);
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.text.lines().count(), 6);

    let request = GenerateRequest {
        row_count: 3,
        max_value: -1,
        seed: None,
    };
    let (status, Json(error)) = generate(State(state), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "invalid_max_value");
}

#[tokio::test]
async fn test_health_check() {
    let Json(health) = health_check().await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_solution_store_evicts_oldest() {
    let mut store = SolutionStore::new(2);
    let make = |total| SolveResponse {
        solution_id: Uuid::new_v4(),
        algorithm: "Dijkstra".to_string(),
        row_count: 1,
        path: vec![total],
        total,
        formatted: None,
        execution_time_ms: 0.0,
        metrics: None,
        solved_at: chrono::Utc::now(),
    };

    let first = make(1);
    let first_id = first.solution_id;
    store.insert(first);
    store.insert(make(2));
    store.insert(make(3));

    assert_eq!(store.len(), 2);
    assert!(store.get(&first_id).is_none(), "Oldest solution is evicted");
    let totals: Vec<i64> = store.summaries().iter().map(|s| s.total).collect();
    assert_eq!(totals, vec![2, 3]);

    let mut disabled = SolutionStore::new(0);
    disabled.insert(make(4));
    assert!(disabled.is_empty());
}

#[tokio::test]
async fn test_router_serves_solve_and_health() {
    let app = build_app(ServerConfig::default());

    let body = serde_json::json!({ "rows": [[7], [6, 3], [3, 8, 5], [11, 2, 10, 9]] });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/triangles/solve")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let solved: SolveResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(solved.path, vec![7, 6, 3, 2]);
    assert_eq!(solved.total, 18);
    assert_eq!(solved.algorithm, "Dijkstra", "Dijkstra is the default algorithm");

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
