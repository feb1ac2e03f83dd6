use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::dijkstra::RunStats;

/// Parameters for solving a triangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Node values, row `r` holding `r` values
    pub rows: Vec<Vec<i64>>,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_algorithm() -> String { "dijkstra".to_string() }

/// Counters reported by the Dijkstra engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunMetrics {
    pub finalized_cells: usize,
    pub finalized_base_cells: usize,
    pub relaxations: usize,
    pub stale_entries_replaced: usize,
    pub peak_frontier_len: usize,
    pub overflowing_cells: usize,
}

impl From<RunStats> for RunMetrics {
    fn from(stats: RunStats) -> Self {
        Self {
            finalized_cells: stats.finalized_cells,
            finalized_base_cells: stats.finalized_base_cells,
            relaxations: stats.relaxations,
            stale_entries_replaced: stats.stale_entries_replaced,
            peak_frontier_len: stats.peak_frontier_len,
            overflowing_cells: stats.overflowing_cells,
        }
    }
}

/// Response containing a minimal path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub solution_id: Uuid,
    pub algorithm: String,
    pub row_count: usize,
    /// Node values from apex to base, empty for a triangle without rows
    pub path: Vec<i64>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    pub execution_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<RunMetrics>,
    pub solved_at: DateTime<Utc>,
}

/// Short description of a stored solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionSummary {
    pub solution_id: Uuid,
    pub algorithm: String,
    pub row_count: usize,
    pub total: i64,
    pub solved_at: DateTime<Utc>,
}

impl From<&SolveResponse> for SolutionSummary {
    fn from(response: &SolveResponse) -> Self {
        Self {
            solution_id: response.solution_id,
            algorithm: response.algorithm.clone(),
            row_count: response.row_count,
            total: response.total,
            solved_at: response.solved_at,
        }
    }
}

/// Parameters for triangle generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub row_count: usize,
    #[serde(default = "default_max_value")]
    pub max_value: i64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_value() -> i64 { 99 }

/// A generated triangle, both as rows and in the text input format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub row_count: usize,
    pub rows: Vec<Vec<i64>>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
