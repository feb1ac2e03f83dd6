/// The solver works with triangles of any size that fit in memory, but it is
/// tuned so that this many rows are solved well under a second.
pub const ROW_COUNT_PERFORMANCE_TARGET: usize = 500;

/// Settings shared by the loader, the formatter and the binaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Row count above which a warning is logged
    pub performance_row_target: usize,

    /// Printed before the path
    pub output_prefix: String,

    /// Printed between two node values
    pub node_separator: String,

    /// Printed between the last node value and the total
    pub total_separator: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            performance_row_target: ROW_COUNT_PERFORMANCE_TARGET,
            output_prefix: "Minimal path is: ".to_string(),
            node_separator: " + ".to_string(),
            total_separator: " = ".to_string(),
        }
    }
}
