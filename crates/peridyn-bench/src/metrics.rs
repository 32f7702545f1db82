//! Benchmark metrics collected during a run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Backend name.
    pub backend: String,
    /// Worker threads used by the backend.
    pub threads: usize,
    /// Node count.
    pub node_count: usize,
    /// Live directed bonds.
    pub bond_count: usize,
    /// Number of timed evaluations.
    pub timesteps: u32,
    /// Total wall-clock time of all combined steps (seconds).
    pub total_wall_time: f64,
    /// Average combined step time (seconds).
    pub avg_step_time: f64,
    /// Minimum combined step time.
    pub min_step_time: f64,
    /// Maximum combined step time.
    pub max_step_time: f64,
    /// Average damage kernel time on its own (seconds).
    pub avg_damage_time: f64,
    /// Average bond-force kernel time on its own (seconds).
    pub avg_force_time: f64,
    /// Largest damage after the last step.
    pub max_damage: f64,
    /// Largest nodal force magnitude after the last step.
    pub max_force: f64,
    /// Magnitude of the net force after the last step.
    pub net_force: f64,
}

impl BenchmarkMetrics {
    /// Live bonds evaluated per second by the combined step.
    pub fn bonds_per_second(&self) -> f64 {
        if self.avg_step_time > 0.0 {
            self.bond_count as f64 / self.avg_step_time
        } else {
            0.0
        }
    }

    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,backend,threads,node_count,bond_count,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,avg_damage_ms,avg_force_ms,bonds_per_s,max_damage,max_force,net_force".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4e},{:.6},{:.6e},{:.6e}",
            self.scenario,
            self.backend,
            self.threads,
            self.node_count,
            self.bond_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.avg_damage_time * 1000.0,
            self.avg_force_time * 1000.0,
            self.bonds_per_second(),
            self.max_damage,
            self.max_force,
            self.net_force,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
