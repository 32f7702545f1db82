//! Reductions of evaluator outputs for monitoring.

use serde::{Deserialize, Serialize};

use peridyn_math::Vec3;
use peridyn_types::NodeId;

/// Aggregate view of a damage field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageSummary {
    /// Largest finite damage value (0 for an empty field).
    pub max_damage: f64,
    /// Mean over finite values.
    pub mean_damage: f64,
    /// Nodes that have lost every bond.
    pub fully_damaged: usize,
    /// NaN or infinite entries.
    pub non_finite: usize,
}

impl DamageSummary {
    /// Summarizes `damage`.
    pub fn from_damage(damage: &[f64]) -> Self {
        let mut max_damage = 0.0f64;
        let mut sum = 0.0f64;
        let mut finite = 0usize;
        let mut fully_damaged = 0usize;

        for &d in damage {
            if !d.is_finite() {
                continue;
            }
            max_damage = max_damage.max(d);
            sum += d;
            finite += 1;
            if d >= 1.0 {
                fully_damaged += 1;
            }
        }

        Self {
            max_damage,
            mean_damage: if finite > 0 { sum / finite as f64 } else { 0.0 },
            fully_damaged,
            non_finite: damage.len() - finite,
        }
    }
}

/// Aggregate view of a nodal force field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSummary {
    /// Largest finite force magnitude.
    pub max_magnitude: f64,
    /// Node carrying `max_magnitude`, if any force is non-zero.
    pub max_node: Option<NodeId>,
    /// Sum of all finite forces. Close to zero for a symmetric
    /// neighbour list and uniform volumes.
    pub net_force: Vec3,
    /// Entries with a NaN or infinite component.
    pub non_finite: usize,
}

impl ForceSummary {
    /// Summarizes `force`.
    pub fn from_forces(force: &[Vec3]) -> Self {
        let mut summary = Self {
            max_magnitude: 0.0,
            max_node: None,
            net_force: Vec3::ZERO,
            non_finite: 0,
        };

        for (i, f) in force.iter().enumerate() {
            if !f.is_finite() {
                summary.non_finite += 1;
                continue;
            }
            summary.net_force += *f;
            let magnitude = f.length();
            if magnitude > summary.max_magnitude {
                summary.max_magnitude = magnitude;
                summary.max_node = Some(NodeId(i as u32));
            }
        }

        summary
    }
}
