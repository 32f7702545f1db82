//! Error types for the peridyn core.
//!
//! All crates return `PeridynResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the peridyn core.
#[derive(Debug, Error)]
pub enum PeridynError {
    /// Two arrays that must describe the same node set disagree in length.
    #[error("Shape mismatch: `{field}` has length {actual}, expected {expected}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Node or neighbour-list data is malformed.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A node has no initial bonds, so its damage is undefined.
    #[error("Node {node} has an empty family (family = 0)")]
    EmptyFamily { node: usize },

    /// A node reports more live bonds than it started with.
    #[error("Node {node} has {count} live neighbours but a family of {family}")]
    CountExceedsFamily { node: usize, count: u32, family: u32 },

    /// A node reports more live bonds than the table has slots.
    #[error("Node {node} has {count} live neighbours but only {max_neighbours} slots")]
    CountExceedsCapacity {
        node: usize,
        count: u32,
        max_neighbours: usize,
    },

    /// A live neighbour slot references a node outside `[0, n)`.
    #[error("Node {node} slot {slot} references neighbour {neighbour} (node count: {node_count})")]
    NeighbourOutOfRange {
        node: usize,
        slot: usize,
        neighbour: u32,
        node_count: usize,
    },

    /// A live neighbour slot references the node itself.
    #[error("Node {node} slot {slot} is bonded to itself")]
    SelfBond { node: usize, slot: usize },

    /// A bond has zero length in the reference or current configuration.
    #[error("Degenerate bond {node} -> {neighbour}: {configuration} length is {length:.3e}")]
    DegenerateBond {
        node: usize,
        neighbour: usize,
        configuration: &'static str,
        length: f64,
    },

    /// Compute backend failed to initialize.
    #[error("Backend error: {0}")]
    Backend(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PeridynError {
    /// Returns true for errors caused by data that breaks an evaluation precondition.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::EmptyFamily { .. }
                | Self::CountExceedsFamily { .. }
                | Self::CountExceedsCapacity { .. }
                | Self::NeighbourOutOfRange { .. }
                | Self::SelfBond { .. }
                | Self::DegenerateBond { .. }
        )
    }
}

/// Convenience alias for `Result<T, PeridynError>`.
pub type PeridynResult<T> = Result<T, PeridynError>;
