use thiserror::Error;

/// Errors that can occur on the strict (`try_*`) value mutation surface.
///
/// The replication path itself never surfaces errors: non-owner requests,
/// congestion, and transfer failures are all handled locally inside the
/// coordinator with log output only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    /// Attempted a strict mutation without owning the unit
    #[error("Must have ownership of Unit {unit_id} before {operation}")]
    InsufficientOwnership {
        operation: &'static str,
        unit_id: String,
    },
}
