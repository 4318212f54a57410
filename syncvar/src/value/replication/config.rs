//! # `ReplicationConfig` – per-unit tuning knobs
//!
//! The two parameters that govern a unit's replication cadence. They are
//! read once when the `ReplicationCoordinator` is constructed; no run-time
//! mutation is allowed, keeping the per-tick path branch-free.
//!
//! ### Why a floor on the backoff?
//! A non-positive `backoff_seconds` would turn every congestion or transfer
//! failure into an immediate re-attempt on the very next tick, defeating the
//! congestion signal entirely. The coordinator therefore corrects any value
//! ≤ 0 to a 1-second fallback at construction, logging the correction once.

pub struct ReplicationConfig {
    /// *Minimum interval, in seconds, between transfer attempts after a
    /// failure or congestion deferral.*
    /// - **Constraint**: must be > 0; values ≤ 0 are corrected to 1.0 when
    ///   the coordinator is constructed.
    pub backoff_seconds: f32,
    /// Gates the informational/warning log lines emitted on the replication
    /// path (coalescing, congestion deferrals, dropped pendings, ignored
    /// non-owner requests). The one-time configuration-correction error is
    /// always logged.
    pub debug_logging: bool,
}

impl Default for ReplicationConfig {
    fn default() -> Self {
        // Interval between retry attempts while the transport is unhappy.
        let backoff_seconds: f32 = 2.0;

        Self {
            backoff_seconds,
            debug_logging: false,
        }
    }
}
