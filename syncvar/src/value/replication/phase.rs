// ReplicationPhase
/// Derived view of a coordinator's scheduling state.
///
/// The coordinator keeps three bookkeeping fields (`synchronizing`,
/// `retry_timer`, `secondary_pending`); the phase is computed from the first
/// two and is what the transition table in the coordinator's documentation
/// speaks in terms of. `secondary_pending` may be set alongside any phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplicationPhase {
    /// No transfer outstanding, no retry scheduled.
    Idle,
    /// A transfer has been triggered and its completion has not yet arrived.
    InFlight,
    /// A retry is scheduled; the timer counts down via `tick`.
    Backoff,
}
