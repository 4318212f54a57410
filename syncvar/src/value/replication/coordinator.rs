use log::{error, info, warn};

use crate::{
    types::UnitId,
    value::{
        ownership::OwnershipOracle,
        replication::{config::ReplicationConfig, phase::ReplicationPhase},
        transport::{CongestionSignal, TransferTrigger},
    },
};

const FALLBACK_BACKOFF_SECONDS: f32 = 1.0;
const RETRY_UNSCHEDULED: f32 = -1.0;

/// Per-unit replication state machine.
///
/// Guarantees that a unit's field mutations eventually reach all peers while
/// never issuing overlapping transfer requests, respecting the congestion
/// signal, and bounding retry frequency to the configured backoff interval.
///
/// Transition table (phases per [`ReplicationPhase`]):
///
/// | From       | Event                                   | To         |
/// |------------|-----------------------------------------|------------|
/// | `Idle`     | replication request, not congested      | `InFlight` |
/// | `Idle`     | replication request, congested          | `Backoff`  |
/// | `InFlight` | completion: success, nothing pending    | `Idle`     |
/// | `InFlight` | completion: success, secondary pending  | `InFlight` |
/// | `InFlight` | completion: failure                     | `Backoff`  |
/// | `Backoff`  | retry timer expires                     | `Idle`/`InFlight` (same congestion branch as a fresh request) |
/// | any        | ownership lost                          | `Idle`     |
///
/// Congestion and transport failure are both retryable, never fatal; the
/// coordinator retries indefinitely at the backoff interval until ownership
/// changes or a transfer succeeds.
///
/// Single-threaded by construction: every entry point takes `&mut self` and
/// is expected to be driven from the host's one update loop. Completion of a
/// triggered transfer arrives on a later tick via [`transfer_completed`],
/// never synchronously within the triggering call.
///
/// [`transfer_completed`]: ReplicationCoordinator::transfer_completed
pub struct ReplicationCoordinator {
    unit: UnitId,
    backoff_seconds: f32,
    debug_logging: bool,

    // true exactly while a transfer is outstanding
    synchronizing: bool,
    // seconds until the next retry; <= 0 means unscheduled
    retry_timer: f32,
    // a replication was requested mid-flight; honored once the flight resolves
    secondary_pending: bool,
}

impl ReplicationCoordinator {
    /// A non-positive `backoff_seconds` is corrected to 1 second here, with
    /// an error logged exactly once. It is not re-validated thereafter.
    pub fn new(unit: UnitId, config: &ReplicationConfig) -> Self {
        let backoff_seconds = if config.backoff_seconds <= 0.0 {
            error!(
                "ReplicationCoordinator: Unit {:?} configured with non-positive backoff ({} s), correcting to {} s",
                unit, config.backoff_seconds, FALLBACK_BACKOFF_SECONDS
            );
            FALLBACK_BACKOFF_SECONDS
        } else {
            config.backoff_seconds
        };

        Self {
            unit,
            backoff_seconds,
            debug_logging: config.debug_logging,
            synchronizing: false,
            retry_timer: RETRY_UNSCHEDULED,
            secondary_pending: false,
        }
    }

    pub fn unit(&self) -> UnitId {
        self.unit
    }

    pub fn backoff_seconds(&self) -> f32 {
        self.backoff_seconds
    }

    pub fn phase(&self) -> ReplicationPhase {
        // Invariant: at most one of {synchronizing, retry_timer > 0} drives
        // scheduling at a given instant.
        debug_assert!(!(self.synchronizing && self.retry_timer > 0.0));

        if self.synchronizing {
            ReplicationPhase::InFlight
        } else if self.retry_timer > 0.0 {
            ReplicationPhase::Backoff
        } else {
            ReplicationPhase::Idle
        }
    }

    pub fn is_synchronizing(&self) -> bool {
        self.synchronizing
    }

    pub fn retry_timer(&self) -> f32 {
        self.retry_timer
    }

    pub fn has_secondary_pending(&self) -> bool {
        self.secondary_pending
    }

    /// Called once when the unit's session starts. The owner broadcasts its
    /// default state immediately so already-connected peers converge.
    pub fn initialize(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if oracle.is_owner(&self.unit) {
            self.request_replication(oracle, congestion, trigger);
        }
    }

    /// Called whenever the owning process changes the unit's payload.
    ///
    /// Non-owner calls are ignored with a warning rather than treated as
    /// errors; they are expected during ownership handoff races. A request
    /// arriving mid-flight is coalesced into a single trailing replication
    /// via the secondary-pending flag. A request arriving inside a backoff
    /// window is dropped: the scheduled retry serializes the unit's state at
    /// retry time, so it already carries this mutation.
    pub fn request_replication(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if !oracle.is_owner(&self.unit) {
            if self.debug_logging {
                warn!(
                    "ReplicationCoordinator: Unit {:?} replication requested without ownership, ignoring",
                    self.unit
                );
            }
            return;
        }

        if self.synchronizing {
            if self.debug_logging {
                info!(
                    "ReplicationCoordinator: Unit {:?} transfer in flight, deferring replication",
                    self.unit
                );
            }
            self.secondary_pending = true;
            return;
        }

        if self.retry_timer > 0.0 {
            if self.debug_logging {
                warn!(
                    "ReplicationCoordinator: Unit {:?} replication requested during backoff, dropping (retry carries current state)",
                    self.unit
                );
            }
            return;
        }

        self.attempt_transfer(congestion, trigger);
    }

    /// Called once per simulation step by the owner. Counts the backoff
    /// window down and re-attempts the transfer once it expires.
    pub fn tick(
        &mut self,
        delta_seconds: f32,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if !oracle.is_owner(&self.unit) {
            return;
        }
        if self.synchronizing || self.retry_timer <= 0.0 {
            return;
        }

        self.retry_timer -= delta_seconds;
        if self.retry_timer <= 0.0 {
            self.retry_timer = RETRY_UNSCHEDULED;
            self.attempt_transfer(congestion, trigger);
        }
    }

    /// The local process became the unit's owner. Replicate immediately to
    /// reconcile any divergence accrued while ownership was held elsewhere.
    pub fn ownership_gained(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        self.request_replication(oracle, congestion, trigger);
    }

    /// Ownership transferred away. The former owner can no longer transmit
    /// authoritative state, so all in-flight and pending bookkeeping is
    /// discarded for this ownership epoch.
    pub fn ownership_lost(&mut self) {
        self.synchronizing = false;
        self.retry_timer = RETRY_UNSCHEDULED;
        self.secondary_pending = false;
    }

    /// A peer joined the session; the owner pushes current state to it.
    pub fn peer_joined(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if oracle.is_owner(&self.unit) {
            self.request_replication(oracle, congestion, trigger);
        }
    }

    /// A peer left the session; the owner re-broadcasts to the remainder.
    pub fn peer_left(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if oracle.is_owner(&self.unit) {
            self.request_replication(oracle, congestion, trigger);
        }
    }

    /// Invoked by the host once a previously triggered transfer resolves.
    ///
    /// On success the in-flight lock and retry timer clear, and a pending
    /// secondary request (a mutation that landed mid-flight) immediately
    /// restarts replication. On failure a retry is scheduled at the backoff
    /// interval and any pending secondary is dropped with a warning: the
    /// retry transmits the unit's *current* value, not a queued one, so the
    /// mutation is carried regardless.
    pub fn transfer_completed(
        &mut self,
        success: bool,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if !self.synchronizing {
            // Stale completion: the flight was cancelled (ownership loss)
            // before the host reported back.
            if self.debug_logging {
                warn!(
                    "ReplicationCoordinator: Unit {:?} received completion with no transfer outstanding, ignoring",
                    self.unit
                );
            }
            return;
        }

        self.synchronizing = false;

        if success {
            self.retry_timer = RETRY_UNSCHEDULED;
            if self.secondary_pending {
                self.secondary_pending = false;
                self.request_replication(oracle, congestion, trigger);
            }
        } else {
            if self.secondary_pending {
                self.secondary_pending = false;
                if self.debug_logging {
                    warn!(
                        "ReplicationCoordinator: Unit {:?} dropping pending replication after failed transfer, retry carries current state",
                        self.unit
                    );
                }
            }
            if self.debug_logging {
                warn!(
                    "ReplicationCoordinator: Unit {:?} transfer failed, retrying in {} s",
                    self.unit, self.backoff_seconds
                );
            }
            self.retry_timer = self.backoff_seconds;
        }
    }

    // Shared by request_replication and tick-driven retries. The caller has
    // already established ownership and that no flight or backoff is active.
    fn attempt_transfer(
        &mut self,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if congestion.is_congested() {
            // Schedule-retry path, identical to a failure outcome.
            self.synchronizing = false;
            self.retry_timer = self.backoff_seconds;
            if self.secondary_pending {
                self.secondary_pending = false;
                if self.debug_logging {
                    warn!(
                        "ReplicationCoordinator: Unit {:?} dropping pending replication while congested",
                        self.unit
                    );
                }
            }
            if self.debug_logging {
                info!(
                    "ReplicationCoordinator: Unit {:?} transport congested, retrying in {} s",
                    self.unit, self.backoff_seconds
                );
            }
            return;
        }

        self.synchronizing = true;
        trigger.trigger_transfer(&self.unit);
    }
}
