use std::{mem, ops::Deref};

use crate::{
    types::UnitId,
    value::{
        component::{error::ValueError, payload::ValuePayload, unit::SyncedUnit},
        event::ValueEvent,
        ownership::OwnershipOracle,
        replication::{ReplicationConfig, ReplicationCoordinator},
        transport::{CongestionSignal, TransferTrigger},
    },
};

/// A replicated value: payload plus the coordinator that keeps peers
/// convergent.
///
/// All networked value kinds are this one component with a different payload
/// type; see the aliases in `kinds`. Reads deref straight to the payload.
/// Writes route through [`set`]/[`try_set`] so that ownership acquisition and
/// replication scheduling can never be skipped, which is also why there is
/// no `DerefMut`.
///
/// [`set`]: SyncedValue::set
/// [`try_set`]: SyncedValue::try_set
pub struct SyncedValue<T: ValuePayload> {
    value: T,
    threshold: Option<T::Threshold>,
    coordinator: ReplicationCoordinator,
    events: Vec<ValueEvent<T>>,
}

impl<T: ValuePayload> SyncedValue<T> {
    pub fn new(unit: UnitId, initial: T, config: &ReplicationConfig) -> Self {
        Self {
            value: initial,
            threshold: None,
            coordinator: ReplicationCoordinator::new(unit, config),
            events: Vec::new(),
        }
    }

    /// Sets the nuisance-update suppression threshold: incoming or outgoing
    /// changes within `threshold` of the last known value are ignored
    /// entirely. Only meaningful for payload types with a non-`()`
    /// threshold.
    pub fn with_nuisance_threshold(mut self, threshold: T::Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn coordinator(&self) -> &ReplicationCoordinator {
        &self.coordinator
    }

    /// Owner mutation path: check-and-acquire ownership, apply the value
    /// locally, schedule replication.
    ///
    /// When the local process does not own the unit, ownership is requested
    /// and the value is applied optimistically; the replication request is
    /// then a warned no-op until the grant arrives, at which point the
    /// host's `ownership_gained` callback replicates the reconciled state.
    /// A change within the nuisance threshold is a complete no-op: no event,
    /// no replication.
    pub fn set(
        &mut self,
        value: T,
        oracle: &mut dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        if !oracle.is_owner(&self.coordinator.unit()) {
            oracle.request_ownership(&self.coordinator.unit());
        }

        if !self.apply(value) {
            return;
        }

        self.coordinator
            .request_replication(oracle, congestion, trigger);
    }

    /// Strict mutation path: errors instead of acquiring when the local
    /// process does not own the unit. The value is untouched on error.
    pub fn try_set(
        &mut self,
        value: T,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) -> Result<(), ValueError> {
        if !oracle.is_owner(&self.coordinator.unit()) {
            return Err(ValueError::InsufficientOwnership {
                operation: "setting a Synced value",
                unit_id: format!("{:?}", self.coordinator.unit()),
            });
        }

        if self.apply(value) {
            self.coordinator
                .request_replication(oracle, congestion, trigger);
        }
        Ok(())
    }

    /// Remote-update path: the host deserialized a new payload for this
    /// unit. Change detection decides whether a `Changed` event is raised;
    /// sub-threshold updates are swallowed.
    pub fn receive_remote(&mut self, incoming: T) {
        self.apply(incoming);
    }

    /// Drains the events raised since the last call.
    pub fn take_events(&mut self) -> Vec<ValueEvent<T>> {
        mem::take(&mut self.events)
    }

    // Change-detected apply; true if the value actually changed.
    fn apply(&mut self, incoming: T) -> bool {
        if !self.value.differs(&incoming, self.threshold.as_ref()) {
            return false;
        }

        let previous = mem::replace(&mut self.value, incoming.clone());
        self.events.push(ValueEvent::Changed {
            previous,
            current: incoming,
        });
        true
    }
}

impl<T: ValuePayload> SyncedUnit for SyncedValue<T> {
    fn unit(&self) -> UnitId {
        self.coordinator.unit()
    }

    fn initialize(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        self.coordinator.initialize(oracle, congestion, trigger);
    }

    fn tick(
        &mut self,
        delta_seconds: f32,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        self.coordinator
            .tick(delta_seconds, oracle, congestion, trigger);
    }

    fn ownership_gained(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        self.coordinator
            .ownership_gained(oracle, congestion, trigger);
    }

    fn ownership_lost(&mut self) {
        self.coordinator.ownership_lost();
    }

    fn peer_joined(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        self.coordinator.peer_joined(oracle, congestion, trigger);
    }

    fn peer_left(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        self.coordinator.peer_left(oracle, congestion, trigger);
    }

    fn transfer_completed(
        &mut self,
        success: bool,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    ) {
        self.coordinator
            .transfer_completed(success, oracle, congestion, trigger);
    }
}

// Mainly for the convenience of type coercion on the read path; mutation has
// to go through set/try_set.
impl<T: ValuePayload> Deref for SyncedValue<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
