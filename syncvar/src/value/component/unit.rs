use crate::{
    types::UnitId,
    value::{
        ownership::OwnershipOracle,
        transport::{CongestionSignal, TransferTrigger},
    },
};

/// Object-safe driver surface for a replicable unit.
///
/// A host typically holds many synced values of different payload types;
/// this trait lets it fan engine callbacks (tick, peer membership,
/// ownership changes, transfer completions) out to all of them uniformly,
/// `Box<dyn SyncedUnit>` or otherwise, without knowing each payload type.
pub trait SyncedUnit {
    fn unit(&self) -> UnitId;

    /// Session start. The owner broadcasts default state to peers already
    /// connected.
    fn initialize(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    );

    /// Once per simulation step.
    fn tick(
        &mut self,
        delta_seconds: f32,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    );

    fn ownership_gained(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    );

    fn ownership_lost(&mut self);

    fn peer_joined(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    );

    fn peer_left(
        &mut self,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    );

    /// Outcome of a previously triggered state transfer.
    fn transfer_completed(
        &mut self,
        success: bool,
        oracle: &dyn OwnershipOracle,
        congestion: &dyn CongestionSignal,
        trigger: &mut dyn TransferTrigger,
    );
}
