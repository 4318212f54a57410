use crate::types::UnitId;

/// Host-side ownership primitive for replicable units.
///
/// The coordinator queries ownership live on every decision point rather than
/// caching it; the oracle is the single source of truth for who may mutate
/// and transmit a unit's state. Reads go through `&self`, the one mutating
/// operation through `&mut self`, so read-only collaborators can be passed
/// where no transfer will be initiated.
pub trait OwnershipOracle {
    /// True if the local process currently owns `unit`.
    fn is_owner(&self, unit: &UnitId) -> bool;

    /// Ask the host to transfer ownership of `unit` to the local process.
    ///
    /// Asynchronous: the grant (if any) is observed later via
    /// `is_owner` flipping and the host invoking the unit's
    /// `ownership_gained` hook. Calling this while already owner is a no-op.
    fn request_ownership(&mut self, unit: &UnitId);
}
