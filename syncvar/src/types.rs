// UnitId
/// Identity of a single replicable unit, as handed to the host's ownership,
/// congestion, and transfer collaborators. One `ReplicationCoordinator` is
/// attached 1:1 to each unit.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct UnitId(u64);

impl UnitId {
    pub fn new(id: u64) -> Self {
        UnitId(id)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }
}

// UnitIdGenerator
/// Hands out fresh `UnitId`s monotonically. Hosts that derive unit identity
/// from their own object handles can skip this and call `UnitId::new`.
pub struct UnitIdGenerator {
    next_id: u64,
}

impl UnitIdGenerator {
    pub fn new() -> Self {
        Self { next_id: 0 }
    }

    pub fn generate(&mut self) -> UnitId {
        let id = UnitId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}

impl Default for UnitIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
