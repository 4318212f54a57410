//! # Synced-Value Replication – Overview
//!
//! **Mission statement**
//! Keep one small piece of world state (a toggle, a number, a color, a URL)
//! convergent across every peer in a session, over a host whose transport we
//! neither own nor see, **without ever issuing two overlapping state
//! transfers for the same unit**.
//!
//! ## Architectural sketch
//! 1. **Mutation**
//!    The owning process changes a [`SyncedValue`] via `set`; change
//!    detection swallows no-op writes, everything else asks the unit's
//!    [`ReplicationCoordinator`] to replicate.
//! 2. **Scheduling (this module's core)**
//!    The coordinator is a three-phase state machine (`Idle` / `InFlight` /
//!    `Backoff`). It consults the [`CongestionSignal`] before every attempt,
//!    holds an at-most-one-in-flight lock while a [`TransferTrigger`] request
//!    is outstanding, coalesces mid-flight mutations into a single trailing
//!    replication, and retries failures at a fixed backoff interval, forever,
//!    until ownership moves or a transfer succeeds.
//! 3. **Ingestion**
//!    Non-owners receive state solely through `receive_remote`; change
//!    detection gates a [`ValueEvent::Changed`] into the unit's event queue,
//!    drained by the host each tick.
//!
//! ## Safety & correctness guarantees
//! * **At-most-one in-flight** transfer per unit, enforced by the
//!   `synchronizing` lock.
//! * **Ownership-gated mutation**: the [`OwnershipOracle`] is queried live
//!   at every decision point; non-owner requests are warned no-ops, and
//!   ownership loss unconditionally cancels all in-flight and pending
//!   bookkeeping.
//! * **Bounded retry frequency**: congestion and transfer failure both land
//!   in the same backoff path; nothing is ever fatal.
//!
//! Units are fully independent: no cross-unit ordering, no shared locks.

pub mod component;
pub mod event;
pub mod ownership;
pub mod replication;
pub mod transport;

pub use component::{
    Color, LocalToggle, LocalValue, SyncedBool, SyncedColor, SyncedDouble, SyncedFloat,
    SyncedInt, SyncedLong, SyncedString, SyncedUnit, SyncedUrl, SyncedValue, SyncedVector,
    UrlValue, ValueError, ValuePayload, Vec3,
};
pub use event::ValueEvent;
pub use ownership::OwnershipOracle;
pub use replication::{ReplicationConfig, ReplicationCoordinator, ReplicationPhase};
pub use transport::{CongestionSignal, TransferTrigger};
