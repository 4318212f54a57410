//! # Syncvar
//! Replication core for synchronized world values: ownership-gated mutation,
//! congestion-aware backoff, and at-most-one-in-flight state transfer, for
//! hosts that drive everything from a single cooperative update loop.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod types;
mod value;

pub use types::{UnitId, UnitIdGenerator};
pub use value::{
    Color, CongestionSignal, LocalToggle, LocalValue, OwnershipOracle, ReplicationConfig,
    ReplicationCoordinator, ReplicationPhase, SyncedBool, SyncedColor, SyncedDouble, SyncedFloat,
    SyncedInt, SyncedLong, SyncedString, SyncedUnit, SyncedUrl, SyncedValue, SyncedVector,
    TransferTrigger, UrlValue, ValueError, ValueEvent, ValuePayload, Vec3,
};
