mod error;
mod kinds;
mod local_value;
mod payload;
mod synced_value;
mod unit;

pub use error::ValueError;
pub use kinds::{
    Color, SyncedBool, SyncedColor, SyncedDouble, SyncedFloat, SyncedInt, SyncedLong,
    SyncedString, SyncedUrl, SyncedVector, UrlValue, Vec3,
};
pub use local_value::{LocalToggle, LocalValue};
pub use payload::ValuePayload;
pub use synced_value::SyncedValue;
pub use unit::SyncedUnit;
