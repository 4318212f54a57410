use std::fmt;

/// A value that can back a synced or local unit.
///
/// `differs` is the change-detection comparison run against the last known
/// value before any "state updated" event is raised: remote updates that
/// compare equal are swallowed, preventing redundant downstream work.
///
/// `Threshold` is the optional nuisance-update suppression knob. Exact types
/// use `()` and plain inequality; floating-point types (and composites built
/// from them) accept an epsilon, under which a change is not considered
/// meaningful. Pass `None` for exact comparison regardless of type.
pub trait ValuePayload: Clone + fmt::Debug {
    type Threshold: Copy + fmt::Debug;

    fn differs(&self, other: &Self, threshold: Option<&Self::Threshold>) -> bool;
}

impl ValuePayload for bool {
    type Threshold = ();

    fn differs(&self, other: &Self, _threshold: Option<&()>) -> bool {
        self != other
    }
}

impl ValuePayload for i32 {
    type Threshold = ();

    fn differs(&self, other: &Self, _threshold: Option<&()>) -> bool {
        self != other
    }
}

impl ValuePayload for i64 {
    type Threshold = ();

    fn differs(&self, other: &Self, _threshold: Option<&()>) -> bool {
        self != other
    }
}

impl ValuePayload for String {
    type Threshold = ();

    fn differs(&self, other: &Self, _threshold: Option<&()>) -> bool {
        self != other
    }
}

impl ValuePayload for f32 {
    type Threshold = f32;

    fn differs(&self, other: &Self, threshold: Option<&f32>) -> bool {
        match threshold {
            Some(epsilon) => (self - other).abs() > *epsilon,
            None => self != other,
        }
    }
}

impl ValuePayload for f64 {
    type Threshold = f64;

    fn differs(&self, other: &Self, threshold: Option<&f64>) -> bool {
        match threshold {
            Some(epsilon) => (self - other).abs() > *epsilon,
            None => self != other,
        }
    }
}
