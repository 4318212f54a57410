// ValueEvent
/// Local notification raised by a value wrapper when change detection finds
/// the payload meaningfully different from the last known value.
///
/// Events accumulate inside the wrapper and are drained by the host via
/// `take_events`; the listener registry that fans them out lives outside
/// this crate.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueEvent<T> {
    Changed { previous: T, current: T },
}
