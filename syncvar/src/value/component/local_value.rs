use std::{mem, ops::Deref};

use crate::value::{component::payload::ValuePayload, event::ValueEvent};

/// A purely local value: same change-detection and event surface as
/// [`SyncedValue`], no coordinator and no collaborators. Never replicated.
///
/// [`SyncedValue`]: crate::SyncedValue
pub struct LocalValue<T: ValuePayload> {
    value: T,
    threshold: Option<T::Threshold>,
    events: Vec<ValueEvent<T>>,
}

impl<T: ValuePayload> LocalValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial,
            threshold: None,
            events: Vec::new(),
        }
    }

    pub fn with_nuisance_threshold(mut self, threshold: T::Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Change-detected set; a sub-threshold change raises no event.
    pub fn set(&mut self, incoming: T) {
        if !self.value.differs(&incoming, self.threshold.as_ref()) {
            return;
        }

        let previous = mem::replace(&mut self.value, incoming.clone());
        self.events.push(ValueEvent::Changed {
            previous,
            current: incoming,
        });
    }

    pub fn take_events(&mut self) -> Vec<ValueEvent<T>> {
        mem::take(&mut self.events)
    }
}

impl<T: ValuePayload> Deref for LocalValue<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

pub type LocalToggle = LocalValue<bool>;
