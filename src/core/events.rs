use crate::core::DebrisHandle;
use crate::math::Vector2;

use std::collections::VecDeque;

/// Types of debris lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebrisEventType {
    /// Debris has been added to the field
    Added,

    /// Debris aged out or decayed below the minimum size
    Expired,

    /// Debris shattered into fragments after a high-energy impact
    Shattered,

    /// Debris was evicted to enforce the population cap
    Evicted,

    /// Debris was removed by an external call
    Removed,
}

/// An event related to a single piece of debris
#[derive(Debug, Clone, Copy)]
pub struct DebrisEvent {
    /// The type of event
    pub event_type: DebrisEventType,

    /// The debris the event refers to
    pub debris: DebrisHandle,
}

/// A resolved collision between two pieces of debris, for audio/visual
/// consumers
#[derive(Debug, Clone, Copy)]
pub struct ImpactEvent {
    /// The first debris in the impact
    pub debris_a: DebrisHandle,

    /// The second debris in the impact
    pub debris_b: DebrisHandle,

    /// The contact midpoint in world space
    pub position: Vector2,
}

/// A queue of field events.
///
/// The owning field clears it at the start of every tick, so it only ever
/// holds events from the most recent tick (plus anything emitted by calls
/// made since). Consumers read between ticks.
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Debris lifecycle events
    debris_events: VecDeque<DebrisEvent>,

    /// Impact events
    impact_events: VecDeque<ImpactEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            debris_events: VecDeque::new(),
            impact_events: VecDeque::new(),
        }
    }

    /// Adds a debris event to the queue
    pub fn add_debris_event(&mut self, event: DebrisEvent) {
        self.debris_events.push_back(event);
    }

    /// Adds an impact event to the queue
    pub fn add_impact_event(&mut self, event: ImpactEvent) {
        self.impact_events.push_back(event);
    }

    /// Gets the next debris event from the queue
    pub fn next_debris_event(&mut self) -> Option<DebrisEvent> {
        self.debris_events.pop_front()
    }

    /// Gets the next impact event from the queue
    pub fn next_impact_event(&mut self) -> Option<ImpactEvent> {
        self.impact_events.pop_front()
    }

    /// Returns whether there are any debris events in the queue
    pub fn has_debris_events(&self) -> bool {
        !self.debris_events.is_empty()
    }

    /// Returns whether there are any impact events in the queue
    pub fn has_impact_events(&self) -> bool {
        !self.impact_events.is_empty()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.debris_events.is_empty() && self.impact_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.debris_events.clear();
        self.impact_events.clear();
    }

    /// Gets all debris events of a specific type
    pub fn get_debris_events_of_type(&self, event_type: DebrisEventType) -> Vec<&DebrisEvent> {
        self.debris_events
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Gets all events involving a specific piece of debris
    pub fn get_events_for_debris(&self, debris: DebrisHandle) -> Vec<&DebrisEvent> {
        self.debris_events
            .iter()
            .filter(|e| e.debris == debris)
            .collect()
    }

    /// Gets all impact events involving a specific piece of debris
    pub fn get_impacts_for_debris(&self, debris: DebrisHandle) -> Vec<&ImpactEvent> {
        self.impact_events
            .iter()
            .filter(|e| e.debris_a == debris || e.debris_b == debris)
            .collect()
    }
}
