//! Next-event schedule
//!
//! Holds exactly one pending time per [`EventType`]. The departure slot is
//! `f64::INFINITY` whenever nobody is in service.

use super::types::EventType;
use serde::{Deserialize, Serialize};

/// Next scheduled absolute time for each event type
///
/// # Example
/// ```
/// use queue_simulator_core_rs::events::{EventSchedule, EventType};
///
/// let mut schedule = EventSchedule::new(0.7);
/// assert_eq!(schedule.next_event(), (EventType::Arrival, 0.7));
///
/// schedule.schedule(EventType::Departure, 0.4);
/// assert_eq!(schedule.next_event(), (EventType::Departure, 0.4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSchedule {
    arrival: f64,
    departure: f64,
}

impl EventSchedule {
    /// Create a schedule with the first arrival armed and no departure pending
    pub fn new(first_arrival: f64) -> Self {
        Self {
            arrival: first_arrival,
            departure: f64::INFINITY,
        }
    }

    /// Overwrite the pending time of `event_type`
    pub fn schedule(&mut self, event_type: EventType, time: f64) {
        *self.slot_mut(event_type) = time;
    }

    /// Mark that no departure is pending
    pub fn cancel_departure(&mut self) {
        self.departure = f64::INFINITY;
    }

    /// Pending time of `event_type` (infinite for an idle server's departure)
    pub fn time_of(&self, event_type: EventType) -> f64 {
        match event_type {
            EventType::Arrival => self.arrival,
            EventType::Departure => self.departure,
        }
    }

    /// Whether a departure is pending
    pub fn has_departure(&self) -> bool {
        self.departure.is_finite()
    }

    /// Event with the smallest pending time
    ///
    /// Ties go to [`EventType::Arrival`].
    pub fn next_event(&self) -> (EventType, f64) {
        if self.departure < self.arrival {
            (EventType::Departure, self.departure)
        } else {
            (EventType::Arrival, self.arrival)
        }
    }

    fn slot_mut(&mut self, event_type: EventType) -> &mut f64 {
        match event_type {
            EventType::Arrival => &mut self.arrival,
            EventType::Departure => &mut self.departure,
        }
    }
}
