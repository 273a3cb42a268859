//! Event records for verbose output, replay checks and tests.
//!
//! Handlers never write text. They append structured [`Event`] records to
//! an [`EventLog`]; the [`report`](crate::report) module decides how (and
//! whether) to render them.
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::models::{Event, EventLog};
//!
//! let mut log = EventLog::new();
//! log.log(Event::Arrival { time: 0.4, event_number: 1, customer: 1 });
//! log.log(Event::CustomerDelayed { time: 0.4, delay: 0.0, num_delayed: 1 });
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.events_of_type("CustomerDelayed").len(), 1);
//! ```

use crate::events::EventType;
use serde::{Deserialize, Serialize};

/// Simulation event capturing a state change.
///
/// Dispatch records (`Arrival`, `Departure`) are logged before the handler
/// runs; outcome records follow in the order they happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// An arrival event was taken from the schedule
    Arrival {
        time: f64,
        /// 1-based index of this event within the run
        event_number: u64,
        /// 1-based index among arrival events
        customer: u64,
    },

    /// A departure event was taken from the schedule
    Departure {
        time: f64,
        event_number: u64,
        /// 1-based index among departure events
        customer: u64,
    },

    /// A customer's wait ended and service began
    CustomerDelayed {
        time: f64,
        delay: f64,
        /// Cumulative number of customers delayed so far
        num_delayed: u64,
    },

    /// An arrival found the waiting line full; the run stops here
    Overflow { time: f64, capacity: usize },
}

impl Event {
    /// Simulated time of the event
    pub fn time(&self) -> f64 {
        match self {
            Event::Arrival { time, .. } => *time,
            Event::Departure { time, .. } => *time,
            Event::CustomerDelayed { time, .. } => *time,
            Event::Overflow { time, .. } => *time,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival { .. } => "Arrival",
            Event::Departure { .. } => "Departure",
            Event::CustomerDelayed { .. } => "CustomerDelayed",
            Event::Overflow { .. } => "Overflow",
        }
    }

    /// Scheduled event type, for dispatch records only
    pub fn dispatched(&self) -> Option<EventType> {
        match self {
            Event::Arrival { .. } => Some(EventType::Arrival),
            Event::Departure { .. } => Some(EventType::Departure),
            _ => None,
        }
    }
}

/// Event log for storing and querying simulation events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// (type, time) of every dispatched event, in order
    pub fn dispatches(&self) -> Vec<(EventType, f64)> {
        self.events
            .iter()
            .filter_map(|e| e.dispatched().map(|t| (t, e.time())))
            .collect()
    }

    /// Individual delays of every customer whose wait ended
    pub fn delays(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::CustomerDelayed { delay, .. } => Some(*delay),
                _ => None,
            })
            .collect()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_time_and_type() {
        let event = Event::Departure {
            time: 4.2,
            event_number: 7,
            customer: 3,
        };
        assert_eq!(event.time(), 4.2);
        assert_eq!(event.event_type(), "Departure");
        assert_eq!(event.dispatched(), Some(EventType::Departure));
    }

    #[test]
    fn test_outcome_records_are_not_dispatches() {
        let event = Event::Overflow {
            time: 9.0,
            capacity: 100,
        };
        assert_eq!(event.dispatched(), None);
    }

    #[test]
    fn test_dispatches_and_delays() {
        let mut log = EventLog::new();
        log.log(Event::Arrival {
            time: 1.0,
            event_number: 1,
            customer: 1,
        });
        log.log(Event::CustomerDelayed {
            time: 1.0,
            delay: 0.0,
            num_delayed: 1,
        });
        log.log(Event::Arrival {
            time: 1.5,
            event_number: 2,
            customer: 2,
        });
        log.log(Event::Departure {
            time: 2.0,
            event_number: 3,
            customer: 1,
        });
        log.log(Event::CustomerDelayed {
            time: 2.0,
            delay: 0.5,
            num_delayed: 2,
        });

        assert_eq!(
            log.dispatches(),
            vec![
                (EventType::Arrival, 1.0),
                (EventType::Arrival, 1.5),
                (EventType::Departure, 2.0)
            ]
        );
        assert_eq!(log.delays(), vec![0.0, 0.5]);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = Event::Overflow {
            time: 1.0,
            capacity: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "overflow");
        assert_eq!(json["capacity"], 2);
    }
}
