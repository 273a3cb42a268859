//! Event and server status types
//!
//! # Design Principles
//!
//! 1. **Closed set**: a single-server queue only ever reacts to arrivals and
//!    departures
//! 2. **Sentinel, not variant**: "no departure pending" is an infinite
//!    departure time, not a third event type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of event that can be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A new customer joins the system
    Arrival,
    /// The customer in service leaves the system
    Departure,
}

impl EventType {
    /// Short display name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Arrival => "Arrival",
            EventType::Departure => "Departure",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the single server is serving someone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    #[default]
    Idle,
    Busy,
}

impl ServerStatus {
    /// 1.0 while busy, 0.0 while idle (integrand of the utilization integral)
    pub fn busy_indicator(&self) -> f64 {
        match self {
            ServerStatus::Idle => 0.0,
            ServerStatus::Busy => 1.0,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ServerStatus::Busy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_indicator() {
        assert_eq!(ServerStatus::Idle.busy_indicator(), 0.0);
        assert_eq!(ServerStatus::Busy.busy_indicator(), 1.0);
        assert_eq!(ServerStatus::default(), ServerStatus::Idle);
    }

    #[test]
    fn test_event_type_serializes_snake_case() {
        let json = serde_json::to_string(&EventType::Departure).unwrap();
        assert_eq!(json, "\"departure\"");
    }
}
