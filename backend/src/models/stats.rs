//! Time-weighted statistics
//!
//! Running totals for one simulation run. Nothing is ever removed; every
//! field only grows until the run ends.

use crate::events::ServerStatus;
use serde::{Deserialize, Serialize};

/// Counters and time-integrals accumulated over a run
///
/// # Example
/// ```
/// use queue_simulator_core_rs::{ServerStatus, StatisticsAccumulator};
///
/// let mut stats = StatisticsAccumulator::new();
/// // Two customers waiting, server busy, for 1.5 minutes
/// stats.advance(2, ServerStatus::Busy, 1.5);
/// assert_eq!(stats.area_num_in_queue, 3.0);
/// assert_eq!(stats.area_server_status, 1.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsAccumulator {
    /// Customers whose wait has completed (service started)
    pub num_delayed: u64,
    /// Sum of completed waits (minutes)
    pub total_delay: f64,
    /// ∫ num_in_queue dt
    pub area_num_in_queue: f64,
    /// ∫ busy_indicator dt
    pub area_server_status: f64,
    /// Time of the previous flush
    pub time_last_event: f64,
    /// Arrival events processed
    pub num_arrivals: u64,
    /// Departure events processed
    pub num_departures: u64,
}

impl StatisticsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flush the interval since the previous event into the integrals
    ///
    /// Must be called once per event with the state that held during the
    /// elapsed interval, before the event changes that state.
    pub fn advance(&mut self, num_in_queue: usize, server_status: ServerStatus, new_time: f64) {
        let duration = new_time - self.time_last_event;
        self.time_last_event = new_time;
        self.area_num_in_queue += num_in_queue as f64 * duration;
        self.area_server_status += server_status.busy_indicator() * duration;
    }

    /// Record a customer whose wait just ended
    pub fn record_delay(&mut self, delay: f64) {
        self.total_delay += delay;
        self.num_delayed += 1;
    }

    pub fn record_arrival(&mut self) {
        self.num_arrivals += 1;
    }

    pub fn record_departure(&mut self) {
        self.num_departures += 1;
    }
}
