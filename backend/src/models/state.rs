//! Simulation State
//!
//! The dynamic part of a single-server queue: the clock, what the server
//! is doing, and who is waiting.
//!
//! # Critical Invariants
//!
//! 1. **Queue length**: `num_in_queue()` is the waiting line's length and
//!    never exceeds its capacity
//! 2. **Idle means empty**: nobody waits while the server is idle
//! 3. **Monotone clock**: time never moves backwards

use crate::core::clock::SimClock;
use crate::events::ServerStatus;
use crate::models::waiting_line::WaitingLine;
use serde::{Deserialize, Serialize};

/// Complete mutable state of one simulation run
///
/// # Example
///
/// ```rust
/// use queue_simulator_core_rs::{ServerStatus, SimulationState};
///
/// let state = SimulationState::new(100);
/// assert_eq!(state.server_status(), ServerStatus::Idle);
/// assert_eq!(state.num_in_queue(), 0);
/// assert_eq!(state.now(), 0.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    clock: SimClock,
    server_status: ServerStatus,
    waiting_line: WaitingLine,
}

impl SimulationState {
    /// Fresh state: time zero, server idle, nobody waiting
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            clock: SimClock::new(),
            server_status: ServerStatus::Idle,
            waiting_line: WaitingLine::with_capacity(queue_capacity),
        }
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub(crate) fn clock_mut(&mut self) -> &mut SimClock {
        &mut self.clock
    }

    pub fn server_status(&self) -> ServerStatus {
        self.server_status
    }

    pub fn set_server_status(&mut self, status: ServerStatus) {
        self.server_status = status;
    }

    pub fn num_in_queue(&self) -> usize {
        self.waiting_line.len()
    }

    pub fn waiting_line(&self) -> &WaitingLine {
        &self.waiting_line
    }

    pub fn waiting_line_mut(&mut self) -> &mut WaitingLine {
        &mut self.waiting_line
    }
}
