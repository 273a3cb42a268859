//! Bounded FIFO of waiting customers
//!
//! Stores the arrival timestamp of every customer who is waiting for the
//! server (not the one in service). The head is always the oldest arrival
//! and is the next to be served.
//!
//! # Critical Invariants
//!
//! 1. `len() <= capacity()` at all times
//! 2. A rejected push leaves the line unchanged

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use thiserror::Error;

/// Capacity of the waiting line in the reference configuration
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Errors raised by the waiting line
#[derive(Debug, Error, PartialEq)]
pub enum QueueError {
    #[error("Waiting line full: capacity {capacity} reached")]
    Overflow { capacity: usize },
}

/// FIFO of arrival timestamps with an explicit capacity bound
///
/// # Example
/// ```
/// use queue_simulator_core_rs::WaitingLine;
///
/// let mut line = WaitingLine::with_capacity(2);
/// line.push(1.0).unwrap();
/// line.push(1.5).unwrap();
/// assert!(line.push(2.0).is_err());
///
/// assert_eq!(line.pop(), Some(1.0));
/// assert_eq!(line.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitingLine {
    arrivals: VecDeque<f64>,
    capacity: usize,
}

impl WaitingLine {
    /// Create an empty line holding at most `capacity` customers
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "queue capacity must be positive");
        Self {
            arrivals: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an arrival timestamp at the tail
    pub fn push(&mut self, arrival_time: f64) -> Result<(), QueueError> {
        if self.arrivals.len() >= self.capacity {
            return Err(QueueError::Overflow {
                capacity: self.capacity,
            });
        }
        self.arrivals.push_back(arrival_time);
        Ok(())
    }

    /// Remove and return the oldest arrival timestamp
    pub fn pop(&mut self) -> Option<f64> {
        self.arrivals.pop_front()
    }

    /// Oldest arrival timestamp without removing it
    pub fn head(&self) -> Option<f64> {
        self.arrivals.front().copied()
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.arrivals.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Waiting timestamps from head to tail
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.arrivals.iter().copied()
    }
}

impl Default for WaitingLine {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }
}
