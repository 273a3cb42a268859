//! Event types and the next-event schedule
//!
//! This module handles:
//! - The two event types the queue reacts to (arrival, departure)
//! - Tracking the next scheduled time of each
//! - Choosing which event fires next

pub mod schedule;
pub mod types;

pub use schedule::EventSchedule;
pub use types::{EventType, ServerStatus};
