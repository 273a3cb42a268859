//! Logical simulation clock
//!
//! Simulated time is a real number of minutes. It is never estimated or
//! paced against wall-clock time: the clock only ever jumps to the time of
//! the event that is about to be processed.

use serde::{Deserialize, Serialize};

/// Monotonically non-decreasing simulation clock
///
/// # Example
/// ```
/// use queue_simulator_core_rs::SimClock;
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.now(), 0.0);
///
/// clock.advance_to(1.25);
/// assert_eq!(clock.now(), 1.25);
/// assert_eq!(clock.ticks(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Current simulated time (minutes)
    now: f64,
    /// Number of times the clock has been advanced (one per event)
    ticks: u64,
}

impl SimClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to the time of the next event
    ///
    /// # Panics
    /// Panics if `time` is earlier than the current time or is not finite.
    /// Both indicate a broken event schedule, not a recoverable condition.
    pub fn advance_to(&mut self, time: f64) {
        assert!(time.is_finite(), "event time must be finite, got {}", time);
        assert!(
            time >= self.now,
            "clock cannot move backwards: {} -> {}",
            self.now,
            time
        );
        self.now = time;
        self.ticks += 1;
    }

    /// Current simulated time
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of events the clock has been advanced for
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
