//! Domain models for the queue simulator

pub mod event;
pub mod state;
pub mod stats;
pub mod waiting_line;

// Re-exports
pub use event::{Event, EventLog};
pub use state::SimulationState;
pub use stats::StatisticsAccumulator;
pub use waiting_line::{QueueError, WaitingLine, DEFAULT_QUEUE_CAPACITY};
