//! Queue Simulator Core - Rust Engine
//!
//! Discrete-event simulation of a single-server queue (M/M/1) with
//! deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Logical simulation clock
//! - **rng**: Deterministic uniform source and exponential variates
//! - **events**: Event types and the next-event schedule
//! - **models**: Simulation state, waiting line, statistics, event records
//! - **orchestrator**: Main simulation loop and event handlers
//! - **report**: Long-run averages and text rendering
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG or injected source)
//! 2. The clock never moves backwards
//! 3. The waiting line never exceeds its capacity; an arrival that would
//!    overflow it stops the run

// Module declarations
pub mod core;
pub mod events;
pub mod models;
pub mod orchestrator;
pub mod report;
pub mod rng;

// Re-exports for convenience
pub use crate::core::clock::SimClock;
pub use events::{EventSchedule, EventType, ServerStatus};
pub use models::{
    event::{Event, EventLog},
    state::SimulationState,
    stats::StatisticsAccumulator,
    waiting_line::{QueueError, WaitingLine, DEFAULT_QUEUE_CAPACITY},
};
pub use orchestrator::{
    Orchestrator, RunSummary, SimulationConfig, SimulationError, StepResult, DEFAULT_RNG_SEED,
};
pub use report::SimulationReport;
pub use rng::{RngManager, ScriptedSource, UniformSource};
