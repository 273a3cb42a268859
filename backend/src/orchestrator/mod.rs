//! Orchestrator - main simulation loop
//!
//! Drives a single-server queue from its first arrival until the required
//! number of customers have finished waiting.
//!
//! See `engine.rs` for full implementation.

pub mod engine;
pub mod fingerprint;

// Re-export main types for convenience
pub use engine::{Orchestrator, SimulationConfig, SimulationError, StepResult, DEFAULT_RNG_SEED};

pub use fingerprint::{compute_config_hash, compute_trace_digest, RunSummary, TraceDigest};
