//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic uniform draws, and
//! turns them into exponential variates for interarrival and service times.
//! CRITICAL: All randomness in the simulator MUST go through this module.

mod scripted;
mod variate;
mod xorshift;

pub use scripted::ScriptedSource;
pub use variate::{exponential, UniformSource, MIN_UNIFORM};
pub use xorshift::RngManager;
