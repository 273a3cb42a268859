//! Replay of a recorded uniform sequence
//!
//! Forces exact draws (e.g. u = 0.5 for the first arrival) so a scenario can
//! be checked by hand. Once the script runs out, draws continue from a
//! seeded [`RngManager`].

use super::variate::UniformSource;
use super::xorshift::RngManager;
use std::collections::VecDeque;

/// Uniform source that replays `draws` first, then falls back to xorshift
///
/// # Example
/// ```
/// use queue_simulator_core_rs::rng::{ScriptedSource, UniformSource};
///
/// let mut source = ScriptedSource::new(vec![0.5, 0.25]);
/// assert_eq!(source.next_uniform(), 0.5);
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.consumed(), 2);
/// assert!(source.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
    fallback: RngManager,
    consumed: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self::with_fallback(draws, RngManager::new(1))
    }

    pub fn with_fallback(draws: Vec<f64>, fallback: RngManager) -> Self {
        Self {
            draws: draws.into(),
            fallback,
            consumed: 0,
        }
    }

    /// Total draws handed out so far (scripted and fallback)
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Scripted draws not yet handed out
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.draws.is_empty()
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        self.consumed += 1;
        match self.draws.pop_front() {
            Some(u) => u,
            None => self.fallback.next_f64(),
        }
    }
}
