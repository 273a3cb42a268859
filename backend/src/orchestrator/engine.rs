//! Orchestrator Engine
//!
//! Next-event time-advance loop for a single-server queue:
//!
//! ```text
//! Until the required number of customers have finished waiting:
//! 1. Ask the schedule for the earliest pending event
//! 2. Advance the clock to its time
//! 3. Flush the elapsed interval into the time-weighted statistics
//! 4. Dispatch to the arrival or departure handler
//!    (which mutates state and re-arms the schedule)
//! ```
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::orchestrator::{Orchestrator, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     mean_interarrival: 1.0,
//!     mean_service: 0.5,
//!     num_delays_required: 100,
//!     ..Default::default()
//! };
//!
//! let mut orchestrator = Orchestrator::new(config).unwrap();
//! let report = orchestrator.run().unwrap();
//! assert!(report.server_utilization > 0.0 && report.server_utilization <= 1.0);
//! ```

use crate::events::{EventSchedule, EventType, ServerStatus};
use crate::models::event::{Event, EventLog};
use crate::models::state::SimulationState;
use crate::models::stats::StatisticsAccumulator;
use crate::models::waiting_line::{QueueError, DEFAULT_QUEUE_CAPACITY};
use crate::orchestrator::fingerprint::{compute_config_hash, RunSummary, TraceDigest};
use crate::report::SimulationReport;
use crate::rng::{exponential, RngManager, UniformSource, MIN_UNIFORM};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Seed used when none is given (matches the reference runs)
pub const DEFAULT_RNG_SEED: u64 = 2005021;

// ============================================================================
// Configuration Types
// ============================================================================

/// Immutable simulation parameters
///
/// # Fields
///
/// * `mean_interarrival` - Mean time between arrivals (minutes)
/// * `mean_service` - Mean service time (minutes)
/// * `num_delays_required` - Stop once this many customers have finished waiting
/// * `verbose` - Record per-event records for the verbose trace
/// * `queue_capacity` - Maximum number of waiting customers
/// * `rng_seed` - Seed for the default uniform source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub mean_interarrival: f64,
    pub mean_service: f64,
    pub num_delays_required: u64,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
}

fn default_verbose() -> bool {
    true
}

fn default_queue_capacity() -> usize {
    DEFAULT_QUEUE_CAPACITY
}

fn default_rng_seed() -> u64 {
    DEFAULT_RNG_SEED
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mean_interarrival: 1.0,
            mean_service: 0.5,
            num_delays_required: 1000,
            verbose: default_verbose(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl SimulationConfig {
    /// Check that means are positive with a finite largest variate, and
    /// counts are non-zero
    pub fn validate(&self) -> Result<(), SimulationError> {
        check_mean("mean_interarrival", self.mean_interarrival)?;
        check_mean("mean_service", self.mean_service)?;
        if self.num_delays_required == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_delays_required must be positive".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "queue_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A mean is usable when even the largest variate it can produce
/// (`-mean * ln(MIN_UNIFORM)`) is finite
fn check_mean(name: &str, mean: f64) -> Result<(), SimulationError> {
    if !(mean.is_finite() && mean > 0.0) {
        return Err(SimulationError::InvalidConfig(format!(
            "{} must be positive and finite, got {}",
            name, mean
        )));
    }
    if !(-mean * MIN_UNIFORM.ln()).is_finite() {
        return Err(SimulationError::InvalidConfig(format!(
            "{} is too large, variates would overflow: {}",
            name, mean
        )));
    }
    Ok(())
}

// ============================================================================
// Errors and step results
// ============================================================================

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// An arrival found the waiting line at capacity
    #[error("Overflow at time {time}")]
    Overflow { time: f64, capacity: usize },

    /// Averages are undefined (nobody delayed, or no time elapsed)
    #[error("Cannot compute report: {num_delayed} customers delayed over {final_time} minutes")]
    DegenerateReport { num_delayed: u64, final_time: f64 },

    /// The next event time is not a finite number
    #[error("Simulation clock overflowed after time {last_time}")]
    ClockOverflow { last_time: f64 },

    /// The run already stopped on an overflow and cannot continue
    #[error("Simulation halted by overflow at time {time}")]
    Halted { time: f64 },

    /// Serialization failure while fingerprinting
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result of a single event
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// 1-based event index
    pub event_number: u64,
    pub event_type: EventType,
    pub time: f64,
    /// Delay of the customer who entered service during this event, if any
    pub delay: Option<f64>,
    /// Queue length after the event
    pub num_in_queue: usize,
    /// Server status after the event
    pub server_status: ServerStatus,
    /// Cumulative customers delayed after the event
    pub num_delayed: u64,
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Drives one simulation run
///
/// Owns the schedule, state, statistics, uniform source and event log.
/// A fresh orchestrator starts from zero; nothing carries over between runs.
///
/// # Determinism
///
/// All randomness comes from `rng`. Same source sequence + same config =
/// identical event sequence and statistics.
pub struct Orchestrator<S: UniformSource = RngManager> {
    config: SimulationConfig,
    state: SimulationState,
    schedule: EventSchedule,
    stats: StatisticsAccumulator,
    rng: S,
    event_log: EventLog,
    trace: TraceDigest,
    halted_at: Option<f64>,
}

impl Orchestrator<RngManager> {
    /// Create an orchestrator drawing from an xorshift RNG seeded with
    /// `config.rng_seed`
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        let rng = RngManager::new(config.rng_seed);
        Self::with_source(config, rng)
    }
}

impl<S: UniformSource> Orchestrator<S> {
    /// Create an orchestrator drawing uniforms from `source`
    ///
    /// Draws the first interarrival time immediately.
    pub fn with_source(config: SimulationConfig, mut source: S) -> Result<Self, SimulationError> {
        config.validate()?;

        let state = SimulationState::new(config.queue_capacity);
        let first_arrival = state.now() + exponential(&mut source, config.mean_interarrival);
        let schedule = EventSchedule::new(first_arrival);

        debug!(
            mean_interarrival = config.mean_interarrival,
            mean_service = config.mean_service,
            required = config.num_delays_required,
            first_arrival,
            "simulation initialized"
        );

        Ok(Self {
            config,
            state,
            schedule,
            stats: StatisticsAccumulator::new(),
            rng: source,
            event_log: EventLog::new(),
            trace: TraceDigest::new(),
            halted_at: None,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn schedule(&self) -> &EventSchedule {
        &self.schedule
    }

    pub fn stats(&self) -> &StatisticsAccumulator {
        &self.stats
    }

    /// Records from verbose runs (empty when `verbose` is off)
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Number of events processed so far
    pub fn event_count(&self) -> u64 {
        self.state.clock().ticks()
    }

    /// Current simulated time
    pub fn now(&self) -> f64 {
        self.state.now()
    }

    /// Whether enough customers have finished waiting
    pub fn is_complete(&self) -> bool {
        self.stats.num_delayed >= self.config.num_delays_required
    }

    /// Time of the overflow that stopped this run, if any
    pub fn halted_at(&self) -> Option<f64> {
        self.halted_at
    }

    /// Hex SHA-256 over every (event type, event time) processed so far
    pub fn trace_digest(&self) -> String {
        self.trace.hex()
    }

    /// Process exactly one event
    ///
    /// # Returns
    ///
    /// * `Ok(StepResult)` - Event processed
    /// * `Err(SimulationError::Overflow)` - The arrival found the line full
    /// * `Err(SimulationError::ClockOverflow)` - Event times left the `f64` range
    /// * `Err(SimulationError::Halted)` - An earlier step overflowed
    pub fn step(&mut self) -> Result<StepResult, SimulationError> {
        if let Some(time) = self.halted_at {
            return Err(SimulationError::Halted { time });
        }

        let (event_type, time) = self.schedule.next_event();
        if !time.is_finite() {
            let last_time = self.now();
            warn!(last_time, event = %event_type, "next event time is not finite");
            return Err(SimulationError::ClockOverflow { last_time });
        }
        self.state.clock_mut().advance_to(time);
        let event_number = self.state.clock().ticks();

        self.stats
            .advance(self.state.num_in_queue(), self.state.server_status(), time);
        self.trace.update(event_type, time);

        let customer = match event_type {
            EventType::Arrival => {
                self.stats.record_arrival();
                self.stats.num_arrivals
            }
            EventType::Departure => {
                self.stats.record_departure();
                self.stats.num_departures
            }
        };
        self.record(match event_type {
            EventType::Arrival => Event::Arrival {
                time,
                event_number,
                customer,
            },
            EventType::Departure => Event::Departure {
                time,
                event_number,
                customer,
            },
        });

        debug!(
            event_number,
            event = %event_type,
            time,
            num_in_queue = self.state.num_in_queue(),
            "dispatching event"
        );

        let delay = match event_type {
            EventType::Arrival => self.handle_arrival()?,
            EventType::Departure => self.handle_departure(),
        };

        Ok(StepResult {
            event_number,
            event_type,
            time,
            delay,
            num_in_queue: self.state.num_in_queue(),
            server_status: self.state.server_status(),
            num_delayed: self.stats.num_delayed,
        })
    }

    /// Run until `num_delays_required` customers have finished waiting
    ///
    /// Stops early with `SimulationError::Overflow` if the waiting line
    /// overflows.
    pub fn run(&mut self) -> Result<SimulationReport, SimulationError> {
        while !self.is_complete() {
            self.step()?;
        }

        let report = self.report()?;
        info!(
            events = self.event_count(),
            average_delay = report.average_delay,
            average_num_in_queue = report.average_num_in_queue,
            server_utilization = report.server_utilization,
            final_time = report.final_time,
            "simulation complete"
        );
        Ok(report)
    }

    /// Build the report from the statistics gathered so far
    pub fn report(&self) -> Result<SimulationReport, SimulationError> {
        SimulationReport::from_run(&self.stats, self.state.now())
    }

    /// Serializable record of this run (config, report, fingerprints)
    pub fn summary(&self) -> Result<RunSummary, SimulationError> {
        Ok(RunSummary {
            config_hash: compute_config_hash(&self.config)?,
            config: self.config.clone(),
            events_processed: self.event_count(),
            trace_digest: self.trace_digest(),
            stats: self.stats.clone(),
            report: self.report()?,
        })
    }

    // ========================================================================
    // Event handlers
    // ========================================================================

    /// Arrival: re-arm the next arrival, then either join the line or start
    /// service immediately
    fn handle_arrival(&mut self) -> Result<Option<f64>, SimulationError> {
        let now = self.state.now();
        let next_arrival = now + exponential(&mut self.rng, self.config.mean_interarrival);
        self.schedule.schedule(EventType::Arrival, next_arrival);

        if self.state.server_status().is_busy() {
            match self.state.waiting_line_mut().push(now) {
                Ok(()) => Ok(None),
                Err(QueueError::Overflow { capacity }) => {
                    warn!(time = now, capacity, "waiting line overflow");
                    self.record(Event::Overflow {
                        time: now,
                        capacity,
                    });
                    self.halted_at = Some(now);
                    Err(SimulationError::Overflow {
                        time: now,
                        capacity,
                    })
                }
            }
        } else {
            self.start_service(now, 0.0);
            Ok(Some(0.0))
        }
    }

    /// Departure: idle the server if nobody waits, otherwise serve the
    /// oldest waiting customer
    fn handle_departure(&mut self) -> Option<f64> {
        let now = self.state.now();
        match self.state.waiting_line_mut().pop() {
            None => {
                self.state.set_server_status(ServerStatus::Idle);
                self.schedule.cancel_departure();
                None
            }
            Some(arrived_at) => {
                let delay = now - arrived_at;
                self.start_service(now, delay);
                Some(delay)
            }
        }
    }

    /// Record the finished wait and schedule the service completion
    fn start_service(&mut self, now: f64, delay: f64) {
        self.stats.record_delay(delay);
        self.state.set_server_status(ServerStatus::Busy);
        let departure = now + exponential(&mut self.rng, self.config.mean_service);
        self.schedule.schedule(EventType::Departure, departure);
        self.record(Event::CustomerDelayed {
            time: now,
            delay,
            num_delayed: self.stats.num_delayed,
        });
    }

    fn record(&mut self, event: Event) {
        if self.config.verbose {
            self.event_log.log(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    fn config(required: u64) -> SimulationConfig {
        SimulationConfig {
            mean_interarrival: 1.0,
            mean_service: 0.5,
            num_delays_required: required,
            verbose: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_rejects_bad_means() {
        let mut cfg = config(1);
        cfg.mean_service = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(SimulationError::InvalidConfig(_))
        ));

        let mut cfg = config(1);
        cfg.mean_interarrival = f64::NAN;
        assert!(cfg.validate().is_err());

        assert!(config(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_means_with_infinite_variates() {
        let mut cfg = config(1);
        cfg.mean_interarrival = 1e308;
        assert!(matches!(
            cfg.validate(),
            Err(SimulationError::InvalidConfig(_))
        ));
        assert!(Orchestrator::new(cfg).is_err());

        let mut cfg = config(1);
        cfg.mean_service = f64::MAX / 2.0;
        assert!(cfg.validate().is_err());

        let mut cfg = config(1);
        cfg.mean_interarrival = 1e300;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_step_stops_when_clock_leaves_finite_range() {
        // Each interarrival is about 23 * 7e306; the second sum is infinite
        let mut cfg = config(10);
        cfg.mean_interarrival = 7e306;
        cfg.mean_service = 7e306;
        cfg.validate().unwrap();

        let mut orch = Orchestrator::with_source(cfg, ScriptedSource::new(vec![0.0; 8])).unwrap();
        let err = orch.run().unwrap_err();
        assert!(matches!(err, SimulationError::ClockOverflow { .. }));
        assert!(orch.now().is_finite());
    }

    #[test]
    fn test_first_arrival_drawn_at_construction() {
        let orch = Orchestrator::with_source(config(1), ScriptedSource::new(vec![0.5])).unwrap();
        let expected = -(0.5f64).ln();
        assert_eq!(orch.schedule().next_event(), (EventType::Arrival, expected));
        assert_eq!(orch.event_count(), 0);
    }

    #[test]
    fn test_departure_with_empty_line_idles_server() {
        // arrival, next arrival, service, next arrival far away
        let draws = [0.5, 0.01, 0.9, 0.01];
        let mut orch = Orchestrator::with_source(config(5), ScriptedSource::new(draws.to_vec())).unwrap();

        let first = orch.step().unwrap();
        assert_eq!(first.event_type, EventType::Arrival);
        assert_eq!(first.server_status, ServerStatus::Busy);

        let second = orch.step().unwrap();
        assert_eq!(second.event_type, EventType::Departure);
        assert_eq!(second.server_status, ServerStatus::Idle);
        assert_eq!(second.delay, None);
        assert!(!orch.schedule().has_departure());
    }

    #[test]
    fn test_halted_after_overflow() {
        let mut cfg = config(10);
        cfg.queue_capacity = 1;
        // first arrival, its successor, service (long), successor, successor
        let draws = [0.9, 0.9, 0.0001, 0.9, 0.9];
        let mut orch = Orchestrator::with_source(cfg, ScriptedSource::new(draws.to_vec())).unwrap();

        orch.step().unwrap(); // starts service
        orch.step().unwrap(); // joins line
        let err = orch.step().unwrap_err();
        assert!(matches!(err, SimulationError::Overflow { capacity: 1, .. }));

        let again = orch.step().unwrap_err();
        assert!(matches!(again, SimulationError::Halted { .. }));
    }
}
