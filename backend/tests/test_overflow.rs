//! Waiting-line overflow
//!
//! An arrival that finds the line at capacity stops the run. These tests
//! fill the line by keeping the first customer in service for a long time
//! while arrivals come quickly.

use queue_simulator_core_rs::report::{format_overflow, render_report};
use queue_simulator_core_rs::{
    Event, Orchestrator, ScriptedSource, SimulationConfig, SimulationError,
    DEFAULT_QUEUE_CAPACITY,
};

/// Uniform giving short interarrival gaps (~0.105 minutes at mean 1.0)
const FAST: f64 = 0.9;

/// Draws that hold the first customer in service while `arrivals` more
/// customers arrive
fn flood(arrivals: usize) -> Vec<f64> {
    // first arrival, its successor, one very long service (clamped draw)
    let mut draws = vec![FAST, FAST, 1e-12];
    draws.extend(std::iter::repeat(FAST).take(arrivals));
    draws
}

fn config(capacity: usize) -> SimulationConfig {
    SimulationConfig {
        mean_interarrival: 1.0,
        mean_service: 0.5,
        num_delays_required: 1_000,
        verbose: true,
        queue_capacity: capacity,
        ..Default::default()
    }
}

#[test]
fn test_arrival_beyond_capacity_overflows() {
    let capacity = DEFAULT_QUEUE_CAPACITY;
    let mut orch =
        Orchestrator::with_source(config(capacity), ScriptedSource::new(flood(capacity + 1)))
            .unwrap();

    // First customer enters service, the next `capacity` fill the line
    for _ in 0..=capacity {
        orch.step().unwrap();
    }
    assert_eq!(orch.state().num_in_queue(), capacity);
    assert!(orch.state().waiting_line().is_full());

    let delayed_before = orch.stats().num_delayed;
    let total_delay_before = orch.stats().total_delay;

    let err = orch.step().unwrap_err();
    let overflow_time = match err {
        SimulationError::Overflow { time, capacity: c } => {
            assert_eq!(c, capacity);
            time
        }
        other => panic!("expected overflow, got {:?}", other),
    };

    assert_eq!(orch.halted_at(), Some(overflow_time));
    assert_eq!(orch.now(), overflow_time);
    assert_eq!(orch.state().num_in_queue(), capacity);
    assert_eq!(orch.stats().num_delayed, delayed_before);
    assert_eq!(orch.stats().total_delay, total_delay_before);
    assert!(matches!(
        orch.event_log().events().last(),
        Some(Event::Overflow { .. })
    ));
}

#[test]
fn test_halted_run_does_not_mutate_statistics() {
    let mut orch =
        Orchestrator::with_source(config(3), ScriptedSource::new(flood(10))).unwrap();

    let err = orch.run().unwrap_err();
    assert!(matches!(err, SimulationError::Overflow { capacity: 3, .. }));

    let stats = orch.stats().clone();
    let events = orch.event_count();
    let log_len = orch.event_log().len();

    assert!(matches!(orch.step(), Err(SimulationError::Halted { .. })));
    assert!(matches!(orch.run(), Err(SimulationError::Halted { .. })));

    assert_eq!(orch.stats(), &stats);
    assert_eq!(orch.event_count(), events);
    assert_eq!(orch.event_log().len(), log_len);
}

#[test]
fn test_overflow_happens_on_capacity_plus_one_waiting() {
    let mut orch =
        Orchestrator::with_source(config(5), ScriptedSource::new(flood(10))).unwrap();

    let _ = orch.run();

    // 1 in service + 5 waiting + the overflowing arrival
    assert_eq!(orch.stats().num_arrivals, 7);
    assert_eq!(orch.stats().num_departures, 0);
}

#[test]
fn test_overflow_rendered_in_trace() {
    let mut orch =
        Orchestrator::with_source(config(2), ScriptedSource::new(flood(5))).unwrap();

    let time = match orch.run() {
        Err(SimulationError::Overflow { time, .. }) => time,
        other => panic!("expected overflow, got {:?}", other),
    };

    let text = render_report(orch.config(), orch.event_log().events(), None);
    assert!(text.ends_with(&format_overflow(time)));
    assert!(!text.contains("Final Statistics"));
}

#[test]
fn test_overflow_error_message_names_time() {
    let err = SimulationError::Overflow {
        time: 12.25,
        capacity: 100,
    };
    assert_eq!(err.to_string(), "Overflow at time 12.25");
}
