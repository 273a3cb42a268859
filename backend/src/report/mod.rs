//! Report computation and text rendering
//!
//! [`SimulationReport`] turns the accumulated statistics into the three
//! long-run averages. The `format_*` functions render the plain-text report:
//! a header restating the inputs, optional per-event trace lines, and the
//! final statistics block. Reals are printed to three decimals.

use crate::models::event::Event;
use crate::models::stats::StatisticsAccumulator;
use crate::orchestrator::{SimulationConfig, SimulationError};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const RULE_WIDTH: usize = 43;

/// Long-run performance measures of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Mean wait in queue over all delayed customers (minutes)
    pub average_delay: f64,
    /// Time-average number of customers waiting
    pub average_num_in_queue: f64,
    /// Fraction of time the server was busy
    pub server_utilization: f64,
    /// Simulated time when the run ended (minutes)
    pub final_time: f64,
    /// Customers whose wait completed
    pub num_delayed: u64,
}

impl SimulationReport {
    /// Compute averages from final statistics and the final clock value
    ///
    /// # Errors
    ///
    /// `SimulationError::DegenerateReport` if nobody was delayed or no time
    /// elapsed, since the averages would divide by zero.
    ///
    /// # Example
    /// ```
    /// use queue_simulator_core_rs::{SimulationReport, StatisticsAccumulator};
    ///
    /// let stats = StatisticsAccumulator {
    ///     num_delayed: 2,
    ///     total_delay: 10.0,
    ///     area_num_in_queue: 4.0,
    ///     area_server_status: 3.0,
    ///     ..Default::default()
    /// };
    /// let report = SimulationReport::from_run(&stats, 5.0).unwrap();
    /// assert_eq!(report.average_delay, 5.0);
    /// ```
    pub fn from_run(
        stats: &StatisticsAccumulator,
        final_time: f64,
    ) -> Result<Self, SimulationError> {
        if stats.num_delayed == 0 || final_time <= 0.0 || !final_time.is_finite() {
            return Err(SimulationError::DegenerateReport {
                num_delayed: stats.num_delayed,
                final_time,
            });
        }

        Ok(Self {
            average_delay: stats.total_delay / stats.num_delayed as f64,
            average_num_in_queue: stats.area_num_in_queue / final_time,
            server_utilization: stats.area_server_status / final_time,
            final_time,
            num_delayed: stats.num_delayed,
        })
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Report heading and the three input parameters
pub fn format_header(config: &SimulationConfig) -> String {
    let mut out = String::new();
    out.push_str("Single-server queueing system\n\n");
    let _ = write!(
        out,
        "Mean interarrival time{:11.3} minutes\n\n",
        config.mean_interarrival
    );
    let _ = write!(out, "Mean service time{:16.3} minutes\n\n", config.mean_service);
    let _ = write!(out, "Number of customers{:14}\n\n", config.num_delays_required);
    let _ = write!(out, "{}\n\n", rule());
    out
}

/// Trace text for one event record
pub fn format_event(event: &Event) -> String {
    match event {
        Event::Arrival {
            event_number,
            customer,
            ..
        } => format!("{}. Next event: Customer {} Arrival\n", event_number, customer),
        Event::Departure {
            event_number,
            customer,
            ..
        } => format!(
            "{}. Next event: Customer {} Departure\n",
            event_number, customer
        ),
        Event::CustomerDelayed { num_delayed, .. } => format!(
            "\n--------No. of customers delayed: {}--------\n\n",
            num_delayed
        ),
        Event::Overflow { time, .. } => format_overflow(*time),
    }
}

/// Diagnostic written when the waiting line overflows
pub fn format_overflow(time: f64) -> String {
    format!("\nOverflow at time {}\n", time)
}

/// Final statistics block
pub fn format_summary(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}\n\n", rule());
    out.push_str("Final Statistics:");
    let _ = write!(
        out,
        "\n\nAverage delay in queue{:11.3} minutes\n\n",
        report.average_delay
    );
    let _ = write!(
        out,
        "Average number in queue{:10.3}\n\n",
        report.average_num_in_queue
    );
    let _ = write!(out, "Server utilization{:15.3}\n\n", report.server_utilization);
    let _ = writeln!(
        out,
        "Time simulation ended{:12.3} minutes",
        report.final_time
    );
    out
}

/// Full report: header, trace lines for `events`, final block
///
/// Overflow records in `events` render their own diagnostic, so callers
/// with a failed run pass `report = None`.
pub fn render_report(
    config: &SimulationConfig,
    events: &[Event],
    report: Option<&SimulationReport>,
) -> String {
    let mut out = format_header(config);
    for event in events {
        out.push_str(&format_event(event));
    }
    if let Some(report) = report {
        out.push_str(&format_summary(report));
    }
    out
}
