//! Queue Simulator CLI
//!
//! Reads the simulation parameters from an input file, runs one M/M/1
//! simulation and writes the text report.
//!
//! # Example
//!
//! ```bash
//! # Reference run: parameters from in.txt, report to out.txt
//! queue-sim
//!
//! # Different seed, report to stdout, no per-event trace
//! queue-sim --seed 42 --output - --quiet
//!
//! # Also write a machine-readable summary
//! queue-sim --json summary.json
//! ```
//!
//! # Exit status
//!
//! - 0: run completed
//! - 1: input or configuration error
//! - 2: waiting line overflowed
//! - 3: report undefined (no customers delayed or no time elapsed)

mod input;

use clap::Parser;
use input::{read_parameters, InputError};
use queue_simulator_core_rs::report::{format_overflow, render_report};
use queue_simulator_core_rs::{
    Orchestrator, SimulationError, DEFAULT_QUEUE_CAPACITY, DEFAULT_RNG_SEED,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Single-server queue simulator
///
/// Runs a deterministic M/M/1 simulation. Same seed and input give the
/// same report.
#[derive(Parser, Debug)]
#[command(name = "queue-sim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file: mean interarrival time, mean service time, number of customers
    #[arg(short, long, default_value = "in.txt")]
    input: PathBuf,

    /// Report file ("-" for stdout)
    #[arg(short, long, default_value = "out.txt")]
    output: PathBuf,

    /// Random seed
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    seed: u64,

    /// Maximum number of waiting customers
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    capacity: usize,

    /// Omit the per-event trace from the report
    #[arg(short, long)]
    quiet: bool,

    /// Also write a JSON run summary to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("failed to write '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Input(_) => 1,
            CliError::Simulation(SimulationError::InvalidConfig(_))
            | CliError::Simulation(SimulationError::ClockOverflow { .. }) => 1,
            CliError::Simulation(SimulationError::Overflow { .. })
            | CliError::Simulation(SimulationError::Halted { .. }) => 2,
            CliError::Simulation(SimulationError::DegenerateReport { .. }) => 3,
            CliError::Simulation(SimulationError::SerializationError(_)) => 1,
            CliError::Output { .. } | CliError::Json(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; the report owns stdout when --output is "-"
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,queue_simulator_core_rs=info,queue_sim=info")),
        )
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let params = read_parameters(&args.input)?;
    let config = params.into_config(!args.quiet, args.capacity, args.seed);

    info!(
        input = %args.input.display(),
        seed = config.rng_seed,
        capacity = config.queue_capacity,
        "starting simulation"
    );

    let mut orchestrator = Orchestrator::new(config.clone())?;
    let outcome = orchestrator.run();

    // Header and trace are written whatever the outcome
    let mut text = render_report(&config, orchestrator.event_log().events(), outcome.as_ref().ok());

    match outcome {
        Ok(_) => {
            write_output(&args.output, &text)?;

            if let Some(path) = &args.json {
                let summary = orchestrator.summary()?;
                let json = serde_json::to_string_pretty(&summary)?;
                write_output(path, &json)?;
                info!(path = %path.display(), "wrote run summary");
            }
            Ok(())
        }
        Err(err) => {
            if let SimulationError::Overflow { time, .. } = err {
                // Verbose runs already carry the overflow record in the trace
                if !config.verbose {
                    text.push_str(&format_overflow(time));
                }
            }
            write_output(&args.output, &text)?;
            Err(err.into())
        }
    }
}

fn write_output(path: &Path, text: &str) -> Result<(), CliError> {
    let to_cli_error = |source| CliError::Output {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes()).map_err(to_cli_error)?;
        return out.flush().map_err(to_cli_error);
    }

    let file = File::create(path).map_err(to_cli_error)?;
    let mut out = BufWriter::new(file);
    out.write_all(text.as_bytes()).map_err(to_cli_error)?;
    out.flush().map_err(to_cli_error)
}
