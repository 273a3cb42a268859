//! Input file parsing
//!
//! The input holds three whitespace-separated values: mean interarrival
//! time, mean service time, number of customers. Anything after the third
//! value is ignored.

use queue_simulator_core_rs::SimulationConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or parsing the input file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "'{}' must contain at least three values: mean interarrival time, \
         mean service time, and number of customers (found {found})",
        .path.display()
    )]
    MissingValues { path: PathBuf, found: usize },

    #[error("failed to parse {field} from '{}': {value:?}", .path.display())]
    InvalidNumber {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
}

/// The three values read from the input file
#[derive(Debug, Clone, PartialEq)]
pub struct InputParameters {
    pub mean_interarrival: f64,
    pub mean_service: f64,
    pub num_delays_required: u64,
}

impl InputParameters {
    /// Combine with command-line options into a core configuration
    pub fn into_config(self, verbose: bool, queue_capacity: usize, rng_seed: u64) -> SimulationConfig {
        SimulationConfig {
            mean_interarrival: self.mean_interarrival,
            mean_service: self.mean_service,
            num_delays_required: self.num_delays_required,
            verbose,
            queue_capacity,
            rng_seed,
        }
    }
}

/// Read and parse the input file at `path`
pub fn read_parameters(path: &Path) -> Result<InputParameters, InputError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    parse_parameters(&text, path)
}

/// Parse input text; `path` is only used in error messages
pub fn parse_parameters(text: &str, path: &Path) -> Result<InputParameters, InputError> {
    let values: Vec<&str> = text.split_whitespace().take(3).collect();
    if values.len() < 3 {
        return Err(InputError::MissingValues {
            path: path.to_path_buf(),
            found: values.len(),
        });
    }

    let invalid = |field: &'static str, value: &str| InputError::InvalidNumber {
        path: path.to_path_buf(),
        field,
        value: value.to_string(),
    };

    let mean_interarrival = values[0]
        .parse::<f64>()
        .map_err(|_| invalid("mean interarrival time", values[0]))?;
    let mean_service = values[1]
        .parse::<f64>()
        .map_err(|_| invalid("mean service time", values[1]))?;
    let num_delays_required = values[2]
        .parse::<u64>()
        .map_err(|_| invalid("number of customers", values[2]))?;

    Ok(InputParameters {
        mean_interarrival,
        mean_service,
        num_delays_required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("in.txt")
    }

    #[test]
    fn test_parse_three_values() {
        let params = parse_parameters("1.0 0.5\n1000\n", &path()).unwrap();
        assert_eq!(
            params,
            InputParameters {
                mean_interarrival: 1.0,
                mean_service: 0.5,
                num_delays_required: 1000,
            }
        );
    }

    #[test]
    fn test_extra_values_ignored() {
        let params = parse_parameters("2 1 10 trailing junk", &path()).unwrap();
        assert_eq!(params.num_delays_required, 10);
    }

    #[test]
    fn test_too_few_values() {
        let err = parse_parameters("1.0 0.5", &path()).unwrap_err();
        assert!(matches!(err, InputError::MissingValues { found: 2, .. }));
        assert!(err.to_string().contains("at least three values"));
    }

    #[test]
    fn test_non_numeric_value() {
        let err = parse_parameters("1.0 fast 10", &path()).unwrap_err();
        match err {
            InputError::InvalidNumber { field, value, .. } => {
                assert_eq!(field, "mean service time");
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_fractional_customer_count_rejected() {
        let err = parse_parameters("1.0 0.5 10.5", &path()).unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidNumber {
                field: "number of customers",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_parameters(Path::new("definitely/not/here/in.txt")).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
    }

    #[test]
    fn test_into_config() {
        let params = parse_parameters("1.5 0.75 20", &path()).unwrap();
        let config = params.into_config(false, 50, 7);
        assert_eq!(config.mean_interarrival, 1.5);
        assert_eq!(config.queue_capacity, 50);
        assert_eq!(config.rng_seed, 7);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }
}
