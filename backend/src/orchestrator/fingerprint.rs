//! Run fingerprints
//!
//! Compact identities for comparing runs without diffing full traces.
//!
//! # Critical Invariants
//!
//! - **Determinism**: Same seed + config produces the same trace digest
//! - **Canonical config hash**: Field order never changes the config hash

use crate::events::EventType;
use crate::models::stats::StatisticsAccumulator;
use crate::orchestrator::engine::{SimulationConfig, SimulationError};
use crate::report::SimulationReport;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Run Summary
// ============================================================================

/// Machine-readable record of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Configuration the run used
    pub config: SimulationConfig,

    /// SHA256 hash of the canonical config JSON
    pub config_hash: String,

    /// Events processed (arrivals + departures)
    pub events_processed: u64,

    /// SHA256 over the (event type, time) sequence
    pub trace_digest: String,

    /// Raw accumulators at the end of the run
    pub stats: StatisticsAccumulator,

    /// Computed averages
    pub report: SimulationReport,
}

// ============================================================================
// Trace Digest
// ============================================================================

/// Incremental SHA256 over every dispatched (event type, event time) pair
///
/// Times are hashed by bit pattern, so two digests match only when the
/// traces are bit-identical.
#[derive(Clone, Default)]
pub struct TraceDigest {
    hasher: Sha256,
    count: u64,
}

impl TraceDigest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one dispatched event
    pub fn update(&mut self, event_type: EventType, time: f64) {
        let tag: u8 = match event_type {
            EventType::Arrival => 1,
            EventType::Departure => 2,
        };
        self.hasher.update([tag]);
        self.hasher.update(time.to_bits().to_le_bytes());
        self.count += 1;
    }

    /// Number of events fed so far
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Lowercase hex digest of everything fed so far
    pub fn hex(&self) -> String {
        format!("{:x}", self.hasher.clone().finalize())
    }
}

/// Digest of an already-collected trace
pub fn compute_trace_digest(trace: &[(EventType, f64)]) -> String {
    let mut digest = TraceDigest::new();
    for (event_type, time) in trace {
        digest.update(*event_type, *time);
    }
    digest.hex()
}

// ============================================================================
// Config Hashing
// ============================================================================

/// Compute deterministic SHA256 hash of config
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on field or map ordering.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::SerializationError(format!("Config serialization failed: {}", e))
    })?;

    // Recursively sort all object keys for canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::SerializationError(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_config_hash_different_for_different_configs() {
        let config1 = SimulationConfig::default();
        let config2 = SimulationConfig {
            mean_service: 0.75,
            ..Default::default()
        };

        let hash1 = compute_config_hash(&config1).unwrap();
        let hash2 = compute_config_hash(&config2).unwrap();

        assert_ne!(
            hash1, hash2,
            "Different configs should produce different hashes"
        );
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_trace_digest_sensitive_to_order() {
        let a = compute_trace_digest(&[(EventType::Arrival, 1.0), (EventType::Departure, 2.0)]);
        let b = compute_trace_digest(&[(EventType::Departure, 2.0), (EventType::Arrival, 1.0)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_incremental_matches_batch() {
        let mut digest = TraceDigest::new();
        digest.update(EventType::Arrival, 0.25);
        digest.update(EventType::Arrival, 0.5);

        let batch = compute_trace_digest(&[(EventType::Arrival, 0.25), (EventType::Arrival, 0.5)]);
        assert_eq!(digest.hex(), batch);
        assert_eq!(digest.count(), 2);
    }
}
