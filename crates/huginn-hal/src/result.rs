//! Execution results and measurement counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement counts: a histogram from classical bitstrings to the number
/// of shots that produced them.
///
/// Serializes transparently as a JSON object (`{"00": 512, "11": 512}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no outcomes were observed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of shots recorded.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// The most frequent outcome.
    ///
    /// Ties are broken deterministically in favor of the lexicographically
    /// smallest bitstring, so repeated analysis of the same counts always
    /// yields the same answer regardless of map iteration order.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by(|(ka, va), (kb, vb)| va.cmp(vb).then_with(|| kb.cmp(ka)))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Outcomes sorted by bitstring, ascending.
    pub fn sorted_by_bitstring(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// The result of executing a circuit on a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Execution time in milliseconds, if reported by the backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
