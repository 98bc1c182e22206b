//! Execution results and measurement counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Histogram of measurement outcomes keyed by classical bitstring.
///
/// Bitstrings follow the circuit convention: character `i` holds the value
/// of classical bit `i`, so `"01"` means bit 0 measured 0 and bit 1
/// measured 1.
///
/// # Example
///
/// ```
/// use alsvid_hal::Counts;
///
/// let mut counts = Counts::new();
/// counts.insert("00".to_string(), 1);
/// counts.insert("00".to_string(), 1);
/// counts.insert("11".to_string(), 1);
///
/// assert_eq!(counts.get("00"), 2);
/// assert_eq!(counts.most_frequent(), Some(("00", 2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Creates an empty histogram.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` occurrences of `bitstring`, accumulating with any
    /// existing entry.
    pub fn insert(&mut self, bitstring: String, count: u64) {
        *self.counts.entry(bitstring).or_insert(0) += count;
    }

    /// Returns the count for `bitstring`, or 0 if it was never observed.
    #[must_use]
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Returns the outcome with the highest count, if any.
    ///
    /// Ties are broken by lexicographic order of the bitstring so the
    /// result is deterministic.
    #[must_use]
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
    }

    /// Total number of recorded shots.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Fraction of shots that produced `bitstring`.
    ///
    /// Returns 0.0 for an empty histogram.
    #[must_use]
    pub fn probability(&self, bitstring: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        {
            self.get(bitstring) as f64 / total as f64
        }
    }

    /// Number of distinct outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no outcomes were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(bitstring, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// Returns all outcomes sorted by descending count, ties broken by
    /// bitstring. Useful for printing histograms.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a String, &'a u64);
    type IntoIter = std::collections::hash_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// Result of executing a circuit on a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement outcome histogram.
    pub counts: Counts,
    /// Number of shots that were run.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if the backend reports it.
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Creates a result from a histogram and shot count.
    #[must_use]
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attaches a wall-clock execution time in milliseconds.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
