// Copyright 2025 benchmine contributors
// SPDX-License-Identifier: Apache-2.0

//! Data model: measurements, per-container series, and grouped results.
//!
//! All collections here preserve first-seen insertion order, so downstream
//! iteration (and test assertions on output ordering) are deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Grouping key for the implementation variant a measurement was taken on.
///
/// A report line may carry no `<container>` annotation at all; that is a
/// valid, distinct identity rather than an error, so the key is a tagged
/// variant instead of an optional string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContainerKey {
    /// A `<name>`-annotated container.
    Named(String),
    /// No container annotation on the report line.
    Unnamed,
}

impl ContainerKey {
    /// Build a named key.
    pub fn named(name: impl Into<String>) -> Self {
        ContainerKey::Named(name.into())
    }

    /// The annotation text, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            ContainerKey::Named(name) => Some(name),
            ContainerKey::Unnamed => None,
        }
    }

    /// Label suitable for report output and filenames.
    pub fn label(&self) -> &str {
        match self {
            ContainerKey::Named(name) => name,
            ContainerKey::Unnamed => "(unnamed)",
        }
    }
}

impl From<Option<String>> for ContainerKey {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => ContainerKey::Named(name),
            None => ContainerKey::Unnamed,
        }
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Keys are serialized as their label so the grouping maps stay plain JSON
// objects. `(unnamed)` round-trips back to `Unnamed`.
impl Serialize for ContainerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ContainerKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(if label == "(unnamed)" {
            ContainerKey::Unnamed
        } else {
            ContainerKey::Named(label)
        })
    }
}

/// One structured observation mined from one report line.
///
/// Immutable once constructed; produced by [`crate::parse::parse_line`] and
/// never mutated downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Logical benchmark identity, excluding any `<container>` decoration.
    pub benchmark_name: String,
    /// The implementation variant measured.
    pub container: ContainerKey,
    /// Input scale for this observation.
    pub problem_size: u64,
    /// Elapsed time in nanoseconds; fractional values are preserved as
    /// parsed.
    pub time_ns: f64,
}

/// Ordered series of observations for one (benchmark, container) pair.
///
/// `sizes[i]` and `times[i]` describe the same observation. Entries are
/// appended in the order records were received; repeated sizes are legal and
/// simply appended, and nothing here sorts or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    /// Problem sizes, in insertion order.
    pub sizes: Vec<u64>,
    /// Times in nanoseconds, parallel to `sizes`.
    pub times: Vec<f64>,
}

impl SeriesGroup {
    /// Append one observation, keeping the two vectors parallel.
    pub fn push(&mut self, size: u64, time_ns: f64) {
        self.sizes.push(size);
        self.times.push(time_ns);
    }

    /// Number of observations in the series.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.sizes.len(), self.times.len());
        self.times.len()
    }

    /// Whether the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Two-level grouping: benchmark name → container → measurement series.
///
/// Both levels iterate in first-seen order of their keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedResults {
    groups: IndexMap<String, IndexMap<ContainerKey, SeriesGroup>>,
}

impl GroupedResults {
    /// Group a record sequence, processing records strictly in input order.
    ///
    /// Each record's `(problem_size, time_ns)` is appended to the series at
    /// `[benchmark_name][container]`, lazily creating groups on first sight.
    /// No validation of size monotonicity or uniqueness is performed.
    pub fn aggregate(records: impl IntoIterator<Item = Measurement>) -> Self {
        let mut groups: IndexMap<String, IndexMap<ContainerKey, SeriesGroup>> = IndexMap::new();
        for record in records {
            groups
                .entry(record.benchmark_name)
                .or_default()
                .entry(record.container)
                .or_default()
                .push(record.problem_size, record.time_ns);
        }
        GroupedResults { groups }
    }

    /// Iterate benchmarks in first-seen order.
    pub fn benchmarks(
        &self,
    ) -> impl Iterator<Item = (&str, &IndexMap<ContainerKey, SeriesGroup>)> {
        self.groups.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Container data for one benchmark.
    pub fn get(&self, benchmark_name: &str) -> Option<&IndexMap<ContainerKey, SeriesGroup>> {
        self.groups.get(benchmark_name)
    }

    /// Number of distinct benchmarks.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no benchmark was seen at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total observation count across every (benchmark, container) series.
    pub fn total_measurements(&self) -> usize {
        self.groups
            .values()
            .flat_map(|containers| containers.values())
            .map(SeriesGroup::len)
            .sum()
    }
}
