// Copyright 2025 benchmine contributors
// SPDX-License-Identifier: Apache-2.0

//! Baseline-relative speedup computation.
//!
//! For each benchmark, every non-baseline container's series is divided
//! elementwise into the baseline container's series. Conditions that prevent
//! a comparison — a missing baseline, a series length mismatch — are never
//! fatal: they are recorded as structured [`Diagnostic`]s and the affected
//! benchmark or container is skipped while everything else proceeds.

use crate::model::{ContainerKey, GroupedResults, SeriesGroup};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One point of a speedup series: the container's own recorded problem size
/// paired with `baseline_time / container_time` at the same series index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedupPoint {
    /// Problem size as recorded by the non-baseline container.
    pub size: u64,
    /// Ratio of baseline time to this container's time; values above 1.0
    /// mean the container is faster than the baseline.
    pub speedup: f64,
}

/// Ordered speedup series for one non-baseline container.
pub type SpeedupSeries = Vec<SpeedupPoint>;

/// A recoverable condition reported by the analyzer instead of aborting.
///
/// Diagnostics are collected on the analysis result rather than printed
/// inline, so skip behavior is independently testable and the renderer can
/// disambiguate "baseline missing" from "nothing to compare".
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The designated baseline container never appeared in this benchmark's
    /// data, so no speedup can be computed for it at all.
    #[error("cannot compute speedup for '{benchmark}': baseline container <{baseline}> is missing")]
    MissingBaseline {
        /// The benchmark that cannot be analyzed.
        benchmark: String,
        /// The baseline container that was expected.
        baseline: String,
    },

    /// A container recorded a different number of observations than the
    /// baseline, so the two series cannot be paired positionally.
    #[error(
        "data point count mismatch ({container_len} vs {baseline_len}) for {container} in {benchmark}; skipping speedup"
    )]
    SeriesLengthMismatch {
        /// The benchmark being analyzed.
        benchmark: String,
        /// The container whose speedup was skipped.
        container: ContainerKey,
        /// Observation count recorded by the container.
        container_len: usize,
        /// Observation count recorded by the baseline.
        baseline_len: usize,
    },
}

/// Analysis output for a single benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkAnalysis {
    /// The baseline container every series was normalized against.
    pub baseline: ContainerKey,
    /// Speedup series per non-baseline container, in the container map's
    /// insertion order. Containers skipped over a length mismatch contribute
    /// no entry. Empty when the benchmark had no container besides the
    /// baseline.
    pub series: IndexMap<ContainerKey, SpeedupSeries>,
    /// Conditions that prevented part of the comparison.
    pub diagnostics: Vec<Diagnostic>,
}

impl BenchmarkAnalysis {
    /// Whether any speedup series was produced.
    pub fn has_series(&self) -> bool {
        !self.series.is_empty()
    }
}

/// Analysis output across all benchmarks of one mined report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Per-benchmark results, in the grouping's first-seen benchmark order.
    /// Benchmarks whose baseline was missing contribute no entry here; their
    /// diagnostic is collected in `diagnostics`.
    pub benchmarks: IndexMap<String, BenchmarkAnalysis>,
    /// Every diagnostic emitted during the run, across all benchmarks.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisReport {
    /// Total number of computed speedup series across all benchmarks.
    pub fn total_series(&self) -> usize {
        self.benchmarks.values().map(|b| b.series.len()).sum()
    }
}

/// Compute speedup series for one benchmark's container data.
///
/// When `baseline` is absent from `containers`, the result carries no series
/// and a [`Diagnostic::MissingBaseline`]. Otherwise each other container is
/// paired positionally with the baseline: index `i` of its series against
/// index `i` of the baseline's. Size values are not cross-checked, only the
/// counts; a count mismatch skips that one container with a
/// [`Diagnostic::SeriesLengthMismatch`] and its siblings are still processed.
///
/// Division is real-valued throughout. A zero container time yields an IEEE
/// non-finite speedup (`inf`, or NaN for 0/0) rather than a panic; consumers
/// decide how to present non-finite points.
pub fn analyze_benchmark(
    benchmark_name: &str,
    containers: &IndexMap<ContainerKey, SeriesGroup>,
    baseline: &ContainerKey,
) -> BenchmarkAnalysis {
    let mut analysis = BenchmarkAnalysis {
        baseline: baseline.clone(),
        series: IndexMap::new(),
        diagnostics: Vec::new(),
    };

    let Some(base) = containers.get(baseline) else {
        analysis.diagnostics.push(Diagnostic::MissingBaseline {
            benchmark: benchmark_name.to_string(),
            baseline: baseline.label().to_string(),
        });
        return analysis;
    };

    for (container, group) in containers {
        if container == baseline {
            continue;
        }
        if group.len() != base.len() {
            analysis.diagnostics.push(Diagnostic::SeriesLengthMismatch {
                benchmark: benchmark_name.to_string(),
                container: container.clone(),
                container_len: group.len(),
                baseline_len: base.len(),
            });
            continue;
        }

        let series: SpeedupSeries = group
            .sizes
            .iter()
            .zip(group.times.iter())
            .zip(base.times.iter())
            .map(|((&size, &time), &base_time)| SpeedupPoint {
                size,
                speedup: base_time / time,
            })
            .collect();
        analysis.series.insert(container.clone(), series);
    }

    analysis
}

/// Run [`analyze_benchmark`] over every benchmark of a grouping.
///
/// Benchmarks missing the baseline are skipped (with their diagnostic kept on
/// the report) and contribute no entry to `benchmarks`; a benchmark whose
/// only container is the baseline still contributes an entry with an empty
/// series map, so the two "no chartable data" cases stay distinguishable.
pub fn analyze_all(grouped: &GroupedResults, baseline: &ContainerKey) -> AnalysisReport {
    let mut report = AnalysisReport::default();

    for (benchmark_name, containers) in grouped.benchmarks() {
        let analysis = analyze_benchmark(benchmark_name, containers, baseline);
        let baseline_missing = analysis
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::MissingBaseline { .. }));
        report.diagnostics.extend(analysis.diagnostics.iter().cloned());
        if !baseline_missing {
            report.benchmarks.insert(benchmark_name.to_string(), analysis);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Measurement;

    fn containers(
        data: &[(&str, &[u64], &[f64])],
    ) -> IndexMap<ContainerKey, SeriesGroup> {
        data.iter()
            .map(|(name, sizes, times)| {
                (
                    ContainerKey::named(*name),
                    SeriesGroup {
                        sizes: sizes.to_vec(),
                        times: times.to_vec(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_elementwise_speedup_against_baseline() {
        let data = containers(&[
            ("std::any", &[64, 128], &[100.0, 200.0]),
            ("fast", &[64, 128], &[50.0, 100.0]),
        ]);
        let analysis = analyze_benchmark("Sort", &data, &ContainerKey::named("std::any"));

        assert!(analysis.diagnostics.is_empty());
        let series = &analysis.series[&ContainerKey::named("fast")];
        assert_eq!(
            series,
            &vec![
                SpeedupPoint { size: 64, speedup: 2.0 },
                SpeedupPoint { size: 128, speedup: 2.0 },
            ]
        );
    }

    #[test]
    fn test_missing_baseline_yields_no_series_and_a_diagnostic() {
        let data = containers(&[("fast", &[64], &[50.0])]);
        let analysis = analyze_benchmark("Sort", &data, &ContainerKey::named("std::any"));

        assert!(analysis.series.is_empty());
        assert_eq!(
            analysis.diagnostics,
            vec![Diagnostic::MissingBaseline {
                benchmark: "Sort".to_string(),
                baseline: "std::any".to_string(),
            }]
        );
        // The diagnostic identifies both the benchmark and the baseline.
        let message = analysis.diagnostics[0].to_string();
        assert!(message.contains("Sort"));
        assert!(message.contains("std::any"));
    }

    #[test]
    fn test_length_mismatch_skips_only_that_container() {
        let data = containers(&[
            ("std::any", &[64, 128], &[100.0, 200.0]),
            ("short", &[64], &[10.0]),
            ("fast", &[64, 128], &[50.0, 50.0]),
        ]);
        let analysis = analyze_benchmark("Sort", &data, &ContainerKey::named("std::any"));

        assert!(!analysis.series.contains_key(&ContainerKey::named("short")));
        assert_eq!(
            analysis.series[&ContainerKey::named("fast")],
            vec![
                SpeedupPoint { size: 64, speedup: 2.0 },
                SpeedupPoint { size: 128, speedup: 4.0 },
            ]
        );
        assert_eq!(
            analysis.diagnostics,
            vec![Diagnostic::SeriesLengthMismatch {
                benchmark: "Sort".to_string(),
                container: ContainerKey::named("short"),
                container_len: 1,
                baseline_len: 2,
            }]
        );
    }

    #[test]
    fn test_mismatch_diagnostic_names_both_lengths() {
        let diagnostic = Diagnostic::SeriesLengthMismatch {
            benchmark: "Sort".to_string(),
            container: ContainerKey::named("short"),
            container_len: 1,
            baseline_len: 2,
        };
        let message = diagnostic.to_string();
        assert!(message.contains("(1 vs 2)"));
        assert!(message.contains("short"));
        assert!(message.contains("Sort"));
    }

    #[test]
    fn test_zero_time_propagates_non_finite_speedup() {
        let data = containers(&[
            ("std::any", &[64], &[100.0]),
            ("instant", &[64], &[0.0]),
        ]);
        let analysis = analyze_benchmark("Sort", &data, &ContainerKey::named("std::any"));
        let series = &analysis.series[&ContainerKey::named("instant")];
        assert!(series[0].speedup.is_infinite());
    }

    #[test]
    fn test_sizes_are_taken_from_the_non_baseline_container() {
        // Lengths match but size values differ; pairing stays positional.
        let data = containers(&[
            ("std::any", &[64, 128], &[100.0, 200.0]),
            ("fast", &[32, 256], &[50.0, 100.0]),
        ]);
        let analysis = analyze_benchmark("Sort", &data, &ContainerKey::named("std::any"));
        let sizes: Vec<u64> = analysis.series[&ContainerKey::named("fast")]
            .iter()
            .map(|p| p.size)
            .collect();
        assert_eq!(sizes, vec![32, 256]);
    }

    #[test]
    fn test_analyze_all_skips_missing_baseline_benchmarks_only() {
        let grouped = GroupedResults::aggregate(vec![
            measurement("Sort", "std::any", 64, 100.0),
            measurement("Sort", "fast", 64, 50.0),
            measurement("Lookup", "fast", 64, 10.0),
        ]);
        let report = analyze_all(&grouped, &ContainerKey::named("std::any"));

        assert!(report.benchmarks.contains_key("Sort"));
        assert!(!report.benchmarks.contains_key("Lookup"));
        assert_eq!(report.total_series(), 1);
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::MissingBaseline {
                benchmark: "Lookup".to_string(),
                baseline: "std::any".to_string(),
            }]
        );
    }

    #[test]
    fn test_baseline_only_benchmark_is_distinguishable_from_missing() {
        let grouped = GroupedResults::aggregate(vec![
            measurement("Solo", "std::any", 64, 100.0),
            measurement("Orphan", "fast", 64, 50.0),
        ]);
        let report = analyze_all(&grouped, &ContainerKey::named("std::any"));

        // Baseline-only: present, empty series map, no diagnostic.
        let solo = &report.benchmarks["Solo"];
        assert!(!solo.has_series());
        assert!(solo.diagnostics.is_empty());
        // Missing baseline: absent, with a diagnostic.
        assert!(!report.benchmarks.contains_key("Orphan"));
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let grouped = GroupedResults::aggregate(vec![
            measurement("Sort", "std::any", 64, 100.0),
            measurement("Sort", "fast", 64, 50.0),
        ]);
        let report = analyze_all(&grouped, &ContainerKey::named("std::any"));
        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    fn measurement(bench: &str, container: &str, size: u64, time_ns: f64) -> Measurement {
        Measurement {
            benchmark_name: bench.to_string(),
            container: ContainerKey::named(container),
            problem_size: size,
            time_ns,
        }
    }
}
