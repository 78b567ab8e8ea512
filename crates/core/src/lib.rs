// Copyright 2025 benchmine contributors
// SPDX-License-Identifier: Apache-2.0

//! Measurement mining and speedup analysis core for benchmine.
//!
//! This crate turns the raw text a micro-benchmark binary prints into
//! comparative performance data, in three stages:
//!
//! 1. [`parse`] — extract one [`Measurement`] per matching report line,
//!    silently discarding headers, blanks, and diagnostic noise.
//! 2. [`model`] — group measurements into per-benchmark, per-container
//!    series, preserving first-seen insertion order throughout.
//! 3. [`analyze`] — compute each non-baseline container's elementwise
//!    speedup against a designated baseline container, collecting
//!    structured [`analyze::Diagnostic`]s for anything that had to be
//!    skipped instead of aborting.
//!
//! # Quick Start
//!
//! ```
//! use benchmine_core::model::{ContainerKey, GroupedResults};
//! use benchmine_core::{analyze, parse};
//!
//! let lines = [
//!     "Sort<std::any>/64   120.0 ns  (iterations: 10)",
//!     "Sort<fast>/64        60.0 ns  (iterations: 10)",
//! ];
//! let records = parse::parse_lines(lines.iter().copied());
//! let grouped = GroupedResults::aggregate(records);
//! let baseline = ContainerKey::named("std::any");
//! let report = analyze::analyze_all(&grouped, &baseline);
//! assert!(report.benchmarks.contains_key("Sort"));
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analyze;
pub mod model;
pub mod parse;

pub use analyze::{AnalysisReport, BenchmarkAnalysis, Diagnostic, SpeedupPoint};
pub use model::{ContainerKey, GroupedResults, Measurement, SeriesGroup};
pub use parse::parse_line;
