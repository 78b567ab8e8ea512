// Copyright 2025 benchmine contributors
// SPDX-License-Identifier: Apache-2.0

//! Line-level extraction of measurements from benchmark report text.
//!
//! A Google-Benchmark-style report interleaves measurement lines such as
//!
//! ```text
//! Sort<std::any>/64   120.0 ns  121.3 ns  (iterations: 10)
//! ```
//!
//! with headers, separators, and diagnostic output. [`parse_line`] recognizes
//! the measurement shape and yields `None` for everything else; non-matching
//! lines are the expected case, not an error.

use crate::model::{ContainerKey, Measurement};
use once_cell::sync::Lazy;
use regex::Regex;

/// Measurement line shape, anchored at both ends after outer trimming:
/// a non-greedy name segment (may be empty when the line opens with `<` or
/// `/`), an optional `<container>` annotation, `/` plus decimal size digits,
/// the primary time value, the `ns` unit marker, then ignored trailing text
/// (secondary statistics, iteration counts).
static MEASUREMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<name>[^<]*?)                 # benchmark name, up to < or /
        (?: < (?P<container>.+?) > )?    # optional container annotation
        /
        (?P<size>[0-9]+)                 # problem size
        \s+
        (?P<time>[0-9]+(?:\.[0-9]+)?)    # primary time value
        \s+
        ns
        .*                               # trailing statistics, ignored
        $",
    )
    .unwrap()
});

/// Extract one [`Measurement`] from one raw report line.
///
/// Returns `None` when the line does not match the measurement shape in its
/// entirety — the expected outcome for header lines, blank lines, and
/// diagnostic output. Records are never partially populated: a missing unit
/// marker or missing size digits makes the whole line a non-match.
///
/// Re-parsing the same line always yields an equal record.
pub fn parse_line(line: &str) -> Option<Measurement> {
    let caps = MEASUREMENT_RE.captures(line.trim())?;

    // A size wider than u64 is still a non-match, not a partial record, but
    // the line did look like a measurement, so leave a trace of the drop.
    let problem_size: u64 = match caps["size"].parse() {
        Ok(size) => size,
        Err(_) => {
            tracing::trace!(size = &caps["size"], "problem size overflows u64; dropping line");
            return None;
        }
    };
    let time_ns: f64 = caps["time"].parse().ok()?;

    Some(Measurement {
        benchmark_name: caps["name"].to_string(),
        container: caps
            .name("container")
            .map(|m| m.as_str().to_string())
            .into(),
        problem_size,
        time_ns,
    })
}

/// Extract every measurement from an arbitrary mix of matching and
/// non-matching lines, preserving the relative order of the matches.
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Measurement> {
    lines.into_iter().filter_map(parse_line).collect()
}
