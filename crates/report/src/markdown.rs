//! Markdown summary generation for analysis results.

use benchmine_core::analyze::{AnalysisReport, BenchmarkAnalysis};
use std::fmt::Write;

/// Generate a markdown summary for one mined report.
///
/// One section per analyzed benchmark, with a speedup table per non-baseline
/// container. Benchmarks whose baseline was missing appear only in the
/// diagnostics section, while a benchmark that had nothing to compare against
/// the baseline still gets a section saying so; the two cases read
/// differently on purpose.
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut output = String::new();

    writeln!(output, "# Speedup Summary").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();

    for (benchmark_name, analysis) in &report.benchmarks {
        writeln!(output).unwrap();
        render_benchmark(&mut output, benchmark_name, analysis);
    }

    if !report.diagnostics.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "## Diagnostics").unwrap();
        writeln!(output).unwrap();
        for diagnostic in &report.diagnostics {
            writeln!(output, "- {diagnostic}").unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(
        output,
        "Benchmarks analyzed: {} | Speedup series: {} | Diagnostics: {}",
        report.benchmarks.len(),
        report.total_series(),
        report.diagnostics.len()
    )
    .unwrap();

    output
}

fn render_benchmark(output: &mut String, benchmark_name: &str, analysis: &BenchmarkAnalysis) {
    writeln!(output, "## {benchmark_name}").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Speedup vs. baseline `<{}>` (1.0 = baseline speed; sizes are \
         typically plotted on a log2 axis).",
        analysis.baseline
    )
    .unwrap();

    if !analysis.has_series() {
        writeln!(output).unwrap();
        writeln!(
            output,
            "No container other than the baseline was measured for this benchmark."
        )
        .unwrap();
        return;
    }

    for (container, series) in &analysis.series {
        writeln!(output).unwrap();
        writeln!(output, "### `{container}`").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Problem size | Speedup |").unwrap();
        writeln!(output, "|--------------|---------|").unwrap();
        for point in series {
            writeln!(output, "| {} | {:.3} |", point.size, point.speedup).unwrap();
        }
    }
}
