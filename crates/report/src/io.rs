//! Writing report files to an output directory.
//!
//! Layout under the chosen output directory:
//!
//! - `raw/<benchmark>.json` - one file per analyzed benchmark
//! - `all_results.json` - the combined analysis report
//! - `summary.md` - the markdown summary

use crate::markdown;
use crate::ReportError;
use benchmine_core::analyze::AnalysisReport;
use std::fs;
use std::path::{Path, PathBuf};

/// Default output directory when the caller does not override it.
pub const DEFAULT_OUTPUT_DIR: &str = "benchmine/output";

/// Turn a benchmark name into a safe file stem.
///
/// Benchmark names can carry template decoration and path-like separators
/// (`Sort<std::any>`, `group/Sort`), none of which belong in a filename.
pub fn sanitize_file_stem(benchmark_name: &str) -> String {
    let stem: String = benchmark_name
        .chars()
        .map(|c| match c {
            '<' | '>' | '/' | '\\' | ':' | ' ' => '_',
            other => other,
        })
        .collect();
    if stem.is_empty() {
        "unnamed".to_string()
    } else {
        stem
    }
}

/// Ensure the output directory tree exists.
pub fn ensure_output_dirs(out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir.join("raw"))?;
    Ok(())
}

/// Write the per-benchmark JSON files, the combined JSON, and the markdown
/// summary. Returns the paths written, for logging.
pub fn write_all_outputs(
    report: &AnalysisReport,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ReportError> {
    ensure_output_dirs(out_dir)?;
    let mut written = Vec::new();

    for (benchmark_name, analysis) in &report.benchmarks {
        let path = out_dir
            .join("raw")
            .join(format!("{}.json", sanitize_file_stem(benchmark_name)));
        fs::write(&path, serde_json::to_string_pretty(analysis)?)?;
        written.push(path);
    }

    let combined = out_dir.join("all_results.json");
    fs::write(&combined, serde_json::to_string_pretty(report)?)?;
    written.push(combined);

    let summary = out_dir.join("summary.md");
    fs::write(&summary, markdown::render_summary(report))?;
    written.push(summary);

    Ok(written)
}
