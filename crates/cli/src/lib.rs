// Copyright 2025 benchmine contributors
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for benchmine.
//!
//! Wires the pipeline together: obtain report lines (by running the
//! benchmark binary or reading a captured log), mine measurements, group
//! them, analyze speedups against the baseline container, and either print
//! the markdown summary or save report files.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use benchmine_core::analyze::{analyze_all, AnalysisReport};
use benchmine_core::model::{ContainerKey, GroupedResults};
use benchmine_core::parse::parse_lines;
use benchmine_report::io::DEFAULT_OUTPUT_DIR;
use benchmine_runner::OutputMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// benchmine CLI.
#[derive(Parser, Debug)]
#[command(name = "benchmine")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// How to present analysis results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the markdown summary to stdout.
    Show,
    /// Write report files to the output directory.
    Save,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Show => OutputMode::Show,
            Mode::Save => OutputMode::Save,
        }
    }
}

/// Options shared by every pipeline entry point.
#[derive(clap::Args, Debug)]
pub struct PipelineOpts {
    /// Baseline container every other container is normalized against.
    #[arg(long, default_value = "std::any")]
    pub baseline: String,

    /// Presentation mode: print the summary or save report files.
    #[arg(long, value_enum, default_value_t = Mode::Show)]
    pub mode: Mode,

    /// Output directory for saved reports.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark binary, mine its output, and analyze speedups.
    ///
    /// Arguments after `--` are passed through to the binary untouched.
    Run {
        /// Path to the external benchmark binary.
        #[arg(long)]
        binary: PathBuf,

        /// Pipeline options.
        #[command(flatten)]
        opts: PipelineOpts,

        /// Arguments passed through to the benchmark binary.
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Analyze a previously captured benchmark report file.
    Analyze {
        /// Path to the captured report.
        #[arg(long)]
        input: PathBuf,

        /// Pipeline options.
        #[command(flatten)]
        opts: PipelineOpts,
    },
}

/// Run the CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { binary, opts, args } => {
            let lines = benchmine_runner::run_binary(&binary, &args)
                .with_context(|| format!("running {}", binary.display()))?;
            let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let report = mine(&line_refs, &opts.baseline);
            present(&report, opts.mode.into(), &opts.output)
        }
        Commands::Analyze { input, opts } => {
            let lines = benchmine_runner::read_lines(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let report = mine(&line_refs, &opts.baseline);
            present(&report, opts.mode.into(), &opts.output)
        }
    }
}

/// Mine a line sequence into an analysis report against `baseline`.
///
/// Analyzer diagnostics are logged as warnings here; they are recoverable
/// and never fail the run.
pub fn mine(lines: &[&str], baseline: &str) -> AnalysisReport {
    let records = parse_lines(lines.iter().copied());
    tracing::info!(
        lines = lines.len(),
        measurements = records.len(),
        "mined benchmark report"
    );

    let grouped = GroupedResults::aggregate(records);
    let report = analyze_all(&grouped, &ContainerKey::named(baseline));
    for diagnostic in &report.diagnostics {
        tracing::warn!("{diagnostic}");
    }
    report
}

fn present(
    report: &AnalysisReport,
    mode: OutputMode,
    output: &std::path::Path,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Show => {
            print!("{}", benchmine_report::markdown::render_summary(report));
        }
        OutputMode::Save => {
            let written = benchmine_report::io::write_all_outputs(report, output)
                .with_context(|| format!("writing reports to {}", output.display()))?;
            for path in written {
                println!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}
