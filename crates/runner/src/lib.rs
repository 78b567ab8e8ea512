// Copyright 2025 benchmine contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark binary execution and output capture.
//!
//! The mining core consumes an ordered sequence of text lines; this crate
//! produces that sequence, either by running the external benchmark binary
//! and capturing its stdout, or by reading a previously captured report file.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use std::fs;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Errors that can occur while obtaining benchmark output.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The benchmark binary path does not point at a file.
    #[error("benchmark binary not found at path: {0}")]
    BinaryNotFound(String),

    /// Spawning or reading failed at the OS level.
    #[error("failed to run benchmark binary: {0}")]
    Io(#[from] std::io::Error),

    /// The binary exited with a non-zero status.
    #[error("benchmark binary exited with {status}; stderr: {stderr}")]
    NonZeroExit {
        /// The exit status as reported by the OS.
        status: std::process::ExitStatus,
        /// Captured standard error, for debugging the failed run.
        stderr: String,
    },
}

/// How analysis results should be presented, threaded explicitly from the
/// CLI down through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the rendered summary to stdout.
    Show,
    /// Write report files to the output directory.
    Save,
}

/// Run the benchmark binary with the given pass-through arguments and return
/// its captured stdout as lines.
///
/// Stdout and stderr are always captured in full. Stderr is logged (the
/// benchmark harness prints its progress there) but does not affect the
/// result unless the binary exits non-zero, in which case it is attached to
/// the error.
pub fn run_binary(binary: &Path, args: &[String]) -> Result<Vec<String>, RunnerError> {
    if !binary.is_file() {
        return Err(RunnerError::BinaryNotFound(binary.display().to_string()));
    }

    tracing::info!(binary = %binary.display(), ?args, "running benchmark binary");
    let output = Command::new(binary).args(args).output()?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
        tracing::debug!(target: "benchmine::runner", "captured stderr:\n{stderr}");
    }

    if !output.status.success() {
        return Err(RunnerError::NonZeroExit {
            status: output.status,
            stderr: stderr.into_owned(),
        });
    }

    Ok(to_lines(&String::from_utf8_lossy(&output.stdout)))
}

/// Read a previously captured benchmark report as a line sequence.
pub fn read_lines(path: &Path) -> Result<Vec<String>, RunnerError> {
    let content = fs::read_to_string(path)?;
    Ok(to_lines(&content))
}

fn to_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
