// Copyright 2025 benchmine contributors
// SPDX-License-Identifier: Apache-2.0

//! Report rendering for benchmine analysis results.
//!
//! The analysis core hands over plain numeric series; this crate turns them
//! into human-readable markdown summaries and machine-readable JSON files.
//!
//! # Modules
//!
//! - [`markdown`] - Markdown summary generation
//! - [`io`] - Writing report files to an output directory

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod io;
pub mod markdown;

use thiserror::Error;

/// Errors that can occur while writing report files.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Filesystem operation failed.
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),

    /// Result serialization failed.
    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
