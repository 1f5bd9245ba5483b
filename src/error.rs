// Copyright (c) 2026 The shrake-rupley developers
// Part of the shrake-rupley project, licensed under the MIT License.
// SPDX-License-Identifier: MIT

//! Error type shared by the library and the command-line tool.

use thiserror::Error;

/// Convenience alias for results carrying a [`SasaError`].
pub type Result<T> = std::result::Result<T, SasaError>;

#[derive(Debug, Error)]
pub enum SasaError {
    /// Run parameters with no defined meaning (zero sample points, bad probe radius).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A radius-table line that could not be understood.
    #[error("invalid radius rule on line {line}: {reason}")]
    InvalidRadius { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
