// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for routewise.

use thiserror::Error;

/// The primary error type shared by the routewise crates.
///
/// The classifier itself is total and never produces one of these; they come
/// from model lookups and output serialization. Configuration problems are
/// reported as diagnostics by `routewise-config` instead.
#[derive(Debug, Error)]
pub enum RoutewiseError {
    /// A model identifier outside the fixed profile table was looked up.
    #[error("model not found: `{id}` (known models: gt-oss:20b, deepseek-r1:14b, llama2-chinese)")]
    UnknownModel { id: String },

    /// Output serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias used across routewise.
pub type Result<T> = std::result::Result<T, RoutewiseError>;
