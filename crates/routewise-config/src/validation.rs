// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks constraints serde attributes cannot express: known model names,
//! log levels, URL schemes, and non-empty identifiers.

use routewise_core::ModelId;

use crate::diagnostic::ConfigError;
use crate::model::RoutewiseConfig;

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first.
pub fn validate_config(config: &RoutewiseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.logging.level_filter().is_none() {
        errors.push(ConfigError::invalid_value(
            "logging.level",
            &config.logging.level,
            LOG_LEVELS,
        ));
    }

    let baseline = config.comparison.baseline_model.as_str();
    if baseline.parse::<ModelId>().is_err() {
        let known: Vec<&str> = ModelId::all().map(ModelId::as_str).collect();
        errors.push(ConfigError::invalid_value(
            "comparison.baseline_model",
            baseline,
            &known,
        ));
    }

    let api_base = config.integration.api_base.trim();
    if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!(
                "integration.api_base `{api_base}` must start with http:// or https://"
            ),
        });
    }

    if config.integration.workspace_id.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "integration.workspace_id must not be empty".to_string(),
        });
    }

    if config.integration.mode.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "integration.mode must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
