// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the routewise command line.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages. Keyword
//! tables and model profiles are not configurable.

use routewise_core::RoutingPolicy;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::validation::LOG_LEVELS;

/// Top-level routewise configuration.
///
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutewiseConfig {
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Routing policy settings.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Baseline comparison settings.
    #[serde(default)]
    pub comparison: ComparisonConfig,

    /// Simulated chat integration settings.
    #[serde(default)]
    pub integration: IntegrationConfig,
}

impl RoutewiseConfig {
    /// Render the effective configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// The configured level, trimmed and case-folded.
    ///
    /// `None` when the value is not one of the accepted level names.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        let level = self.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return None;
        }
        level.parse().ok()
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Model routing configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Routing policy: `priority` (default) or `greatest_count`.
    #[serde(default)]
    pub policy: RoutingPolicy,
}

/// Baseline comparison configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    /// Model every question would go to without routing.
    #[serde(default = "default_baseline_model")]
    pub baseline_model: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            baseline_model: default_baseline_model(),
        }
    }
}

fn default_baseline_model() -> String {
    "gt-oss:20b".to_string()
}

/// Simulated chat integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IntegrationConfig {
    /// Base URL of the chat API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Workspace the chat request targets.
    #[serde(default = "default_workspace_id")]
    pub workspace_id: String,

    /// Chat mode sent with each request.
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            workspace_id: default_workspace_id(),
            mode: default_mode(),
        }
    }
}

fn default_api_base() -> String {
    "http://localhost:3000/api/v1".to_string()
}

fn default_workspace_id() -> String {
    "default-workspace".to_string()
}

fn default_mode() -> String {
    "query".to_string()
}
