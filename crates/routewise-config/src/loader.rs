// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./routewise.toml` > `~/.config/routewise/routewise.toml` >
//! `/etc/routewise/routewise.toml` with environment variable overrides via `ROUTEWISE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RoutewiseConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/routewise/routewise.toml";
/// Config file in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "routewise.toml";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/routewise/routewise.toml` (system-wide)
/// 3. `~/.config/routewise/routewise.toml` (user XDG config)
/// 4. `./routewise.toml` (local directory)
/// 5. `ROUTEWISE_*` environment variables
pub fn load_config() -> Result<RoutewiseConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<RoutewiseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RoutewiseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RoutewiseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RoutewiseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RoutewiseConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/routewise/routewise.toml`, when a config dir exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("routewise").join(LOCAL_CONFIG_FILE))
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `ROUTEWISE_COMPARISON_BASELINE_MODEL` must map to
/// `comparison.baseline_model`, not `comparison.baseline.model`.
pub(crate) fn env_provider() -> Env {
    Env::prefixed("ROUTEWISE_").map(|key| map_env_key(&key.as_str().to_ascii_lowercase()).into())
}

/// Map a lowercased, prefix-stripped env var name to a dotted config key.
pub(crate) fn map_env_key(key: &str) -> String {
    const SECTIONS: &[&str] = &["logging", "routing", "comparison", "integration"];
    for section in SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
