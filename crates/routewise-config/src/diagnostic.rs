// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Turns Figment extraction failures and validation failures into miette
//! diagnostics carrying source spans, the list of accepted keys or values,
//! and a "did you mean?" hint picked by Jaro-Winkler similarity.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a suggestion. Catches `polcy` -> `policy`
/// and `gt-oss:20` -> `gt-oss:20b` without suggesting unrelated names.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with rich diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key not present in the configuration schema.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(routewise::config::unknown_key),
        help("{}", format_choices_help(suggestion.as_deref(), "valid keys", valid_keys))
    )]
    UnknownKey {
        /// The unrecognized key name.
        key: String,
        /// Closest valid key, if any is close enough.
        suggestion: Option<String>,
        /// Comma-separated valid keys for the section.
        valid_keys: String,
        /// Location of the offending key.
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        /// The file the key came from.
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value of the wrong type.
    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(routewise::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// Dotted path of the key.
        key: String,
        /// Description of the mismatch.
        detail: String,
        /// Expected type.
        expected: String,
    },

    /// A value outside the accepted set, e.g. an unknown model or policy.
    #[error("invalid value `{value}` for `{key}`")]
    #[diagnostic(
        code(routewise::config::invalid_value),
        help("{}", format_choices_help(suggestion.as_deref(), "accepted values", allowed))
    )]
    InvalidValue {
        /// Dotted path of the key.
        key: String,
        /// The rejected value.
        value: String,
        /// Closest accepted value, if any is close enough.
        suggestion: Option<String>,
        /// Comma-separated accepted values.
        allowed: String,
    },

    /// A semantic check on a value failed.
    #[error("validation error: {message}")]
    #[diagnostic(code(routewise::config::validation))]
    Validation {
        /// Description of the failure.
        message: String,
    },

    /// Anything Figment reports that has no dedicated variant.
    #[error("configuration error: {0}")]
    #[diagnostic(code(routewise::config::other))]
    Other(String),
}

impl ConfigError {
    /// Build an [`ConfigError::InvalidValue`] with a suggestion from `allowed`.
    pub fn invalid_value(key: &str, value: &str, allowed: &[&str]) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            suggestion: suggest_key(value, allowed),
            allowed: allowed.join(", "),
        }
    }
}

fn format_choices_help(suggestion: Option<&str>, what: &str, choices: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? {what}: {choices}"),
        None => format!("{what}: {choices}"),
    }
}

/// Convert a `figment::Error` into a list of `ConfigError` diagnostics.
///
/// A single figment error can carry several; each becomes one diagnostic.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let path = error
                .path
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>();
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let (span, src) = find_source_span(&error, &path, field, toml_sources);
                    ConfigError::UnknownKey {
                        key: field.clone(),
                        suggestion: suggest_key(field, expected),
                        valid_keys: expected.join(", "),
                        span,
                        src,
                    }
                }
                Kind::UnknownVariant(value, expected) => ConfigError::InvalidValue {
                    key: path.join("."),
                    value: value.clone(),
                    suggestion: suggest_key(value, expected),
                    allowed: expected.join(", "),
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key: path.join("."),
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.to_string(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Locate the offending key inside the file Figment says it came from.
fn find_source_span(
    error: &figment::error::Error,
    path: &[String],
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let Some(figment::Source::File(file)) = error.metadata.as_ref().and_then(|m| m.source.as_ref())
    else {
        return (None, None);
    };
    let file = file.display().to_string();

    toml_sources
        .iter()
        .find(|(p, _)| *p == file)
        .and_then(|(p, content)| {
            find_key_offset(content, path, field).map(|offset| {
                (
                    Some(SourceSpan::new(offset.into(), field.len())),
                    Some(NamedSource::new(p, content.clone())),
                )
            })
        })
        .unwrap_or((None, None))
}

/// Find the byte offset of `field` in TOML `content` under the section `path[0]`.
///
/// Top-level fields (empty `path`) are searched from the start of the file.
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut offset = start;
    for line in content[start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(after) = trimmed.strip_prefix(field) {
            if after.starts_with([' ', '\t', '=']) {
                return Some(offset + (line.len() - trimmed.len()));
            }
        }
        offset += line.len();
    }
    None
}

/// Suggest the candidate most similar to `unknown`, if it clears the threshold.
pub fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (strsim::jaro_winkler(unknown, c), *c))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, c)| c.to_string())
}

/// Render config errors to stderr using miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        if handler.render_report(&mut buf, error as &dyn Diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}
