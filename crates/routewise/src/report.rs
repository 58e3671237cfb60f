// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `routewise route`, `analyze` and `models` output.
//!
//! Formatting functions return strings so they can be tested without a
//! terminal; colors are applied only when the caller asks for them.

use colored::Colorize;
use routewise_core::{ModelId, RoutewiseError, MODEL_PROFILES};
use routewise_router::{QuestionFeatures, RoutingDecision, RoutingRule};
use serde::Serialize;

/// Width of the separator printed after each report.
pub const RULE_WIDTH: usize = 50;

/// One routed question, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct RouteReport<'a> {
    pub question: &'a str,
    pub model: ModelId,
    pub quality: f64,
    pub speed_secs: f64,
    pub rule: RoutingRule,
    pub reason: &'static str,
    pub features: &'a QuestionFeatures,
}

impl<'a> RouteReport<'a> {
    pub fn new(question: &'a str, decision: &'a RoutingDecision) -> Self {
        let profile = decision.model.profile();
        Self {
            question,
            model: decision.model,
            quality: profile.quality,
            speed_secs: profile.speed_secs,
            rule: decision.rule,
            reason: decision.reason(),
            features: &decision.features,
        }
    }
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), RoutewiseError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| RoutewiseError::Serialization(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// One-line keyword score summary.
pub fn format_scores(features: &QuestionFeatures) -> String {
    format!(
        "Tech={}, Exp={}, Simple={}",
        features.technical_count, features.explanatory_count, features.simple_count
    )
}

/// Model name followed by its quality and speed.
pub fn format_model(model: ModelId, color: bool) -> String {
    let profile = model.profile();
    let name = if color {
        model.as_str().green().bold().to_string()
    } else {
        model.as_str().to_string()
    };
    format!(
        "{name} (Quality: {}/10, Speed: {:.1}s)",
        profile.quality, profile.speed_secs
    )
}

/// Full routing report for one question.
pub fn format_decision(question: &str, decision: &RoutingDecision, color: bool) -> String {
    let f = &decision.features;
    let mut out = String::new();
    out.push_str(&format!("Question: {question}\n"));
    out.push_str(&format!("Scores: {}\n", format_scores(f)));
    out.push_str(&format!(
        "Complexity: {} ({} words)\n",
        f.complexity, f.word_count
    ));
    out.push_str(&format!(
        "Selected: {}\n",
        format_model(decision.model, color)
    ));
    out.push_str(&format!("Reason: {}\n", decision.reason()));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out
}

/// Feature breakdown without a model choice.
pub fn format_features(question: &str, f: &QuestionFeatures) -> String {
    format!(
        "Question: {question}\n\
         - Technical score: {}\n\
         - Explanation score: {}\n\
         - Simple score: {}\n\
         - Word count: {}\n\
         - Complexity: {}\n",
        f.technical_count, f.explanatory_count, f.simple_count, f.word_count, f.complexity
    )
}

/// The static model profile table.
pub fn format_models(color: bool) -> String {
    let mut out = format!("{:<18} {:>8} {:>10}\n", "MODEL", "QUALITY", "SPEED");
    for profile in MODEL_PROFILES.iter() {
        let name = format!("{:<18}", profile.name);
        let name = if color { name.cyan().to_string() } else { name };
        out.push_str(&format!(
            "{name} {:>6}/10 {:>9.1}s\n",
            profile.quality, profile.speed_secs
        ));
    }
    out
}
