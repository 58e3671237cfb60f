// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routed-vs-baseline comparison.
//!
//! Measures what routing buys over always sending every question to one
//! fixed baseline model, using the static model profiles.

use routewise_core::ModelId;
use serde::Serialize;

use crate::classifier::QuestionFeatures;
use crate::router::ModelRouter;

/// Questions used for the initial manual model evaluation.
pub const EVALUATION_QUESTIONS: &[&str] = &[
    "What is the PEAS description of automated taxi drivers?",
    "Explain why Poker is Non-Deterministic?",
    "Analyze the six standard environment type dimensions for Medical Diagnosis",
];

/// Questions shown by the interactive demo.
pub const DEMO_QUESTIONS: &[&str] = &[
    "What is the PEAS description of automated taxi drivers?",
    "Explain why Poker is Non-Deterministic?",
    "Analyze the six standard environment type dimensions for Medical Diagnosis",
    "What does Partially Observable mean?",
    "Describe PEAS full form",
];

/// Questions run through the simulated chat integration.
pub const INTEGRATION_QUESTIONS: &[&str] = &[
    "What is the PEAS description of automated taxi drivers?",
    "Explain why Poker is Non-Deterministic?",
    "Analyze the six standard environment type dimensions for Medical Diagnosis",
    "Define algorithm complexity and performance metrics",
];

/// Baseline and routed outcome for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub question: String,
    pub features: QuestionFeatures,
    pub baseline: ModelId,
    pub routed: ModelId,
    /// Baseline seconds minus routed seconds. Negative when routing is slower.
    pub time_saved_secs: f64,
    /// Routed quality minus baseline quality. Negative when routing loses quality.
    pub quality_delta: f64,
}

/// Aggregate comparison over a question set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub baseline: ModelId,
    pub rows: Vec<ComparisonRow>,
    pub avg_baseline_secs: f64,
    pub avg_routed_secs: f64,
    /// Percentage reduction in average response time.
    pub time_improvement_pct: f64,
    pub avg_baseline_quality: f64,
    pub avg_routed_quality: f64,
}

impl ComparisonSummary {
    /// Average saving over the questions where routing was strictly faster.
    ///
    /// `None` when no question got faster.
    pub fn average_positive_savings(&self) -> Option<f64> {
        mean_positive_savings(self.rows.iter().map(|r| r.time_saved_secs))
    }
}

/// Mean of the strictly positive entries of `savings`, `None` if there are none.
pub fn mean_positive_savings(savings: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = savings
        .into_iter()
        .filter(|s| *s > 0.0)
        .fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Compare one question against the baseline.
pub fn compare_question(router: &ModelRouter, baseline: ModelId, question: &str) -> ComparisonRow {
    let decision = router.route(question);
    let base = baseline.profile();
    let routed = decision.model.profile();
    ComparisonRow {
        question: question.to_string(),
        features: decision.features,
        baseline,
        routed: decision.model,
        time_saved_secs: base.speed_secs - routed.speed_secs,
        quality_delta: routed.quality - base.quality,
    }
}

/// Compare every question against the baseline and aggregate.
///
/// An empty question set yields all-zero averages.
pub fn compare_against_baseline<S: AsRef<str>>(
    router: &ModelRouter,
    baseline: ModelId,
    questions: &[S],
) -> ComparisonSummary {
    let rows: Vec<ComparisonRow> = questions
        .iter()
        .map(|q| compare_question(router, baseline, q.as_ref()))
        .collect();

    let avg_baseline_secs = mean(&rows, |r| r.baseline.profile().speed_secs);
    let avg_routed_secs = mean(&rows, |r| r.routed.profile().speed_secs);
    let avg_baseline_quality = mean(&rows, |r| r.baseline.profile().quality);
    let avg_routed_quality = mean(&rows, |r| r.routed.profile().quality);

    let time_improvement_pct = if avg_baseline_secs > 0.0 {
        (avg_baseline_secs - avg_routed_secs) / avg_baseline_secs * 100.0
    } else {
        0.0
    };

    ComparisonSummary {
        baseline,
        rows,
        avg_baseline_secs,
        avg_routed_secs,
        time_improvement_pct,
        avg_baseline_quality,
        avg_routed_quality,
    }
}

fn mean(rows: &[ComparisonRow], f: impl Fn(&ComparisonRow) -> f64) -> f64 {
    if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(f).sum::<f64>() / rows.len() as f64
    }
}
