// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Question classification and model routing for routewise.
//!
//! This crate provides:
//! - [`QuestionClassifier`]: keyword counting and a complexity label (no I/O, no state)
//! - [`ModelRouter`]: picks one of three models under a [`RoutingPolicy`]
//! - [`comparison`]: routed-vs-baseline response time and quality figures
//!
//! The free functions [`analyze`] and [`select_model`] use the canonical
//! priority policy with the primary keyword tables.

pub mod classifier;
pub mod comparison;
pub mod keywords;
pub mod router;

pub use classifier::{Complexity, QuestionClassifier, QuestionFeatures};
pub use comparison::{
    compare_against_baseline, mean_positive_savings, ComparisonRow, ComparisonSummary,
};
pub use keywords::{KeywordSets, LEGACY_KEYWORDS, PRIMARY_KEYWORDS};
pub use router::{ModelRouter, RoutingDecision, RoutingRule};
pub use routewise_core::{ModelId, RoutingPolicy};

/// Extract question features with the primary keyword tables.
pub fn analyze(question: &str) -> QuestionFeatures {
    QuestionClassifier::new().analyze(question)
}

/// Select a model under the priority policy.
pub fn select_model(question: &str) -> ModelId {
    ModelRouter::default().select_model(question)
}
