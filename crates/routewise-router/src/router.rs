// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model selection from question features.
//!
//! Two policies are available and exactly one is active per router:
//! priority (ordered rules, first match wins) and greatest-count
//! (the category with the strictly largest count wins).

use routewise_core::{ModelId, RoutingPolicy};
use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::classifier::{Complexity, QuestionClassifier, QuestionFeatures};
use crate::keywords::{LEGACY_KEYWORDS, PRIMARY_KEYWORDS};

/// Technical hits at or above this route to the highest-quality model.
const TECHNICAL_THRESHOLD: usize = 2;

/// The rule that produced a routing decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RoutingRule {
    /// Priority: enough technical terms.
    Technical,
    /// Priority: at least one explanatory term.
    Explanatory,
    /// Priority: a simple-answer term was present.
    SimpleTerms,
    /// Priority: no simple-answer term, but the question is short.
    ShortQuestion,
    /// Priority: nothing matched; balanced default.
    Fallback,
    /// Greatest-count: technical count strictly largest.
    TechnicalMajority,
    /// Greatest-count: explanatory count strictly largest.
    ExplanatoryMajority,
    /// Greatest-count: no strict winner.
    NoMajority,
}

impl RoutingRule {
    /// Human-readable rationale for this rule.
    pub fn reason(self) -> &'static str {
        match self {
            RoutingRule::Technical => "High technical content requires best quality model",
            RoutingRule::Explanatory => "Explanatory content benefits from balanced model",
            RoutingRule::SimpleTerms => "Simple factual question optimized for speed",
            RoutingRule::ShortQuestion => "Short question optimized for speed",
            RoutingRule::Fallback => "General question using balanced model",
            RoutingRule::TechnicalMajority => {
                "Contains technical terms - using gt-oss:20b for precision"
            }
            RoutingRule::ExplanatoryMajority => {
                "Requires explanation - using deepseek-r1:14b for clarity"
            }
            RoutingRule::NoMajority => "Simple factual question - using llama2-chinese for speed",
        }
    }
}

/// Outcome of routing one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    /// Selected model.
    pub model: ModelId,
    /// Policy that made the choice.
    pub policy: RoutingPolicy,
    /// Rule that fired.
    pub rule: RoutingRule,
    /// Features the choice was based on.
    pub features: QuestionFeatures,
}

impl RoutingDecision {
    /// Human-readable reason for the selection.
    pub fn reason(&self) -> &'static str {
        self.rule.reason()
    }
}

/// Maps questions to models under a single routing policy.
#[derive(Debug, Clone, Copy)]
pub struct ModelRouter {
    classifier: QuestionClassifier,
    policy: RoutingPolicy,
}

impl ModelRouter {
    /// Create a router for the given policy, with that policy's keyword tables.
    pub fn new(policy: RoutingPolicy) -> Self {
        let keywords = match policy {
            RoutingPolicy::Priority => &PRIMARY_KEYWORDS,
            RoutingPolicy::GreatestCount => &LEGACY_KEYWORDS,
        };
        Self {
            classifier: QuestionClassifier::with_keywords(keywords),
            policy,
        }
    }

    /// The active policy.
    pub fn policy(&self) -> RoutingPolicy {
        self.policy
    }

    /// Extract features with this router's keyword tables.
    pub fn analyze(&self, question: &str) -> QuestionFeatures {
        self.classifier.analyze(question)
    }

    /// Route a question and report why.
    pub fn route(&self, question: &str) -> RoutingDecision {
        let features = self.classifier.analyze(question);
        let (model, rule) = match self.policy {
            RoutingPolicy::Priority => by_priority(&features),
            RoutingPolicy::GreatestCount => by_greatest_count(&features),
        };

        debug!(
            policy = %self.policy,
            model = %model,
            rule = %rule,
            technical = features.technical_count,
            explanatory = features.explanatory_count,
            simple = features.simple_count,
            words = features.word_count,
            complexity = %features.complexity,
            "routed question"
        );

        RoutingDecision {
            model,
            policy: self.policy,
            rule,
            features,
        }
    }

    /// Select a model for a question.
    pub fn select_model(&self, question: &str) -> ModelId {
        self.route(question).model
    }
}

impl Default for ModelRouter {
    fn default() -> Self {
        Self::new(RoutingPolicy::default())
    }
}

/// Ordered rule list. Rule order is part of the contract.
fn by_priority(f: &QuestionFeatures) -> (ModelId, RoutingRule) {
    if f.technical_count >= TECHNICAL_THRESHOLD {
        (ModelId::HIGHEST_QUALITY, RoutingRule::Technical)
    } else if f.explanatory_count >= 1 {
        (ModelId::BALANCED, RoutingRule::Explanatory)
    } else if f.simple_count >= 1 {
        (ModelId::FASTEST, RoutingRule::SimpleTerms)
    } else if f.complexity == Complexity::Simple {
        (ModelId::FASTEST, RoutingRule::ShortQuestion)
    } else {
        (ModelId::BALANCED, RoutingRule::Fallback)
    }
}

/// Strict majority between category counts; ties go to the fastest model.
fn by_greatest_count(f: &QuestionFeatures) -> (ModelId, RoutingRule) {
    let (tech, exp, simple) = (f.technical_count, f.explanatory_count, f.simple_count);
    if tech > exp && tech > simple {
        (ModelId::GtOss20b, RoutingRule::TechnicalMajority)
    } else if exp > tech && exp > simple {
        (ModelId::DeepseekR1_14b, RoutingRule::ExplanatoryMajority)
    } else {
        (ModelId::Llama2Chinese, RoutingRule::NoMajority)
    }
}
