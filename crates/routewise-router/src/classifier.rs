// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic question feature extraction.
//!
//! Counts keyword hits per category and derives a coarse complexity label
//! from word count. No model call, no I/O, no state between calls.

use serde::Serialize;
use strum::Display;

use crate::keywords::{count_matches, KeywordSets, PRIMARY_KEYWORDS};

/// Questions with more words than this are complex.
const COMPLEX_WORD_COUNT: usize = 25;
/// Questions with more technical hits than this are complex.
const COMPLEX_TECHNICAL_COUNT: usize = 2;
/// Questions with more words than this are at least medium.
const MEDIUM_WORD_COUNT: usize = 15;
/// Questions with more explanatory hits than this are at least medium.
const MEDIUM_EXPLANATORY_COUNT: usize = 1;

/// Coarse complexity label for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

/// Keyword counts and size signals extracted from one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionFeatures {
    /// Technical keywords found.
    pub technical_count: usize,
    /// Explanatory keywords found.
    pub explanatory_count: usize,
    /// Simple-answer keywords found.
    pub simple_count: usize,
    /// Tokens in the unmodified question, split on whitespace and the
    /// U+001C to U+001F separators.
    pub word_count: usize,
    /// Label derived from word count and keyword counts.
    pub complexity: Complexity,
}

/// Keyword-counting classifier over a fixed set of keyword tables.
#[derive(Debug, Clone, Copy)]
pub struct QuestionClassifier {
    keywords: &'static KeywordSets,
}

impl QuestionClassifier {
    /// Create a classifier over the primary keyword tables.
    pub fn new() -> Self {
        Self::with_keywords(&PRIMARY_KEYWORDS)
    }

    /// Create a classifier over custom keyword tables.
    pub fn with_keywords(keywords: &'static KeywordSets) -> Self {
        Self { keywords }
    }

    /// Extract features from a question. Total over all strings.
    pub fn analyze(&self, question: &str) -> QuestionFeatures {
        let lower = question.to_lowercase();

        let technical_count = count_matches(&lower, self.keywords.technical);
        let explanatory_count = count_matches(&lower, self.keywords.explanatory);
        let simple_count = count_matches(&lower, self.keywords.simple);

        let word_count = question
            .split(is_word_separator)
            .filter(|w| !w.is_empty())
            .count();
        let complexity = Self::complexity(word_count, technical_count, explanatory_count);

        QuestionFeatures {
            technical_count,
            explanatory_count,
            simple_count,
            word_count,
            complexity,
        }
    }

    fn complexity(word_count: usize, technical_count: usize, explanatory_count: usize) -> Complexity {
        if word_count > COMPLEX_WORD_COUNT || technical_count > COMPLEX_TECHNICAL_COUNT {
            Complexity::Complex
        } else if word_count > MEDIUM_WORD_COUNT || explanatory_count > MEDIUM_EXPLANATORY_COUNT {
            Complexity::Medium
        } else {
            Complexity::Simple
        }
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators
/// (U+001C to U+001F), which `char::is_whitespace` leaves out.
fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Default for QuestionClassifier {
    fn default() -> Self {
        Self::new()
    }
}
