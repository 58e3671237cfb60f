// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static keyword tables.
//!
//! Every entry is a lowercase substring. Matching is containment against the
//! lowercased question, so an entry also fires inside longer words
//! (`"how"` matches `"show"`).

/// The three keyword categories a classifier counts.
#[derive(Debug)]
pub struct KeywordSets {
    /// Terms that signal technical depth.
    pub technical: &'static [&'static str],
    /// Terms that ask for an explanation.
    pub explanatory: &'static [&'static str],
    /// Terms that ask for a short factual answer.
    pub simple: &'static [&'static str],
}

/// Keyword tables used by the priority policy.
///
/// Derived from course-content evaluation runs. `probablity` is misspelled in
/// the source lists and kept that way so decisions stay identical.
pub static PRIMARY_KEYWORDS: KeywordSets = KeywordSets {
    technical: &[
        "deterministic",
        "environment",
        "dimension",
        "performance",
        "evaluation",
        "analysis",
        "classification",
        "probablity",
        "statistical",
        "algorithm",
        "complexity",
        "search",
    ],
    explanatory: &[
        "explain", "analyze", "describe", "why", "how", "discuss", "compare", "contrast",
    ],
    simple: &[
        "what is",
        "when",
        "where",
        "list",
        "define",
        "name",
        "identify",
        "briefly",
        "summarize",
    ],
};

/// Keyword tables used by the greatest-count policy.
///
/// `howdiscuss` is a single fused entry, so neither `how` nor `discuss` counts
/// on its own under this policy.
pub static LEGACY_KEYWORDS: KeywordSets = KeywordSets {
    technical: &[
        "algorithm",
        "deterministic",
        "environment",
        "search",
        "optimize",
        "complexity",
        "dimension",
    ],
    explanatory: &["explain", "analyze", "describe", "why", "howdiscuss", "compare"],
    simple: &["what", "when", "where", "list", "define"],
};

/// Number of entries in `terms` contained in `haystack`.
///
/// `haystack` must already be lowercased. Each entry counts at most once.
pub(crate) fn count_matches(haystack: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|term| haystack.contains(*term)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_terms(sets: &KeywordSets) -> impl Iterator<Item = &'static str> + '_ {
        sets.technical
            .iter()
            .chain(sets.explanatory.iter())
            .chain(sets.simple.iter())
            .copied()
    }

    #[test]
    fn tables_are_lowercase() {
        for term in all_terms(&PRIMARY_KEYWORDS).chain(all_terms(&LEGACY_KEYWORDS)) {
            assert_eq!(term, term.to_lowercase(), "`{term}` is not lowercase");
        }
    }

    #[test]
    fn primary_table_sizes() {
        assert_eq!(PRIMARY_KEYWORDS.technical.len(), 12);
        assert_eq!(PRIMARY_KEYWORDS.explanatory.len(), 8);
        assert_eq!(PRIMARY_KEYWORDS.simple.len(), 9);
    }

    #[test]
    fn legacy_table_fuses_how_and_discuss() {
        assert!(LEGACY_KEYWORDS.explanatory.contains(&"howdiscuss"));
        assert!(!LEGACY_KEYWORDS.explanatory.contains(&"how"));
        assert!(!LEGACY_KEYWORDS.explanatory.contains(&"discuss"));
    }

    #[test]
    fn count_matches_is_substring_based() {
        assert_eq!(count_matches("show me", &["how"]), 1);
        assert_eq!(count_matches("nothing here", &["how", "why"]), 0);
    }

    #[test]
    fn count_matches_counts_each_term_once() {
        assert_eq!(count_matches("why why why", &["why"]), 1);
        assert_eq!(count_matches("why and how", &["why", "how"]), 2);
    }
}
