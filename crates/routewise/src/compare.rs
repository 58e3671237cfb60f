// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `routewise compare` output: routed models against a fixed baseline.

use colored::Colorize;
use routewise_router::{ComparisonRow, ComparisonSummary};

use crate::report::format_scores;

/// Width of the comparison header rule.
const HEADER_WIDTH: usize = 60;

fn format_row(row: &ComparisonRow, color: bool) -> String {
    let base = row.baseline.profile();
    let routed = row.routed.profile();
    let saved = format!("{:.1}s faster", row.time_saved_secs);
    let saved = if !color {
        saved
    } else if row.time_saved_secs > 0.0 {
        saved.green().to_string()
    } else if row.time_saved_secs < 0.0 {
        saved.red().to_string()
    } else {
        saved
    };

    format!(
        "\nQuestion: {}\n\
         Analysis: {}\n\
         Baseline: {} ({:.1}s, {}/10)\n\
         Routed: {} ({:.1}s, {}/10)\n\
         Improvement: {saved}\n",
        row.question,
        format_scores(&row.features),
        row.baseline,
        base.speed_secs,
        base.quality,
        row.routed,
        routed.speed_secs,
        routed.quality,
    )
}

/// Per-question rows followed by the overall averages.
pub fn format_comparison(summary: &ComparisonSummary, color: bool) -> String {
    let mut out = String::from("PERFORMANCE COMPARISON - ROUTED VS BASELINE\n");
    out.push_str(&"-".repeat(HEADER_WIDTH));
    out.push('\n');

    if summary.rows.is_empty() {
        out.push_str("\nNo questions to compare.\n");
        return out;
    }

    for row in &summary.rows {
        out.push_str(&format_row(row, color));
    }

    out.push_str(&format!(
        "\nOVERALL RESULTS (baseline: {}):\n\
         Average response time: {:.1}s → {:.1}s\n\
         Performance improvement: {:.1}% faster\n\
         Quality impact: {:.1}/10 → {:.1}/10\n",
        summary.baseline,
        summary.avg_baseline_secs,
        summary.avg_routed_secs,
        summary.time_improvement_pct,
        summary.avg_baseline_quality,
        summary.avg_routed_quality,
    ));
    out
}
