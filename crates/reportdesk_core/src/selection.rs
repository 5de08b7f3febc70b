//! Word-repetition heuristic over report text ("special reports").
//!
//! # Responsibility
//! - Tokenize report text into lowercase words.
//! - Select reports in which some word occurs at least
//!   [`SPECIAL_WORD_THRESHOLD`] times.
//!
//! # Invariants
//! - Text is lowercased before tokenizing; a token is a maximal run of
//!   `[A-Za-z0-9_]`, anything else separates tokens.
//! - Counts are per report and never combined across reports.
//! - Selection keeps the input's relative order.

use crate::model::report::Report;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Minimum occurrences (inclusive) of one word for a report to be selected.
pub const SPECIAL_WORD_THRESHOLD: usize = 3;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid word regex"));

/// Counts occurrences of each lowercase word in `text`.
pub fn word_histogram(text: &str) -> HashMap<String, usize> {
    let lowered = text.to_lowercase();
    let mut counts = HashMap::new();
    for word in WORD_RE.find_iter(&lowered) {
        *counts.entry(word.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Returns whether any single word of `text` reaches the threshold.
pub fn is_special_text(text: &str) -> bool {
    word_histogram(text)
        .values()
        .any(|count| *count >= SPECIAL_WORD_THRESHOLD)
}

pub fn is_special_report(report: &Report) -> bool {
    is_special_text(&report.text)
}

/// Keeps the special reports, preserving order.
pub fn select_special_reports(reports: Vec<Report>) -> Vec<Report> {
    reports.into_iter().filter(is_special_report).collect()
}
