//! Extraction records and their deduplication.

use std::collections::HashSet;

use serde::Serialize;

use super::classify::SourceKind;

/// Separator between phrases of one record.
pub const PHRASE_SEPARATOR: &str = " | ";

/// One line's worth of Ukrainian text found by one cascade rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    pub file_path: String,
    /// 1-based.
    pub line: usize,
    /// 1-based character column of the first match.
    pub column: usize,
    pub text: String,
    pub pattern: &'static str,
    pub source: SourceKind,
    pub mixed: bool,
    /// The original line, trimmed.
    pub full_line: String,
}

/// A file that could not be read as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadFailure {
    pub file_path: String,
    pub error: String,
}

/// Drops exact structural duplicates, keeping first occurrences in order.
pub fn dedup_records(records: Vec<ExtractionRecord>) -> Vec<ExtractionRecord> {
    let mut seen: HashSet<ExtractionRecord> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect()
}
