//! Per-line and per-file extraction.
//!
//! For every line: strip the trailing comment, require a Ukrainian run,
//! reject technical lines, run the cascade, and turn the phrases of each
//! firing rule into one record. Records are returned, never accumulated
//! in shared state.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{
    alphabet::has_target_run,
    cascade::{Extraction, PatternCascade},
    classify::classify,
    cleaner::Cleaner,
    comment::strip_line_comment,
    record::{ExtractionRecord, PHRASE_SEPARATOR},
    technical::TechnicalFilter,
};

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    filter: TechnicalFilter,
    cascade: PatternCascade,
    cleaner: Cleaner,
}

impl Extractor {
    pub fn new(cleaner: Cleaner) -> Self {
        Self {
            filter: TechnicalFilter::default(),
            cascade: PatternCascade::default(),
            cleaner,
        }
    }

    /// Runs the line pipeline up to cleaned phrases.
    pub fn extract_line(&self, raw_line: &str) -> Vec<Extraction> {
        let line = strip_line_comment(raw_line);
        if !has_target_run(line) || self.filter.is_technical(line) {
            return Vec::new();
        }
        self.cascade.extract(line, &self.cleaner)
    }

    /// Extracts records from in-memory file content.
    pub fn extract_source(&self, file_path: &str, content: &str) -> Vec<ExtractionRecord> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        content
            .lines()
            .enumerate()
            .flat_map(|(index, raw_line)| self.line_records(file_path, index + 1, raw_line))
            .collect()
    }

    /// Reads a UTF-8 file and extracts its records.
    pub fn extract_file(&self, path: &Path) -> Result<Vec<ExtractionRecord>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(self.extract_source(&path.to_string_lossy(), &content))
    }

    fn line_records(&self, file_path: &str, line: usize, raw_line: &str) -> Vec<ExtractionRecord> {
        let extractions = self.extract_line(raw_line);
        if extractions.is_empty() {
            return Vec::new();
        }

        let source = classify(raw_line);
        let full_line = raw_line.trim().to_string();

        group_by_pattern(extractions)
            .into_iter()
            .map(|group| ExtractionRecord {
                file_path: file_path.to_string(),
                line,
                column: raw_line[..group[0].start].chars().count() + 1,
                text: group
                    .iter()
                    .map(|e| e.text.as_str())
                    .collect::<Vec<_>>()
                    .join(PHRASE_SEPARATOR),
                pattern: group[0].pattern,
                source,
                mixed: group.iter().any(|e| e.mixed),
                full_line: full_line.clone(),
            })
            .collect()
    }
}

/// Groups phrases by rule, in the order rules first fired.
fn group_by_pattern(extractions: Vec<Extraction>) -> Vec<Vec<Extraction>> {
    let mut groups: Vec<Vec<Extraction>> = Vec::new();
    for extraction in extractions {
        match groups
            .iter_mut()
            .find(|g| g[0].pattern == extraction.pattern)
        {
            Some(group) => group.push(extraction),
            None => groups.push(vec![extraction]),
        }
    }
    groups
}
