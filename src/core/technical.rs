//! Rejection of lines that are code syntax rather than user-facing text.

use anyhow::{Context, Result};
use regex::Regex;

/// Patterns for non-content syntax: module statements, logging, Angular
/// component metadata, decorators, and literal keywords.
pub const TECHNICAL_PATTERNS: &[&str] = &[
    r"\bimport\b",
    r"\bfrom\b",
    r"\bexport\b",
    r"\bconsole\.log\b",
    r"\bselector\b",
    r"\bstyleUrls\b",
    r"\btemplateUrl\b",
    r"^\s*@[A-Za-z]",
    r"\btrue\b",
    r"\bfalse\b",
    r"\bnull\b",
];

/// A fixed set of regexes; a line matching any of them is technical.
#[derive(Debug, Clone)]
pub struct TechnicalFilter {
    patterns: Vec<Regex>,
}

impl TechnicalFilter {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).with_context(|| format!("Invalid technical line pattern: {}", p))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_technical(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }
}

impl Default for TechnicalFilter {
    fn default() -> Self {
        let patterns = TECHNICAL_PATTERNS
            .iter()
            .map(|p| Regex::new(p).unwrap())
            .collect();
        Self { patterns }
    }
}
