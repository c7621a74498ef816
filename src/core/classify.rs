//! Classification of a line by the markup construct its text came from.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TOOLTIP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)tooltip").unwrap());
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"placeholder\]?\s*=").unwrap());
static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"title\]?\s*=").unwrap());

/// Where a piece of extracted text most likely lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    #[serde(rename = "ng-template")]
    TemplateBlock,
    #[serde(rename = "tooltip")]
    Tooltip,
    #[serde(rename = "placeholder")]
    Placeholder,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "innerText")]
    ElementText,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::TemplateBlock => "ng-template",
            SourceKind::Tooltip => "tooltip",
            SourceKind::Placeholder => "placeholder",
            SourceKind::Title => "title",
            SourceKind::ElementText => "innerText",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies the original (comment-intact) line. First match wins.
pub fn classify(line: &str) -> SourceKind {
    if line.contains("<ng-template") || line.contains("</ng-template>") {
        SourceKind::TemplateBlock
    } else if TOOLTIP_REGEX.is_match(line) {
        SourceKind::Tooltip
    } else if PLACEHOLDER_REGEX.is_match(line) {
        SourceKind::Placeholder
    } else if TITLE_REGEX.is_match(line) {
        SourceKind::Title
    } else {
        SourceKind::ElementText
    }
}
