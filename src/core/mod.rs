//! Core extraction engine.
//!
//! ## Module Structure
//!
//! - `alphabet`: Ukrainian/Latin character predicates
//! - `comment`: trailing line-comment removal
//! - `technical`: rejection of code-only lines
//! - `cascade`: ordered span rules that locate candidate text
//! - `cleaner`: markup-aware cleaning and phrase splitting
//! - `classify`: source classification of a line
//! - `record`: extraction records and deduplication
//! - `extractor`: per-line and per-file pipeline
//! - `file_scanner`: directory traversal and file filtering
//! - `context`: configuration merge and whole-project scan

pub mod alphabet;
pub mod cascade;
pub mod classify;
pub mod cleaner;
pub mod comment;
pub mod context;
pub mod extractor;
pub mod file_scanner;
pub mod record;
pub mod technical;

pub use cascade::{Extraction, PatternCascade, PatternRule, Precedence};
pub use classify::{SourceKind, classify};
pub use cleaner::Cleaner;
pub use context::{ScanContext, ScanOutcome};
pub use extractor::Extractor;
pub use record::{ExtractionRecord, ReadFailure, dedup_records};
pub use technical::TechnicalFilter;
