//! Report formatting and printing utilities.
//!
//! Found texts are shown in cargo-style format. Kept apart from the core so
//! ukrscan can be used as a library without console output.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ExtractionRecord, ReadFailure, ScanOutcome, alphabet::is_target_char};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print records to a custom writer.
pub fn report_to<W: Write>(records: &[ExtractionRecord], writer: &mut W) {
    let max_line_width = records
        .iter()
        .map(|r| r.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for record in records {
        print_record(record, writer, max_line_width);
    }
}

/// Print the scan summary line.
pub fn print_summary_to<W: Write>(outcome: &ScanOutcome, writer: &mut W) {
    let scanned = outcome.files_scanned;
    let scanned_label = if scanned == 1 { "file" } else { "files" };

    if outcome.records.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} source {} - no Ukrainian text found",
                scanned, scanned_label
            )
            .green()
        );
        return;
    }

    let found = outcome.records.len();
    let files = outcome.files_with_records();
    let _ = writeln!(
        writer,
        "{} Found {} {} in {} {} (scanned {} source {})",
        FAILURE_MARK.red(),
        found,
        if found == 1 { "text" } else { "texts" },
        files,
        if files == 1 { "file" } else { "files" },
        scanned,
        scanned_label
    );
}

/// Print the export confirmation line.
pub fn print_export_to<W: Write>(path: &Path, count: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Saved {} {} to {}",
            count,
            if count == 1 { "record" } else { "records" },
            path.display()
        )
        .green()
    );
}

/// Print read failures: one warning per file when verbose, a count otherwise.
pub fn print_read_failures_to<W: Write>(failures: &[ReadFailure], verbose: bool, writer: &mut W) {
    if failures.is_empty() {
        return;
    }

    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            failures.len(),
            "-v".cyan()
        );
        return;
    }

    for failure in failures {
        let _ = writeln!(
            writer,
            "{} Failed to read {}: {}",
            "warning:".bold().yellow(),
            failure.file_path,
            failure.error
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) => print_scan(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_scan(summary: &ScanSummary, verbose: bool) {
    let outcome = &summary.outcome;
    let stdout = &mut io::stdout().lock();

    if !summary.quiet {
        report_to(&outcome.records, stdout);
    }
    print_read_failures_to(&outcome.read_failures, verbose, &mut io::stderr().lock());
    print_summary_to(outcome, stdout);

    if let Some(path) = &summary.export_path {
        print_export_to(path, outcome.records.len(), stdout);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

fn print_record<W: Write>(record: &ExtractionRecord, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "ukr".bold().yellow(),
        record.text,
        record.pattern.dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        record.file_path,
        record.line,
        record.column
    );

    let source_line = record.full_line.as_str();
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        record.line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    let prefix: String = source_line
        .chars()
        .take(caret_offset(record))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = max_line_width,
        padding = caret_padding
    );

    let _ = writeln!(
        writer,
        "{:>width$} {} {} {}",
        "",
        "=".blue(),
        "source:".bold(),
        record.source,
        width = max_line_width
    );

    if record.mixed {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            "word mixes Latin and Cyrillic letters",
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between records
}

/// Character offset of the caret inside the trimmed source line.
///
/// `column` counts from the untrimmed line, so the first Ukrainian word of
/// the text is looked up in `full_line` instead.
fn caret_offset(record: &ExtractionRecord) -> usize {
    let word: String = record
        .text
        .chars()
        .skip_while(|c| !is_target_char(*c))
        .take_while(|c| c.is_alphabetic())
        .collect();

    match record.full_line.find(word.as_str()) {
        Some(byte_pos) if !word.is_empty() => record.full_line[..byte_pos].chars().count(),
        _ => record
            .column
            .saturating_sub(1)
            .min(record.full_line.chars().count()),
    }
}
