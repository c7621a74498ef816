use std::path::PathBuf;

use crate::core::ScanOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ScanSummary {
    pub outcome: ScanOutcome,
    /// Where the export was written, `None` with `--no-export`.
    pub export_path: Option<PathBuf>,
    /// Print only the summary lines.
    pub quiet: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running ukrscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Found texts for `scan`, 1 for an `init` that could not create the file.
    pub error_count: usize,
    /// If true, exit status 1 is returned when error_count > 0.
    /// If false, always exit 0 (a plain scan reports texts without failing).
    pub exit_on_errors: bool,
}
