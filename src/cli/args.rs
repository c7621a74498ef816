//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Find Ukrainian text in source files and export it
//! - `init`: Initialize ukrscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::export::ExportFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Export file path (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Export format (default: from the output file extension)
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Keep Latin i/I inside Ukrainian words as written
    #[arg(long)]
    pub no_homoglyph_fix: bool,

    /// Report only, do not write the export file
    #[arg(long)]
    pub no_export: bool,

    /// Print only the summary, not each found text
    #[arg(short, long)]
    pub quiet: bool,

    /// Exit with status 1 when any text is found
    #[arg(long)]
    pub fail_on_found: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find hardcoded Ukrainian text and export it for translation
    Scan(ScanCommand),
    /// Initialize a new .ukrscanrc.json configuration file
    Init,
}
