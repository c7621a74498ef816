use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow, bail};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::ScanArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        cleaner::Cleaner,
        extractor::Extractor,
        file_scanner::scan_files,
        record::{ExtractionRecord, ReadFailure, dedup_records},
    },
};

/// Everything a scan needs, resolved once from the CLI and config file.
///
/// Priority for every setting: CLI argument > config file > defaults.
/// Relative paths from the config file are resolved against the directory
/// that holds it, or the current directory when there is no config file.
pub struct ScanContext {
    pub config: Config,
    /// Directory that is walked for source files.
    pub root_dir: PathBuf,
    /// Export file destination.
    pub output_path: PathBuf,
    /// Scannable files, sorted.
    pub files: Vec<String>,
    extractor: Extractor,
}

/// Result of scanning every file.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Deduplicated, in file then line order.
    pub records: Vec<ExtractionRecord>,
    pub read_failures: Vec<ReadFailure>,
    pub files_scanned: usize,
}

impl ScanOutcome {
    /// Number of distinct files with at least one record.
    pub fn files_with_records(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.file_path.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl ScanContext {
    /// Loads the configuration, applies CLI overrides and lists the files.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid or the source root does
    /// not exist.
    pub fn new(args: &ScanArgs) -> Result<Self> {
        let verbose = args.common.verbose;

        // Config search starts at the CLI source root, or the current directory
        let start_dir = args
            .common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&start_dir)?;

        if verbose && config_result.path.is_none() {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config_dir = config_result
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = config_result.config;
        if args.no_homoglyph_fix {
            config.fix_homoglyphs = false;
        }

        let root_dir = match &args.common.source_root {
            Some(root) => root.clone(),
            None => resolve_against(&config_dir, &config.source_root),
        };
        let output_path = match &args.output {
            Some(output) => output.clone(),
            None => resolve_against(&config_dir, &config.output),
        };

        if !root_dir.is_dir() {
            bail!("Source root is not a directory: {}", root_dir.display());
        }

        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let scan_result = scan_files(path, &config.file_filter(), verbose);

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let ignore_texts: HashSet<String> = config.ignore_texts.iter().cloned().collect();
        let extractor = Extractor::new(Cleaner::new(config.fix_homoglyphs, ignore_texts));

        Ok(Self {
            config,
            root_dir,
            output_path,
            files: scan_result.files,
            extractor,
        })
    }

    /// Extracts every file in parallel and merges the results in file order.
    ///
    /// A file that cannot be read becomes a [`ReadFailure`]; the scan goes on.
    pub fn run(&self) -> ScanOutcome {
        let results: Vec<_> = self
            .files
            .par_iter()
            .map(|file_path| (file_path, self.extractor.extract_file(Path::new(file_path))))
            .collect();

        let mut records = Vec::new();
        let mut read_failures = Vec::new();

        for (file_path, result) in results {
            match result {
                Ok(file_records) => records.extend(file_records),
                Err(e) => read_failures.push(ReadFailure {
                    file_path: file_path.clone(),
                    error: e.root_cause().to_string(),
                }),
            }
        }

        ScanOutcome {
            records: dedup_records(records),
            read_failures,
            files_scanned: self.files.len(),
        }
    }
}

/// Resolve a configured path against the directory of the config file.
fn resolve_against(base: &Path, value: &str) -> PathBuf {
    let p = Path::new(value);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    // Keep "./src" as written when the base is the current directory
    let is_cur_dir = base
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        base.join(rel)
    }
}
