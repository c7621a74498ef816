use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Which files under the root are scanned.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// File name suffixes, e.g. `.html`.
    pub extensions: Vec<String>,
    /// Substrings of a directory path (relative to the root) that prune it.
    pub ignore_dirs: Vec<String>,
    /// Path suffixes of files that are skipped outright.
    pub ignore_files: Vec<String>,
    /// Glob patterns or literal paths that are skipped.
    pub ignores: Vec<String>,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Scannable files, sorted.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &str, filter: &FileFilter, verbose: bool) -> ScanResult {
    let base = Path::new(base_dir);
    let mut files: Vec<String> = Vec::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in &filter.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base.join(p));
        }
    }

    let walker = WalkDir::new(base)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, base, &filter.ignore_dirs));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        // Check if path matches any literal ignore path (prefix match)
        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        // Check if path matches any glob pattern
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && is_scannable_file(path, filter) {
            files.push(path_str.into());
        }
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_ignored_dir(entry: &DirEntry, base: &Path, ignore_dirs: &[String]) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return false;
    }
    let relative = normalized(entry.path().strip_prefix(base).unwrap_or(entry.path()));
    ignore_dirs
        .iter()
        .any(|dir| !dir.is_empty() && relative.contains(dir.as_str()))
}

fn is_scannable_file(path: &Path, filter: &FileFilter) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
        return false;
    };
    if !filter.extensions.iter().any(|ext| name.ends_with(ext.as_str())) {
        return false;
    }
    let path = normalized(path);
    !filter
        .ignore_files
        .iter()
        .any(|suffix| path.ends_with(suffix.as_str()))
}

/// Path as a `/`-separated string, so config values work on every platform.
fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
