use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::file_scanner::FileFilter;

pub const CONFIG_FILE_NAME: &str = ".ukrscanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    #[serde(default)]
    pub ignore_files: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_fix_homoglyphs")]
    pub fix_homoglyphs: bool,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_output() -> String {
    "ukrainian_texts.csv".to_string()
}

fn default_extensions() -> Vec<String> {
    [".html", ".ts"].map(String::from).to_vec()
}

fn default_ignore_dirs() -> Vec<String> {
    ["node_modules", "dist", ".git", ".angular"]
        .map(String::from)
        .to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/*.spec.ts".to_string()]
}

fn default_fix_homoglyphs() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output: default_output(),
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
            ignore_files: Vec::new(),
            ignores: default_ignores(),
            ignore_texts: Vec::new(),
            fix_homoglyphs: default_fix_homoglyphs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or an
    /// extension is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.extensions.iter().any(|ext| ext.trim().is_empty()) {
            bail!("Empty entry in 'extensions'");
        }

        Ok(())
    }

    pub fn file_filter(&self) -> FileFilter {
        FileFilter {
            extensions: self.extensions.clone(),
            ignore_dirs: self.ignore_dirs.clone(),
            ignore_files: self.ignore_files.clone(),
            ignores: self.ignores.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
