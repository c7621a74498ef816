//! ukrscan - finds hardcoded Ukrainian text in Angular sources
//!
//! ukrscan is a CLI tool and library that walks a front-end source tree,
//! picks out Ukrainian user-facing text from `.html` and `.ts` files and
//! exports it as a table for translation work.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, console report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Line extraction pipeline and project scan
//! - `export`: CSV, TSV and JSON writers

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
