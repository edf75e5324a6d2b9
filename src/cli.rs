//! Command-line interface definitions.
//!
//! Defines the argument parser and subcommands using clap's derive API.
//! Each subcommand corresponds to a distinct operation: applying the
//! rewrites, previewing them, listing scan targets, or printing the rule
//! table.

use crate::scanner::DEFAULT_PATTERN;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Detect and fix deprecated AppColors usage in Flutter widget sources.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite deprecated color usages in place.
    Fix {
        /// Project root containing the `lib/` tree. Defaults to the current directory.
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Glob for widget sources, relative to the root.
        #[arg(long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// Interactively confirm each file's changes before writing.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Report files that would change, without writing anything.
    Detect {
        /// Project root containing the `lib/` tree. Defaults to the current directory.
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Glob for widget sources, relative to the root.
        #[arg(long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// Emit JSON instead of human-readable output.
        #[arg(long)]
        json: bool,

        /// Print additional diagnostics to stderr.
        #[arg(short, long)]
        verbose: bool,
    },

    /// List files that would be scanned without processing them.
    Scan {
        /// Project root containing the `lib/` tree. Defaults to the current directory.
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Glob for widget sources, relative to the root.
        #[arg(long, default_value = DEFAULT_PATTERN)]
        pattern: String,
    },

    /// Print the substitution rule table.
    Rules,
}
