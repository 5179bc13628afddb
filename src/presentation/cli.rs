//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--root, --config, --json, --color, --verbose) are inherited by all subcommands
//! - Running without a subcommand is the same as `extbuild build`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Whether to emit ANSI colors, given whether the stream is a terminal
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorWhen::Auto => is_terminal,
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        }
    }
}

/// extbuild - type-check, bundle, and package a browser extension
#[derive(Parser, Debug)]
#[command(name = "extbuild")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'extbuild' without arguments to build the project in the current directory.")]
pub struct Cli {
    /// Project root; relative paths in the configuration start here
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Build configuration file (default: <root>/extbuild.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Compile, bundle, stage assets, and write the archive
    Build,

    /// Type-check and transpile only; leaves the output untouched
    Check,

    /// Remove the output directory, transpiled files, and archive
    Clean,
}

impl Cli {
    /// The subcommand to run (`build` when none was given)
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Build)
    }
}
