//! extbuild CLI - build orchestrator for a browser extension
//!
//! Usage: extbuild [COMMAND]
//!
//! Commands:
//!   build   Compile, bundle, stage assets, and write the archive (default)
//!   check   Type-check and transpile only
//!   clean   Remove build artifacts

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use extbuild::application::BuildOptions;
use extbuild::logging::{init_logging, LogConfig};
use extbuild::presentation::output::render_config_warning;
use extbuild::presentation::{Cli, ColorWhen, Commands};
use extbuild::BuildConfig;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let color = cli
        .color
        .unwrap_or(ColorWhen::Auto)
        .enabled(std::io::stderr().is_terminal());
    let log_config = LogConfig::from_verbosity(cli.verbose).with_ansi(color);
    if let Err(e) = init_logging(&log_config) {
        eprintln!("warning: logging disabled: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (config, warnings) = BuildConfig::discover(&cli.root, cli.config.as_deref())?;
    for warning in &warnings {
        eprintln!("{}", render_config_warning(warning));
    }
    let options = BuildOptions::new(&cli.root).with_config(config);

    match cli.command() {
        Commands::Build => commands::build::cmd_build(&options, cli.json),
        Commands::Check => commands::check::cmd_check(&options, cli.json),
        Commands::Clean => commands::clean::cmd_clean(&options, cli.json),
    }
}
