//! cachebust - content-hash cache busting for static sites.

mod asset;
mod cli;
mod config;
mod logger;
mod report;
mod rewrite;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::BuildConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose());

    let config = BuildConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Build { args } => {
            let report = cli::build::run_build(&config, args.dry_run)?;
            report.print();
            Ok(())
        }
        Commands::Check { .. } => cli::check::run_check(&config),
    }
}
