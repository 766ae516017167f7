//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// cachebust CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: cachebust.toml)
    #[arg(short = 'C', long, default_value = "cachebust.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fingerprint assets and rewrite page references
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Verify page references resolve to files on disk
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Print planned renames without touching disk
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Check command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether the selected subcommand asked for verbose output.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Build { args } => args.verbose,
            Commands::Check { args } => args.verbose,
        }
    }
}
