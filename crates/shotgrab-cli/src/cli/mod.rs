//! CLI for the shotgrab screenshot downloader.

mod commands;
mod input;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use shotgrab_core::config;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_download, run_man, run_resolve};
pub use input::InputArgs;

/// Top-level CLI for shotgrab.
#[derive(Debug, Parser)]
#[command(name = "shotgrab")]
#[command(about = "Download Lightshot (prnt.sc) screenshots into dated folders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve screenshot pages and save their images into a new dated directory.
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// Base directory for the dated output folder (default: config `output_dir`, then the current directory).
        #[arg(long, short = 'o', value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print the image source of each page without downloading anything.
    Resolve {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Normalize and validate URLs without any network traffic.
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run { input, output_dir } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_download(&cfg, &input.collect()?, output_dir)?;
            }
            CliCommand::Resolve { input } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_resolve(&cfg, &input.collect()?)?;
            }
            CliCommand::Check { input } => {
                let cfg = config::load_or_init()?;
                run_check(&cfg, &input.collect()?)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
