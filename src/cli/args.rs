//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Generate accessor modules from the resource directory
//! - `check`: Validate the resource directory without writing anything
//! - `init`: Initialize resgen configuration file

use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Resource root directory (overrides config file)
    #[arg(long)]
    pub resources_root: Option<PathBuf>,

    /// Directory of the generated modules (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of resources per shard module (overrides config file)
    #[arg(long)]
    pub max_per_container: Option<NonZeroUsize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate accessor modules for every resource
    Generate(GenerateCommand),
    /// Validate resources and report what would be generated, without writing
    Check(CheckCommand),
    /// Initialize a new .resgenrc.json configuration file
    Init,
}
