//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// newpro - scaffold a new project from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "newpro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to newpro.yaml config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Directory to create the project in
    #[arg(short = 'C', long = "dir", default_value = ".", global = true)]
    pub dir: Utf8PathBuf,

    /// Runs the interactive wizard when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available project templates
    Templates,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
