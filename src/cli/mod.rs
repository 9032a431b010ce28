//! Command-line interface definitions.

pub mod check;
pub mod read;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tierpost - Polymarket risk-tier oracle.
#[derive(Parser, Debug)]
#[command(name = "tierpost")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the publisher loop (foreground)
    Run(RunArgs),

    /// Read the current tier back from the RiskSignal contract
    Read(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `tierpost check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
    /// Fetch the market once and show what the reader sees
    Source(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Execute exactly one cycle and exit
    #[arg(long)]
    pub once: bool,

    /// Override poll interval in milliseconds
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON records
    #[arg(long)]
    pub json_logs: bool,
}
