//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use spmkit::util::shell::ColorChoice;

/// spmkit - Describe, build and clean Swift packages
#[derive(Parser)]
#[command(name = "spmkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format for results
    #[arg(long, global = true, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    /// Path to the swift executable
    #[arg(long, global = true, env = "SPMKIT_SWIFT")]
    pub swift: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the current directory is a Swift package
    Check,

    /// Show the package description reported by SwiftPM
    Describe,

    /// List source files of the selected targets
    Sources(SourcesArgs),

    /// Build targets with `swift build`
    Build(BuildArgs),

    /// Remove build artifacts with `swift package clean`
    Clean,

    /// Show the Swift toolchain in use
    Toolchain,
}

#[derive(Args)]
pub struct SourcesArgs {
    /// Targets to list (defaults to all Swift targets)
    #[arg(long)]
    pub target: Vec<String>,

    /// Include non-Swift targets when no target is named
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Targets to build (defaults to all Swift targets)
    #[arg(long)]
    pub target: Vec<String>,

    /// Extra arguments passed to `swift build`
    #[arg(last = true)]
    pub args: Vec<String>,
}
