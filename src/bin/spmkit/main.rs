//! spmkit CLI - describe, build and clean Swift packages

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, MessageFormat};
use commands::Session;
use spmkit::util::Shell;

fn main() {
    let cli = Cli::parse();

    let shell = Arc::new(Shell::from_flags(
        cli.quiet,
        cli.verbose,
        cli.color,
        cli.message_format == MessageFormat::Json,
    ));

    if let Err(e) = run(cli, Arc::clone(&shell)) {
        shell.error(format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, shell: Arc<Shell>) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("spmkit=debug")
    } else {
        EnvFilter::new("spmkit=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(shell, cli.swift)?;

    match cli.command {
        Commands::Check => commands::check::execute(&session),
        Commands::Describe => commands::describe::execute(&session),
        Commands::Sources(args) => commands::sources::execute(args, &session),
        Commands::Build(args) => commands::build::execute(args, &session),
        Commands::Clean => commands::clean::execute(&session),
        Commands::Toolchain => commands::toolchain::execute(&session),
    }
}
