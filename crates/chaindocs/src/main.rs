//! chaindocs CLI - chain documentation build tooling.
//!
//! Provides commands for:
//! - `pregen`: Write placeholder pages for every network
//! - `generate`: Fetch missing metadata and render chain docs
//! - `check`: Validate the network registry
//! - `nav`: Print the chain docs sidebar as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{GenerateArgs, NavArgs, PregenArgs};
use output::Output;

/// chaindocs - chain documentation build tooling.
#[derive(Parser)]
#[command(name = "chaindocs", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one placeholder page per network.
    Pregen(PregenArgs),
    /// Fetch missing metadata and render chain docs (mode from NODE_ENV).
    Generate(GenerateArgs),
    /// Validate the network registry.
    Check,
    /// Print the chain docs sidebar as JSON.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Pregen(args) => args.execute(),
        Commands::Generate(args) => args.execute(),
        Commands::Check => commands::check::execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
