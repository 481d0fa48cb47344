//! Variate CLI - command-line caller of the distribution sampling engine.
//!
//! # Commands
//!
//! - `variate demo` - Draw and print one value from each of the nine
//!   distributions
//! - `variate sample --distribution <name>` - Draw values from one named
//!   distribution
//!
//! The CLI is an external consumer of the `variate_core` API; all sampling
//! logic lives in the engine crate. Sample values go to standard output,
//! diagnostics go through `tracing`.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Variate distribution sampling CLI
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for the sampler; a fresh entropy seed is used when absent
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw and print one value from each of the nine distributions
    Demo,

    /// Draw values from one named distribution
    Sample(commands::sample::SampleArgs),
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Demo => commands::demo::run(cli.seed),
        Commands::Sample(args) => commands::sample::run(cli.seed, &args),
    }
}
