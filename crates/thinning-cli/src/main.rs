mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thinning", about = "Binary image skeletonization tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Thin the foreground of an image to a one-pixel skeleton
    Thin(commands::thin::ThinArgs),
    /// Write per-pixel neighbor direction codes
    Directions(commands::directions::DirectionsArgs),
    /// Show size and topology of a binarized image
    Inspect(commands::inspect::InspectArgs),
    /// Print default configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Thin(args) => commands::thin::run(args),
        Commands::Directions(args) => commands::directions::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
