use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use thinning_core::analysis::TopologySummary;
use thinning_core::config::ThinningConfig;
use thinning_core::consts::DEFAULT_BINARIZE_THRESHOLD;
use thinning_cli::io::load_grid;

#[derive(Args)]
pub struct InspectArgs {
    /// Input image file
    pub file: PathBuf,

    /// Pixels brighter than this are foreground
    #[arg(long, default_value_t = DEFAULT_BINARIZE_THRESHOLD)]
    pub threshold: u8,

    /// Treat dark pixels as foreground
    #[arg(long)]
    pub invert: bool,
}

pub fn run(args: &InspectArgs) -> Result<()> {
    let config = ThinningConfig {
        threshold: args.threshold,
        invert: args.invert,
        ..ThinningConfig::default()
    };
    let grid = load_grid(&args.file, &config)?;
    let summary = TopologySummary::of(&grid);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", grid.width(), grid.height());
    println!(
        "Foreground:  {} px ({:.1}%)",
        summary.foreground,
        100.0 * summary.foreground as f64 / grid.cell_count() as f64
    );
    println!("Components:  {}", summary.components);
    println!("Holes:       {}", summary.holes);
    println!(
        "Thin:        {}",
        if summary.has_solid_block { "no (contains 2x2 blocks)" } else { "yes" }
    );

    Ok(())
}
