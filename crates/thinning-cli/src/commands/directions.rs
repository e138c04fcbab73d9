use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use thinning_core::directions::direction_codes;
use thinning_cli::io::{load_gray, save_gray};

#[derive(Args)]
pub struct DirectionsArgs {
    /// Input image file; any non-zero pixel counts as set
    pub file: PathBuf,

    /// Output file path (8-bit direction codes)
    #[arg(short, long, default_value = "directions.png")]
    pub output: PathBuf,
}

pub fn run(args: &DirectionsArgs) -> Result<()> {
    let image = load_gray(&args.file)?;
    let (h, w) = image.dim();
    println!("Loaded {}x{} image", w, h);

    let codes = direction_codes(&image.view());
    save_gray(&codes, &args.output)?;
    println!("Saved direction codes to {}", args.output.display());

    Ok(())
}
