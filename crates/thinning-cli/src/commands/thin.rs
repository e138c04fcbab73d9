use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use thinning_core::analysis::TopologySummary;
use thinning_core::config::ThinningConfig;
use thinning_core::thinning::thin_in_place_with_progress;
use thinning_core::Algorithm;
use thinning_cli::io::{load_grid, save_grid};
use tracing::info;

use crate::summary::print_thinning_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum AlgorithmArg {
    GuoHall,
    ZhangSuen,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::GuoHall => Algorithm::GuoHall,
            AlgorithmArg::ZhangSuen => Algorithm::ZhangSuen,
        }
    }
}

#[derive(Args)]
pub struct ThinArgs {
    /// Input image file (PNG, TIFF, ...)
    pub file: PathBuf,

    /// Thinning algorithm (overrides the config file)
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Pixels brighter than this are foreground (overrides the config file)
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Treat dark pixels as foreground
    #[arg(long)]
    pub invert: bool,

    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "skeleton.png")]
    pub output: PathBuf,
}

impl ThinArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<ThinningConfig> {
        let mut config = match self.config {
            Some(ref path) => super::config::load(path)?,
            None => ThinningConfig::default(),
        };
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm.into();
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if self.invert {
            config.invert = true;
        }
        Ok(config)
    }
}

pub fn run(args: &ThinArgs) -> Result<()> {
    let config = args.resolve_config()?;
    let mut grid = load_grid(&args.file, &config)?;
    let before = TopologySummary::of(&grid);
    info!(
        input = %args.file.display(),
        algorithm = %config.algorithm,
        foreground = before.foreground,
        "Image loaded"
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Thinning ({})", config.algorithm));

    let report = thin_in_place_with_progress(&mut grid, config.algorithm, |p| {
        pb.set_message(format!(
            "Pass {}: removed {} ({} left)",
            p.pass, p.removed, p.remaining
        ));
        pb.tick();
    })
    .with_context(|| format!("Thinning {} failed", args.file.display()))?;
    pb.finish_and_clear();

    let after = TopologySummary::of(&grid);
    save_grid(&grid, &args.output)?;

    print_thinning_summary(&args.file, &args.output, &config, &report, &before, &after);
    Ok(())
}
