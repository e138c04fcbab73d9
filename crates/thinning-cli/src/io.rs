use std::path::Path;

use anyhow::{Context, Result};
use image::{GrayImage, ImageFormat};
use ndarray::Array2;
use thinning_core::config::ThinningConfig;
use thinning_core::consts::FOREGROUND_INTENSITY;
use thinning_core::Grid;

/// Load any supported image as 8-bit grayscale, shape `(height, width)`.
pub fn load_gray(path: &Path) -> Result<Array2<u8>> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .to_luma8();
    let (w, h) = img.dimensions();
    Array2::from_shape_vec((h as usize, w as usize), img.into_raw())
        .context("Decoded image buffer does not match its dimensions")
}

/// Load an image and binarize it according to `config`.
pub fn load_grid(path: &Path, config: &ThinningConfig) -> Result<Grid> {
    let gray = load_gray(path)?;
    let grid = Grid::binarize(gray.view(), config.threshold, config.invert)
        .with_context(|| format!("{} cannot be thinned", path.display()))?;
    Ok(grid)
}

/// Save an 8-bit grayscale array as PNG.
pub fn save_gray(data: &Array2<u8>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();
    let pixels: Vec<u8> = data.iter().copied().collect();
    let img = GrayImage::from_raw(w as u32, h as u32, pixels)
        .context("Pixel buffer does not match image dimensions")?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Save a grid as a black/white PNG (foreground white).
pub fn save_grid(grid: &Grid, path: &Path) -> Result<()> {
    save_gray(&grid.to_intensity(FOREGROUND_INTENSITY), path)
}
