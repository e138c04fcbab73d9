pub mod driver;
pub mod engine;
pub mod guo_hall;
pub mod zhang_suen;

use std::fmt;

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{self, Grid};

pub use driver::{converge, pass_cap, PassReport, ThinningReport};
pub use engine::{Phase, ThinningEngine};
pub use guo_hall::GuoHall;
pub use zhang_suen::ZhangSuen;

/// Thinning algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    GuoHall,
    ZhangSuen,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::GuoHall, Algorithm::ZhangSuen];

    pub fn engine(self) -> &'static dyn ThinningEngine {
        match self {
            Algorithm::GuoHall => &GuoHall,
            Algorithm::ZhangSuen => &ZhangSuen,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.engine().name())
    }
}

/// Thin a copy of `grid`, leaving the original untouched.
pub fn thin(grid: &Grid, algorithm: Algorithm) -> Result<Grid> {
    let mut out = grid.clone();
    thin_in_place(&mut out, algorithm)?;
    Ok(out)
}

/// Thin `grid` in place.
pub fn thin_in_place(grid: &mut Grid, algorithm: Algorithm) -> Result<ThinningReport> {
    thin_in_place_with_progress(grid, algorithm, |_| {})
}

/// Thin `grid` in place, calling `on_pass` after every pass.
pub fn thin_in_place_with_progress<F>(
    grid: &mut Grid,
    algorithm: Algorithm,
    on_pass: F,
) -> Result<ThinningReport>
where
    F: FnMut(&PassReport),
{
    converge(algorithm.engine(), grid, on_pass)
}

/// Validate and thin a copy of a raw `{0, 1}` buffer.
pub fn thin_array(image: ArrayView2<'_, u8>, algorithm: Algorithm) -> Result<Array2<u8>> {
    let mut grid = Grid::from_view(image)?;
    thin_in_place(&mut grid, algorithm)?;
    Ok(grid.into_array())
}

/// Validate and thin a raw `{0, 1}` buffer in place.
///
/// The buffer is left untouched when validation fails. If thinning itself
/// fails the buffer holds whatever passes completed.
pub fn thin_array_in_place(
    image: &mut Array2<u8>,
    algorithm: Algorithm,
) -> Result<ThinningReport> {
    grid::validate(&image.view())?;
    let mut grid = Grid::from_validated(std::mem::take(image));
    let result = thin_in_place(&mut grid, algorithm);
    *image = grid.into_array();
    result
}
