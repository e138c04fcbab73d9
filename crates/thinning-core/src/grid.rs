use ndarray::{Array2, ArrayView2, ArrayViewD, Ix2};

use crate::consts::{BACKGROUND, FOREGROUND, MIN_GRID_DIMENSION};
use crate::error::{Axis, Result, ThinningError};

/// A binary image ready for thinning.
///
/// Cells are `0` (background) or `1` (foreground), stored row-major with
/// shape `(height, width)`. Every constructor enforces the invariants
/// (at least 3x3, standard row-major layout, values in `{0, 1}`), so a `Grid`
/// that exists never needs to be re-validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    data: Array2<u8>,
}

impl Grid {
    /// Take ownership of a row-major `{0, 1}` array.
    pub fn from_array(data: Array2<u8>) -> Result<Self> {
        validate(&data.view())?;
        Ok(Self { data })
    }

    /// Copy a borrowed row-major `{0, 1}` view into a new grid.
    pub fn from_view(view: ArrayView2<'_, u8>) -> Result<Self> {
        validate(&view)?;
        Ok(Self {
            data: view.to_owned(),
        })
    }

    /// Build a grid from a flat row-major buffer.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let actual = data.len();
        let data = Array2::from_shape_vec((height, width), data).map_err(|_| {
            ThinningError::SizeMismatch {
                width,
                height,
                actual,
            }
        })?;
        Self::from_array(data)
    }

    /// Accept an array of unknown rank, rejecting anything that is not 2-D.
    pub fn from_dyn(view: ArrayViewD<'_, u8>) -> Result<Self> {
        let ndim = view.ndim();
        let view = view
            .into_dimensionality::<Ix2>()
            .map_err(|_| ThinningError::WrongDimensionality { ndim })?;
        Self::from_view(view)
    }

    /// Build a grid from a boolean mask (`true` = foreground).
    pub fn from_mask(mask: &Array2<bool>) -> Result<Self> {
        let (h, w) = mask.dim();
        check_dimensions(w, h)?;
        Ok(Self {
            data: Array2::from_shape_fn((h, w), |(row, col)| {
                if mask[[row, col]] {
                    FOREGROUND
                } else {
                    BACKGROUND
                }
            }),
        })
    }

    /// Convert an 8-bit intensity image: a pixel is foreground when its value
    /// is above `threshold` (below or equal when `invert` is set).
    pub fn binarize(view: ArrayView2<'_, u8>, threshold: u8, invert: bool) -> Result<Self> {
        let (h, w) = view.dim();
        check_dimensions(w, h)?;
        if !view.is_standard_layout() {
            return Err(ThinningError::NonStandardLayout);
        }
        let data = Array2::from_shape_fn((h, w), |(row, col)| {
            if (view[[row, col]] > threshold) != invert {
                FOREGROUND
            } else {
                BACKGROUND
            }
        });
        Ok(Self { data })
    }

    /// An all-background grid.
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            data: Array2::zeros((height, width)),
        })
    }

    /// Wrap an array that has already passed [`validate`].
    pub(crate) fn from_validated(data: Array2<u8>) -> Self {
        debug_assert!(validate(&data.view()).is_ok());
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// True when no cell is foreground.
    pub fn is_blank(&self) -> bool {
        !self.data.iter().any(|&v| v == FOREGROUND)
    }

    /// Cell value at `(row, col)`. Out-of-range coordinates read as background.
    pub fn get(&self, row: isize, col: isize) -> u8 {
        if row < 0 || col < 0 {
            return BACKGROUND;
        }
        self.data
            .get((row as usize, col as usize))
            .copied()
            .unwrap_or(BACKGROUND)
    }

    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        self.data
            .get((row, col))
            .is_some_and(|&v| v == FOREGROUND)
    }

    /// Set a cell to foreground (`true`) or background (`false`).
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the grid.
    pub fn set(&mut self, row: usize, col: usize, foreground: bool) {
        self.data[[row, col]] = if foreground { FOREGROUND } else { BACKGROUND };
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v == FOREGROUND).count()
    }

    /// Coordinates `(row, col)` of every foreground cell in row-major order.
    pub fn foreground_pixels(&self) -> Vec<(usize, usize)> {
        self.data
            .indexed_iter()
            .filter(|(_, &v)| v == FOREGROUND)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// True if some 2x2 window is entirely foreground.
    pub fn contains_solid_block(&self) -> bool {
        let (h, w) = self.data.dim();
        for row in 0..h - 1 {
            for col in 0..w - 1 {
                if self.data[[row, col]] == FOREGROUND
                    && self.data[[row, col + 1]] == FOREGROUND
                    && self.data[[row + 1, col]] == FOREGROUND
                    && self.data[[row + 1, col + 1]] == FOREGROUND
                {
                    return true;
                }
            }
        }
        false
    }

    pub fn view(&self) -> ArrayView2<'_, u8> {
        self.data.view()
    }

    pub fn as_array(&self) -> &Array2<u8> {
        &self.data
    }

    /// Clear every cell flagged in `marks`, returning how many were cleared.
    pub(crate) fn clear_marked(&mut self, marks: &Array2<bool>) -> usize {
        let mut cleared = 0;
        ndarray::Zip::from(&mut self.data)
            .and(marks)
            .for_each(|cell, &marked| {
                if marked && *cell == FOREGROUND {
                    *cell = BACKGROUND;
                    cleared += 1;
                }
            });
        cleared
    }

    pub fn into_array(self) -> Array2<u8> {
        self.data
    }

    pub fn to_mask(&self) -> Array2<bool> {
        self.data.mapv(|v| v == FOREGROUND)
    }

    /// Scale cells to an 8-bit intensity image (`0` / `foreground_value`).
    pub fn to_intensity(&self, foreground_value: u8) -> Array2<u8> {
        self.data
            .mapv(|v| if v == FOREGROUND { foreground_value } else { 0 })
    }
}

impl TryFrom<Array2<u8>> for Grid {
    type Error = ThinningError;

    fn try_from(data: Array2<u8>) -> Result<Self> {
        Self::from_array(data)
    }
}

impl From<Grid> for Array2<u8> {
    fn from(grid: Grid) -> Self {
        grid.into_array()
    }
}

/// Check a caller buffer against every grid invariant without copying it.
pub fn validate(view: &ArrayView2<'_, u8>) -> Result<()> {
    let (h, w) = view.dim();
    check_dimensions(w, h)?;
    if !view.is_standard_layout() {
        return Err(ThinningError::NonStandardLayout);
    }
    if let Some(((row, col), &value)) = view
        .indexed_iter()
        .find(|(_, &v)| v != BACKGROUND && v != FOREGROUND)
    {
        return Err(ThinningError::InvalidPixel { row, col, value });
    }
    Ok(())
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width < MIN_GRID_DIMENSION {
        return Err(ThinningError::TooSmall {
            axis: Axis::Width,
            size: width,
        });
    }
    if height < MIN_GRID_DIMENSION {
        return Err(ThinningError::TooSmall {
            axis: Axis::Height,
            size: height,
        });
    }
    Ok(())
}
