mod common;

use common::{grid_from_rows, render};
use ndarray::{array, Array2, Array3, ShapeBuilder};
use thinning_core::error::{Axis, ErrorKind};
use thinning_core::neighbors::{Direction, Neighborhood};
use thinning_core::{Grid, ThinningError};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn test_from_vec_is_row_major() {
    let grid = Grid::from_vec(4, 3, vec![1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1]).unwrap();
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.foreground_pixels(), vec![(0, 0), (1, 1), (2, 3)]);
}

#[test]
fn test_from_vec_length_mismatch() {
    let err = Grid::from_vec(3, 3, vec![0; 8]).unwrap_err();
    assert!(matches!(
        err,
        ThinningError::SizeMismatch {
            width: 3,
            height: 3,
            actual: 8
        }
    ));
}

#[test]
fn test_size_floor_names_dimension() {
    let err = Grid::empty(2, 5).unwrap_err();
    assert!(matches!(
        err,
        ThinningError::TooSmall {
            axis: Axis::Width,
            size: 2
        }
    ));

    let err = Grid::empty(5, 2).unwrap_err();
    assert!(matches!(
        err,
        ThinningError::TooSmall {
            axis: Axis::Height,
            size: 2
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_from_array_rejects_column_major() {
    let fortran = Array2::<u8>::zeros((3, 4).f());
    assert!(matches!(
        Grid::from_array(fortran),
        Err(ThinningError::NonStandardLayout)
    ));
}

#[test]
fn test_from_view_rejects_strided_view() {
    let base = Array2::<u8>::zeros((6, 8));
    let strided = base.slice(ndarray::s![.., ..;2]);
    assert!(matches!(
        Grid::from_view(strided),
        Err(ThinningError::NonStandardLayout)
    ));
}

#[test]
fn test_from_array_rejects_non_binary_values() {
    let data = array![[0u8, 0, 0], [0, 255, 0], [0, 0, 0]];
    let err = Grid::from_array(data).unwrap_err();
    assert!(matches!(
        err,
        ThinningError::InvalidPixel {
            row: 1,
            col: 1,
            value: 255
        }
    ));
}

#[test]
fn test_from_dyn_requires_two_dimensions() {
    let cube = Array3::<u8>::zeros((3, 3, 3));
    let err = Grid::from_dyn(cube.view().into_dyn()).unwrap_err();
    assert!(matches!(err, ThinningError::WrongDimensionality { ndim: 3 }));

    let flat = Array2::<u8>::zeros((3, 3)).into_dyn();
    assert!(Grid::from_dyn(flat.view()).is_ok());
}

#[test]
fn test_try_from_array() {
    let grid: Grid = array![[0u8, 1, 0], [1, 1, 1], [0, 1, 0]].try_into().unwrap();
    assert_eq!(grid.foreground_count(), 5);
    let back: Array2<u8> = grid.into();
    assert_eq!(back[[1, 1]], 1);
}

#[test]
fn test_from_mask() {
    let mask = Array2::from_shape_fn((3, 4), |(r, c)| r == c);
    let grid = Grid::from_mask(&mask).unwrap();
    assert_eq!(grid.foreground_pixels(), vec![(0, 0), (1, 1), (2, 2)]);
    assert_eq!(grid.to_mask(), mask);
}

// ---------------------------------------------------------------------------
// Binarization
// ---------------------------------------------------------------------------

#[test]
fn test_binarize_threshold() {
    let data = array![[0u8, 127, 128], [255, 10, 200], [127, 128, 0]];
    let grid = Grid::binarize(data.view(), 127, false).unwrap();
    assert_eq!(render(&grid), vec!["..#", "#.#", ".#."]);
}

#[test]
fn test_binarize_invert() {
    let data = array![[0u8, 127, 128], [255, 10, 200], [127, 128, 0]];
    let grid = Grid::binarize(data.view(), 127, true).unwrap();
    assert_eq!(render(&grid), vec!["##.", ".#.", "#.#"]);
}

#[test]
fn test_binarize_rejects_column_major() {
    let wide = Array2::<u8>::zeros((3, 5).f());
    assert!(matches!(
        Grid::binarize(wide.view(), 0, false),
        Err(ThinningError::NonStandardLayout)
    ));
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn test_out_of_range_reads_are_background() {
    let grid = grid_from_rows(&["###", "###", "###"]);
    assert_eq!(grid.get(-1, 0), 0);
    assert_eq!(grid.get(0, -1), 0);
    assert_eq!(grid.get(3, 0), 0);
    assert_eq!(grid.get(0, 3), 0);
    assert_eq!(grid.get(2, 2), 1);
    assert!(!grid.is_foreground(5, 5));
}

#[test]
fn test_corner_classification_treats_outside_as_background() {
    let grid = grid_from_rows(&["###", "###", "###"]);
    let n = Neighborhood::classify(&grid, 0, 0);
    assert_eq!(n.ring(), [0, 0, 1, 1, 1, 0, 0, 0]);
    assert_eq!(n.foreground_count(), 3);
    assert_eq!(n.transitions(), 1);
    assert_eq!(n.get(Direction::SouthEast), 1);
    assert_eq!(n.get(Direction::East), 1);
    assert_eq!(n.get(Direction::West), 0);
}

#[test]
fn test_solid_block_detection() {
    let thin = grid_from_rows(&["#..", ".#.", "..#"]);
    assert!(!thin.contains_solid_block());

    let blocky = grid_from_rows(&["....", ".##.", ".##.", "...."]);
    assert!(blocky.contains_solid_block());
}

#[test]
fn test_to_intensity() {
    let grid = grid_from_rows(&["#..", "...", "..#"]);
    let img = grid.to_intensity(255);
    assert_eq!(img[[0, 0]], 255);
    assert_eq!(img[[1, 1]], 0);
    assert_eq!(img[[2, 2]], 255);
}

#[test]
fn test_blank_grid_and_cell_count() {
    let blank = Grid::empty(4, 3).unwrap();
    assert!(blank.is_blank());
    assert_eq!(blank.cell_count(), 12);

    let dot = grid_from_rows(&["...", ".#.", "..."]);
    assert!(!dot.is_blank());
    assert_eq!(dot.cell_count(), 9);
}
