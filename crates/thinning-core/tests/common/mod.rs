#![allow(dead_code)]

use thinning_core::Grid;

/// Build a grid from ASCII rows: `#` is foreground, anything else background.
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let data: Vec<u8> = rows
        .iter()
        .flat_map(|r| {
            assert_eq!(r.len(), width, "ragged fixture row: {r:?}");
            r.bytes().map(|b| u8::from(b == b'#'))
        })
        .collect();
    Grid::from_vec(width, height, data).expect("valid fixture")
}

/// Render a grid back to ASCII rows, the inverse of [`grid_from_rows`].
pub fn render(grid: &Grid) -> Vec<String> {
    grid.as_array()
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|&v| if v == 1 { '#' } else { '.' }).collect())
        .collect()
}

/// `size x size` background grid with a solid square covering rows/cols `lo..=hi`.
pub fn square(size: usize, lo: usize, hi: usize) -> Grid {
    let mut grid = Grid::empty(size, size).expect("valid size");
    for row in lo..=hi {
        for col in lo..=hi {
            grid.set(row, col, true);
        }
    }
    grid
}

/// 7x7 grid with a solid 5x5 square at rows/cols 1..=5.
pub fn centered_square() -> Grid {
    square(7, 1, 5)
}

/// A 3-pixel-thick horizontal bar, rows 1..=3, cols 1..=7.
pub fn thick_bar() -> Grid {
    grid_from_rows(&[
        ".........",
        ".#######.",
        ".#######.",
        ".#######.",
        ".........",
    ])
}

/// One-pixel-wide square outline enclosing a 3x3 hole.
pub fn outline() -> Grid {
    grid_from_rows(&[
        ".......",
        ".#####.",
        ".#...#.",
        ".#...#.",
        ".#...#.",
        ".#####.",
        ".......",
    ])
}

/// An assortment of shapes used for property checks.
pub fn fixtures() -> Vec<(&'static str, Grid)> {
    vec![
        ("centered square", centered_square()),
        ("thick bar", thick_bar()),
        ("outline", outline()),
        ("large square", square(12, 2, 9)),
        (
            "blob",
            grid_from_rows(&[
                "..........",
                ".####.....",
                ".######...",
                "..#######.",
                "...######.",
                "....####..",
                "..........",
            ]),
        ),
    ]
}
