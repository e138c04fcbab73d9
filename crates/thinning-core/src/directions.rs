//! Per-pixel neighbor direction codes.
//!
//! Each output byte records which of the eight neighbors of the input pixel
//! are non-zero, one bit per neighbor in reading order:
//!
//! ```text
//!   bit 0  bit 1  bit 2        NW  N  NE
//!   bit 3    .    bit 4   =    W   .  E
//!   bit 5  bit 6  bit 7        SW  S  SE
//! ```
//!
//! Neighbors outside the image count as zero.

use ndarray::{Array2, ArrayView2};

use crate::neighbors::Direction;

impl Direction {
    /// Bit this direction occupies in a direction code.
    pub fn code_bit(self) -> u8 {
        let shift = match self {
            Direction::NorthWest => 0,
            Direction::North => 1,
            Direction::NorthEast => 2,
            Direction::West => 3,
            Direction::East => 4,
            Direction::SouthWest => 5,
            Direction::South => 6,
            Direction::SouthEast => 7,
        };
        1 << shift
    }
}

/// Compute the direction code of every pixel. Any non-zero value counts as set.
///
/// Unlike thinning, this accepts images of any size and value range.
pub fn direction_codes(image: &ArrayView2<'_, u8>) -> Array2<u8> {
    let (h, w) = image.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        Direction::RING.iter().fold(0u8, |code, &dir| {
            let (dr, dc) = dir.offset();
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            let set = nr >= 0
                && nc >= 0
                && image
                    .get((nr as usize, nc as usize))
                    .is_some_and(|&v| v != 0);
            if set {
                code | dir.code_bit()
            } else {
                code
            }
        })
    })
}

/// Directions encoded in `code`, in ring order.
pub fn decode(code: u8) -> Vec<Direction> {
    Direction::RING
        .into_iter()
        .filter(|dir| code & dir.code_bit() != 0)
        .collect()
}
