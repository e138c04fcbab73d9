use crate::grid::Grid;
use crate::neighbors::{Direction, Neighborhood};

use super::engine::{Phase, ThinningEngine};

/// Zhang-Suen thinning (Zhang & Suen, 1984).
///
/// The first phase peels the south-east boundary and north-west corners,
/// the second the north-west boundary and south-east corners.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZhangSuen;

impl ZhangSuen {
    /// Removal predicate for a pixel with the given neighborhood.
    pub fn is_removable(n: &Neighborhood, phase: Phase) -> bool {
        let b = n.foreground_count();
        if !(2..=6).contains(&b) || n.transitions() != 1 {
            return false;
        }
        let p2 = n.get(Direction::North);
        let p4 = n.get(Direction::East);
        let p6 = n.get(Direction::South);
        let p8 = n.get(Direction::West);
        match phase {
            Phase::First => p2 * p4 * p6 == 0 && p4 * p6 * p8 == 0,
            Phase::Second => p2 * p4 * p8 == 0 && p2 * p6 * p8 == 0,
        }
    }
}

impl ThinningEngine for ZhangSuen {
    fn name(&self) -> &'static str {
        "Zhang-Suen"
    }

    fn should_remove(&self, grid: &Grid, row: usize, col: usize, phase: Phase) -> bool {
        Self::is_removable(&Neighborhood::classify(grid, row, col), phase)
    }
}
