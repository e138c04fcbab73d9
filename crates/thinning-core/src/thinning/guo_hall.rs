use crate::grid::Grid;
use crate::neighbors::Neighborhood;

use super::engine::{Phase, ThinningEngine};

/// Guo-Hall thinning (Guo & Hall, 1989) with checkerboard sub-iterations.
///
/// The first phase only visits pixels where `(row + col)` is even, the second
/// those where it is odd. Pixels removed together in one phase are therefore
/// never 4-adjacent and never cover a 2x2 block, so the predicate needs no
/// directional guard.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuoHall;

/// Scalars the Guo-Hall predicate is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuoHallMeasures {
    /// Connectivity number `C`.
    pub connectivity: u8,
    /// `min(N1, N2)`.
    pub n: u8,
}

impl GuoHall {
    /// Phase a pixel at `(row, col)` belongs to.
    pub fn phase_of(row: usize, col: usize) -> Phase {
        if (row + col) % 2 == 0 {
            Phase::First
        } else {
            Phase::Second
        }
    }

    pub fn measures(n: &Neighborhood) -> GuoHallMeasures {
        let [p2, p3, p4, p5, p6, p7, p8, p9] = n.ring();
        let not = |v: u8| 1 - v;

        let connectivity = (not(p2) & (p3 | p4))
            + (not(p4) & (p5 | p6))
            + (not(p6) & (p7 | p8))
            + (not(p8) & (p9 | p2));

        let n1 = (p9 | p2) + (p3 | p4) + (p5 | p6) + (p7 | p8);
        let n2 = (p2 | p3) + (p4 | p5) + (p6 | p7) + (p8 | p9);

        GuoHallMeasures {
            connectivity,
            n: n1.min(n2),
        }
    }

    /// Removal predicate, ignoring checkerboard parity.
    ///
    /// `C == 1` keeps the neighbors connected; `N >= 2` keeps end points.
    pub fn is_removable(n: &Neighborhood) -> bool {
        let m = Self::measures(n);
        m.connectivity == 1 && (2..=3).contains(&m.n)
    }
}

impl ThinningEngine for GuoHall {
    fn name(&self) -> &'static str {
        "Guo-Hall"
    }

    fn should_remove(&self, grid: &Grid, row: usize, col: usize, phase: Phase) -> bool {
        Self::phase_of(row, col) == phase
            && Self::is_removable(&Neighborhood::classify(grid, row, col))
    }
}
