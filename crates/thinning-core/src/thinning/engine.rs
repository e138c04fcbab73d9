use ndarray::Array2;

use crate::grid::Grid;

/// One of the two sub-iterations that make up a thinning pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    First,
    Second,
}

impl Phase {
    pub const BOTH: [Phase; 2] = [Phase::First, Phase::Second];
}

/// A two-phase thinning algorithm.
///
/// Implementors only decide, per pixel, whether it should be removed in a
/// given phase. Marking is always done against the grid as it stood at the
/// start of the phase; marked pixels are cleared together when the phase ends.
pub trait ThinningEngine {
    /// Human-readable algorithm name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether the foreground pixel at `(row, col)` is removable in `phase`.
    fn should_remove(&self, grid: &Grid, row: usize, col: usize, phase: Phase) -> bool;

    /// Mark against the current grid, then clear the marks. Returns pixels removed.
    fn run_phase(&self, grid: &mut Grid, phase: Phase) -> usize {
        let (h, w) = (grid.height(), grid.width());
        let mut marks = Array2::from_elem((h, w), false);
        let mut marked = 0usize;

        for row in 0..h {
            for col in 0..w {
                if grid.is_foreground(row, col) && self.should_remove(grid, row, col, phase) {
                    marks[[row, col]] = true;
                    marked += 1;
                }
            }
        }

        if marked == 0 {
            return 0;
        }
        grid.clear_marked(&marks)
    }

    /// Run both phases in order. Returns the total removed across them.
    fn run_pass(&self, grid: &mut Grid) -> usize {
        Phase::BOTH
            .into_iter()
            .map(|phase| self.run_phase(grid, phase))
            .sum()
    }
}
