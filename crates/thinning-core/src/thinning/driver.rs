use tracing::{debug, info, warn};

use crate::error::{Result, ThinningError};
use crate::grid::Grid;

use super::engine::ThinningEngine;

/// Outcome of a single thinning pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassReport {
    /// 1-based pass number.
    pub pass: usize,
    /// Pixels removed across both phases of this pass.
    pub removed: usize,
    /// Foreground pixels left after the pass.
    pub remaining: usize,
}

/// Outcome of a full thinning run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThinningReport {
    pub algorithm: &'static str,
    /// Passes executed, including the final empty one.
    pub passes: usize,
    /// Pixels removed in total.
    pub removed: usize,
    /// Foreground pixels in the skeleton.
    pub remaining: usize,
}

/// Most passes a run on `grid` may take.
///
/// Every pass but the last removes at least one foreground pixel, so a grid of
/// `w * h` cells converges in at most `w * h + 1` passes.
pub fn pass_cap(grid: &Grid) -> usize {
    grid.cell_count() + 1
}

/// Repeat passes of `engine` until one removes nothing.
///
/// `on_pass` is called after every pass, including the final empty one.
pub fn converge<E, F>(engine: &E, grid: &mut Grid, mut on_pass: F) -> Result<ThinningReport>
where
    E: ThinningEngine + ?Sized,
    F: FnMut(&PassReport),
{
    let cap = pass_cap(grid);
    let mut remaining = grid.foreground_count();
    let mut total_removed = 0usize;

    for pass in 1..=cap {
        let removed = engine.run_pass(grid);
        remaining = remaining.saturating_sub(removed);
        total_removed += removed;

        let report = PassReport {
            pass,
            removed,
            remaining,
        };
        debug!(
            algorithm = engine.name(),
            pass, removed, remaining, "Thinning pass complete"
        );
        on_pass(&report);

        if removed == 0 {
            info!(
                algorithm = engine.name(),
                passes = pass,
                removed = total_removed,
                remaining,
                "Thinning converged"
            );
            return Ok(ThinningReport {
                algorithm: engine.name(),
                passes: pass,
                removed: total_removed,
                remaining,
            });
        }
    }

    warn!(algorithm = engine.name(), cap, "Thinning hit the pass cap");
    Err(ThinningError::IterationCapExceeded {
        algorithm: engine.name(),
        cap,
    })
}
