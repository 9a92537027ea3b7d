//! Exhaustive solution counting.
//!
//! Same traversal and placement policy as the solver, with one difference:
//! reaching a complete grid bumps the tally and the search keeps going, so
//! the result is the exact number of distinct completions of the starting
//! grid. There is no short-circuit once a second solution is found: the
//! tally stays honest. That makes counting far more expensive
//! than solving on sparse grids (a fully empty grid would enumerate every
//! Sudoku solution in existence); the generator only ever counts grids
//! with a handful of empty cells, where the cost is negligible.

use crate::grid::Grid;
use crate::solver::first_empty;

/// Unit struct counter, mirroring [`crate::Solver`].
pub struct SolutionCounter;

impl Default for SolutionCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self
    }

    /// Count every distinct completion of the grid. The grid is used as
    /// scratch space during the search but is restored to its starting
    /// state before this returns; the uniform place/undo discipline
    /// guarantees it.
    pub fn count(&self, grid: &mut Grid) -> usize {
        let mut tally = 0;
        count_recursive(grid, &mut tally);
        tally
    }

    /// True iff the grid has exactly one completion.
    pub fn is_unique(&self, grid: &mut Grid) -> bool {
        self.count(grid) == 1
    }
}

fn count_recursive(grid: &mut Grid, tally: &mut usize) {
    let pos = match first_empty(grid) {
        Some(pos) => pos,
        // All filled: one more completion. Unlike the solver this is not a
        // stop signal; the caller goes on trying its remaining digits.
        None => {
            *tally += 1;
            return;
        }
    };

    for value in 1..=9 {
        if grid.is_possible(pos, value) {
            grid.set(pos, value);
            count_recursive(grid, tally);
            grid.set(pos, 0);
        }
    }
}
