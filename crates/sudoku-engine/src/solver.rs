//! Single-solution backtracking search.
//!
//! The solver scans for the first empty cell in row-major order, tries the
//! digits 1-9 in ascending order, and recurses on the first digit the
//! constraint predicate accepts. The first complete assignment found wins.
//! Every placement made inside a failed branch is undone before returning,
//! so a grid that comes back [`SearchOutcome::Unsatisfiable`] is bit-for-bit
//! identical to what the caller passed in.

use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Result of a solver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The grid now holds a complete valid assignment.
    Solved,
    /// No assignment exists from the starting state; the grid is unchanged.
    Unsatisfiable,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved)
    }
}

/// One tentative move, reported to a step observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStep {
    pub pos: Position,
    pub value: u8,
    /// True when the digit was just written, false when it was undone.
    pub placed: bool,
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve the grid in place. On success the grid holds the first
    /// solution reached by the deterministic scan order; on failure it is
    /// left exactly as it was.
    pub fn solve_in_place(&self, grid: &mut Grid) -> SearchOutcome {
        self.solve_with_steps(grid, &mut |_| {})
    }

    /// Solve a copy of the grid, returning the solved copy if one exists.
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_in_place(&mut working).is_solved() {
            Some(working)
        } else {
            None
        }
    }

    /// Solve the grid in place, invoking `observer` after every tentative
    /// placement and every undo. A front end can redraw (and delay)
    /// between steps to animate the search; the solver itself stays
    /// synchronous and runs to completion.
    pub fn solve_with_steps<F>(&self, grid: &mut Grid, observer: &mut F) -> SearchOutcome
    where
        F: FnMut(SolveStep),
    {
        solve_recursive(grid, observer)
    }
}

/// First empty cell in row-major order, if any.
pub(crate) fn first_empty(grid: &Grid) -> Option<Position> {
    Position::all().find(|&pos| grid.get(pos) == 0)
}

fn solve_recursive<F>(grid: &mut Grid, observer: &mut F) -> SearchOutcome
where
    F: FnMut(SolveStep),
{
    let pos = match first_empty(grid) {
        Some(pos) => pos,
        None => return SearchOutcome::Solved,
    };

    for value in 1..=9 {
        if !grid.is_possible(pos, value) {
            continue;
        }
        grid.set(pos, value);
        observer(SolveStep {
            pos,
            value,
            placed: true,
        });
        if solve_recursive(grid, observer).is_solved() {
            return SearchOutcome::Solved;
        }
        grid.set(pos, 0);
        observer(SolveStep {
            pos,
            value,
            placed: false,
        });
    }

    SearchOutcome::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{
        canonical_grid, duplicate_row_grid, sample_puzzle, unsatisfiable_grid,
    };
    use crate::SolutionCounter;

    /// Every row, column, and box of a solved grid must be a permutation
    /// of 1-9.
    fn assert_all_groups_valid(grid: &Grid) {
        for i in 0..9 {
            let mut row = [false; 10];
            let mut col = [false; 10];
            let mut boxx = [false; 10];
            for j in 0..9 {
                row[grid.get(Position::new(i, j)) as usize] = true;
                col[grid.get(Position::new(j, i)) as usize] = true;
                let pos = Position::new(i / 3 * 3 + j / 3, i % 3 * 3 + j % 3);
                boxx[grid.get(pos) as usize] = true;
            }
            for value in 1..=9 {
                assert!(row[value], "row {} missing {}", i, value);
                assert!(col[value], "column {} missing {}", i, value);
                assert!(boxx[value], "box {} missing {}", i, value);
            }
        }
    }

    #[test]
    fn solves_the_sample_puzzle() {
        let mut grid = sample_puzzle();
        let outcome = Solver::new().solve_in_place(&mut grid);
        assert!(outcome.is_solved());
        assert!(grid.is_complete());
        assert_all_groups_valid(&grid);

        // An independent counting run on the solved grid must see exactly
        // one completion (itself).
        assert_eq!(SolutionCounter::new().count(&mut grid), 1);
    }

    #[test]
    fn complete_grid_returns_immediately_without_mutation() {
        let mut grid = canonical_grid();
        let before = grid.clone();
        let mut steps = 0usize;
        let outcome = Solver::new().solve_with_steps(&mut grid, &mut |_| steps += 1);
        assert!(outcome.is_solved());
        assert_eq!(grid, before, "a complete grid must not be touched");
        assert_eq!(steps, 0, "no tentative moves on a complete grid");
    }

    #[test]
    fn failed_solve_restores_the_grid() {
        // Immediate failure: the first empty cell has no candidates.
        let mut grid = unsatisfiable_grid();
        let before = grid.clone();
        let outcome = Solver::new().solve_in_place(&mut grid);
        assert_eq!(outcome, SearchOutcome::Unsatisfiable);
        assert_eq!(grid, before, "failed search must restore every cell");

        // Deep failure: a chain of forced placements collapses at the last
        // cell, so the solver explores and then unwinds everything.
        let mut grid = duplicate_row_grid();
        let before = grid.clone();
        let mut steps = 0usize;
        let outcome = Solver::new().solve_with_steps(&mut grid, &mut |_| steps += 1);
        assert_eq!(outcome, SearchOutcome::Unsatisfiable);
        assert!(steps > 0, "the search should explore before giving up");
        assert_eq!(grid, before);
    }

    #[test]
    fn clone_based_solve_leaves_input_alone() {
        let grid = sample_puzzle();
        let before = grid.clone();
        let solved = Solver::new().solve(&grid).expect("sample is solvable");
        assert!(solved.is_complete());
        assert_eq!(grid, before);
    }

    #[test]
    fn observer_sees_balanced_placements_and_undos() {
        let mut grid = canonical_grid();
        // Blank a handful of cells so the search has real work to do.
        for pos in [
            Position::new(0, 0),
            Position::new(3, 4),
            Position::new(5, 1),
            Position::new(8, 8),
        ] {
            grid.set(pos, 0);
        }

        let mut placements = 0usize;
        let mut undos = 0usize;
        let mut depth = 0isize;
        let outcome = Solver::new().solve_with_steps(&mut grid, &mut |step: SolveStep| {
            if step.placed {
                placements += 1;
                depth += 1;
            } else {
                undos += 1;
                depth -= 1;
            }
            assert!(depth >= 0, "an undo must follow a matching placement");
            assert!((1..=9).contains(&step.value));
        });

        assert!(outcome.is_solved());
        assert!(grid.is_complete());
        // Net placements left on the board equal the cells that were blank.
        assert_eq!(placements - undos, 4);
    }
}
