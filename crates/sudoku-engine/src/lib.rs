//! Backtracking Sudoku engine: solving, solution counting, and puzzle
//! generation.
//!
//! The crate is organized leaf-first:
//!
//! - [`Grid`] holds the 9x9 board and the constraint predicate
//!   [`Grid::is_possible`], the single correctness gate for every search.
//! - [`Solver`] finds the first solution by exhaustive backtracking and can
//!   report every tentative move to a step observer for visualization.
//! - [`SolutionCounter`] runs the same search but keeps going after a
//!   solution, returning the exact number of completions.
//! - [`Generator`] seeds a random full grid with the solver, then carves
//!   cells back out while the counter confirms the puzzle still has exactly
//!   one solution.
//!
//! Everything is single-threaded and synchronous; a grid is exclusively
//! owned by whichever component is currently searching it. Recursion depth
//! is bounded by the 81 cells.
//!
//! ```
//! use sudoku_engine::{Difficulty, Generator, SolutionCounter, Solver};
//!
//! let mut generator = Generator::with_seed(42);
//! let puzzle = generator.generate(Difficulty::Easy);
//! assert_eq!(SolutionCounter::new().count(&mut puzzle.clone()), 1);
//!
//! let solution = Solver::new().solve(&puzzle).expect("generated puzzles solve");
//! assert!(solution.is_complete());
//! ```

mod counter;
mod generator;
mod grid;
mod solver;

pub use counter::SolutionCounter;
pub use generator::{Difficulty, Generator};
pub use grid::{Grid, Position};
pub use solver::{SearchOutcome, SolveStep, Solver};

/// Generate a fresh puzzle at the given difficulty with a one-off,
/// entropy-seeded generator. Use [`Generator::with_seed`] directly when
/// reproducibility matters.
pub fn generate_new_puzzle(difficulty: Difficulty) -> Grid {
    Generator::new().generate(difficulty)
}
