//! Puzzle generation.
//!
//! A puzzle is built in three phases: seed a nearly-empty grid with nine
//! random hints, complete it with the backtracking solver, then carve cells
//! back out while the solution counter confirms the puzzle still has
//! exactly one completion.

use crate::counter::SolutionCounter;
use crate::grid::{Grid, Position};
use crate::solver::Solver;
use serde::{Deserialize, Serialize};

/// Difficulty dial for generation, levels 1 (Beginner) through 5 (Expert).
///
/// The level sets the carving budget: higher levels tolerate more rejected
/// removal attempts, which statistically blanks more cells. There is no
/// hard guarantee on the final blank count or on difficulty in the human
/// sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Map a numeric level 1-5 to a difficulty. Values outside the range
    /// are a configuration error and are rejected here, at the boundary.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Beginner),
            2 => Some(Difficulty::Easy),
            3 => Some(Difficulty::Medium),
            4 => Some(Difficulty::Hard),
            5 => Some(Difficulty::Expert),
            _ => None,
        }
    }

    /// The numeric level, 1-5.
    pub fn level(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    /// How many rejected removals the carving loop tolerates before it
    /// stops: ten per level.
    pub fn rejection_budget(&self) -> u32 {
        self.level() as u32 * 10
    }

    /// All difficulties, easiest first.
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

/// Outcome of one carving pass, used to pin down the budget semantics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CarveStats {
    /// Cells blanked and kept blank (unique solution preserved).
    pub removed: u32,
    /// Removal attempts rolled back; each one costs a unit of budget.
    pub rejected: u32,
}

/// Sudoku puzzle generator.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a uniquely solvable puzzle at the given difficulty.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        let solver = Solver::new();
        loop {
            let mut grid = self.seed_grid();
            // Nine distinct single hints never conflict with each other,
            // so this solve is expected to succeed; re-seed if it somehow
            // does not rather than surface a failure.
            if solver.solve_in_place(&mut grid).is_solved() {
                self.carve(&mut grid, difficulty);
                return grid;
            }
        }
    }

    /// Build a nearly-empty grid with the digits 1-9 pre-placed once each,
    /// in shuffled order at randomly chosen distinct cells. The hints break
    /// the symmetry of the solver's deterministic scan so every generated
    /// solution differs.
    fn seed_grid(&mut self) -> Grid {
        let mut grid = Grid::empty();
        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        self.shuffle(&mut digits);
        for &digit in &digits {
            loop {
                let pos = self.random_position();
                if grid.get(pos) == 0 {
                    grid.set(pos, digit);
                    break;
                }
            }
        }
        grid
    }

    /// Blank cells until `rejection_budget` removal attempts have failed.
    ///
    /// Accepted removals are free: only an attempt that breaks uniqueness
    /// (the counter reports zero or several completions) restores the cell
    /// and spends budget. The loop therefore ends after exactly
    /// `budget` rejections, not at a target blank count.
    fn carve(&mut self, grid: &mut Grid, difficulty: Difficulty) -> CarveStats {
        let counter = SolutionCounter::new();
        let mut budget = difficulty.rejection_budget();
        let mut stats = CarveStats::default();

        while budget > 0 {
            let pos = loop {
                let pos = self.random_position();
                if grid.get(pos) != 0 {
                    break pos;
                }
            };

            let backup = grid.get(pos);
            grid.set(pos, 0);

            if counter.count(grid) == 1 {
                stats.removed += 1;
            } else {
                grid.set(pos, backup);
                budget -= 1;
                stats.rejected += 1;
            }
        }

        stats
    }

    fn random_position(&mut self) -> Position {
        Position::new(self.rng.next_usize(9), self.rng.next_usize(9))
    }

    /// Fisher-Yates shuffle over the generator's own RNG.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Small PCG-style PRNG, seeded from `getrandom`. Keeps the engine free of
/// a full `rand` dependency and wasm-friendly, and gives the seeded
/// constructors exact reproducibility.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still yields distinct streams.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::canonical_grid;

    #[test]
    fn seed_grid_places_each_digit_once() {
        let mut generator = Generator::with_seed(7);
        let grid = generator.seed_grid();
        assert_eq!(grid.given_count(), 9);

        let mut seen = [0u8; 10];
        for pos in Position::all() {
            seen[grid.get(pos) as usize] += 1;
        }
        for digit in 1..=9 {
            assert_eq!(seen[digit], 1, "digit {} should appear exactly once", digit);
        }
        assert!(grid.is_valid());
    }

    #[test]
    fn generated_puzzle_is_uniquely_solvable() {
        let mut generator = Generator::with_seed(42);
        let mut puzzle = generator.generate(Difficulty::Easy);

        assert!(puzzle.is_valid());
        assert!(!puzzle.is_complete(), "carving should blank at least one cell");
        assert_eq!(
            SolutionCounter::new().count(&mut puzzle),
            1,
            "every generated puzzle must have exactly one solution"
        );
    }

    #[test]
    fn same_seed_same_puzzle() {
        let a = Generator::with_seed(1234).generate(Difficulty::Medium);
        let b = Generator::with_seed(1234).generate(Difficulty::Medium);
        assert_eq!(a, b, "generation must be deterministic under a fixed seed");
    }

    #[test]
    fn carve_spends_the_whole_rejection_budget() {
        for difficulty in [Difficulty::Beginner, Difficulty::Medium] {
            let mut generator = Generator::with_seed(9);
            let mut grid = canonical_grid();
            let stats = generator.carve(&mut grid, difficulty);
            assert_eq!(
                stats.rejected,
                difficulty.rejection_budget(),
                "the loop ends once the budget is exhausted by rejections"
            );
            assert_eq!(grid.empty_count() as u32, stats.removed);
        }
    }

    #[test]
    fn difficulty_levels_round_trip() {
        for &difficulty in Difficulty::all_levels() {
            assert_eq!(Difficulty::from_level(difficulty.level()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(6), None);
        assert_eq!(Difficulty::Beginner.rejection_budget(), 10);
        assert_eq!(Difficulty::Expert.rejection_budget(), 50);
    }

    #[test]
    fn budgets_rise_with_level() {
        let budgets: Vec<u32> = Difficulty::all_levels()
            .iter()
            .map(|d| d.rejection_budget())
            .collect();
        assert!(budgets.windows(2).all(|w| w[0] < w[1]));
    }
}
