//! Board representation and the Sudoku constraint predicate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the 9x9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position. Row and column are 0-8.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Iterate over all 81 positions in row-major order.
    ///
    /// The search routines depend on this scan order: the solver and the
    /// solution counter both locate the first empty cell with it.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(|i| Position::new(i / 9, i % 9))
    }

    /// Top-left corner of the 3x3 box containing this position.
    pub fn box_origin(&self) -> Position {
        Position::new(self.row / 3 * 3, self.col / 3 * 3)
    }
}

/// A 9x9 Sudoku board. Each cell holds 0 (empty) or a digit 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Create an empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [[0; 9]; 9],
        }
    }

    /// Create a grid from explicit rows.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        debug_assert!(rows.iter().flatten().all(|&v| v <= 9));
        Self { cells: rows }
    }

    /// Parse a grid from an 81-character string of digits, 0 for empty.
    /// Whitespace is ignored. Returns `None` on any other character or
    /// on a wrong cell count.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut grid = Self::empty();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let digit = ch.to_digit(10)?;
            if count == 81 {
                return None;
            }
            grid.cells[count / 9][count % 9] = digit as u8;
            count += 1;
        }
        if count == 81 {
            Some(grid)
        } else {
            None
        }
    }

    /// The canonical 81-character form, inverse of [`Grid::from_string`].
    pub fn to_string_line(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|v| char::from(b'0' + v))
            .collect()
    }

    /// Value at a position: 0 (empty) or 1-9.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Set a position to 0 (empty) or a digit 1-9. No constraint check;
    /// the search routines rely on overwriting and clearing freely.
    pub fn set(&mut self, pos: Position, value: u8) {
        debug_assert!(value <= 9);
        self.cells[pos.row][pos.col] = value;
    }

    /// Borrow the raw rows.
    pub fn rows(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Check whether `value` can be written at `pos` under the Sudoku
    /// rules: it must not already occur in the row, the column, or the
    /// 3x3 box containing `pos`.
    ///
    /// Pure with respect to the grid; this single predicate gates every
    /// placement made by the solver, the solution counter, and user input
    /// validation in a front end.
    pub fn is_possible(&self, pos: Position, value: u8) -> bool {
        debug_assert!((1..=9).contains(&value));
        for i in 0..9 {
            if self.cells[pos.row][i] == value {
                return false;
            }
            if self.cells[i][pos.col] == value {
                return false;
            }
        }
        let origin = pos.box_origin();
        for row in origin.row..origin.row + 3 {
            for col in origin.col..origin.col + 3 {
                if self.cells[row][col] == value {
                    return false;
                }
            }
        }
        true
    }

    /// True iff no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// True iff no row, column, or box contains a duplicate non-zero digit.
    /// Empty cells are fine; this checks consistency, not completeness.
    pub fn is_valid(&self) -> bool {
        let mut groups = [[false; 10]; 27];
        for pos in Position::all() {
            let value = self.get(pos) as usize;
            if value == 0 {
                continue;
            }
            let origin = pos.box_origin();
            let box_index = origin.row + origin.col / 3;
            for group in [pos.row, 9 + pos.col, 18 + box_index] {
                if groups[group][value] {
                    return false;
                }
                groups[group][value] = true;
            }
        }
        true
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of filled cells.
    pub fn given_count(&self) -> usize {
        81 - self.empty_count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row == 3 || row == 6 {
                writeln!(f, "──────┼───────┼──────")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col == 3 || col == 6 {
                    write!(f, "│ ")?;
                }
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
