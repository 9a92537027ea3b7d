//! Terminal drawing for the animated solve view.

use crossterm::{
    cursor::MoveTo,
    execute,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io;
use sudoku_engine::{Grid, Position, SolveStep};

const BOARD_TOP: u16 = 1;
const BOARD_LEFT: u16 = 2;

/// Screen coordinates of a cell inside the drawn board. Each cell is two
/// columns wide; box separators add two extra columns / one extra row.
fn cell_screen_pos(pos: Position) -> (u16, u16) {
    let x = BOARD_LEFT + (pos.col * 2 + pos.col / 3 * 2) as u16;
    let y = BOARD_TOP + (pos.row + pos.row / 3) as u16;
    (x, y)
}

fn cell_char(value: u8) -> char {
    if value == 0 {
        '.'
    } else {
        char::from(b'0' + value)
    }
}

/// Clear the screen and draw the whole board.
pub fn draw_board(stdout: &mut io::Stdout, grid: &Grid) -> io::Result<()> {
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    for pos in Position::all() {
        let (x, y) = cell_screen_pos(pos);
        if pos.col % 3 == 0 && pos.col > 0 {
            execute!(stdout, MoveTo(x - 2, y), Print("│"))?;
        }
        execute!(stdout, MoveTo(x, y), Print(cell_char(grid.get(pos))))?;
    }
    for gap_row in [3u16, 7] {
        execute!(
            stdout,
            MoveTo(BOARD_LEFT, BOARD_TOP + gap_row),
            Print("──────┼───────┼──────")
        )?;
    }
    Ok(())
}

/// Redraw the one cell a solve step touched.
pub fn draw_step(stdout: &mut io::Stdout, step: SolveStep) -> io::Result<()> {
    let (x, y) = cell_screen_pos(step.pos);
    let shown = if step.placed { step.value } else { 0 };
    execute!(stdout, MoveTo(x, y), Print(cell_char(shown)))
}

/// Park the cursor below the board and print a status line.
pub fn draw_status(stdout: &mut io::Stdout, message: &str) -> io::Result<()> {
    execute!(
        stdout,
        MoveTo(0, BOARD_TOP + 12),
        Clear(ClearType::CurrentLine),
        Print(message)
    )
}
