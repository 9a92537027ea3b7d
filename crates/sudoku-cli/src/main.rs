mod render;

use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use sudoku_engine::{Difficulty, Generator, Grid, Solver};

/// Generate and solve Sudoku puzzles from the terminal.
#[derive(Parser)]
#[command(name = "sudoku", version, about)]
struct Args {
    /// Difficulty level, 1 (easiest) to 5 (hardest)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=5))]
    difficulty: u8,

    /// Seed the generator for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Print the solution after the puzzle
    #[arg(short, long)]
    solve: bool,

    /// Animate the backtracking search in place (implies --solve)
    #[arg(short, long)]
    watch: bool,

    /// Delay between animated steps, in milliseconds
    #[arg(long, default_value_t = 2)]
    delay_ms: u64,

    /// Emit the puzzle (and solution, with --solve) as JSON
    #[arg(long, conflicts_with = "watch")]
    json: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // clap already bounds the range; this is the engine-side boundary check.
    let Some(difficulty) = Difficulty::from_level(args.difficulty) else {
        eprintln!("difficulty must be between 1 and 5");
        std::process::exit(2);
    };

    let mut generator = match args.seed {
        Some(seed) => Generator::with_seed(seed),
        None => Generator::new(),
    };
    let puzzle = generator.generate(difficulty);

    if args.watch {
        return watch_solve(&puzzle, args.delay_ms);
    }

    if args.json {
        return print_json(&puzzle, difficulty, args.solve);
    }

    println!("{} puzzle ({} givens, {} empty):\n", difficulty, puzzle.given_count(), puzzle.empty_count());
    println!("{}", puzzle);

    if args.solve {
        match Solver::new().solve(&puzzle) {
            Some(solution) => {
                println!("Solution:\n");
                println!("{}", solution);
            }
            None => eprintln!("no solution found (generated puzzles always solve)"),
        }
    }

    Ok(())
}

fn print_json(puzzle: &Grid, difficulty: Difficulty, solve: bool) -> io::Result<()> {
    let mut doc = serde_json::json!({
        "difficulty": difficulty.level(),
        "puzzle": puzzle,
    });
    if solve {
        if let Some(solution) = Solver::new().solve(puzzle) {
            doc["solution"] = serde_json::to_value(solution)?;
        }
    }
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Animate the solver over the generated puzzle, redrawing each tentative
/// placement and undo as the step observer reports it.
fn watch_solve(puzzle: &Grid, delay_ms: u64) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Hide)?;

    let result = (|| -> io::Result<()> {
        render::draw_board(&mut stdout, puzzle)?;
        render::draw_status(&mut stdout, "solving...")?;
        stdout.flush()?;

        let mut working = puzzle.clone();
        let mut steps = 0usize;
        let mut draw_error = None;
        let outcome = Solver::new().solve_with_steps(&mut working, &mut |step| {
            steps += 1;
            if draw_error.is_none() {
                if let Err(e) = render::draw_step(&mut stdout, step) {
                    draw_error = Some(e);
                    return;
                }
                let _ = io::stdout().flush();
                if delay_ms > 0 {
                    thread::sleep(Duration::from_millis(delay_ms));
                }
            }
        });
        if let Some(e) = draw_error {
            return Err(e);
        }

        let message = if outcome.is_solved() {
            format!("solved in {} steps", steps)
        } else {
            format!("unsolvable after {} steps", steps)
        };
        render::draw_status(&mut stdout, &message)?;
        writeln!(io::stdout())?;
        Ok(())
    })();

    execute!(io::stdout(), Show)?;
    result
}
