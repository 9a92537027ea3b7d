//! Basic example of using the Sudoku engine

use sudoku_engine::{Difficulty, Generator, Grid, SolutionCounter, Solver};

fn main() {
    // Generate a puzzle
    println!("Generating a Medium difficulty puzzle...\n");
    let mut generator = Generator::new();
    let puzzle = generator.generate(Difficulty::Medium);

    println!("Generated puzzle:");
    println!("{}", puzzle);

    // Show some stats
    println!("Given cells: {}", puzzle.given_count());
    println!("Empty cells: {}", puzzle.empty_count());

    // Solve it
    println!("\nSolving...\n");
    if let Some(solution) = Solver::new().solve(&puzzle) {
        println!("Solution:");
        println!("{}", solution);
    } else {
        println!("No solution found (this shouldn't happen for a generated puzzle!)");
    }

    // Watch the search work: count tentative placements and undos
    let mut placements = 0;
    let mut undos = 0;
    let mut working = puzzle.clone();
    Solver::new().solve_with_steps(&mut working, &mut |step| {
        if step.placed {
            placements += 1;
        } else {
            undos += 1;
        }
    });
    println!("Search made {} placements and {} undos", placements, undos);

    // Parse a puzzle from a string
    println!("\n--- Parsing a puzzle from string ---\n");
    let puzzle_string =
        "700400120600075009000001078007040260001050930904060005070300012120007400040000000";
    if let Some(grid) = Grid::from_string(puzzle_string) {
        println!("Parsed puzzle (consistent: {}):", grid.is_valid());
        println!("{}", grid);

        // Check uniqueness
        let solutions = SolutionCounter::new().count(&mut grid.clone());
        println!("Number of solutions: {}", solutions);
    }
}
