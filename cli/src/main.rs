//! Interactive console front end for the minegrid board engine.
//!
//! Prompts for the grid size and mine count (or takes them as flags), then
//! loops: render the player-visible board, read an `A1`-style coordinate,
//! reveal it, and report the result until the game is won or lost.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use minegrid_core::{
    Board, CellCount, Coord, GameConfig, Pos, RandomMineGenerator, RevealOutcome, cell_total,
    row_index, row_label,
};

/// Maximum share of cells that may hold mines, in percent.
const MAX_MINE_PERCENTAGE: u32 = 35;

#[derive(Parser, Debug)]
#[command(version, about = "Text-based single-player Minesweeper")]
struct Args {
    /// Grid size, producing a size x size board (prompted when absent)
    #[arg(short, long)]
    size: Option<Coord>,

    /// Number of mines to place (prompted when absent)
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Welcome to Minesweeper!");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let size = match args.size {
        Some(size) => size,
        None => prompt_size(&mut input)?,
    };
    let mines = match args.mines {
        Some(mines) => mines,
        None => prompt_mines(&mut input, size)?,
    };
    if exceeds_mine_cap(size, mines) {
        bail!(
            "too many mines: maximum is {}% of {} squares",
            MAX_MINE_PERCENTAGE,
            cell_total(size, size)
        );
    }

    let config = GameConfig::new(size, size, mines)?;
    let mut board = Board::new(config);
    let mut generator = match args.seed {
        Some(seed) => RandomMineGenerator::from_seed(seed),
        None => RandomMineGenerator::from_entropy(),
    };
    board.plant_mines(&mut generator)?;
    board.compute_display();
    log::debug!("game set up with size {} and {} mines", size, mines);

    run_game(&mut board, &mut input)
}

fn run_game(board: &mut Board, input: &mut impl BufRead) -> Result<()> {
    let mut first_print = true;

    loop {
        render(board, false, first_print);
        first_print = false;

        print!("Select a square to reveal (e.g. A1): ");
        io::stdout().flush().context("could not flush stdout")?;

        let Some(line) = read_line(input)? else {
            bail!("input closed before the game ended");
        };

        let pos = match parse_square(line.trim(), board.bounds()) {
            Ok(pos) => pos,
            Err(reason) => {
                println!("{reason}");
                continue;
            }
        };

        match board.reveal(pos) {
            RevealOutcome::Detonated => {
                println!("Oh no, you detonated a mine! Game over.");
                render(board, true, false);
                return Ok(());
            }
            RevealOutcome::Cleared(_) => {
                render(board, true, false);
                println!("Congratulations, you have won the game!");
                return Ok(());
            }
            RevealOutcome::Revealed(symbol) => {
                println!("This square contains {symbol} adjacent mines.");
            }
            RevealOutcome::Ignored => {
                println!("That square is already revealed.");
            }
        }
    }
}

/// Renders the player-visible board, or the full board when `show_all`.
fn render(board: &Board, show_all: bool, first_print: bool) {
    if first_print {
        println!("\nHere is your minefield:");
    } else {
        println!("\nHere is your updated minefield:");
    }

    let (rows, cols) = board.bounds();
    let snapshot = board.display_snapshot(show_all);

    print!("  ");
    for col in 0..cols {
        print!("{col} ");
    }
    println!();
    for row in 0..rows {
        let label = row_label(row).unwrap_or('?');
        print!("{label} ");
        for col in 0..cols {
            print!("{} ", snapshot[[usize::from(row), usize::from(col)]]);
        }
        println!();
    }
}

/// Parses an `A1`-style coordinate, validating bounds before the engine is
/// ever called. Returns a message suitable for re-prompting on failure.
fn parse_square(text: &str, bounds: Pos) -> std::result::Result<Pos, &'static str> {
    let mut chars = text.chars();
    let (Some(row_char), col_text) = (chars.next(), chars.as_str()) else {
        return Err("Invalid input.");
    };
    let Some(row) = row_index(row_char) else {
        return Err("Invalid input.");
    };
    let Ok(col) = col_text.parse::<Coord>() else {
        return Err("Invalid input.");
    };
    if row >= bounds.0 || col >= bounds.1 {
        return Err("Coordinates out of bounds.");
    }
    Ok((row, col))
}

fn prompt_size(input: &mut impl BufRead) -> Result<Coord> {
    loop {
        println!("Enter the size of the grid (e.g. 4 for a 4x4 grid):");
        let Some(line) = read_line(input)? else {
            bail!("input closed during setup");
        };
        match line.trim().parse::<Coord>() {
            Ok(size) if size > 0 => return Ok(size),
            _ => println!("Invalid input."),
        }
    }
}

fn prompt_mines(input: &mut impl BufRead, size: Coord) -> Result<CellCount> {
    loop {
        println!(
            "Enter the number of mines to place on the grid (maximum is {}% of the total squares):",
            MAX_MINE_PERCENTAGE
        );
        let Some(line) = read_line(input)? else {
            bail!("input closed during setup");
        };
        match line.trim().parse::<CellCount>() {
            Ok(mines) if !exceeds_mine_cap(size, mines) => return Ok(mines),
            Ok(_) => println!("Too many mines! Please try again."),
            Err(_) => println!("Invalid input."),
        }
    }
}

/// The 35% cap is a front-end convention; the engine itself only rejects
/// mine counts above the cell count.
fn exceeds_mine_cap(size: Coord, mines: CellCount) -> bool {
    let cells = u32::from(cell_total(size, size));
    u32::from(mines) * 100 > cells * MAX_MINE_PERCENTAGE
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("could not read input")?;
    Ok((bytes > 0).then_some(line))
}
