//! Loads a character grid into a `Table` and walks it, the way the daily
//! puzzle programs do.
//!
//! Run with a path to a grid input, or with no arguments to use a built-in
//! sample:
//!
//! ```text
//! cargo run --example parse_grid -- path/to/input.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use aoc_core::{Coord, Move, Table, read_file_line_by_line};

const SAMPLE: &str = "#.#.#\n..>..\n#.#.#\n";

fn load_grid(path: &PathBuf) -> Result<Table<char>> {
    let lines = read_file_line_by_line(path, Vec::new(), |lines, line| {
        lines.push(line.to_string());
    })
    .with_context(|| format!("reading {}", path.display()))?;

    let mut table = Table::new();
    for line in &lines {
        table.new_row()?;
        for c in line.chars() {
            table.add_element(c)?;
        }
    }
    table.finalize_row().context("grid rows have uneven widths")?;
    Ok(table)
}

fn main() -> Result<()> {
    let path = match std::env::args().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => {
            let path = std::env::temp_dir().join("parse_grid_sample.txt");
            std::fs::write(&path, SAMPLE)?;
            path
        }
    };

    let grid = load_grid(&path)?;
    println!(
        "{} rows x {} columns",
        grid.num_rows(),
        grid.num_columns()
    );
    print!("{grid}");

    // Find every move marker and report where one step would land
    for row in 0..grid.num_rows() as isize {
        for column in 0..grid.num_columns() as isize {
            let Ok(direction) = Move::try_from(grid[(column, row)]) else {
                continue;
            };
            let here = Coord::new(column as i64, row as i64);
            let next = here.step(direction);
            let target = grid.get(next.x as isize, next.y as isize);
            match target {
                Some(c) => println!("{direction} at {here} steps onto '{c}' at {next}"),
                None => println!("{direction} at {here} steps off the grid"),
            }
        }
    }

    Ok(())
}
