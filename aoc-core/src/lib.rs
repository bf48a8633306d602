//! Core utilities shared by Advent of Code puzzle solutions
//!
//! Each day's puzzle is an independent program; the pieces they all reuse live
//! here:
//!
//! - [`Table`]: a generic two-dimensional grid built one row at a time while
//!   streaming an input file, with a self-discovered fixed width,
//!   bounds-checked and bounds-tolerant access, and in-place mutation.
//! - [`read_file_line_by_line`]: a chunked line reader that hands each line to
//!   a callback together with an accumulator, without holding the whole file
//!   in memory. [`read_entire_file`] is the whole-content companion.
//! - [`Coord`], [`Coord3`] and [`Move`]: grid positions and the four cardinal
//!   moves that most grid puzzles traffic in.
//!
//! # Quick Example
//!
//! ```no_run
//! use aoc_core::{Table, read_file_line_by_line};
//!
//! fn load_grid(path: &str) -> Result<Table<char>, anyhow::Error> {
//!     let lines = read_file_line_by_line(path, Vec::new(), |lines, line| {
//!         lines.push(line.to_string());
//!     })?;
//!
//!     let mut table = Table::new();
//!     for line in &lines {
//!         table.new_row()?;
//!         for c in line.chars() {
//!             table.add_element(c)?;
//!         }
//!     }
//!     table.finalize_row()?;
//!     Ok(table)
//! }
//! ```
//!
//! # Error Handling
//!
//! Two error kinds cover the library: [`FileError`] for anything file-shaped
//! (a missing input, an I/O failure mid-read, undecodable bytes) and
//! [`TableError`] for violations of the table construction protocol. The
//! latter are programmer errors, reported immediately and never auto-corrected.

mod coord;
mod error;
mod reader;
mod table;

pub use coord::{Coord, Coord3, Move};
pub use error::{FileError, TableError};
pub use reader::{
    DEFAULT_BUFFER_SIZE, read_entire_file, read_file_line_by_line,
    read_file_line_by_line_buffered, source_sibling,
};
pub use table::Table;
