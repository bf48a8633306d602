//! Chunked, line-oriented file reading.
//!
//! Puzzle inputs are processed line by line without pulling the whole file
//! into memory: [`read_file_line_by_line`] reads fixed-size chunks and
//! reassembles them into `\n`-separated lines, handing each line to a caller
//! callback together with an accumulator value that is threaded through the
//! whole read. [`read_entire_file`] is the degenerate companion for callers
//! that want to regex over the entire content at once.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str;

use crate::error::FileError;

/// Chunk size used by [`read_file_line_by_line`] when the caller does not
/// supply one.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Reads `path` line by line with the default chunk size, threading `ctx`
/// through `recv` for every line and returning the final accumulator.
///
/// ```no_run
/// use aoc_core::read_file_line_by_line;
///
/// let total = read_file_line_by_line("input.txt", 0u64, |sum, line| {
///     *sum += line.len() as u64;
/// })?;
/// # Ok::<(), aoc_core::FileError>(())
/// ```
pub fn read_file_line_by_line<C, F>(
    path: impl AsRef<Path>,
    ctx: C,
    recv: F,
) -> Result<C, FileError>
where
    F: FnMut(&mut C, &str),
{
    read_file_line_by_line_buffered(path, ctx, DEFAULT_BUFFER_SIZE, recv)
}

/// Like [`read_file_line_by_line`] but with an explicit chunk size.
///
/// Lines are reassembled identically for every `buffer_size >= 1`, however
/// they fall across chunk boundaries. Splitting happens on raw bytes, so a
/// multi-byte UTF-8 character straddling a boundary is stitched back together
/// before the line is decoded. A missing trailing `\n` still delivers the
/// final line exactly once; a file ending in `\n` does not deliver an extra
/// empty line, and a terminator as the very first byte of the file opens no
/// line. The file handle is dropped on every exit path.
pub fn read_file_line_by_line_buffered<C, F>(
    path: impl AsRef<Path>,
    mut ctx: C,
    buffer_size: usize,
    mut recv: F,
) -> Result<C, FileError>
where
    F: FnMut(&mut C, &str),
{
    let path = path.as_ref();
    let mut file = open(path)?;

    let mut buffer = vec![0u8; buffer_size.max(1)];
    // Unterminated tail carried over from the previous chunk
    let mut leftover: Vec<u8> = Vec::new();
    let mut at_start = true;

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break; // end of file
        }
        let mut chunk = &buffer[..read];

        if chunk.first() == Some(&b'\n') {
            if !leftover.is_empty() {
                // The carried-over tail was actually a complete line;
                // deliver it before splitting the rest of this chunk.
                recv(&mut ctx, str::from_utf8(&leftover)?);
                leftover.clear();
                chunk = &chunk[1..];
            } else if at_start {
                // A terminator as the very first byte of the file opens no
                // line, so a file of just "\n" yields nothing.
                chunk = &chunk[1..];
            }
        }
        at_start = false;

        let segments: Vec<&[u8]> = chunk.split(|&b| b == b'\n').collect();
        let last = segments.len() - 1;
        for (index, segment) in segments.into_iter().enumerate() {
            if index == last {
                // Might be completed by the next chunk, or flushed at EOF.
                // On the first segment this appends to the carried-over tail;
                // later segments always start from an empty leftover.
                leftover.extend_from_slice(segment);
            } else if leftover.is_empty() {
                recv(&mut ctx, str::from_utf8(segment)?);
            } else {
                leftover.extend_from_slice(segment);
                recv(&mut ctx, str::from_utf8(&leftover)?);
                leftover.clear();
            }
        }
    }

    // A non-empty tail at EOF is a final line without a trailing terminator
    if !leftover.is_empty() {
        recv(&mut ctx, str::from_utf8(&leftover)?);
    }

    Ok(ctx)
}

/// Reads the entire file into one string; `""` for an empty file.
pub fn read_entire_file(path: impl AsRef<Path>) -> Result<String, FileError> {
    let mut contents = String::new();
    open(path.as_ref())?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Resolves `file_name` as a sibling of `source_file`, for locating a data
/// file that lives next to the source that uses it:
///
/// ```
/// use aoc_core::source_sibling;
///
/// let input = source_sibling(file!(), "input.txt");
/// ```
pub fn source_sibling(source_file: &str, file_name: &str) -> PathBuf {
    Path::new(source_file)
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(file_name)
}

fn open(path: &Path) -> Result<File, FileError> {
    File::open(path).map_err(|_| FileError::NotFound(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::FileError;

    fn fixture(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn read_lines(contents: &str, buffer_size: usize) -> Vec<String> {
        let file = fixture(contents);
        read_file_line_by_line_buffered(file.path(), Vec::new(), buffer_size, |lines, line| {
            lines.push(line.to_string());
        })
        .unwrap()
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = read_file_line_by_line("no/such/file.txt", (), |_, _| {});
        assert!(matches!(result, Err(FileError::NotFound(_))));
    }

    #[test]
    fn missing_file_is_not_found_for_entire_read() {
        assert!(matches!(
            read_entire_file("no/such/file.txt"),
            Err(FileError::NotFound(_))
        ));
    }

    #[test]
    fn single_line_without_terminator() {
        assert_eq!(
            read_lines("This is a single line", DEFAULT_BUFFER_SIZE),
            vec!["This is a single line"]
        );
    }

    #[test]
    fn empty_file_yields_no_lines() {
        assert_eq!(read_lines("", DEFAULT_BUFFER_SIZE), Vec::<String>::new());
    }

    #[test]
    fn newline_only_file_yields_no_lines() {
        assert_eq!(read_lines("\n", DEFAULT_BUFFER_SIZE), Vec::<String>::new());
        assert_eq!(read_lines("\n", 1), Vec::<String>::new());
    }

    #[test]
    fn leading_terminator_opens_no_line() {
        for buffer_size in [1, 3, DEFAULT_BUFFER_SIZE] {
            assert_eq!(read_lines("\nfirst\n", buffer_size), vec!["first"]);
        }
    }

    #[test]
    fn empty_line_in_the_middle_is_preserved() {
        for buffer_size in 1..="a\n\nb".len() {
            assert_eq!(read_lines("a\n\nb", buffer_size), vec!["a", "", "b"]);
        }
    }

    #[test]
    fn multiple_lines_with_an_empty_one() {
        assert_eq!(
            read_lines("first line\n\nlast line\n", DEFAULT_BUFFER_SIZE),
            vec!["first line", "", "last line"]
        );
    }

    #[test]
    fn trailing_terminator_adds_no_empty_line() {
        assert_eq!(
            read_lines("first line\nsecond line\n", DEFAULT_BUFFER_SIZE),
            vec!["first line", "second line"]
        );
    }

    #[test]
    fn accumulator_is_threaded_through() {
        let file = fixture("ab\ncdef\ng\n");
        let total = read_file_line_by_line(file.path(), 0usize, |sum, line| {
            *sum += line.len();
        })
        .unwrap();
        assert_eq!(total, 7);
    }

    #[test]
    fn multibyte_character_across_chunk_boundary() {
        // Every size from 1 up slices the snowman differently
        let contents = "a☃b\n☃☃\n";
        for buffer_size in 1..=contents.len() {
            assert_eq!(read_lines(contents, buffer_size), vec!["a☃b", "☃☃"]);
        }
    }

    #[test]
    fn read_entire_file_round_trips() {
        let contents = "This is a file\nIt should contain everything";
        let file = fixture(contents);
        assert_eq!(read_entire_file(file.path()).unwrap(), contents);
    }

    #[test]
    fn read_entire_empty_file() {
        let file = fixture("");
        assert_eq!(read_entire_file(file.path()).unwrap(), "");
    }

    #[test]
    fn source_sibling_resolves_next_to_the_source() {
        let path = source_sibling("src/days/day_1.rs", "input.txt");
        assert_eq!(path, Path::new("src/days/input.txt"));
    }
}
