//! Helpers for turning puzzle input text into data, with errors that point at the offending line.

use std::iter::{Enumerate, Peekable};
use std::str::{FromStr, Lines};

use nalgebra::{DMatrix, Scalar};
use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string failed to parse; keeps the string for the error message.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    string: String,
    source: E,
}

/// Parse a string slice with [`str::parse`], attaching the string to any error.
///
/// # Errors
///
/// Returns a [`ParseContextError`] sourcing [`F::Err`][FromStr::Err] when parsing fails.
///
/// # Examples
///
/// ```
/// use advent_framework::parsing::parse_with_context;
///
/// let value: u8 = parse_with_context("42").unwrap();
/// assert_eq!(value, 42);
///
/// let error = parse_with_context::<u8>("forty-two").unwrap_err();
/// assert_eq!(error.to_string(), "failed to parse string: \"forty-two\"");
/// ```
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_owned(),
        source,
    })
}

/// A line of input could not be parsed.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// Zero based; displayed one based.
    line_index: usize,
    source: DynamicError,
}

impl InvalidLine {
    /// The one based line number of the failure.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_index.saturating_add(1)
    }
}

/// Parse every line of `input` with `parser`, which receives the zero based line index and the
/// line.
///
/// # Errors
///
/// Each failing line yields an [`InvalidLine`] wrapping the parser's error.
pub fn parse_input_lines<T, F>(
    input: &str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(usize, &str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine { line_index, source })
    })
}

/// Errors building a character grid.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("expected grid width to be {expected} across rows, but found row width {found}")]
    UnequalWidth { expected: usize, found: usize },
}

/// Tracks the width of the first row so later rows can be checked against it.
struct GridRows<T> {
    rows: Vec<Vec<T>>,
    width: Option<usize>,
}

impl<T: Scalar> GridRows<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            width: None,
        }
    }

    fn push_line<F>(&mut self, line: &str, cell_parser: &mut F) -> DynamicResult<()>
    where
        F: FnMut(char) -> DynamicResult<T>,
    {
        let row = line.chars().map(&mut *cell_parser).collect::<Result<Vec<_>, _>>()?;
        match self.width {
            Some(expected) if expected != row.len() => {
                return Err(GridError::UnequalWidth {
                    expected,
                    found: row.len(),
                }
                .into());
            }
            Some(_) => {}
            None => self.width = Some(row.len()),
        }
        self.rows.push(row);
        Ok(())
    }

    fn into_matrix(self) -> Result<DMatrix<T>, GridError> {
        let width = self.width.filter(|&width| width > 0).ok_or(GridError::EmptyGrid)?;
        Ok(DMatrix::from_row_iterator(
            self.rows.len(),
            width,
            self.rows.into_iter().flatten(),
        ))
    }
}

/// Parse a rectangular character grid into a matrix indexed by `(row, column)`.
///
/// # Errors
///
/// Fails with an [`InvalidLine`] if a cell fails to parse or a row's width differs from the first
/// row, or with [`GridError::EmptyGrid`] when there are no cells. Trailing blank lines are
/// ignored.
///
/// # Examples
///
/// ```
/// use advent_framework::parsing::parse_grid;
///
/// let grid = parse_grid("#.\n.#\n", |c| Ok(c == '#')).unwrap();
/// assert_eq!(grid.shape(), (2, 2));
/// assert!(grid[(1, 1)]);
/// assert!(!grid[(0, 1)]);
/// ```
pub fn parse_grid<T, F>(input: &str, mut cell_parser: F) -> DynamicResult<DMatrix<T>>
where
    T: Scalar,
    F: FnMut(char) -> DynamicResult<T>,
{
    let mut rows = GridRows::new();
    let input = input.trim_end_matches(['\n', '\r']);
    parse_input_lines(input, |_, line| rows.push_line(line, &mut cell_parser))
        .collect::<Result<(), _>>()?;
    Ok(rows.into_matrix()?)
}

/// Scans input made of blocks of lines separated by blank lines.
///
/// Line numbers are kept so that errors point into the original input.
pub struct InputScanner<'a> {
    lines: Peekable<Enumerate<Lines<'a>>>,
}

impl<'a> InputScanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate().peekable(),
        }
    }

    /// Skip blank lines. Returns whether any line remains.
    pub fn skip_empty(&mut self) -> bool {
        while self.lines.next_if(|(_, line)| line.trim().is_empty()).is_some() {}
        self.lines.peek().is_some()
    }

    /// Parse the next line of the current block.
    ///
    /// Returns `None` without consuming anything if input is exhausted or the next line is blank.
    ///
    /// # Errors
    ///
    /// The parser's error is wrapped in an [`InvalidLine`].
    pub fn next_item<T, F>(&mut self, parser: F) -> Result<Option<T>, InvalidLine>
    where
        F: FnOnce(usize, &str) -> DynamicResult<T>,
    {
        match self.lines.next_if(|(_, line)| !line.trim().is_empty()) {
            Some((line_index, line)) => parser(line_index, line)
                .map(Some)
                .map_err(|source| InvalidLine { line_index, source }),
            None => Ok(None),
        }
    }

    /// Parse all lines of the current block, consuming the blank line that ends it.
    ///
    /// # Errors
    ///
    /// The first parser error is wrapped in an [`InvalidLine`].
    pub fn collect_sequence<T, F>(&mut self, mut parser: F) -> Result<Vec<T>, InvalidLine>
    where
        F: FnMut(usize, &str) -> DynamicResult<T>,
    {
        let mut items = Vec::new();
        while let Some(item) = self.next_item(&mut parser)? {
            items.push(item);
        }
        // drop the separator, if any
        self.lines.next();
        Ok(items)
    }

    /// Parse the current block as a rectangular grid, see [`parse_grid`].
    ///
    /// # Errors
    ///
    /// Same failures as [`parse_grid`].
    pub fn collect_grid<T, F>(&mut self, mut cell_parser: F) -> DynamicResult<DMatrix<T>>
    where
        T: Scalar,
        F: FnMut(char) -> DynamicResult<T>,
    {
        let mut rows = GridRows::new();
        self.collect_sequence(|_, line| rows.push_line(line, &mut cell_parser))?;
        Ok(rows.into_matrix()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_line_reports_one_based_number() {
        let result: Result<Vec<u32>, _> =
            parse_input_lines("1\n2\nthree\n", |_, line| Ok(parse_with_context(line)?)).collect();
        let error = result.expect_err("third line should fail");
        assert_eq!(error.line_number(), 3);
        assert_eq!(error.to_string(), "failure parsing line 3");
    }

    #[test]
    fn grid_rejects_ragged_rows() {
        let result = parse_grid("...\n..\n", |c| Ok(c));
        assert!(result.is_err());
    }

    #[test]
    fn grid_ignores_trailing_blank_lines() -> DynamicResult<()> {
        let grid = parse_grid("#.\n.#\n\n", |c| Ok(c == '#'))?;
        assert_eq!(grid.shape(), (2, 2));
        let grid = parse_grid("#.\r\n.#\r\n\r\n\r\n", |c| Ok(c == '#'))?;
        assert_eq!(grid.shape(), (2, 2));
        Ok(())
    }

    #[test]
    fn grid_rejects_empty_input() {
        let result = parse_grid("", |c| Ok(c));
        assert!(result.is_err());
    }

    #[test]
    fn grid_is_indexed_by_row_then_column() -> DynamicResult<()> {
        let grid = parse_grid("abc\ndef\n", |c| Ok(c))?;
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid[(0, 2)], 'c');
        assert_eq!(grid[(1, 0)], 'd');
        Ok(())
    }

    #[test]
    fn scanner_walks_blocks() -> DynamicResult<()> {
        let input = "a\nb\n\n\n1\n2\n3\n\n#.\n.#\n";
        let mut scanner = InputScanner::new(input);

        let letters = scanner.collect_sequence(|_, line| Ok(line.to_owned()))?;
        assert_eq!(letters, vec!["a", "b"]);

        assert!(scanner.skip_empty());
        let first: Option<u8> = scanner.next_item(|_, line| Ok(line.parse()?))?;
        assert_eq!(first, Some(1));
        let rest: Vec<u8> = scanner.collect_sequence(|_, line| Ok(line.parse()?))?;
        assert_eq!(rest, vec![2, 3]);

        let grid = scanner.collect_grid(|c| Ok(c == '#'))?;
        assert_eq!(grid.shape(), (2, 2));
        assert!(!scanner.skip_empty());
        Ok(())
    }

    #[test]
    fn scanner_errors_keep_original_line_number() {
        let mut scanner = InputScanner::new("1\n\nx\n");
        let _ = scanner.collect_sequence(|_, line| Ok(parse_with_context::<u8>(line)?));
        let error = scanner
            .collect_sequence(|_, line| Ok(parse_with_context::<u8>(line)?))
            .expect_err("third line should fail");
        assert_eq!(error.line_number(), 3);
    }
}
