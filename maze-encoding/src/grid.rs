use std::io::BufRead;
use std::str::FromStr;

use crate::error::ParseError;
use crate::walls::{Side, Walls};

/// Whitespace stripped from both ends of a row before decoding its digits.
const ROW_PADDING: &[char] = &[' ', '\t', '\r', '\n'];

/// A rectangular, non-empty grid of cell wall encodings.
///
/// Cells are stored row-major; row 0 is the top row and column 0 the left
/// column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Walls>,
}

impl Grid {
    /// Build a grid from raw rows of 4-bit values.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Grid, ParseError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ParseError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != width {
                return Err(ParseError::RowLength {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (column, &value) in values.iter().enumerate() {
                let walls = Walls::new(value).ok_or(ParseError::OutOfRange { column, row, value })?;
                cells.push(walls);
            }
        }

        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Parse the textual maze format from a reader.
    ///
    /// Rows are read until end of input or the first blank line; whatever
    /// follows the blank line is not consumed. Each row is one hexadecimal
    /// digit per cell with optional surrounding spaces, tabs or CR.
    /// Bytes that are not valid UTF-8 decode to U+FFFD and are reported as
    /// [`ParseError::InvalidDigit`] at their position.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Grid, ParseError> {
        let mut width = 0;
        let mut cells = Vec::new();
        let mut height = 0;
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                break;
            }

            let content = line.trim_matches(ROW_PADDING);
            let lead = line.chars().count()
                - line.trim_start_matches(ROW_PADDING).chars().count();

            let start = cells.len();
            for (i, c) in content.chars().enumerate() {
                let walls = Walls::from_hex_digit(c).ok_or(ParseError::InvalidDigit {
                    line: line_no,
                    column: lead + i + 1,
                    found: c,
                })?;
                cells.push(walls);
            }

            let found = cells.len() - start;
            if height == 0 {
                width = found;
            } else if found != width {
                return Err(ParseError::RaggedRow {
                    line: line_no,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        if height == 0 {
            return Err(ParseError::Empty);
        }

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Encoding of the cell at `(column, row)`, if in bounds.
    pub fn get(&self, column: usize, row: usize) -> Option<Walls> {
        if column < self.width && row < self.height {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// Encoding of the neighbour on `side` of `(column, row)`.
    ///
    /// `None` when that neighbour would lie outside the grid.
    pub fn neighbour(&self, column: usize, row: usize, side: Side) -> Option<Walls> {
        let (dx, dy) = side.offset();
        let column = column.checked_add_signed(dx)?;
        let row = row.checked_add_signed(dy)?;
        self.get(column, row)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Walls]> {
        self.cells.chunks_exact(self.width)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Grid, ParseError> {
        Grid::from_reader(s.as_bytes())
    }
}
