use thiserror::Error;

/// Why a maze grid could not be built.
///
/// `line` and text `column` numbers are 1-based positions in the input text.
/// `row` and the `column` of [`ParseError::OutOfRange`] are 0-based grid
/// coordinates, used when building from in-memory rows.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read maze input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid character '{found}' at line {line}, column {column}: expected a hexadecimal digit")]
    InvalidDigit {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("row on line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell value {value} at ({column},{row}) does not fit in 4 bits")]
    OutOfRange { column: usize, row: usize, value: u8 },

    #[error("maze grid is empty")]
    Empty,
}
