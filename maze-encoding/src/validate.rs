use std::fmt;

use smallvec::SmallVec;

use crate::grid::Grid;
use crate::walls::Side;

/// A cell that disagrees with at least one in-bounds neighbour about a
/// shared wall.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    pub column: usize,
    pub row: usize,
    /// Sides whose shared-wall check failed, in bit order.
    pub sides: SmallVec<[Side; 4]>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrong encoding for ({},{})", self.column, self.row)
    }
}

/// Sides of `(column, row)` whose wall bit disagrees with the neighbour
/// across that edge.
///
/// Sides facing off the grid are never checked.
pub fn check_cell(grid: &Grid, column: usize, row: usize) -> SmallVec<[Side; 4]> {
    let mut failed = SmallVec::new();
    let Some(walls) = grid.get(column, row) else {
        return failed;
    };
    for side in Side::ALL {
        if let Some(neighbour) = grid.neighbour(column, row, side) {
            if !walls.agrees_with(neighbour, side) {
                failed.push(side);
            }
        }
    }
    failed
}

/// Lazy row-major scan yielding one [`Violation`] per inconsistent cell.
#[derive(Debug, Clone)]
pub struct Violations<'a> {
    grid: &'a Grid,
    next: usize,
}

impl Iterator for Violations<'_> {
    type Item = Violation;

    fn next(&mut self) -> Option<Violation> {
        let total = self.grid.width() * self.grid.height();
        while self.next < total {
            let column = self.next % self.grid.width();
            let row = self.next / self.grid.width();
            self.next += 1;

            let sides = check_cell(self.grid, column, row);
            if !sides.is_empty() {
                return Some(Violation { column, row, sides });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.width() * self.grid.height() - self.next;
        (0, Some(remaining))
    }
}

/// Iterate over every cell whose encoding is inconsistent with a neighbour.
///
/// A cell is reported once however many of its sides fail, in row-major
/// order (top row first, left to right).
pub fn violations(grid: &Grid) -> Violations<'_> {
    Violations { grid, next: 0 }
}

/// Collect all violations of `grid`.
pub fn validate(grid: &Grid) -> Vec<Violation> {
    violations(grid).collect()
}
