//! Validation summary for one grid.
use std::fmt;

use crate::grid::Grid;
use crate::validate::{self, Violation};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub width: usize,
    pub height: usize,
    pub violations: Vec<Violation>,
}

impl Report {
    /// Validate `grid` and capture the result.
    pub fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            violations: validate::validate(grid),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }
}

/// One `Wrong encoding for (column,row)` line per violation.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.violations {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}
