pub mod error;
pub mod walls;
pub mod grid;
pub mod validate;
pub mod report;

pub use error::ParseError;
pub use grid::Grid;
pub use report::Report;
pub use validate::{validate, violations, Violation};
pub use walls::{Side, Walls};
