//! Row-major matrix types.

use std::fmt;

use crate::vector::*;

/// Opaque (row, column) selector of the generalized matrix indexer, rendered
/// as `_mRC` in shader code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// # Panics
    /// If `row` or `col` is not below 4.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 4 && col < 4, "matrix cell out of range");

        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_m{}{}", self.row, self.col)
    }
}

splinter_macro::matrices! {
    Float(f32),
}
