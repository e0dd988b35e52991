//! Core matrix abstraction traits
//!
//! These traits give format-agnostic read access to a sparse matrix. The
//! CSR matrix built by this crate is the only implementor today, but tests
//! and callers are written against the traits.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get the element at the specified position
    ///
    /// Returns `None` if nothing is stored at the position or if the
    /// position is out of bounds. Duplicate entries at the same position
    /// are summed.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries, duplicates included
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column operations (requires alloc feature)
#[cfg(feature = "alloc")]
pub trait MatrixOperations: SparseMatrix {
    /// Get all stored entries of a row as `(col, value)` in storage order
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all stored entries of a column as `(row, value)` in row order
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
