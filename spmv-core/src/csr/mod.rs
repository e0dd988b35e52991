//! Compressed Sparse Row matrix
//!
//! CSR stores:
//! - `row_ptr`: offsets into the entry arrays, `num_rows + 1` long
//! - `col_ind`: column of each stored entry
//! - `values`: value of each stored entry
//!
//! Within a row, entries keep the order in which they appeared in the
//! input. They are not sorted by column, and duplicates are kept as
//! separate entries.

mod builder;

pub use builder::{CsrBuilder, Placement};

use alloc::vec::Vec;
use core::ops::Range;

use crate::format::{Triplet, TripletHeader};
use crate::kernel::CsrView;
use crate::traits::{MatrixElement, MatrixOperations, SparseMatrix};
use crate::validation::validate_csr_layout;
use crate::Result;

/// Compressed Sparse Row matrix, read-only after construction
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CsrMatrix<T> {
    num_rows: usize,
    num_cols: usize,
    row_ptr: Vec<usize>,
    col_ind: Vec<usize>,
    values: Vec<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    col_extent: usize,
}

impl<T: MatrixElement> CsrMatrix<T> {
    /// Create a CSR matrix from raw components
    ///
    /// The arrays are checked with [`validate_csr_layout`]; inconsistent
    /// input yields [`SpmvError::InvalidLayout`](crate::SpmvError::InvalidLayout).
    pub fn from_raw_parts(
        num_rows: usize,
        num_cols: usize,
        row_ptr: Vec<usize>,
        col_ind: Vec<usize>,
        values: Vec<T>,
    ) -> Result<Self> {
        let col_extent = validate_csr_layout(num_rows, num_cols, &row_ptr, &col_ind, values.len())?;
        Ok(Self {
            num_rows,
            num_cols,
            row_ptr,
            col_ind,
            values,
            col_extent,
        })
    }

    /// Build a matrix from in-memory triplets with 0-based indices
    ///
    /// Runs the same two passes as the file builder, over the slice.
    pub fn from_triplets(
        header: TripletHeader,
        triplets: &[Triplet<T>],
        placement: Placement,
    ) -> Result<Self> {
        let mut builder = CsrBuilder::new(header)?.with_placement(placement);
        for (i, triplet) in triplets.iter().enumerate() {
            builder.count(triplet, i + 2)?;
        }
        let mut placer = builder.into_placer()?;
        for triplet in triplets {
            placer.place(triplet)?;
        }
        placer.finish()
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of stored entries
    pub fn num_vals(&self) -> usize {
        self.values.len()
    }

    /// Row pointer array, `num_rows + 1` long
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Column index of each stored entry
    pub fn col_ind(&self) -> &[usize] {
        &self.col_ind
    }

    /// Value of each stored entry
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// One past the largest stored column, 0 when nothing is stored
    pub fn col_extent(&self) -> usize {
        self.col_extent
    }

    /// Index range of a row's entries in `col_ind`/`values`
    pub fn row_range(&self, row: usize) -> Range<usize> {
        self.row_ptr[row]..self.row_ptr[row + 1]
    }

    /// Iterate a row's entries as `(col, value)` in storage order
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        let range = self.row_range(row);
        self.col_ind[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Borrow the arrays as a kernel view
    pub fn view(&self) -> CsrView<'_, T> {
        CsrView::from_validated(
            self.num_rows,
            self.num_cols,
            &self.row_ptr,
            &self.col_ind,
            &self.values,
            self.col_extent,
        )
    }

    /// Take the arrays apart as `(row_ptr, col_ind, values)`
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        (self.row_ptr, self.col_ind, self.values)
    }
}

impl<T: MatrixElement> SparseMatrix for CsrMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.num_rows || col >= self.num_cols {
            return None;
        }

        self.row(row)
            .filter(|&(c, _)| c == col)
            .map(|(_, value)| value)
            .reduce(|acc, value| acc + value)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    fn nnz(&self) -> usize {
        self.values.len()
    }
}

impl<T: MatrixElement> MatrixOperations for CsrMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        if row_index >= self.num_rows {
            return Vec::new();
        }
        self.row(row_index).collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        (0..self.num_rows)
            .flat_map(|row| {
                self.row(row)
                    .filter(move |&(c, _)| c == col_index)
                    .map(move |(_, value)| (row, value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SpmvError;

    fn sample() -> CsrMatrix<f32> {
        // [ 1 0 2 ]
        // [ 0 0 0 ]
        // [ 0 3 0 ]
        CsrMatrix::from_raw_parts(3, 3, vec![0, 2, 2, 3], vec![2, 0, 1], vec![2.0, 1.0, 3.0])
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        let m = sample();
        assert_eq!(m.dimensions(), (3, 3));
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.num_vals(), 3);
        assert_eq!(m.col_extent(), 3);
        assert_eq!(m.row_range(0), 0..2);
        assert_eq!(m.row_range(1), 2..2);
    }

    #[test]
    fn test_get_element() {
        let m = sample();
        assert_eq!(m.get_element(0, 0), Some(1.0));
        assert_eq!(m.get_element(0, 2), Some(2.0));
        assert_eq!(m.get_element(2, 1), Some(3.0));
        assert_eq!(m.get_element(1, 1), None);
        assert_eq!(m.get_element(5, 0), None);
    }

    #[test]
    fn test_get_element_sums_duplicates() {
        let m = CsrMatrix::from_raw_parts(1, 2, vec![0, 2], vec![1, 1], vec![2.5f64, 0.5]).unwrap();
        assert_eq!(m.get_element(0, 1), Some(3.0));
    }

    #[test]
    fn test_rows_keep_storage_order() {
        let m = sample();
        assert_eq!(m.get_row(0), vec![(2, 2.0), (0, 1.0)]);
        assert_eq!(m.get_row(1), vec![]);
        assert_eq!(m.get_row(9), vec![]);
        assert_eq!(m.get_col(0), vec![(0, 1.0)]);
        assert_eq!(m.get_col(1), vec![(2, 3.0)]);
    }

    #[test]
    fn test_from_raw_parts_rejects_bad_layout() {
        let err = CsrMatrix::from_raw_parts(2, 2, vec![0, 1], vec![0], vec![1.0f32]).unwrap_err();
        assert_eq!(err, SpmvError::InvalidLayout);
    }

    #[test]
    fn test_into_parts() {
        let (row_ptr, col_ind, values) = sample().into_parts();
        assert_eq!(row_ptr, vec![0, 2, 2, 3]);
        assert_eq!(col_ind, vec![2, 0, 1]);
        assert_eq!(values, vec![2.0, 1.0, 3.0]);
    }
}
