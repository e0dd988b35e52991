//! Sparse matrix-vector product over borrowed CSR arrays
//!
//! The kernel works on a [`CsrView`] so it needs no allocation. Buffer
//! lengths are checked once per call against the dimensions cached in the
//! view; the inner loop then indexes without further validation logic.

use crate::traits::MatrixElement;
use crate::validation::validate_csr_layout;
use crate::{Result, SpmvError};

/// Borrowed, validated CSR arrays
#[derive(Debug, Clone, Copy)]
pub struct CsrView<'a, T> {
    num_rows: usize,
    num_cols: usize,
    row_ptr: &'a [usize],
    col_ind: &'a [usize],
    values: &'a [T],
    col_extent: usize,
}

impl<'a, T: MatrixElement> CsrView<'a, T> {
    /// Create a view over raw CSR arrays, validating their layout
    ///
    /// The row count is taken from `row_ptr.len() - 1`.
    pub fn new(
        num_cols: usize,
        row_ptr: &'a [usize],
        col_ind: &'a [usize],
        values: &'a [T],
    ) -> Result<Self> {
        let num_rows = row_ptr.len().checked_sub(1).ok_or(SpmvError::InvalidLayout)?;
        let col_extent = validate_csr_layout(num_rows, num_cols, row_ptr, col_ind, values.len())?;
        Ok(Self::from_validated(
            num_rows, num_cols, row_ptr, col_ind, values, col_extent,
        ))
    }

    /// Create a view over arrays already known to satisfy the CSR invariants
    pub(crate) const fn from_validated(
        num_rows: usize,
        num_cols: usize,
        row_ptr: &'a [usize],
        col_ind: &'a [usize],
        values: &'a [T],
        col_extent: usize,
    ) -> Self {
        Self {
            num_rows,
            num_cols,
            row_ptr,
            col_ind,
            values,
            col_extent,
        }
    }

    /// Number of rows
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub const fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// One past the largest stored column index
    ///
    /// The input vector of [`spmv`] must be at least this long.
    pub const fn col_extent(&self) -> usize {
        self.col_extent
    }

    /// Row pointer array
    pub const fn row_ptr(&self) -> &'a [usize] {
        self.row_ptr
    }

    /// Column index array
    pub const fn col_ind(&self) -> &'a [usize] {
        self.col_ind
    }

    /// Value array
    pub const fn values(&self) -> &'a [T] {
        self.values
    }
}

/// Compute `y = A·x`
///
/// `y` must have exactly `num_rows` entries and `x` must cover every stored
/// column. Each `y[i]` is overwritten with the dot product of row `i`,
/// accumulated in storage order.
pub fn spmv<T: MatrixElement>(a: &CsrView<'_, T>, x: &[T], y: &mut [T]) -> Result<()> {
    if y.len() != a.num_rows {
        return Err(SpmvError::DimensionMismatch {
            expected: a.num_rows,
            actual: y.len(),
        });
    }
    if x.len() < a.col_extent {
        return Err(SpmvError::DimensionMismatch {
            expected: a.col_extent,
            actual: x.len(),
        });
    }

    for (out, bounds) in y.iter_mut().zip(a.row_ptr.windows(2)) {
        let (start, end) = (bounds[0], bounds[1]);
        let mut dot = T::zero();
        for (&col, &value) in a.col_ind[start..end].iter().zip(&a.values[start..end]) {
            dot += value * x[col];
        }
        *out = dot;
    }

    Ok(())
}
