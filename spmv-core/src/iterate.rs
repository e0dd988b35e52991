//! Repeated SpMV with explicit double buffering
//!
//! Each step computes `scratch = A·current`, swaps the two buffers and
//! zeroes the one that became scratch. There is no convergence test: the
//! loop always runs the requested number of steps.

use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use crate::kernel::{spmv, CsrView};
use crate::traits::MatrixElement;
use crate::Result;

/// Input and output vectors of the repeated product
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleBuffer<T> {
    current: Vec<T>,
    scratch: Vec<T>,
}

impl<T: MatrixElement> DoubleBuffer<T> {
    /// All-ones input and all-zero output of length `len`
    pub fn new(len: usize) -> Self {
        Self::with_initial(vec![T::one(); len])
    }

    /// Start from a given input vector; the output starts zeroed
    pub fn with_initial(initial: Vec<T>) -> Self {
        let scratch = vec![T::zero(); initial.len()];
        Self {
            current: initial,
            scratch,
        }
    }

    /// Vector that the next step reads; after a step, its result
    pub fn current(&self) -> &[T] {
        &self.current
    }

    /// Output buffer of the next step; all zeros between steps
    pub fn scratch(&self) -> &[T] {
        &self.scratch
    }

    /// Run one product and make its result the next input
    pub fn step(&mut self, a: &CsrView<'_, T>) -> Result<()> {
        spmv(a, &self.current, &mut self.scratch)?;
        mem::swap(&mut self.current, &mut self.scratch);
        self.scratch.fill(T::zero());
        Ok(())
    }

    /// Take the current vector
    pub fn into_current(self) -> Vec<T> {
        self.current
    }
}

/// Apply `x <- A·x` exactly `repetitions` times
///
/// Returns the number of steps executed. With zero repetitions the buffers
/// are left untouched.
pub fn iterate<T: MatrixElement>(
    a: &CsrView<'_, T>,
    buffers: &mut DoubleBuffer<T>,
    repetitions: usize,
) -> Result<usize> {
    for _ in 0..repetitions {
        buffers.step(a)?;
    }
    Ok(repetitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csr::{CsrMatrix, Placement};
    use crate::format::TextSource;
    use crate::SpmvError;

    fn matrix(text: &str) -> CsrMatrix<f32> {
        CsrMatrix::from_source(&mut TextSource::new(text), Placement::Cursor).unwrap()
    }

    #[test]
    fn test_zero_repetitions_keeps_ones() {
        let m = matrix("2 2 2\n1 1 3.0\n2 2 4.0\n");
        let mut buffers = DoubleBuffer::new(2);
        assert_eq!(iterate(&m.view(), &mut buffers, 0), Ok(0));
        assert_eq!(buffers.current(), &[1.0, 1.0]);
        assert_eq!(buffers.scratch(), &[0.0, 0.0]);
    }

    #[test]
    fn test_diagonal_squares() {
        let m = matrix("2 2 2\n1 1 3.0\n2 2 4.0\n");
        let mut buffers = DoubleBuffer::new(2);
        iterate(&m.view(), &mut buffers, 1).unwrap();
        assert_eq!(buffers.current(), &[3.0, 4.0]);

        iterate(&m.view(), &mut buffers, 1).unwrap();
        assert_eq!(buffers.current(), &[9.0, 16.0]);
        assert_eq!(buffers.scratch(), &[0.0, 0.0]);
    }

    #[test]
    fn test_zero_row_is_absorbing() {
        // row 2 has no entries
        let m = matrix("3 3 3\n1 1 2.0\n1 3 1.0\n3 2 1.0\n");
        let mut buffers = DoubleBuffer::new(3);
        for _ in 0..5 {
            buffers.step(&m.view()).unwrap();
            assert_eq!(buffers.current()[1], 0.0);
        }
        assert_eq!(buffers.current(), &[56.0, 0.0, 0.0]);
    }

    #[test]
    fn test_steps_do_not_accumulate() {
        let m = matrix("1 1 1\n1 1 1.0\n");
        let mut buffers = DoubleBuffer::new(1);
        assert_eq!(iterate(&m.view(), &mut buffers, 10), Ok(10));
        assert_eq!(buffers.into_current(), vec![1.0]);
    }

    #[test]
    fn test_deterministic() {
        let text = "3 3 5\n1 2 0.3\n2 1 0.7\n3 3 1.1\n1 1 0.9\n2 3 0.2\n";
        let run = || {
            let m = matrix(text);
            let mut buffers = DoubleBuffer::new(3);
            iterate(&m.view(), &mut buffers, 25).unwrap();
            buffers.into_current()
        };
        let first = run();
        let second = run();
        assert_eq!(
            first.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            second.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_wide_matrix_rejected() {
        // column 3 cannot be read from a length-2 vector
        let m = matrix("2 3 1\n1 3 1.0\n");
        let mut buffers = DoubleBuffer::new(m.num_rows());
        assert_eq!(
            iterate(&m.view(), &mut buffers, 1),
            Err(SpmvError::DimensionMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(iterate(&m.view(), &mut buffers, 0), Ok(0));
    }
}
