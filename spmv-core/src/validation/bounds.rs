//! Index bounds and CSR layout validation

use crate::format::constants::INDEX_BASE;
use crate::format::TripletHeader;
use crate::{Result, SpmvError};

/// Check a triplet's on-disk (1-based) indices and convert them to 0-based
///
/// Index 0 and indices past the declared dimensions are rejected. With a
/// declared row count of zero every triplet is rejected.
pub fn validate_triplet_bounds(
    row: usize,
    col: usize,
    header: &TripletHeader,
    line: usize,
) -> Result<(usize, usize)> {
    let out_of_bounds = SpmvError::IndexOutOfBounds { line, row, col };

    let row0 = row.checked_sub(INDEX_BASE).ok_or(out_of_bounds)?;
    let col0 = col.checked_sub(INDEX_BASE).ok_or(out_of_bounds)?;
    if !header.contains(row0, col0) {
        return Err(out_of_bounds);
    }

    Ok((row0, col0))
}

/// Validate the three CSR arrays against each other
///
/// Checks that `row_ptr` has `num_rows + 1` entries, starts at 0, never
/// decreases and ends at the number of stored entries; that `col_ind` and
/// `values` have that many entries; and that every column is below
/// `num_cols`. Returns the column extent: one past the largest stored
/// column, or 0 for a matrix with no entries.
pub fn validate_csr_layout(
    num_rows: usize,
    num_cols: usize,
    row_ptr: &[usize],
    col_ind: &[usize],
    values_len: usize,
) -> Result<usize> {
    if row_ptr.len() != num_rows + 1 || row_ptr[0] != 0 {
        return Err(SpmvError::InvalidLayout);
    }
    if row_ptr.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(SpmvError::InvalidLayout);
    }
    let num_vals = row_ptr[num_rows];
    if col_ind.len() != num_vals || values_len != num_vals {
        return Err(SpmvError::InvalidLayout);
    }

    let mut extent = 0;
    for &col in col_ind {
        if col >= num_cols {
            return Err(SpmvError::InvalidLayout);
        }
        extent = extent.max(col + 1);
    }

    Ok(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_triplet_bounds() {
        let header = TripletHeader::new(2, 3, 0);
        assert_eq!(validate_triplet_bounds(1, 1, &header, 2), Ok((0, 0)));
        assert_eq!(validate_triplet_bounds(2, 3, &header, 2), Ok((1, 2)));

        assert_eq!(
            validate_triplet_bounds(0, 1, &header, 2),
            Err(SpmvError::IndexOutOfBounds { line: 2, row: 0, col: 1 })
        );
        assert_eq!(
            validate_triplet_bounds(3, 1, &header, 9),
            Err(SpmvError::IndexOutOfBounds { line: 9, row: 3, col: 1 })
        );
    }

    #[test]
    fn test_zero_rows_rejects_everything() {
        let header = TripletHeader::new(0, 4, 1);
        assert!(validate_triplet_bounds(1, 1, &header, 2).is_err());
    }

    #[test]
    fn test_validate_csr_layout() {
        assert_eq!(validate_csr_layout(2, 2, &[0, 1, 2], &[0, 1], 2), Ok(2));
        assert_eq!(validate_csr_layout(3, 5, &[0, 0, 2, 2], &[3, 0], 2), Ok(4));
        assert_eq!(validate_csr_layout(0, 0, &[0], &[], 0), Ok(0));

        // wrong row_ptr length
        assert_eq!(
            validate_csr_layout(2, 2, &[0, 2], &[0, 1], 2),
            Err(SpmvError::InvalidLayout)
        );
        // decreasing row_ptr
        assert_eq!(
            validate_csr_layout(2, 2, &[0, 2, 1], &[0], 1),
            Err(SpmvError::InvalidLayout)
        );
        // non-zero start
        assert_eq!(
            validate_csr_layout(1, 2, &[1, 2], &[0, 1], 2),
            Err(SpmvError::InvalidLayout)
        );
        // column out of range
        assert_eq!(
            validate_csr_layout(1, 2, &[0, 1], &[2], 1),
            Err(SpmvError::InvalidLayout)
        );
        // values length disagrees
        assert_eq!(
            validate_csr_layout(1, 2, &[0, 1], &[0], 2),
            Err(SpmvError::InvalidLayout)
        );
    }
}
