//! Triplet line parsing

use super::header::TripletHeader;
use crate::traits::MatrixElement;
use crate::validation::bounds::validate_triplet_bounds;
use crate::validation::parsing::{parse_usize, Fields};
use crate::{Result, SpmvError};

/// One matrix entry with 0-based indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet<T> {
    /// 0-based row index
    pub row: usize,
    /// 0-based column index
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T: MatrixElement> Triplet<T> {
    /// Create a triplet from 0-based indices
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Parse a `<row> <col> <value>` line with 1-based indices
    ///
    /// `line` is the 1-based line number used in error reports. Indices are
    /// checked against `header` and shifted to 0-based.
    pub fn parse(text: &str, line: usize, header: &TripletHeader) -> Result<Self> {
        let malformed = SpmvError::MalformedTriplet { line };
        let mut fields = Fields::new(text);

        let row = fields.next().and_then(parse_usize).ok_or(malformed)?;
        let col = fields.next().and_then(parse_usize).ok_or(malformed)?;
        let value = fields.next().and_then(T::parse_field).ok_or(malformed)?;
        if !fields.is_exhausted() {
            return Err(malformed);
        }

        let (row, col) = validate_triplet_bounds(row, col, header, line)?;
        Ok(Self { row, col, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shifts_indices() {
        let header = TripletHeader::new(2, 3, 1);
        let triplet = Triplet::<f32>::parse("2 3 4.5", 2, &header).unwrap();
        assert_eq!(triplet, Triplet::new(1, 2, 4.5));
    }

    #[test]
    fn test_parse_malformed() {
        let header = TripletHeader::new(2, 2, 1);
        for text in ["1 1", "1 1 x", "a 1 1.0", "1 1 1.0 9", "1 -1 2.0", ""] {
            assert_eq!(
                Triplet::<f64>::parse(text, 5, &header),
                Err(SpmvError::MalformedTriplet { line: 5 }),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_out_of_bounds() {
        let header = TripletHeader::new(2, 2, 1);
        assert_eq!(
            Triplet::<f32>::parse("3 1 1.0", 4, &header),
            Err(SpmvError::IndexOutOfBounds { line: 4, row: 3, col: 1 })
        );
        assert_eq!(
            Triplet::<f32>::parse("0 1 1.0", 4, &header),
            Err(SpmvError::IndexOutOfBounds { line: 4, row: 0, col: 1 })
        );
        assert_eq!(
            Triplet::<f32>::parse("1 3 1.0", 4, &header),
            Err(SpmvError::IndexOutOfBounds { line: 4, row: 1, col: 3 })
        );
    }
}
