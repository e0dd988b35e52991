//! Triplet file header and element data type tags

use super::constants::HEADER_FIELDS;
use crate::validation::parsing::{parse_usize, Fields};
use crate::{Result, SpmvError};

/// Declared dimensions from the first line of a triplet file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripletHeader {
    /// Number of rows
    pub num_rows: usize,
    /// Number of columns
    pub num_cols: usize,
    /// Number of non-zero entries (triplet lines)
    pub num_vals: usize,
}

impl TripletHeader {
    /// Create a header from explicit dimensions
    pub const fn new(num_rows: usize, num_cols: usize, num_vals: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            num_vals,
        }
    }

    /// Parse the header line
    ///
    /// The line must hold exactly three non-negative integers.
    pub fn parse(line: &str) -> Result<Self> {
        let mut fields = Fields::new(line);
        let mut dims = [0usize; HEADER_FIELDS];
        for dim in dims.iter_mut() {
            *dim = fields
                .next()
                .and_then(parse_usize)
                .ok_or(SpmvError::InvalidHeader)?;
        }
        if !fields.is_exhausted() {
            return Err(SpmvError::InvalidHeader);
        }

        Ok(Self::new(dims[0], dims[1], dims[2]))
    }

    /// Check whether a 0-based position lies inside the declared matrix
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.num_rows && col < self.num_cols
    }
}

impl core::fmt::Display for TripletHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} {}", self.num_rows, self.num_cols, self.num_vals)
    }
}

/// Element data type of matrix values and vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DataType {
    /// Single precision, the precision of the benchmark files
    #[default]
    F32,
    /// Double precision
    F64,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            DataType::F32 => "f32",
            DataType::F64 => "f64",
        };
        write!(f, "{name}")
    }
}
