//! Error types for SpMV core operations

/// Errors that can occur while parsing triplets, building CSR arrays or
/// multiplying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmvError {
    /// Header line missing or not three non-negative integers
    InvalidHeader,
    /// A triplet line could not be parsed (1-based line number)
    MalformedTriplet { line: usize },
    /// Row or column outside the declared bounds, as written in the file
    IndexOutOfBounds { line: usize, row: usize, col: usize },
    /// Declared non-zero count disagrees with the triplets actually present
    CountMismatch { declared: usize, actual: usize },
    /// A row received more entries during placement than were counted
    RowOverflow { row: usize },
    /// The declared dimensions need more entries than can be allocated
    TooLarge { len: usize },
    /// Buffer length does not fit the matrix
    DimensionMismatch { expected: usize, actual: usize },
    /// CSR arrays are inconsistent with each other
    InvalidLayout,
}

/// Coarse classification used to pick user-facing behavior and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad command-line arguments
    Usage,
    /// File missing or unreadable
    Io,
    /// Input file content is not a valid triplet matrix
    Malformed,
    /// Vector buffers do not match the matrix
    Dimension,
}

impl SpmvError {
    /// Category of this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmvError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            _ => ErrorCategory::Malformed,
        }
    }
}

impl core::fmt::Display for SpmvError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmvError::InvalidHeader => {
                write!(f, "Invalid header: expected `<rows> <cols> <non-zeros>`")
            }
            SpmvError::MalformedTriplet { line } => {
                write!(f, "Malformed triplet on line {line}: expected `<row> <col> <value>`")
            }
            SpmvError::IndexOutOfBounds { line, row, col } => {
                write!(f, "Index ({row}, {col}) on line {line} is outside the declared matrix")
            }
            SpmvError::CountMismatch { declared, actual } => {
                write!(f, "Header declares {declared} non-zeros but {actual} triplets were found")
            }
            SpmvError::RowOverflow { row } => {
                write!(f, "Row {row} received more entries than counted in the first pass")
            }
            SpmvError::TooLarge { len } => {
                write!(f, "Declared matrix needs {len} entries, more than can be allocated")
            }
            SpmvError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            SpmvError::InvalidLayout => write!(f, "Inconsistent CSR arrays"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpmvError {}

/// Result type for SpMV core operations
pub type Result<T> = core::result::Result<T, SpmvError>;
