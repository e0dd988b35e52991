//! Format constants for triplet files

/// Index base used on disk; indices are shifted by this amount on read
pub const INDEX_BASE: usize = 1;

/// Number of whitespace-separated fields on the header line
pub const HEADER_FIELDS: usize = 3;
