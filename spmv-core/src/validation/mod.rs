//! Validation utilities for triplet input and CSR arrays
//!
//! Pure functions with no I/O: field parsing, index bounds and layout
//! invariants.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_csr_layout, validate_triplet_bounds};
pub use parsing::{parse_usize, Fields};
