//! Text format definitions for triplet matrix files
//!
//! A triplet file is a header line `<rows> <cols> <non-zeros>` followed by
//! one `<row> <col> <value>` line per entry, with 1-based indices.

pub mod constants;
pub mod header;
pub mod text;
pub mod triplet;

pub use header::{DataType, TripletHeader};
pub use text::TextSource;
pub use triplet::Triplet;
