//! Abstract interfaces for the SpMV crates
//!
//! Traits are pure interfaces here; concrete matrices and file-backed
//! sources implement them.

pub mod backend;
pub mod element;
pub mod matrix;

pub use backend::TripletSource;
pub use element::MatrixElement;
#[cfg(feature = "alloc")]
pub use matrix::MatrixOperations;
pub use matrix::SparseMatrix;
