//! SpMV - triplet files to CSR and a repeated sparse matrix-vector product
//!
//! This crate wraps the pure algorithms of `spmv-core` with file I/O, run
//! configuration, timing and reporting.
//!
//! ## Architecture
//!
//! - **spmv-core**: triplet format, validation, CSR builder, kernel (no I/O)
//! - **spmv**: file-backed triplet sources, the timed runner and the printer
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmv::{run, PrintMode, RunConfig};
//!
//! fn example() -> spmv::Result<()> {
//!     let config = RunConfig::new("matrix.txt").with_repetitions(100);
//!     let report = run::<f32>(&config)?;
//!     println!("{} reps in {:.4} ms", report.repetitions, report.elapsed_ms);
//!     report.write_text(&mut std::io::stdout(), PrintMode::ResultOnly)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: memory-mapped triplet source next to the buffered one
//! - **serde**: JSON run reports
//! - **cli**: the `spmv` binary

// Re-export core abstractions
pub use spmv_core::{
    // Matrix and kernel
    iterate, spmv, CsrMatrix, CsrView, DoubleBuffer, Placement,
    // Format and traits
    DataType, MatrixElement, MatrixOperations, SparseMatrix, Triplet, TripletHeader,
    TripletSource,
    // Error handling
    ErrorCategory, SpmvError,
};

pub mod config;
pub mod error;
pub mod reader;
pub mod report;
pub mod runner;

pub use config::{Backend, PrintMode, RunConfig};
pub use error::{Error, Result};
pub use reader::{read_matrix, SourceError, StreamSource, TripletFile};
#[cfg(feature = "mmap")]
pub use reader::MmapSource;
pub use report::{DynamicReport, RunReport};
pub use runner::{run, run_dynamic, run_matrix};
