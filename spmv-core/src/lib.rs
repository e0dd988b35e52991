#![cfg_attr(not(test), no_std)]

//! SpMV Core - triplet format, CSR layout and sparse matrix-vector product
//!
//! This crate holds everything that does not need an operating system: the
//! text format of triplet files, validation of indices and CSR arrays, the
//! two-pass CSR builder, the SpMV kernel and the repeated-product driver.
//! Reading from real files lives in the `spmv` crate, which plugs its sources
//! in through [`TripletSource`].

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod error;
pub mod format;
pub mod kernel;
pub mod traits;
pub mod validation;

#[cfg(feature = "alloc")]
pub mod csr;
#[cfg(feature = "alloc")]
pub mod iterate;

pub use error::*;
pub use format::*;
pub use kernel::{spmv, CsrView};
pub use traits::*;
pub use validation::{validate_csr_layout, validate_triplet_bounds};

#[cfg(feature = "alloc")]
pub use csr::{CsrBuilder, CsrMatrix, Placement};
#[cfg(feature = "alloc")]
pub use iterate::{iterate, DoubleBuffer};
