//! Reading triplet files into CSR matrices
//!
//! A [`TripletFile`] opens the input and hands it to one of two
//! [`TripletSource`] implementations: a buffered stream that seeks back to
//! the start between passes, or a memory map whose cursor is reset.

mod stream;
#[cfg(feature = "mmap")]
mod mmap;

pub use stream::StreamSource;
#[cfg(feature = "mmap")]
pub use mmap::MmapSource;

use crate::config::Backend;
use crate::{Error, Result};
use log::{debug, info};
use spmv_core::{CsrMatrix, MatrixElement, Placement, SpmvError};
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
    time::Instant,
};
use thiserror::Error;

/// Errors produced by file-backed triplet sources
#[derive(Error, Debug)]
pub enum SourceError {
    /// Reading, seeking or decoding the input failed
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The input is not a valid triplet matrix
    #[error(transparent)]
    Format(#[from] SpmvError),
}

/// Handle to an opened triplet file
#[derive(Debug)]
pub struct TripletFile {
    path: PathBuf,
    file: File,
}

impl TripletFile {
    /// Open an existing triplet file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        info!("Opened triplet file {}", path.display());

        Ok(Self { path, file })
    }

    /// Path the file was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a CSR matrix from the file with the given backend
    pub fn read_matrix<T: MatrixElement>(
        self,
        backend: Backend,
        placement: Placement,
    ) -> Result<CsrMatrix<T>> {
        let start = Instant::now();
        debug!("Reading with {backend:?} backend, {placement:?} placement");

        let built = match backend {
            Backend::Stream => {
                let mut source = StreamSource::new(BufReader::new(&self.file));
                CsrMatrix::from_source(&mut source, placement)
            }
            #[cfg(feature = "mmap")]
            Backend::Mmap => {
                let mut source = MmapSource::new(&self.file).map_err(|source| Error::Read {
                    path: self.path.clone(),
                    source,
                })?;
                CsrMatrix::from_source(&mut source, placement)
            }
        };

        let matrix = built.map_err(|err| self.attach_path(err))?;
        info!(
            "Built {}x{} CSR matrix with {} non-zeros in {:.2?}",
            matrix.num_rows(),
            matrix.num_cols(),
            matrix.num_vals(),
            start.elapsed()
        );
        Ok(matrix)
    }

    fn attach_path(&self, err: SourceError) -> Error {
        let path = self.path.clone();
        match err {
            SourceError::Io(source) => Error::Read { path, source },
            SourceError::Format(source) => Error::Format { path, source },
        }
    }
}

/// Open a triplet file and build its CSR matrix
pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(
    path: P,
    backend: Backend,
    placement: Placement,
) -> Result<CsrMatrix<T>> {
    TripletFile::open(path)?.read_matrix(backend, placement)
}
