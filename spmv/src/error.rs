//! Error types for the SpMV runner

use spmv_core::{ErrorCategory, SpmvError};
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the runner's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can end a run
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid command-line arguments, with the parser's message
    #[error("{0}")]
    Usage(String),

    /// The input file could not be opened
    #[error("File cannot be opened: {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file could not be read or mapped
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file is not a valid triplet matrix
    #[error("{}: {source}", path.display())]
    Format {
        path: PathBuf,
        source: SpmvError,
    },

    /// The kernel rejected the matrix or vectors
    #[error(transparent)]
    Kernel(#[from] SpmvError),

    /// Writing the dump or report failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding the JSON report failed
    #[cfg(feature = "serde")]
    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// Coarse category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Usage(_) => ErrorCategory::Usage,
            Error::Open { .. } | Error::Read { .. } | Error::Output(_) => ErrorCategory::Io,
            Error::Format { source, .. } => source.category(),
            Error::Kernel(source) => source.category(),
            #[cfg(feature = "serde")]
            Error::Encode(_) => ErrorCategory::Io,
        }
    }

    /// Process exit code for this error
    ///
    /// Usage errors use 2 like clap does; everything else uses 1.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Usage => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_categories_and_exit_codes() {
        let usage = Error::Usage("missing file".into());
        assert_eq!(usage.category(), ErrorCategory::Usage);
        assert_eq!(usage.exit_code(), 2);

        let open = Error::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(open.category(), ErrorCategory::Io);
        assert_eq!(open.exit_code(), 1);

        let format = Error::Format {
            path: PathBuf::from("bad.txt"),
            source: SpmvError::InvalidHeader,
        };
        assert_eq!(format.category(), ErrorCategory::Malformed);

        let kernel = Error::from(SpmvError::DimensionMismatch { expected: 3, actual: 2 });
        assert_eq!(kernel.category(), ErrorCategory::Dimension);
    }

    #[test]
    fn test_messages() {
        let open = Error::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(open.to_string().starts_with("File cannot be opened: missing.txt"));

        let format = Error::Format {
            path: PathBuf::from("bad.txt"),
            source: SpmvError::MalformedTriplet { line: 3 },
        };
        assert_eq!(
            format.to_string(),
            "bad.txt: Malformed triplet on line 3: expected `<row> <col> <value>`"
        );
    }
}
