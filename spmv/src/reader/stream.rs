//! Buffered triplet source rewound by seeking

use super::SourceError;
use spmv_core::TripletSource;
use std::io::{BufRead, Seek};

/// Triplet source over any seekable buffered reader
///
/// Lines are read into one reused buffer. Rewinding seeks the reader back
/// to offset 0, which also discards its buffer.
#[derive(Debug)]
pub struct StreamSource<R> {
    reader: R,
    line: String,
}

impl<R: BufRead + Seek> StreamSource<R> {
    /// Wrap a reader positioned at the start of a triplet file
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead + Seek> TripletSource for StreamSource<R> {
    type Error = SourceError;

    fn next_line(&mut self) -> Result<Option<&str>, SourceError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.line.trim_end_matches(&['\r', '\n'][..])))
    }

    fn rewind(&mut self) -> Result<(), SourceError> {
        self.reader.rewind()?;
        Ok(())
    }
}
