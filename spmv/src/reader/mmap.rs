//! Memory-mapped triplet source
//!
//! The whole file is mapped once; both passes walk the mapping, and
//! rewinding only resets the cursor.

use super::SourceError;
use memmap2::{Mmap, MmapOptions};
use spmv_core::TripletSource;
use std::{
    fs::File,
    io::{self, ErrorKind},
};

/// Triplet source over a memory-mapped file
#[derive(Debug)]
pub struct MmapSource {
    // Zero-length files cannot be mapped on every platform
    mmap: Option<Mmap>,
    pos: usize,
}

impl MmapSource {
    /// Map an opened triplet file
    pub fn new(file: &File) -> io::Result<Self> {
        let len = file.metadata()?.len();
        let mmap = if len == 0 {
            None
        } else {
            // SAFETY: the mapping is read-only and lives no longer than this
            // source; the file is not expected to change during a run
            Some(unsafe { MmapOptions::new().map(file)? })
        };

        Ok(Self { mmap, pos: 0 })
    }

    /// Mapped bytes
    pub fn bytes(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

impl TripletSource for MmapSource {
    type Error = SourceError;

    fn next_line(&mut self) -> Result<Option<&str>, SourceError> {
        let start = self.pos;
        let len = self.bytes().len();
        if start >= len {
            return Ok(None);
        }

        let end = self.bytes()[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(len, |offset| start + offset);
        self.pos = (end + 1).min(len);

        let line = &self.bytes()[start..end];
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        std::str::from_utf8(line)
            .map(Some)
            .map_err(|err| SourceError::Io(io::Error::new(ErrorKind::InvalidData, err)))
    }

    fn rewind(&mut self) -> Result<(), SourceError> {
        self.pos = 0;
        Ok(())
    }
}
