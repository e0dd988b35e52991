//! Two-pass CSR construction
//!
//! Pass 1 counts entries per row and validates every triplet. The counts
//! become `row_ptr` through an exclusive prefix sum. Pass 2 re-reads the
//! triplets and writes each one into the next free slot of its row, so a
//! row's entries end up in input order.

use alloc::vec::Vec;
use core::marker::PhantomData;

use super::CsrMatrix;
use crate::format::{Triplet, TripletHeader};
use crate::traits::{MatrixElement, TripletSource};
use crate::validation::parsing::is_blank;
use crate::{Result, SpmvError};

/// Strategy for finding the next free slot of a row during pass 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
    /// Per-row write cursor; linear in the number of entries
    #[default]
    Cursor,
    /// Scan the row from its start for the first empty slot; quadratic in
    /// the length of a row
    Probe,
}

/// First-pass state: declared header and per-row entry counts
#[derive(Debug, Clone)]
pub struct CsrBuilder<T> {
    header: TripletHeader,
    placement: Placement,
    row_counts: Vec<usize>,
    seen: usize,
    _marker: PhantomData<T>,
}

impl<T: MatrixElement> CsrBuilder<T> {
    /// Start a build for the declared dimensions
    ///
    /// Fails with [`SpmvError::TooLarge`] when the row histogram cannot be
    /// allocated.
    pub fn new(header: TripletHeader) -> Result<Self> {
        Ok(Self {
            header,
            placement: Placement::default(),
            row_counts: filled(header.num_rows, 0)?,
            seen: 0,
            _marker: PhantomData,
        })
    }

    /// Set the slot placement strategy
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Declared header
    pub fn header(&self) -> &TripletHeader {
        &self.header
    }

    /// Record one triplet in the row histogram
    ///
    /// `line` is only used for error reports.
    pub fn count(&mut self, triplet: &Triplet<T>, line: usize) -> Result<()> {
        if !self.header.contains(triplet.row, triplet.col) {
            return Err(SpmvError::IndexOutOfBounds {
                line,
                row: triplet.row + 1,
                col: triplet.col + 1,
            });
        }
        self.row_counts[triplet.row] += 1;
        self.seen += 1;
        Ok(())
    }

    /// Finish pass 1: check the triplet count and lay out `row_ptr`
    pub fn into_placer(self) -> Result<RowPlacer<T>> {
        let declared = self.header.num_vals;
        if self.seen != declared {
            return Err(SpmvError::CountMismatch {
                declared,
                actual: self.seen,
            });
        }

        let num_rows = self.header.num_rows;
        let len = num_rows
            .checked_add(1)
            .ok_or(SpmvError::TooLarge { len: num_rows })?;
        let mut row_ptr = filled(len, 0)?;
        let mut offset = 0;
        for (ptr, count) in row_ptr.iter_mut().zip(&self.row_counts) {
            *ptr = offset;
            offset += count;
        }
        row_ptr[num_rows] = offset;

        let slots = match self.placement {
            Placement::Cursor => {
                let mut next = filled(num_rows, 0)?;
                next.copy_from_slice(&row_ptr[..num_rows]);
                Slots::Cursor {
                    next,
                    col_ind: filled(declared, 0)?,
                }
            }
            Placement::Probe => Slots::Probe {
                col_ind: filled(declared, None)?,
            },
        };

        Ok(RowPlacer {
            header: self.header,
            row_ptr,
            slots,
            values: filled(declared, T::zero())?,
            placed: 0,
        })
    }
}

/// Allocate `len` copies of `value` without aborting on failure
fn filled<V: Clone>(len: usize, value: V) -> Result<Vec<V>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SpmvError::TooLarge { len })?;
    buf.resize(len, value);
    Ok(buf)
}

#[derive(Debug, Clone)]
enum Slots {
    Cursor { next: Vec<usize>, col_ind: Vec<usize> },
    Probe { col_ind: Vec<Option<usize>> },
}

/// Second-pass state: `row_ptr` is fixed, entries are being placed
#[derive(Debug, Clone)]
pub struct RowPlacer<T> {
    header: TripletHeader,
    row_ptr: Vec<usize>,
    slots: Slots,
    values: Vec<T>,
    placed: usize,
}

impl<T: MatrixElement> RowPlacer<T> {
    /// Row pointer array computed by pass 1
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Write a triplet into the next free slot of its row
    pub fn place(&mut self, triplet: &Triplet<T>) -> Result<()> {
        let row = triplet.row;
        if !self.header.contains(row, triplet.col) {
            return Err(SpmvError::RowOverflow { row });
        }
        let (start, end) = (self.row_ptr[row], self.row_ptr[row + 1]);

        let slot = match &mut self.slots {
            Slots::Cursor { next, col_ind } => {
                let slot = next[row];
                if slot == end {
                    return Err(SpmvError::RowOverflow { row });
                }
                next[row] += 1;
                col_ind[slot] = triplet.col;
                slot
            }
            Slots::Probe { col_ind } => {
                let slot = (start..end)
                    .find(|&k| col_ind[k].is_none())
                    .ok_or(SpmvError::RowOverflow { row })?;
                col_ind[slot] = Some(triplet.col);
                slot
            }
        };

        self.values[slot] = triplet.value;
        self.placed += 1;
        Ok(())
    }

    /// Finish pass 2 and assemble the matrix
    pub fn finish(self) -> Result<CsrMatrix<T>> {
        if self.placed != self.header.num_vals {
            return Err(SpmvError::CountMismatch {
                declared: self.header.num_vals,
                actual: self.placed,
            });
        }

        let col_ind = match self.slots {
            Slots::Cursor { col_ind, .. } => col_ind,
            Slots::Probe { col_ind } => col_ind
                .into_iter()
                .collect::<Option<Vec<_>>>()
                .ok_or(SpmvError::InvalidLayout)?,
        };

        CsrMatrix::from_raw_parts(
            self.header.num_rows,
            self.header.num_cols,
            self.row_ptr,
            col_ind,
            self.values,
        )
    }
}

/// Read the header, skipping leading blank lines
///
/// Returns the header and its 1-based line number.
fn read_header<S: TripletSource>(
    source: &mut S,
) -> core::result::Result<(TripletHeader, usize), S::Error> {
    let mut line_no = 0;
    while let Some(line) = source.next_line()? {
        line_no += 1;
        if is_blank(line) {
            continue;
        }
        let header = TripletHeader::parse(line)?;
        return Ok((header, line_no));
    }
    Err(SpmvError::InvalidHeader.into())
}

/// Parsed triplets following the header, with blank lines skipped
struct TripletLines<'s, S, T> {
    source: &'s mut S,
    header: TripletHeader,
    line_no: usize,
    _marker: PhantomData<T>,
}

impl<S: TripletSource, T: MatrixElement> Iterator for TripletLines<'_, S, T> {
    type Item = core::result::Result<(Triplet<T>, usize), S::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.source.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(err) => return Some(Err(err)),
            };
            self.line_no += 1;
            if is_blank(line) {
                continue;
            }
            let line_no = self.line_no;
            return Some(
                Triplet::parse(line, line_no, &self.header)
                    .map(|triplet| (triplet, line_no))
                    .map_err(S::Error::from),
            );
        }
    }
}

impl<T: MatrixElement> CsrMatrix<T> {
    /// Build a matrix from a triplet source in two passes
    ///
    /// The source is read once to count entries per row, rewound, and read
    /// again to place them. Nothing is buffered between the passes.
    pub fn from_source<S: TripletSource>(
        source: &mut S,
        placement: Placement,
    ) -> core::result::Result<Self, S::Error> {
        let (header, header_line) = read_header(source)?;

        let mut builder = CsrBuilder::new(header)?.with_placement(placement);
        let first_pass = TripletLines::<S, T> {
            source: &mut *source,
            header,
            line_no: header_line,
            _marker: PhantomData,
        };
        for entry in first_pass {
            let (triplet, line) = entry?;
            builder.count(&triplet, line)?;
        }
        let mut placer = builder.into_placer()?;

        source.rewind()?;
        let (reread, header_line) = read_header(source)?;
        if reread != header {
            return Err(SpmvError::InvalidHeader.into());
        }

        let second_pass = TripletLines::<S, T> {
            source: &mut *source,
            header,
            line_no: header_line,
            _marker: PhantomData,
        };
        for entry in second_pass {
            let (triplet, _) = entry?;
            placer.place(&triplet)?;
        }

        Ok(placer.finish()?)
    }
}
