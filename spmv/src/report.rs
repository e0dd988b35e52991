//! Run reports: text dumps and JSON

use crate::config::{PrintMode, RunConfig};
use crate::Result;
use spmv_core::{CsrMatrix, MatrixElement};
use std::io::Write;
use std::time::Duration;

/// Everything a run produced
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunReport<T> {
    /// Configuration the run used
    pub config: RunConfig,
    /// The CSR matrix built from the input file
    pub matrix: CsrMatrix<T>,
    /// Vector before the first repetition
    pub initial: Vec<T>,
    /// Vector after the last repetition
    pub result: Vec<T>,
    /// Repetitions actually executed
    pub repetitions: usize,
    /// Wall time of the repetition loop in milliseconds
    pub elapsed_ms: f64,
    /// Wall time of the repetition loop
    #[cfg_attr(feature = "serde", serde(skip))]
    pub elapsed: Duration,
}

impl<T: MatrixElement> RunReport<T> {
    /// Assemble a report
    pub fn new(
        config: RunConfig,
        matrix: CsrMatrix<T>,
        initial: Vec<T>,
        result: Vec<T>,
        repetitions: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            config,
            matrix,
            initial,
            result,
            repetitions,
            elapsed_ms: elapsed.as_nanos() as f64 / 1e6,
            elapsed,
        }
    }

    /// Write the text dump selected by `mode`, then the running time
    pub fn write_text<W: Write>(&self, out: &mut W, mode: PrintMode) -> Result<()> {
        if mode.prints_arrays() {
            writeln!(out, "Values Array:")?;
            write_row(out, self.matrix.values(), |out, v| write!(out, "{v:.6} "))?;

            write!(out, "\n\nColumn Indices Array:\n")?;
            write_row(out, self.matrix.col_ind(), |out, c| write!(out, "{c} "))?;

            write!(out, "\n\nRow Pointer Array:\n")?;
            write_row(out, self.matrix.row_ptr(), |out, p| write!(out, "{p} "))?;

            write!(out, "\n\nInitial Vector:\n")?;
            write_row(out, &self.initial, |out, v| write!(out, "{v:.1} "))?;

            write!(out, "\n\nResulting Vector:\n")?;
        }

        if mode.prints_result() {
            write_row(out, &self.result, |out, v| write!(out, "{v:.6} "))?;
            writeln!(out)?;
        }

        write!(out, "\nSerial Running time:  {:.4} ms\n", self.elapsed_ms)?;
        Ok(())
    }

    /// Write the report as pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}

fn write_row<W: Write, V>(
    out: &mut W,
    items: &[V],
    mut write_item: impl FnMut(&mut W, &V) -> std::io::Result<()>,
) -> std::io::Result<()> {
    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

/// Report of a run whose element type was picked at runtime
#[derive(Debug, Clone)]
pub enum DynamicReport {
    F32(RunReport<f32>),
    F64(RunReport<f64>),
}

impl DynamicReport {
    /// Repetitions actually executed
    pub fn repetitions(&self) -> usize {
        match self {
            DynamicReport::F32(r) => r.repetitions,
            DynamicReport::F64(r) => r.repetitions,
        }
    }

    /// Wall time of the repetition loop
    pub fn elapsed(&self) -> Duration {
        match self {
            DynamicReport::F32(r) => r.elapsed,
            DynamicReport::F64(r) => r.elapsed,
        }
    }

    /// Write the text dump selected by `mode`
    pub fn write_text<W: Write>(&self, out: &mut W, mode: PrintMode) -> Result<()> {
        match self {
            DynamicReport::F32(r) => r.write_text(out, mode),
            DynamicReport::F64(r) => r.write_text(out, mode),
        }
    }

    /// Write the report as JSON
    #[cfg(feature = "serde")]
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            DynamicReport::F32(r) => r.write_json(out),
            DynamicReport::F64(r) => r.write_json(out),
        }
    }
}
