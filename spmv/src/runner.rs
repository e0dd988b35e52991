//! Timed repeated-product runs

use crate::config::RunConfig;
use crate::reader::read_matrix;
use crate::report::{DynamicReport, RunReport};
use crate::Result;
use log::info;
use spmv_core::{iterate, CsrMatrix, DataType, DoubleBuffer, MatrixElement};
use std::time::Instant;

/// Read the configured file and run the timed loop on it
pub fn run<T: MatrixElement>(config: &RunConfig) -> Result<RunReport<T>> {
    let matrix = read_matrix::<T, _>(&config.path, config.backend, config.placement)?;
    run_matrix(matrix, config)
}

/// Run the timed loop on an already built matrix
///
/// The vectors have `num_rows` entries; `x` starts at all ones. Only the
/// loop itself is timed.
pub fn run_matrix<T: MatrixElement>(matrix: CsrMatrix<T>, config: &RunConfig) -> Result<RunReport<T>> {
    let mut buffers = DoubleBuffer::new(matrix.num_rows());
    let initial = buffers.current().to_vec();
    let view = matrix.view();

    info!(
        "Running {} repetitions of SpMV on {}x{} matrix ({} non-zeros, {})",
        config.repetitions,
        matrix.num_rows(),
        matrix.num_cols(),
        matrix.num_vals(),
        T::data_type()
    );
    let start = Instant::now();
    let repetitions = iterate(&view, &mut buffers, config.repetitions)?;
    let elapsed = start.elapsed();
    info!("Finished {repetitions} repetitions in {elapsed:.2?}");

    Ok(RunReport::new(
        config.clone(),
        matrix,
        initial,
        buffers.into_current(),
        repetitions,
        elapsed,
    ))
}

/// Run with the element type chosen in the config
pub fn run_dynamic(config: &RunConfig) -> Result<DynamicReport> {
    Ok(match config.data_type {
        DataType::F32 => DynamicReport::F32(run::<f32>(config)?),
        DataType::F64 => DynamicReport::F64(run::<f64>(config)?),
    })
}
