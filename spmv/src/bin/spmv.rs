//! Command-line benchmark: build a CSR matrix from a triplet file and apply
//! SpMV repeatedly, feeding each result back in as the next input.

use clap::{Parser, ValueEnum};
use log::debug;
use spmv::{run_dynamic, Backend, DataType, Error, Placement, PrintMode, RunConfig};
use std::{io, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "Convert a triplet matrix to CSR and run repeated sparse matrix-vector products"
)]
struct Cli {
    /// Number of repetitions
    repetitions: usize,

    /// Print mode: 1 = all arrays and vectors, 2 = resulting vector only,
    /// anything else = running time only
    #[arg(allow_negative_numbers = true)]
    print_mode: i64,

    /// Triplet matrix file
    file: PathBuf,

    /// Element type of values and vectors
    #[arg(long, value_enum, default_value_t = DtypeArg::F32)]
    dtype: DtypeArg,

    /// Slot placement strategy of the CSR builder
    #[arg(long, value_enum, default_value_t = PlacementArg::Cursor)]
    placement: PlacementArg,

    /// File reading backend
    #[arg(long, value_enum, default_value_t = BackendArg::Stream)]
    backend: BackendArg,

    /// Print the run report as JSON instead of the text dump
    #[cfg(feature = "serde")]
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum DtypeArg {
    F32,
    F64,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    Cursor,
    Probe,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Stream,
    #[cfg(feature = "mmap")]
    Mmap,
}

impl Cli {
    fn to_config(&self) -> RunConfig {
        let data_type = match self.dtype {
            DtypeArg::F32 => DataType::F32,
            DtypeArg::F64 => DataType::F64,
        };
        let placement = match self.placement {
            PlacementArg::Cursor => Placement::Cursor,
            PlacementArg::Probe => Placement::Probe,
        };
        let backend = match self.backend {
            BackendArg::Stream => Backend::Stream,
            #[cfg(feature = "mmap")]
            BackendArg::Mmap => Backend::Mmap,
        };

        RunConfig::new(&self.file)
            .with_repetitions(self.repetitions)
            .with_print_mode(PrintMode::from_code(self.print_mode))
            .with_placement(placement)
            .with_backend(backend)
            .with_data_type(data_type)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            return fail(Error::Usage(err.to_string().trim_end().to_string()))
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(err),
    }
}

fn execute(cli: &Cli) -> spmv::Result<()> {
    let config = cli.to_config();
    let report = run_dynamic(&config)?;
    debug!(
        "Report ready: {} repetitions in {:?}",
        report.repetitions(),
        report.elapsed()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    #[cfg(feature = "serde")]
    if cli.json {
        return report.write_json(&mut out);
    }

    report.write_text(&mut out, config.print_mode)
}

fn fail(err: Error) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}
