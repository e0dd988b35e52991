//! Run configuration

use spmv_core::{DataType, Placement};
use std::path::{Path, PathBuf};

/// What the text dump prints after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PrintMode {
    /// Only the running time
    #[default]
    None,
    /// CSR arrays, initial vector and resulting vector
    All,
    /// Only the resulting vector
    ResultOnly,
}

impl PrintMode {
    /// Map the numeric command-line code: 1 = all, 2 = result only,
    /// anything else = nothing
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => PrintMode::All,
            2 => PrintMode::ResultOnly,
            _ => PrintMode::None,
        }
    }

    /// Whether the CSR arrays and initial vector are printed
    pub fn prints_arrays(self) -> bool {
        self == PrintMode::All
    }

    /// Whether the resulting vector is printed
    pub fn prints_result(self) -> bool {
        matches!(self, PrintMode::All | PrintMode::ResultOnly)
    }
}

/// How the triplet file is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Backend {
    /// Buffered reader, rewound with a seek between passes
    #[default]
    Stream,
    /// Memory-mapped file
    #[cfg(feature = "mmap")]
    Mmap,
}

/// Configuration of a single benchmark run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Triplet matrix file
    pub path: PathBuf,
    /// Number of SpMV repetitions
    pub repetitions: usize,
    /// What to print after the run
    pub print_mode: PrintMode,
    /// Slot placement strategy of the CSR builder
    pub placement: Placement,
    /// File reading backend
    pub backend: Backend,
    /// Element type of values and vectors
    pub data_type: DataType,
}

impl RunConfig {
    /// Config for a file with one repetition and default settings
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            repetitions: 1,
            print_mode: PrintMode::default(),
            placement: Placement::default(),
            backend: Backend::default(),
            data_type: DataType::default(),
        }
    }

    /// Set the repetition count
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Set the print mode
    pub fn with_print_mode(mut self, print_mode: PrintMode) -> Self {
        self.print_mode = print_mode;
        self
    }

    /// Set the placement strategy
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the reading backend
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Set the element type
    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_mode_codes() {
        assert_eq!(PrintMode::from_code(1), PrintMode::All);
        assert_eq!(PrintMode::from_code(2), PrintMode::ResultOnly);
        assert_eq!(PrintMode::from_code(0), PrintMode::None);
        assert_eq!(PrintMode::from_code(3), PrintMode::None);
        assert_eq!(PrintMode::from_code(-1), PrintMode::None);

        assert!(PrintMode::All.prints_arrays());
        assert!(PrintMode::All.prints_result());
        assert!(!PrintMode::ResultOnly.prints_arrays());
        assert!(PrintMode::ResultOnly.prints_result());
        assert!(!PrintMode::None.prints_result());
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::new("m.txt")
            .with_repetitions(7)
            .with_print_mode(PrintMode::All)
            .with_placement(Placement::Probe)
            .with_data_type(DataType::F64);

        assert_eq!(config.path, PathBuf::from("m.txt"));
        assert_eq!(config.repetitions, 7);
        assert_eq!(config.print_mode, PrintMode::All);
        assert_eq!(config.placement, Placement::Probe);
        assert_eq!(config.backend, Backend::Stream);
        assert_eq!(config.data_type, DataType::F64);
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("m.txt");
        assert_eq!(config.repetitions, 1);
        assert_eq!(config.print_mode, PrintMode::None);
        assert_eq!(config.placement, Placement::Cursor);
    }
}
