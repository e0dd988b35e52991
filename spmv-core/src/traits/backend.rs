//! Line-oriented input sources for the two-pass CSR builder

use crate::SpmvError;

/// A rewindable source of triplet-file lines
///
/// The builder reads the whole input twice: once to count entries per row
/// and once to place them. Implementors only hand out raw lines; parsing,
/// line numbering and validation happen in the builder.
pub trait TripletSource {
    /// Error produced by the source; format errors are converted into it
    type Error: From<SpmvError>;

    /// Return the next line without its terminator, or `None` at end of input
    fn next_line(&mut self) -> Result<Option<&str>, Self::Error>;

    /// Reposition the source at the first line
    fn rewind(&mut self) -> Result<(), Self::Error>;
}
