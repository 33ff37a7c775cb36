use std::fmt;

/// The process table could not be read at all.
///
/// Per-process failures (a path that cannot be resolved) are not errors; those
/// processes are simply left out of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// The process-listing backend does not support this platform
    Unsupported,

    /// The listing came back without a single process, not even this one
    EmptyProcessTable,
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerationError::Unsupported => {
                write!(f, "Process listing is not supported on this platform")
            }
            EnumerationError::EmptyProcessTable => write!(f, "Failed to get process count"),
        }
    }
}

impl std::error::Error for EnumerationError {}
