use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the analyzer's boundaries.
///
/// Per-file read and decode failures are not represented here: they are
/// recovered inline (the file contributes zero findings) and only logged.
#[derive(Debug, Error)]
pub enum PortmapError {
    /// The library root passed on the command line does not exist.
    #[error("library path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// A detection pattern in the static registry failed to compile.
    /// This is a configuration defect and aborts before any file is scanned.
    #[error("invalid detection pattern `{pattern}` in category `{category}`: {source}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
