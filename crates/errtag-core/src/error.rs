// Error types shared by resource loaders and front-ends

use std::path::PathBuf;

/// Failure to load a lexical resource file.
///
/// Resources are read once at startup; any of these is fatal for the process.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

/// An edit span that does not fit inside its sentence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("inverted span {start}..{end}")]
    Inverted { start: usize, end: usize },
    #[error("span {start}..{end} exceeds sentence length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },
}
