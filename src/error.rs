use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GrabError {
    #[error("failed to read HTML input: {0}")]
    InputRead(#[source] io::Error),

    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("table index {index} is out of range ({count} table(s) matched)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("failed to create '{}': {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GrabError {
    /// Process exit status for this error kind.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidSelector { .. } | Self::IndexOutOfRange { .. } => 2,
            Self::InputRead(_) => 3,
            Self::FileCreate { .. } | Self::Csv(_) | Self::Io(_) => 4,
        }
    }
}
