use std::fmt;
use thiserror::Error;

/// Which reconstructed document a mismatch was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextView {
    Original,
    Current,
}

impl fmt::Display for TextView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextView::Original => write!(f, "original"),
            TextView::Current => write!(f, "current"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// The reconstructed document disagrees with the expected text. The
    /// whole result must be discarded; callers fall back to plain text.
    #[error("reconstructed {view} text disagrees with expected text")]
    ReconciliationMismatch {
        view: TextView,
        expected: String,
        reconstructed: String,
    },

    #[error("segment {index} is malformed: {message}")]
    MalformedSegment { index: usize, message: String },
}
