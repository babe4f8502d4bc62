// Error taxonomy for the feature pipeline.
//
// Every failure is terminal for the run. A half-loaded dataset or a
// silently skipped row would leave the feature matrix misaligned with the
// stance rows, so the loader and both feature stages abort on the first
// problem instead of recovering locally.

use std::path::PathBuf;

use thiserror::Error;

use crate::dataset::models::BodyId;

/// Result type alias for standfirst operations.
pub type Result<T> = std::result::Result<T, StandfirstError>;

/// All the ways a feature-extraction run can fail.
#[derive(Error, Debug)]
pub enum StandfirstError {
    /// Input file missing or unreadable.
    #[error("cannot read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed row: non-integer body id, wrong column count, or a stance
    /// label outside the closed set.
    #[error("{} line {}: {}", .path.display(), .line, .message)]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Row text is not valid UTF-8.
    #[error("{} line {}: text is not valid UTF-8", .path.display(), .line)]
    Decoding { path: PathBuf, line: u64 },

    /// A stance row references a body id absent from the bodies file.
    #[error("stance references body {body_id}, which is not in the bodies file")]
    UnknownBody { body_id: BodyId },

    /// The body produced no tokens, so there is nothing to normalize the
    /// n-gram match count by.
    #[error("body {body_id} tokenizes to zero words; n-gram overlap is undefined")]
    EmptyBodyTokens { body_id: BodyId },

    /// Every sentence of the body tokenized to zero words.
    #[error("body {body_id} has no non-empty sentences; similarity is undefined")]
    NoSentences { body_id: BodyId },
}
