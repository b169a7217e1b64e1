//! Error type of the comparison driver.
//!
//! The LCS engine and the aligner are total functions and never fail; only
//! configuration and loading can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`crate::compare::Comparison`] and the line loader.
#[derive(Debug, Error)]
pub enum DiffError {
    /// The batch was started without any file to compare against.
    #[error("no file to compare")]
    NoTargets,

    /// A source or target could not be read; the batch was aborted.
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown line ending '{0}' (expected platform, lf or crlf)")]
    UnknownLineEnding(String),

    /// A finished report could not be written out.
    #[error("failed to write report")]
    Output(#[source] io::Error),
}

impl DiffError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
