//! CLI error types.

use std::io;

use enigma_core::EnigmaError;
use thiserror::Error;

/// Errors from the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Machine could not be configured.
    #[error("machine error: {0}")]
    Machine(#[from] EnigmaError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Output group size of zero.
    #[error("group size must be at least 1")]
    EmptyGroup,
}
