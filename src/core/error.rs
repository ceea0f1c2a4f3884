//! Engine errors.
//!
//! The round lifecycle itself is infallible by design: selection, rendering,
//! and timer operations always succeed, and a timer expiring is a normal
//! round outcome, not an error. What remains is the results flush at session
//! end and configuration parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// The per-session results file could not be written at `finish`.
    #[error("failed to write results file {path}")]
    ResultsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A difficulty name that the engine does not know.
    #[error("unknown difficulty {0:?}")]
    UnknownDifficulty(String),
}
