use thiserror::Error;

/// Errors surfaced by recording session operations.
///
/// Unrecognized status/format tokens from the engine are *not* errors: they
/// degrade to the fail-open defaults (`Unset` status, no format) so a
/// possibly stale snapshot stays available.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("invalid output target: {0}")]
    InvalidTarget(String),

    #[error("engine init failed: {0}")]
    EngineInit(String),

    #[error("engine command failed: {0}")]
    EngineCommand(String),
}
