// ABOUTME: Error types for the blogstats engine boundaries.
// ABOUTME: Provides the StatsError enum covering store I/O and JSON encoding faults.

use thiserror::Error;

/// Errors that can occur at the persistence and encoding boundaries.
///
/// Extraction itself is infallible: every DOM-access or parse fault inside a
/// strategy degrades to "field absent" or "no contribution" and is never
/// surfaced as an error. Only reading/writing the local store and
/// (de)serializing records can fail.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Reading or writing the local key-value store or an export file failed.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A stats record or store payload could not be encoded or decoded.
    #[error("stats encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
