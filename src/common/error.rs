//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every error is reported synchronously. The engine is deterministic, so
/// retrying a failed call reproduces the same error.
#[derive(Debug, Error)]
pub enum Error {
    /// Policy selector is not one of `FIFO`, `LRU` or `OPT`.
    ///
    /// Raised before any simulation starts.
    #[error("Invalid algorithm: {0}")]
    InvalidPolicy(String),

    /// Frame count below 1.
    ///
    /// Stored as `i64` so that negative values coming from untrusted input
    /// are reported as given.
    #[error("Invalid frame count: {0} (must be at least 1)")]
    InvalidFrameCount(i64),

    /// A result could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
