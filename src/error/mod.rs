//! Error types for the `yuv_bench` crate.
//!
//! Fatal errors (bad configuration, missing or truncated input) propagate up
//! to the binary, which exits non-zero. Per-trial compression failures never
//! surface here; they are absorbed into the level statistics.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all fallible operations in the crate.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The frame range expression could not be parsed.
    #[error("invalid frame range '{expr}': {reason}")]
    InvalidRange {
        /// The expression as supplied on the command line.
        expr: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Width or height was not a usable frame geometry.
    #[error("invalid frame geometry: {0}")]
    InvalidGeometry(String),

    /// The input file does not exist.
    #[error("input file not found: {}", path.display())]
    MissingInput {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The input file is smaller than a single frame.
    #[error("input file too small: one frame needs {frame_size} bytes, file has {file_size}")]
    InputTooSmall {
        /// Bytes required for one frame at the given geometry.
        frame_size: u64,
        /// Actual size of the input file.
        file_size: u64,
    },

    /// The compression primitive reported a failure.
    #[error("compression failed: {0}")]
    Compression(String),

    /// Reading or seeking the input source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The benchmark results file could not be serialized or parsed.
    #[error("failed to persist results: {0}")]
    Results(#[from] serde_json::Error),
}
