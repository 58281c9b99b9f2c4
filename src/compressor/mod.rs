//! The compression primitive and the fixed level sweep.

pub mod zlib;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Speed/ratio tradeoff passed to the compressor, from "store" to
/// "best compression".
///
/// The benchmark sweeps [`CompressionLevel::SWEEP`] in order; the list is
/// fixed and not user configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionLevel {
    None,
    Fastest,
    Fast,
    Default,
    Best,
}

impl CompressionLevel {
    /// The full sweep, ordered from no compression to best compression.
    pub const SWEEP: [CompressionLevel; 5] = [
        CompressionLevel::None,
        CompressionLevel::Fastest,
        CompressionLevel::Fast,
        CompressionLevel::Default,
        CompressionLevel::Best,
    ];

    /// The zlib numeric level for this variant.
    pub fn numeric(self) -> u32 {
        match self {
            CompressionLevel::None => 0,
            CompressionLevel::Fastest => 1,
            CompressionLevel::Fast => 3,
            CompressionLevel::Default => 6,
            CompressionLevel::Best => 9,
        }
    }

    /// Display label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            CompressionLevel::None => "none",
            CompressionLevel::Fastest => "fastest",
            CompressionLevel::Fast => "fast",
            CompressionLevel::Default => "default",
            CompressionLevel::Best => "best",
        }
    }
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A lossless byte-stream compressor.
///
/// Implementations are stateless from the benchmark's point of view: each
/// call compresses one frame independently.
pub trait Compressor {
    /// Compresses `input` at the given level, returning the compressed bytes.
    fn compress(&self, input: &[u8], level: CompressionLevel) -> Result<Vec<u8>, BenchError>;

    /// Name of the compressor, for reports.
    fn name(&self) -> &str;
}
