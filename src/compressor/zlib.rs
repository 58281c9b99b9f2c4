//! zlib (DEFLATE) backend built on `flate2`.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use super::{CompressionLevel, Compressor};
use crate::error::BenchError;

/// Compresses each frame with zlib at the numeric level of the variant.
pub struct ZlibCompressor;

impl Compressor for ZlibCompressor {
    fn compress(&self, input: &[u8], level: CompressionLevel) -> Result<Vec<u8>, BenchError> {
        let mut encoder = ZlibEncoder::new(
            Vec::with_capacity(input.len() / 2),
            Compression::new(level.numeric()),
        );
        encoder
            .write_all(input)
            .map_err(|e| BenchError::Compression(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| BenchError::Compression(e.to_string()))
    }

    fn name(&self) -> &str {
        "zlib"
    }
}
