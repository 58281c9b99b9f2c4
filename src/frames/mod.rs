//! In-memory frame storage.
//!
//! All selected frames are read up front into independent buffers and kept
//! for the whole benchmark. Trials borrow frames read-only; nothing mutates a
//! frame after load.

use std::io::{Read, Seek, SeekFrom};

use log::info;

use crate::error::BenchError;
use crate::range::FrameRange;

/// Owns the raw frame buffers selected by a [`FrameRange`].
pub struct FrameStore {
    frames: Vec<Vec<u8>>,
    frame_size: usize,
}

impl FrameStore {
    /// Reads every frame the range selects from `source`.
    ///
    /// Seeks to `start * frame_size`, then alternates a full-frame read with
    /// a forward seek over the `step - 1` skipped frames. A short read fails
    /// with the underlying I/O error rather than benchmarking a partially
    /// filled buffer.
    pub fn load<R: Read + Seek>(
        source: &mut R,
        frame_size: usize,
        range: &FrameRange,
    ) -> Result<Self, BenchError> {
        let count = range.frame_count();
        let mut frames = Vec::with_capacity(count as usize);

        source.seek(SeekFrom::Start(range.start() * frame_size as u64))?;
        for i in 0..count {
            let mut frame = vec![0u8; frame_size];
            source.read_exact(&mut frame)?;
            frames.push(frame);

            if range.step() > 1 && i + 1 < count {
                let skip = (range.step() - 1) * frame_size as u64;
                source.seek(SeekFrom::Current(skip as i64))?;
            }
        }

        info!("loaded {} frames of {} bytes each", frames.len(), frame_size);
        Ok(FrameStore { frames, frame_size })
    }

    /// The loaded frame buffers, in range order.
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Size in bytes of every frame in the store.
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
