//! Frame range selection.
//!
//! A range expression selects which frames of the input file are benchmarked:
//! `<start>[:<end>[:<step>]]`, all inclusive. A bare number selects exactly
//! that frame. Out-of-bounds values are recovered (swapped, reset, or
//! clamped), never rejected; only unparsable syntax is an error.

use crate::error::BenchError;

/// An inclusive, stepped selection of frame indices, bounded to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    start: u64,
    end: u64,
    step: u64,
}

impl FrameRange {
    /// Parses a range expression against the number of frames in the source.
    ///
    /// An empty expression defaults to `"0"` (first frame only). Recovery
    /// rules, applied in order: `start > end` swaps the two, `start`
    /// past the end of the file resets to 0, `end` past the end of the file
    /// clamps to the last frame, and a zero step is coerced to 1.
    pub fn parse(expr: &str, max_frames: u64) -> Result<Self, BenchError> {
        let effective = if expr.is_empty() { "0" } else { expr };
        let mut parts = effective.split(':');

        let mut start = parse_index(effective, parts.next().unwrap_or(""), "start")?;
        let mut end = start;
        let mut step = 1;

        if let Some(token) = parts.next() {
            end = parse_index(effective, token, "end")?;
            if let Some(token) = parts.next() {
                step = parse_index(effective, token, "step")?;
            }
        }
        if parts.next().is_some() {
            return Err(BenchError::InvalidRange {
                expr: expr.to_string(),
                reason: "too many ':' separators".to_string(),
            });
        }

        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        if start >= max_frames {
            start = 0;
        }
        if end >= max_frames {
            end = max_frames.saturating_sub(1);
        }
        if step == 0 {
            step = 1;
        }

        Ok(FrameRange { start, end, step })
    }

    /// First selected frame index.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last candidate frame index (inclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Distance between consecutive selected frames.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Number of frames the range selects.
    pub fn frame_count(&self) -> u64 {
        (self.end - self.start) / self.step + 1
    }

    /// The selected frame indices, in order.
    pub fn indices(&self) -> impl Iterator<Item = u64> + '_ {
        (self.start..=self.end).step_by(self.step as usize)
    }
}

fn parse_index(expr: &str, token: &str, field: &str) -> Result<u64, BenchError> {
    token.trim().parse().map_err(|_| BenchError::InvalidRange {
        expr: expr.to_string(),
        reason: format!("'{}' is not a valid {} index", token, field),
    })
}
