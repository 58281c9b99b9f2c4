//! Trial execution and benchmark orchestration.
//!
//! A trial is one timed compression of one frame at one level. The runner
//! sweeps the fixed level list; per level it performs one discarded warmup
//! trial, then measures `runs * frame_count` trials with the repetition loop
//! outside and the frame loop inside. Trial failures are absorbed into the
//! statistics and never stop the sweep.

use std::time::Instant;

use log::{debug, info, warn};

use crate::compressor::{CompressionLevel, Compressor};
use crate::frames::FrameStore;
use crate::stats::{LevelStats, LevelSummary};

/// Outcome of a single compression trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialResult {
    /// Wall-clock time spent in the compressor.
    pub elapsed_ms: f64,
    /// Size of the compressed output.
    pub output_bytes: usize,
    pub succeeded: bool,
}

impl TrialResult {
    /// Result of a trial whose compression primitive failed.
    pub fn failure() -> Self {
        TrialResult {
            elapsed_ms: 0.0,
            output_bytes: 0,
            succeeded: false,
        }
    }
}

/// Runs one timed compression of `frame` at `level`.
///
/// A primitive failure is converted into a failed [`TrialResult`] here; it is
/// counted by the aggregator, not propagated.
pub fn run_trial(compressor: &dyn Compressor, frame: &[u8], level: CompressionLevel) -> TrialResult {
    let start = Instant::now();
    match compressor.compress(frame, level) {
        Ok(output) => TrialResult {
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
            output_bytes: output.len(),
            succeeded: true,
        },
        Err(err) => {
            debug!("compression primitive failed at level {}: {}", level, err);
            TrialResult::failure()
        }
    }
}

/// Drives the full sweep over loaded frames and collects level summaries.
pub struct BenchmarkRunner<'a> {
    compressor: &'a dyn Compressor,
    frames: &'a FrameStore,
    runs: u32,
}

impl<'a> BenchmarkRunner<'a> {
    pub fn new(compressor: &'a dyn Compressor, frames: &'a FrameStore, runs: u32) -> Self {
        BenchmarkRunner {
            compressor,
            frames,
            runs: runs.max(1),
        }
    }

    /// Benchmarks every level in the fixed sweep, in order.
    pub fn run(&self) -> Vec<LevelSummary> {
        CompressionLevel::SWEEP
            .iter()
            .map(|&level| self.run_level(level))
            .collect()
    }

    /// Benchmarks a single level: one discarded warmup trial on the first
    /// frame, then the measured runs.
    pub fn run_level(&self, level: CompressionLevel) -> LevelSummary {
        let frame_size = self.frames.frame_size();
        let mut stats = LevelStats::new();

        info!(
            "benchmarking {} level {} ({}): {} frames x {} runs",
            self.compressor.name(),
            level.numeric(),
            level,
            self.frames.len(),
            self.runs
        );

        if let Some(first) = self.frames.frames().first() {
            let _ = run_trial(self.compressor, first, level);
        }

        for run in 0..self.runs {
            for (index, frame) in self.frames.frames().iter().enumerate() {
                let trial = run_trial(self.compressor, frame, level);
                if !trial.succeeded && self.runs == 1 {
                    warn!("level {}: frame {} failed to compress", level, index);
                }
                debug!(
                    "level {} run {} frame {}: {:.3} ms, {} bytes",
                    level, run, index, trial.elapsed_ms, trial.output_bytes
                );
                stats.record(frame_size, &trial);
            }
        }

        stats.finalize(level, frame_size)
    }
}
