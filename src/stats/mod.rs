//! Per-level statistics accumulation.
//!
//! One [`LevelStats`] accumulates every trial for a compression level across
//! all runs and frames, then finalizes into a [`LevelSummary`] once. Failed
//! trials only bump the error counter; mean, min, and max are computed over
//! the successful subset.

use serde::{Deserialize, Serialize};

use crate::benchmark::TrialResult;
use crate::compressor::CompressionLevel;

const MIB: f64 = 1024.0 * 1024.0;

/// Running statistics for one compression level.
#[derive(Debug, Clone)]
pub struct LevelStats {
    total_time_ms: f64,
    total_output_bytes: u64,
    min_ratio: f64,
    max_ratio: f64,
    min_speed_mbps: f64,
    max_speed_mbps: f64,
    error_count: u64,
    sample_count: u64,
}

impl LevelStats {
    pub fn new() -> Self {
        LevelStats {
            total_time_ms: 0.0,
            total_output_bytes: 0,
            min_ratio: f64::INFINITY,
            max_ratio: 0.0,
            min_speed_mbps: f64::INFINITY,
            max_speed_mbps: 0.0,
            error_count: 0,
            sample_count: 0,
        }
    }

    /// Folds one trial into the running statistics.
    pub fn record(&mut self, input_bytes: usize, trial: &TrialResult) {
        if !trial.succeeded {
            self.error_count += 1;
            return;
        }

        let ratio = input_bytes as f64 / trial.output_bytes as f64;
        let speed_mbps = (input_bytes as f64 / MIB) / (trial.elapsed_ms / 1000.0);

        self.total_time_ms += trial.elapsed_ms;
        self.total_output_bytes += trial.output_bytes as u64;
        self.sample_count += 1;
        self.min_ratio = self.min_ratio.min(ratio);
        self.max_ratio = self.max_ratio.max(ratio);
        self.min_speed_mbps = self.min_speed_mbps.min(speed_mbps);
        self.max_speed_mbps = self.max_speed_mbps.max(speed_mbps);
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    /// Computes the derived fields once all trials for the level are done.
    ///
    /// With zero successful trials the aggregate ratio is undefined; ratio,
    /// speed, and space saving are then all reported as 0.0 rather than
    /// dividing by zero.
    pub fn finalize(&self, level: CompressionLevel, input_bytes: usize) -> LevelSummary {
        let total_input = self.sample_count as f64 * input_bytes as f64;
        let samples = self.sample_count as f64;

        let (mean_time_ms, mean_output_bytes) = if self.sample_count > 0 {
            (self.total_time_ms / samples, self.total_output_bytes as f64 / samples)
        } else {
            (0.0, 0.0)
        };

        let ratio = if self.total_output_bytes > 0 {
            total_input / self.total_output_bytes as f64
        } else {
            0.0
        };
        let speed_mbps = if ratio > 0.0 && self.total_time_ms > 0.0 {
            (total_input / MIB) / (self.total_time_ms / 1000.0)
        } else {
            0.0
        };
        let space_saving_pct = if ratio > 0.0 { (1.0 - 1.0 / ratio) * 100.0 } else { 0.0 };

        LevelSummary {
            label: level.label().to_string(),
            level: level.numeric(),
            mean_time_ms,
            mean_output_bytes,
            ratio,
            speed_mbps,
            space_saving_pct,
            min_ratio: if self.sample_count > 0 { self.min_ratio } else { 0.0 },
            max_ratio: self.max_ratio,
            min_speed_mbps: if self.sample_count > 0 { self.min_speed_mbps } else { 0.0 },
            max_speed_mbps: self.max_speed_mbps,
            error_count: self.error_count,
            sample_count: self.sample_count,
        }
    }
}

impl Default for LevelStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Finalized statistics for one compression level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub label: String,
    pub level: u32,
    pub mean_time_ms: f64,
    pub mean_output_bytes: f64,
    /// Aggregate compression ratio, `total_input / total_output`.
    pub ratio: f64,
    /// Aggregate throughput over the same totals, in MiB of input per second.
    pub speed_mbps: f64,
    pub space_saving_pct: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
    pub min_speed_mbps: f64,
    pub max_speed_mbps: f64,
    pub error_count: u64,
    pub sample_count: u64,
}
