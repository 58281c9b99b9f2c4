//! Report rendering and result persistence.

use std::fs;
use std::path::Path;

use log::warn;
use prettytable::{row, Table};

use crate::error::BenchError;
use crate::stats::LevelSummary;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Prints the preamble describing the input before the sweep starts.
pub fn print_header(
    path: &Path,
    width: u64,
    height: u64,
    frame_size: u64,
    file_size: u64,
    frame_count: u64,
    runs: u32,
) {
    println!("=== YUV420P compression benchmark ===");
    println!("File:        {}", path.display());
    println!("Resolution:  {}x{}", width, height);
    println!(
        "Frame size:  {:.2} MB ({:.0} KB)",
        frame_size as f64 / MIB,
        frame_size as f64 / KIB
    );
    println!(
        "File size:   {:.2} MB ({:.0} KB)",
        file_size as f64 / MIB,
        file_size as f64 / KIB
    );
    println!("Frames:      {} selected, {} run(s) each", frame_count, runs);
    println!();
}

/// Prints one table row per compression level.
pub fn print_summaries(summaries: &[LevelSummary]) {
    let mut table = Table::new();
    table.add_row(row![
        "Level",
        "zlib",
        "Ratio",
        "Saving (%)",
        "Mean Time (ms)",
        "Mean Size (KB)",
        "Speed (MB/s)",
        "Ratio Min/Max",
        "Speed Min/Max (MB/s)",
        "Errors"
    ]);

    for summary in summaries {
        table.add_row(row![
            summary.label,
            summary.level,
            format!("{:.3}", summary.ratio),
            format!("{:.2}", summary.space_saving_pct),
            format!("{:.3}", summary.mean_time_ms),
            format!("{:.1}", summary.mean_output_bytes / KIB),
            format!("{:.2}", summary.speed_mbps),
            format!("{:.3} / {:.3}", summary.min_ratio, summary.max_ratio),
            format!("{:.2} / {:.2}", summary.min_speed_mbps, summary.max_speed_mbps),
            format!("{}", summary.error_count),
        ]);
    }

    println!();
    table.printstd();
    println!();
}

/// Appends the summaries to a JSON array file, creating it if absent.
///
/// An unreadable existing file is replaced rather than aborting the report.
pub fn append_summaries(summaries: &[LevelSummary], path: &Path) -> Result<(), BenchError> {
    let mut all: Vec<LevelSummary> = if path.exists() {
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).unwrap_or_else(|err| {
            warn!(
                "results file '{}' is not valid JSON ({}), starting fresh",
                path.display(),
                err
            );
            Vec::new()
        })
    } else {
        Vec::new()
    };

    all.extend_from_slice(summaries);
    let json = serde_json::to_string_pretty(&all)?;
    fs::write(path, json)?;
    Ok(())
}

/// Reads back a previously written results file.
pub fn read_summaries(path: &Path) -> Result<Vec<LevelSummary>, BenchError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
