use std::fs;
use std::path::Path;
use std::process;

use log::info;

use yuv_bench::benchmark::BenchmarkRunner;
use yuv_bench::compressor::zlib::ZlibCompressor;
use yuv_bench::error::BenchError;
use yuv_bench::frames::FrameStore;
use yuv_bench::range::FrameRange;
use yuv_bench::report;

fn main() {
    // Per-frame failure warnings must be visible without RUST_LOG set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <file> <width> <height> [frameRange] [runs] [resultsJson]",
            args[0]
        );
        eprintln!("  frameRange: <start>[:<end>[:<step>]], default \"0\" (first frame only)");
        eprintln!("Example: {} test.yuv 1920 1080 0:99:10 5", args[0]);
        process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), BenchError> {
    let path = Path::new(&args[1]);
    let width = parse_dimension(&args[2])?;
    let height = parse_dimension(&args[3])?;

    // YUV420P: full-resolution luma plus two quarter-resolution chroma planes.
    let frame_size = width * height * 3 / 2;
    if frame_size == 0 {
        return Err(BenchError::InvalidGeometry(format!(
            "{}x{} yields an empty frame",
            width, height
        )));
    }

    if !path.exists() {
        return Err(BenchError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let file_size = fs::metadata(path)?.len();
    if file_size < frame_size {
        return Err(BenchError::InputTooSmall {
            frame_size,
            file_size,
        });
    }
    let max_frames = file_size / frame_size;

    let range_expr = args.get(4).map(String::as_str).unwrap_or("0");
    let range = FrameRange::parse(range_expr, max_frames)?;
    info!(
        "range resolved: frames {}..={} step {} ({} frames of {} available)",
        range.start(),
        range.end(),
        range.step(),
        range.frame_count(),
        max_frames
    );

    let runs = args
        .get(5)
        .and_then(|s| s.parse::<u32>().ok())
        .map(|n| n.max(1))
        .unwrap_or(1);

    let mut file = fs::File::open(path)?;
    let store = FrameStore::load(&mut file, frame_size as usize, &range)?;

    report::print_header(path, width, height, frame_size, file_size, range.frame_count(), runs);

    let compressor = ZlibCompressor;
    let summaries = BenchmarkRunner::new(&compressor, &store, runs).run();
    report::print_summaries(&summaries);

    if let Some(out) = args.get(6) {
        report::append_summaries(&summaries, Path::new(out))?;
        info!("results appended to {}", out);
    }

    Ok(())
}

fn parse_dimension(token: &str) -> Result<u64, BenchError> {
    token
        .parse()
        .map_err(|_| BenchError::InvalidGeometry(format!("'{}' is not a valid dimension", token)))
}
