pub mod benchmark;
pub mod compressor;
pub mod error;
pub mod frames;
pub mod range;
pub mod report;
pub mod stats;
