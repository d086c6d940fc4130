//! Mandelbrot escape-grid checksum microbenchmark.
//!
//! Walks a fixed 500×500 sample grid over the classic Mandelbrot viewport,
//! runs a 50-iteration escape-time test per pixel, packs the escape flags
//! MSB-first into bytes, and XOR-folds the bytes into a single checksum.
//! The checksum is the program's sole output and is bit-for-bit reproducible
//! across runs, which is what makes it useful for timing comparisons.

pub mod checksum;
pub mod compute;
pub mod escape;
pub mod grid;
pub mod pixel;
