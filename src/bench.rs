//! Benchmark utilities and performance testing
//!
//! Simple timing helpers for measuring encode and decode throughput over a
//! spread of values covering every mode. Only available with std feature.

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

use crate::decoder::decode;
use crate::encoder::encode_into;
use crate::error::Result;
use crate::number::Number;
use crate::MAX_ENCODED_SIZE;

/// Simple benchmark statistics
#[derive(Debug, Clone)]
pub struct BenchStats {
    /// Number of operations
    pub count: usize,
    /// Total duration
    pub total_duration: Duration,
    /// Average time per operation
    pub avg_ns_per_op: u64,
    /// Operations per second
    pub ops_per_sec: f64,
}

impl BenchStats {
    /// Create new stats from measurements
    pub fn new(count: usize, total_duration: Duration) -> Self {
        let total_ns = total_duration.as_nanos() as u64;
        let avg_ns_per_op = if count > 0 {
            total_ns / count as u64
        } else {
            0
        };
        let ops_per_sec = if total_ns > 0 {
            (count as f64) * 1_000_000_000.0 / (total_ns as f64)
        } else {
            0.0
        };

        Self {
            count,
            total_duration,
            avg_ns_per_op,
            ops_per_sec,
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for BenchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ops, {:.2}ms total, {} ns/op, {:.0} ops/sec",
            self.count,
            self.total_duration.as_secs_f64() * 1000.0,
            self.avg_ns_per_op,
            self.ops_per_sec
        )
    }
}

/// Deterministic test value `i`, cycling through every mode
pub fn sample_value(i: usize) -> Number {
    let n = i as i64;
    match i % 6 {
        0 => Number::Int((n % 200) as i128),
        1 => Number::Int(-(n * 37) as i128),
        2 => Number::Int((n as i128) << 20),
        3 => Number::Int(u64::MAX as i128 - n as i128),
        4 => Number::Float(n as f64 + 0.5),
        _ => Number::Float(n as f64 / 3.0),
    }
}

/// Benchmark encoding
#[cfg(feature = "std")]
pub fn bench_encode(count: usize) -> Result<BenchStats> {
    let mut buf = [0u8; MAX_ENCODED_SIZE];
    let start = Instant::now();

    for i in 0..count {
        let size = encode_into(sample_value(i), &mut buf)?;
        std::hint::black_box(size);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, duration))
}

/// Benchmark decoding
#[cfg(feature = "std")]
pub fn bench_decode(count: usize) -> Result<BenchStats> {
    // Pre-encode test values
    let mut encoded = std::vec::Vec::with_capacity(count);
    let mut buf = [0u8; MAX_ENCODED_SIZE];

    for i in 0..count {
        let size = encode_into(sample_value(i), &mut buf)?;
        encoded.push(buf[..size].to_vec());
    }

    let start = Instant::now();

    for bytes in &encoded {
        let result = decode(bytes)?;
        std::hint::black_box(result);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, duration))
}

/// Benchmark encode + decode roundtrip
#[cfg(feature = "std")]
pub fn bench_roundtrip(count: usize) -> Result<BenchStats> {
    let mut buf = [0u8; MAX_ENCODED_SIZE];
    let start = Instant::now();

    for i in 0..count {
        let size = encode_into(sample_value(i), &mut buf)?;
        let result = decode(&buf[..size])?;
        std::hint::black_box(result);
    }

    let duration = start.elapsed();
    Ok(BenchStats::new(count, duration))
}
