//! Benchmark workloads for Reach radius metrics.
//!
//! - [`delta_workload`]: deterministic spread of 3D offsets
//! - [`distance_workload`]: sampling radii covering small and large shapes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// `count` deterministic offsets with each axis in `[-span, span]`.
///
/// Uses multiplicative hashing of the index so workloads are identical
/// across runs without pulling a generator into the measured loop.
pub fn delta_workload(count: usize, span: i32) -> Vec<(f64, f64, f64)> {
    let width = (2 * span as i64 + 1) as u64;
    (0..count as u64)
        .map(|i| {
            let axis = |mul: u64| ((i.wrapping_mul(mul) >> 17) % width) as i64 - span as i64;
            (
                axis(6364136223846793007) as f64,
                axis(1442695040888963407) as f64,
                axis(2862933555777941757) as f64,
            )
        })
        .collect()
}

/// Radii used by sampling benchmarks: a melee cell, a spell area and a
/// large region.
pub fn distance_workload() -> [f64; 3] {
    [1.0, 8.0, 250.0]
}
