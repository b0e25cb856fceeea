//! Reach: radius metrics for grid-based games and simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Reach sub-crates. For most users, adding `reach` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use reach::prelude::*;
//!
//! // Metric chosen from a config value.
//! let metric: RadiusMetric = "circle".parse().unwrap();
//! assert_eq!(metric.radius_2d(3.0, 4.0), 5.0);
//!
//! // Area-of-effect bounds and a random target inside it.
//! let extents = metric.extents(4.0).unwrap();
//! assert_eq!((extents.min_x, extents.max_x), (-4.0, 4.0));
//!
//! let mut rng = ChaChaSource::seeded(42);
//! let (x, y) = metric.sample(4.0, &mut rng).unwrap();
//! assert!(metric.contains(x as f64, y as f64, 0.0, 4.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`metric`] | `reach-metric` | `RadiusMetric`, extents, sampling, footprints |
//! | [`rng`] | `reach-rng` | `RandomSource`, `ChaChaSource`, shared default source |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Radius metrics, bounding extents, sampling and footprints
/// (`reach-metric`).
pub use reach_metric as metric;

/// Random source trait, `rand` adapter and the process-wide default
/// source (`reach-rng`).
pub use reach_rng as rng;

/// Common imports for typical Reach usage.
///
/// ```rust
/// use reach::prelude::*;
/// ```
pub mod prelude {
    // Metrics
    pub use reach_metric::{Coord, Extents, MetricFamily, RadiusMetric};

    // Randomness
    pub use reach_rng::{ChaChaSource, RandomSource, RngSource};

    // Errors
    pub use reach_metric::MetricError;
    pub use reach_rng::RngError;
}
