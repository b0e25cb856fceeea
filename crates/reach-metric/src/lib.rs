//! Radius metrics for grid simulations.
//!
//! A [`RadiusMetric`] answers three questions for one "shape of
//! movement": how far apart two cells are, what axis-aligned box a
//! radius spans, and how to draw a uniformly random cell inside that
//! radius. Field-of-view, pathfinding and area-of-effect code can stay
//! agnostic of whether a game moves in squares, diamonds or circles.
//!
//! # Shapes
//!
//! | 2D name | 3D name | Family | Distance |
//! |---------|---------|--------|----------|
//! | `Square` | `Cube` | Chebyshev | largest axis delta |
//! | `Diamond` | `Octahedron` | Manhattan | sum of axis deltas |
//! | `Circle` | `Sphere` | Euclidean | straight line |
//!
//! # Sampling
//!
//! [`RadiusMetric::sample`] takes any [`reach_rng::RandomSource`];
//! [`RadiusMetric::sample_default`] uses the guarded process-wide
//! default source from [`reach_rng::shared`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod extents;
mod log;
pub mod metric;
pub mod region;
pub mod sample;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::MetricError;
pub use extents::Extents;
pub use metric::{MetricFamily, RadiusMetric};
pub use region::{Coord, MAX_FOOTPRINT_DISTANCE};
pub use sample::MAX_SAMPLE_DISTANCE;
