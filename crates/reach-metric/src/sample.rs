//! Uniform random points inside a metric's shape.
//!
//! Each family has a rejection-free sampler that consumes exactly two
//! draws per point:
//!
//! - **Chebyshev**: independent uniform `x` and `y` over the square.
//! - **Manhattan**: a uniform candidate in the bounding square; corner
//!   candidates are folded back into the diamond.
//! - **Euclidean**: polar coordinates with a `sqrt` radius correction.
//!
//! 3D metric names sample the same planar shape as their 2D pair.

use crate::error::MetricError;
use crate::extents::check_distance;
use crate::log::debug;
use crate::metric::{MetricFamily, RadiusMetric};
use reach_rng::{with_default_source, RandomSource};
use std::f64::consts::TAU;

/// Largest distance accepted by the samplers. Keeps `2 * d + 1` and
/// every sampled coordinate inside `i32`.
pub const MAX_SAMPLE_DISTANCE: f64 = (i32::MAX / 2) as f64;

fn check_sample_distance(distance: f64) -> Result<f64, MetricError> {
    let d = check_distance(distance)?;
    if d > MAX_SAMPLE_DISTANCE {
        debug!(distance, "rejected sample distance");
        return Err(MetricError::InvalidArgument {
            name: "distance",
            value: distance,
            reason: "exceeds MAX_SAMPLE_DISTANCE",
        });
    }
    Ok(d)
}

/// Integer half-width of the lattice shape at `distance`.
#[inline]
fn lattice_radius(distance: f64) -> i32 {
    distance.floor() as i32
}

impl RadiusMetric {
    /// A uniformly distributed integer offset `(x, y)` inside the planar
    /// shape of radius `distance`.
    ///
    /// Deterministic for a deterministic `rng`: every call consumes
    /// exactly two draws. Chebyshev and Manhattan shapes use
    /// `floor(distance)` as their lattice radius.
    ///
    /// ```
    /// use reach_metric::RadiusMetric;
    /// use reach_rng::ChaChaSource;
    ///
    /// let mut rng = ChaChaSource::seeded(1);
    /// let (x, y) = RadiusMetric::Diamond.sample(3.0, &mut rng).unwrap();
    /// assert!(x.abs() + y.abs() <= 3);
    /// ```
    ///
    /// # Errors
    ///
    /// [`MetricError::InvalidArgument`] if `distance` is negative, NaN,
    /// or above [`MAX_SAMPLE_DISTANCE`].
    pub fn sample<R: RandomSource + ?Sized>(
        self,
        distance: f64,
        rng: &mut R,
    ) -> Result<(i32, i32), MetricError> {
        let distance = check_sample_distance(distance)?;
        Ok(match self.family() {
            MetricFamily::Chebyshev => sample_square(lattice_radius(distance), rng),
            MetricFamily::Manhattan => sample_diamond(lattice_radius(distance), rng),
            MetricFamily::Euclidean => sample_disk(distance, rng),
        })
    }

    /// [`sample`](Self::sample) drawing from the process-wide default
    /// source.
    ///
    /// The default source is created on first use (see
    /// [`reach_rng::shared`]) and draws are serialized behind a lock.
    /// Sequences are reproducible only if one thread draws and the seed
    /// was fixed with [`reach_rng::init_default_source`]. Prefer
    /// [`sample`](Self::sample) with an owned source in concurrent code.
    ///
    /// # Errors
    ///
    /// Same as [`sample`](Self::sample). Invalid arguments are rejected
    /// before the default source is touched.
    pub fn sample_default(self, distance: f64) -> Result<(i32, i32), MetricError> {
        let distance = check_sample_distance(distance)?;
        with_default_source(|rng| self.sample(distance, rng))
    }
}

fn sample_square<R: RandomSource + ?Sized>(d: i32, rng: &mut R) -> (i32, i32) {
    (rng.uniform_int(-d, d), rng.uniform_int(-d, d))
}

fn sample_diamond<R: RandomSource + ?Sized>(d: i32, rng: &mut R) -> (i32, i32) {
    let x = rng.uniform_int(-d, d);
    let y = rng.uniform_int(-d, d);
    fold_into_diamond(x, y, d)
}

/// Map a point of the `[-d, d]²` square into the diamond `|x| + |y| <= d`.
///
/// Points already inside are returned unchanged. A corner point is
/// reflected through its quadrant's corner, `v -> sign(v) * d - v` on each
/// axis, then nudged one cell along a single axis: outward in x for
/// quadrants I and III, in y for II and IV. The nudge makes the four
/// corner triangles land on disjoint half-open quarters of the diamond,
/// which together cover every diamond cell except the origin once. Over
/// the whole square each cell is therefore hit twice, the origin once.
///
/// Requires `|x| <= d` and `|y| <= d`.
#[inline]
pub(crate) fn fold_into_diamond(x: i32, y: i32, d: i32) -> (i32, i32) {
    if x.abs() + y.abs() <= d {
        return (x, y);
    }
    // Outside the diamond both coordinates are non-zero.
    let sx = x.signum();
    let sy = y.signum();
    let (nudge_x, nudge_y) = if sx == sy { (sx, 0) } else { (0, sy) };
    (sx * d - x + nudge_x, sy * d - y + nudge_y)
}

fn sample_disk<R: RandomSource + ?Sized>(distance: f64, rng: &mut R) -> (i32, i32) {
    let u = rng.uniform_double(0.0, 1.0);
    let theta = rng.uniform_double(0.0, TAU);
    // sqrt(u) makes the density uniform in area rather than in radius.
    let r = distance * u.sqrt();
    let (fx, fy) = (r * theta.cos(), r * theta.sin());

    let (x, y) = (fx.round() as i32, fy.round() as i32);
    if MetricFamily::Euclidean.combine(f64::from(x), f64::from(y), 0.0) <= distance {
        return (x, y);
    }
    // Truncation toward zero never increases |x| or |y|.
    debug!(fx, fy, distance, "rounded disk sample left the disk, truncating");
    (fx.trunc() as i32, fy.trunc() as i32)
}
