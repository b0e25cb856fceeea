//! Axis-aligned bounding extents of a metric's shape.

use crate::error::MetricError;
use crate::log::debug;
use crate::metric::RadiusMetric;

/// Inclusive axis bounds of `{p : radius(p) <= distance}` around the
/// origin.
///
/// X and Y always span `[-distance, distance]`. Z spans the same range
/// for the 3D metric names and collapses to `[0, 0]` for the 2D names,
/// so the extents double as the metric's dimensionality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    /// Lowest x offset.
    pub min_x: f64,
    /// Highest x offset.
    pub max_x: f64,
    /// Lowest y offset.
    pub min_y: f64,
    /// Highest y offset.
    pub max_y: f64,
    /// Lowest z offset.
    pub min_z: f64,
    /// Highest z offset.
    pub max_z: f64,
}

impl Extents {
    /// Whether the offset lies inside the box, bounds inclusive.
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        (self.min_x..=self.max_x).contains(&x)
            && (self.min_y..=self.max_y).contains(&y)
            && (self.min_z..=self.max_z).contains(&z)
    }

    /// `true` when the box has no vertical extent.
    pub fn is_flat(&self) -> bool {
        self.min_z == 0.0 && self.max_z == 0.0
    }
}

/// Reject negative and NaN distances.
pub(crate) fn check_distance(distance: f64) -> Result<f64, MetricError> {
    if distance.is_nan() || distance < 0.0 {
        debug!(distance, "rejected distance");
        return Err(MetricError::InvalidArgument {
            name: "distance",
            value: distance,
            reason: "must be a non-negative number",
        });
    }
    Ok(distance)
}

impl RadiusMetric {
    /// All six bounds of the shape at `distance`.
    ///
    /// # Errors
    ///
    /// [`MetricError::InvalidArgument`] if `distance` is negative or NaN.
    pub fn extents(self, distance: f64) -> Result<Extents, MetricError> {
        let d = check_distance(distance)?;
        let dz = if self.is_3d() { d } else { 0.0 };
        Ok(Extents {
            min_x: -d,
            max_x: d,
            min_y: -d,
            max_y: d,
            // `-0.0` would compare equal but print oddly.
            min_z: if dz == 0.0 { 0.0 } else { -dz },
            max_z: dz,
        })
    }

    /// Lowest x offset at `distance`. Fails like [`extents`](Self::extents).
    pub fn min_x(self, distance: f64) -> Result<f64, MetricError> {
        Ok(self.extents(distance)?.min_x)
    }

    /// Highest x offset at `distance`.
    pub fn max_x(self, distance: f64) -> Result<f64, MetricError> {
        Ok(self.extents(distance)?.max_x)
    }

    /// Lowest y offset at `distance`.
    pub fn min_y(self, distance: f64) -> Result<f64, MetricError> {
        Ok(self.extents(distance)?.min_y)
    }

    /// Highest y offset at `distance`.
    pub fn max_y(self, distance: f64) -> Result<f64, MetricError> {
        Ok(self.extents(distance)?.max_y)
    }

    /// Lowest z offset at `distance`; `0` for the 2D names.
    pub fn min_z(self, distance: f64) -> Result<f64, MetricError> {
        Ok(self.extents(distance)?.min_z)
    }

    /// Highest z offset at `distance`; `0` for the 2D names.
    pub fn max_z(self, distance: f64) -> Result<f64, MetricError> {
        Ok(self.extents(distance)?.max_z)
    }
}
