//! Enumeration of the integer cells inside a metric's shape.

use crate::error::MetricError;
use crate::extents::check_distance;
use crate::metric::RadiusMetric;
use smallvec::{smallvec, SmallVec};

/// Integer grid offset with 2 (`[x, y]`) or 3 (`[x, y, z]`) axes.
pub type Coord = SmallVec<[i32; 3]>;

/// Largest distance accepted by [`RadiusMetric::cells_within`]. A 3D
/// footprint at this radius already holds millions of cells.
pub const MAX_FOOTPRINT_DISTANCE: f64 = 128.0;

impl RadiusMetric {
    /// Every integer offset inside the shape of radius `distance`.
    ///
    /// 2D metric names yield `[x, y]` offsets; 3D names yield
    /// `[x, y, z]` offsets spanning the vertical extent too. Offsets are
    /// in lexicographic order (x outermost).
    ///
    /// ```
    /// use reach_metric::RadiusMetric;
    ///
    /// let cells = RadiusMetric::Diamond.cells_within(1.0).unwrap();
    /// assert_eq!(cells.len(), 5);
    /// ```
    ///
    /// # Errors
    ///
    /// [`MetricError::InvalidArgument`] if `distance` is negative, NaN,
    /// or above [`MAX_FOOTPRINT_DISTANCE`].
    pub fn cells_within(self, distance: f64) -> Result<Vec<Coord>, MetricError> {
        let distance = check_distance(distance)?;
        if distance > MAX_FOOTPRINT_DISTANCE {
            return Err(MetricError::InvalidArgument {
                name: "distance",
                value: distance,
                reason: "exceeds MAX_FOOTPRINT_DISTANCE",
            });
        }
        let d = distance.floor() as i32;
        let dz = if self.is_3d() { d } else { 0 };

        let mut out = Vec::new();
        for x in -d..=d {
            for y in -d..=d {
                for z in -dz..=dz {
                    if !self.contains(f64::from(x), f64::from(y), f64::from(z), distance) {
                        continue;
                    }
                    out.push(if self.is_3d() {
                        smallvec![x, y, z]
                    } else {
                        smallvec![x, y]
                    });
                }
            }
        }
        Ok(out)
    }
}
