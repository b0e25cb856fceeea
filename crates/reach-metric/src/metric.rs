//! The [`RadiusMetric`] enumeration and distance computation.

use crate::error::MetricError;
use std::fmt;
use std::str::FromStr;

/// The three ways of measuring distance on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    /// Longest axial distance (L-inf). Diagonal steps cost the same as
    /// cardinal ones.
    Chebyshev,
    /// Sum of axial distances (L1). Only cardinal steps are allowed.
    Manhattan,
    /// Straight-line distance (L2).
    Euclidean,
}

impl MetricFamily {
    /// Combine per-axis deltas into a distance. Signs are ignored and a
    /// NaN delta yields NaN.
    #[inline]
    pub fn combine(self, dx: f64, dy: f64, dz: f64) -> f64 {
        let (dx, dy, dz) = (dx.abs(), dy.abs(), dz.abs());
        match self {
            // `f64::max` drops a NaN operand.
            Self::Chebyshev if dx.is_nan() || dy.is_nan() || dz.is_nan() => f64::NAN,
            Self::Chebyshev => dx.max(dy).max(dz),
            Self::Manhattan => dx + dy + dz,
            Self::Euclidean => (dx * dx + dy * dy + dz * dz).sqrt(),
        }
    }
}

/// Shape of movement radius on a grid.
///
/// Each variant pairs a [`MetricFamily`] with a dimensionality hint.
/// `Square`, `Diamond` and `Circle` are the 2D names; `Cube`,
/// `Octahedron` and `Sphere` are the 3D names of the same families.
/// Both names of a pair measure identical distances. The hint only
/// changes the vertical bounding extent, which is flat for the 2D names.
///
/// Values are stateless and `Copy`, so they can be shared freely between
/// threads.
///
/// ```
/// use reach_metric::RadiusMetric;
///
/// assert_eq!(RadiusMetric::Square.radius(3.0, 4.0, 0.0), 4.0);
/// assert_eq!(RadiusMetric::Diamond.radius(3.0, 4.0, 0.0), 7.0);
/// assert_eq!(RadiusMetric::Circle.radius(3.0, 4.0, 0.0), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RadiusMetric {
    /// 8-way movement, diagonals cost 1. Chebyshev, 2D.
    Square,
    /// 4-way movement. Manhattan, 2D.
    Diamond,
    /// 8-way movement costed by true distance. Euclidean, 2D.
    Circle,
    /// Chebyshev, 3D.
    Cube,
    /// Manhattan, 3D.
    Octahedron,
    /// Euclidean, 3D.
    Sphere,
}

impl RadiusMetric {
    /// Every variant, 2D names first.
    pub const ALL: [RadiusMetric; 6] = [
        Self::Square,
        Self::Diamond,
        Self::Circle,
        Self::Cube,
        Self::Octahedron,
        Self::Sphere,
    ];

    /// The distance family this variant measures with.
    pub const fn family(self) -> MetricFamily {
        match self {
            Self::Square | Self::Cube => MetricFamily::Chebyshev,
            Self::Diamond | Self::Octahedron => MetricFamily::Manhattan,
            Self::Circle | Self::Sphere => MetricFamily::Euclidean,
        }
    }

    /// `true` for the 3D names (`Cube`, `Octahedron`, `Sphere`).
    pub const fn is_3d(self) -> bool {
        matches!(self, Self::Cube | Self::Octahedron | Self::Sphere)
    }

    /// The variant with the given family and dimensionality.
    pub const fn for_family(family: MetricFamily, three_d: bool) -> Self {
        match (family, three_d) {
            (MetricFamily::Chebyshev, false) => Self::Square,
            (MetricFamily::Manhattan, false) => Self::Diamond,
            (MetricFamily::Euclidean, false) => Self::Circle,
            (MetricFamily::Chebyshev, true) => Self::Cube,
            (MetricFamily::Manhattan, true) => Self::Octahedron,
            (MetricFamily::Euclidean, true) => Self::Sphere,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Circle => "circle",
            Self::Cube => "cube",
            Self::Octahedron => "octahedron",
            Self::Sphere => "sphere",
        }
    }

    /// Distance covered by the offset `(dx, dy, dz)`.
    ///
    /// Total over all inputs: the sign of each delta is discarded and
    /// NaN propagates.
    #[inline]
    pub fn radius(self, dx: f64, dy: f64, dz: f64) -> f64 {
        self.family().combine(dx, dy, dz)
    }

    /// Planar distance, equal to `radius(dx, dy, 0.0)`.
    #[inline]
    pub fn radius_2d(self, dx: f64, dy: f64) -> f64 {
        self.radius(dx, dy, 0.0)
    }

    /// Distance from `(x1, y1, z1)` to `(x2, y2, z2)`.
    #[inline]
    pub fn radius_between(self, x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
        self.radius(x2 - x1, y2 - y1, z2 - z1)
    }

    /// Planar distance from `(x1, y1)` to `(x2, y2)`.
    #[inline]
    pub fn radius_between_2d(self, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        self.radius(x2 - x1, y2 - y1, 0.0)
    }

    /// Distance between two integer grid cells given as `[x, y]` or
    /// `[x, y, z]`. Axis deltas are taken in `i64`, so no coordinate
    /// pair can overflow.
    ///
    /// # Errors
    ///
    /// [`MetricError::DimensionMismatch`] if the cells have different
    /// axis counts, [`MetricError::UnsupportedDimension`] if they are not
    /// 2D or 3D.
    pub fn radius_cells(self, a: &[i32], b: &[i32]) -> Result<f64, MetricError> {
        if a.len() != b.len() {
            return Err(MetricError::DimensionMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        if !(2..=3).contains(&a.len()) {
            return Err(MetricError::UnsupportedDimension { ndim: a.len() });
        }
        let delta = |i: usize| match (a.get(i), b.get(i)) {
            (Some(&p), Some(&q)) => (i64::from(q) - i64::from(p)) as f64,
            _ => 0.0,
        };
        Ok(self.radius(delta(0), delta(1), delta(2)))
    }

    /// Whether the offset `(dx, dy, dz)` lies inside the shape of radius
    /// `distance`. Boundary offsets are inside.
    #[inline]
    pub fn contains(self, dx: f64, dy: f64, dz: f64, distance: f64) -> bool {
        self.radius(dx, dy, dz) <= distance
    }
}

impl fmt::Display for RadiusMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RadiusMetric {
    type Err = MetricError;

    /// Parse a case-insensitive variant name, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MetricError::UnknownMetric {
                name: wanted.to_string(),
            })
    }
}
