//! Error types for metric operations.

use std::error::Error;
use std::fmt;

/// Errors arising from metric queries.
///
/// Every variant is a caller precondition violation: none is transient
/// and retrying with the same arguments fails the same way.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricError {
    /// A numeric argument is outside the operation's domain
    /// (negative or NaN distance, distance too large to sample).
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
    /// Two coordinates passed to one query have different axis counts.
    DimensionMismatch {
        /// Axis count of the first coordinate.
        left: usize,
        /// Axis count of the second coordinate.
        right: usize,
    },
    /// A coordinate has an axis count other than 2 or 3.
    UnsupportedDimension {
        /// The axis count received.
        ndim: usize,
    },
    /// A metric name did not match any variant.
    UnknownMetric {
        /// The unrecognised name.
        name: String,
    },
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                name,
                value,
                reason,
            } => write!(f, "invalid argument {name} = {value}: {reason}"),
            Self::DimensionMismatch { left, right } => {
                write!(f, "coordinate dimension mismatch: {left}D vs {right}D")
            }
            Self::UnsupportedDimension { ndim } => {
                write!(f, "expected a 2D or 3D coordinate, got {ndim}D")
            }
            Self::UnknownMetric { name } => write!(
                f,
                "unknown radius metric '{name}' (expected square, diamond, circle, cube, octahedron or sphere)"
            ),
        }
    }
}

impl Error for MetricError {}
