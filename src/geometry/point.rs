//! Points of the hyperbolic plane in the Poincaré disk model.
//!
//! A [`HyperbolicPoint`] stores Euclidean coordinates `(x, y)` with
//! `x² + y² < 1`. Coordinates are `f64`; this crate never evaluates geometric
//! predicates on them, it only stores the seed positions so they can be
//! inspected and serialized.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a [`HyperbolicPoint`].
///
/// # Examples
///
/// ```rust
/// use bolza::geometry::point::{HyperbolicPoint, PointError};
///
/// let err = HyperbolicPoint::new(1.0, 0.0).unwrap_err();
/// assert!(matches!(err, PointError::OutsideDisk { .. }));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PointError {
    /// A coordinate is NaN or infinite.
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value}")]
    NonFinite {
        /// Index of the invalid coordinate (0 = x, 1 = y).
        coordinate_index: usize,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
    /// The point does not lie strictly inside the unit disk.
    #[error("Point lies outside the open unit disk: Euclidean norm {norm}")]
    OutsideDisk {
        /// Euclidean norm of the rejected coordinates.
        norm: f64,
    },
}

/// A point of the hyperbolic plane, in Poincaré disk coordinates.
///
/// Serializes as a two-element array `[x, y]`; deserialization re-validates.
///
/// # Examples
///
/// ```rust
/// use bolza::geometry::point::HyperbolicPoint;
///
/// let p = HyperbolicPoint::new(0.3, -0.4).unwrap();
/// assert_eq!(p.coords(), [0.3, -0.4]);
/// assert!((p.norm() - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct HyperbolicPoint {
    x: f64,
    y: f64,
}

impl HyperbolicPoint {
    /// The center of the disk.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point from disk coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`PointError::NonFinite`] for NaN/infinite input and
    /// [`PointError::OutsideDisk`] when `x² + y² >= 1`.
    pub fn new(x: f64, y: f64) -> Result<Self, PointError> {
        for (coordinate_index, value) in [x, y].into_iter().enumerate() {
            if !value.is_finite() {
                return Err(PointError::NonFinite {
                    coordinate_index,
                    coordinate_value: value.to_string(),
                });
            }
        }

        let norm = x.hypot(y);
        if norm >= 1.0 {
            return Err(PointError::OutsideDisk { norm });
        }

        Ok(Self { x, y })
    }

    /// Creates a point from a Euclidean disk radius and an angle in radians.
    ///
    /// # Errors
    ///
    /// Same as [`HyperbolicPoint::new`].
    pub fn from_polar(radius: f64, angle: f64) -> Result<Self, PointError> {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Builds a point the caller has already proven lies in the disk.
    pub(crate) fn from_polar_unchecked(radius: f64, angle: f64) -> Self {
        debug_assert!((0.0..1.0).contains(&radius));
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Both coordinates as an array.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Euclidean norm in the disk (always `< 1`).
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Hyperbolic distance to the origin, `2·artanh(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::geometry::point::HyperbolicPoint;
    ///
    /// assert_eq!(HyperbolicPoint::ORIGIN.distance_from_origin(), 0.0);
    /// ```
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        2.0 * self.norm().atanh()
    }
}

impl TryFrom<[f64; 2]> for HyperbolicPoint {
    type Error = PointError;

    fn try_from(coords: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(coords[0], coords[1])
    }
}

impl From<HyperbolicPoint> for [f64; 2] {
    fn from(point: HyperbolicPoint) -> Self {
        point.coords()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_new_rejects_non_finite_coordinates() {
        let err = HyperbolicPoint::new(0.0, f64::NAN).unwrap_err();
        assert!(matches!(
            err,
            PointError::NonFinite {
                coordinate_index: 1,
                ..
            }
        ));

        let err = HyperbolicPoint::new(f64::INFINITY, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PointError::NonFinite {
                coordinate_index: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_boundary_and_exterior() {
        assert!(matches!(
            HyperbolicPoint::new(0.6, 0.8),
            Err(PointError::OutsideDisk { .. })
        ));
        assert!(HyperbolicPoint::new(2.0, 0.0).is_err());
        assert!(HyperbolicPoint::new(0.599, 0.799).is_ok());
    }

    #[test]
    fn test_from_polar() {
        let p = HyperbolicPoint::from_polar(0.5, FRAC_PI_2).unwrap();
        assert_relative_eq!(p.x(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(p.y(), 0.5);
        assert_relative_eq!(p.angle(), FRAC_PI_2);
        assert_relative_eq!(p.norm(), 0.5);
    }

    #[test]
    fn test_distance_from_origin() {
        // r = tanh(d/2)
        let d: f64 = 1.7;
        let p = HyperbolicPoint::from_polar((d / 2.0).tanh(), 0.3).unwrap();
        assert_relative_eq!(p.distance_from_origin(), d, epsilon = 1e-12);
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let p = HyperbolicPoint::new(0.25, -0.5).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[0.25,-0.5]");

        let back: HyperbolicPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        assert!(serde_json::from_str::<HyperbolicPoint>("[1.5,0.0]").is_err());
    }
}
