//! The regular hyperbolic octagon that is the fundamental domain of the Bolza surface.
//!
//! The octagon is centered at the origin of the Poincaré disk, has interior
//! angles π/4 (so all eight corners meet at a single point of the surface),
//! and its opposite sides are paired: side `k` is glued to side `k + 4` with
//! the traversal direction reversed.
//!
//! Side `k` runs from corner `k` to corner `k + 1`. Corners sit at polar angle
//! `(2k − 1)π/8` and side midpoints at `kπ/4`.
//!
//! Closed forms (hyperbolic trigonometry of the right triangle
//! origin / side midpoint / corner, with angles π/8 at both acute vertices):
//!
//! - `cosh(d(O, corner)) = cot²(π/8)`, giving disk radius `2^(−1/4)`;
//! - `cosh(d(O, midpoint)) = cot(π/8)`, giving disk radius `√(√2 − 1)`.

use std::f64::consts::{FRAC_PI_4, FRAC_PI_8};

use crate::geometry::point::HyperbolicPoint;

/// Converts a hyperbolic distance from the origin to a Poincaré disk radius.
///
/// # Examples
///
/// ```rust
/// use bolza::geometry::octagon::disk_radius_for_distance;
///
/// assert_eq!(disk_radius_for_distance(0.0), 0.0);
/// assert!((disk_radius_for_distance(2.0) - 1.0_f64.tanh()).abs() < 1e-15);
/// ```
#[must_use]
pub fn disk_radius_for_distance(distance: f64) -> f64 {
    (distance / 2.0).tanh()
}

/// Fundamental domain of the Bolza surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BolzaOctagon;

impl BolzaOctagon {
    /// Number of sides (and corners) of the octagon.
    pub const NUM_SIDES: usize = 8;

    /// Number of distinct side pairs (edges of the surface's octagon cell).
    pub const NUM_SIDE_PAIRS: usize = 4;

    /// Interior angle at every corner.
    pub const INTERIOR_ANGLE: f64 = FRAC_PI_4;

    /// Disk radius of the corners, `2^(−1/4)`.
    #[must_use]
    pub fn corner_radius() -> f64 {
        2.0_f64.powf(-0.25)
    }

    /// Disk radius of the side midpoints, `√(√2 − 1)`.
    #[must_use]
    pub fn side_midpoint_radius() -> f64 {
        (std::f64::consts::SQRT_2 - 1.0).sqrt()
    }

    /// Disk radius of the hyperbolic midpoint between the origin and a corner.
    #[must_use]
    pub fn inner_point_radius() -> f64 {
        let corner_distance = 2.0 * Self::corner_radius().atanh();
        disk_radius_for_distance(corner_distance / 2.0)
    }

    /// Polar angle of corner `k` (taken modulo 8).
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // k < 8
    pub fn corner_angle(k: usize) -> f64 {
        let k = (k % Self::NUM_SIDES) as f64;
        (2.0 * k - 1.0) * FRAC_PI_8
    }

    /// Polar angle of the midpoint of side `k` (taken modulo 8).
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // k < 8
    pub fn side_midpoint_angle(k: usize) -> f64 {
        (k % Self::NUM_SIDES) as f64 * FRAC_PI_4
    }

    /// Corner `k` of the octagon.
    #[must_use]
    pub fn corner(k: usize) -> HyperbolicPoint {
        HyperbolicPoint::from_polar_unchecked(Self::corner_radius(), Self::corner_angle(k))
    }

    /// Midpoint of side `k`.
    #[must_use]
    pub fn side_midpoint(k: usize) -> HyperbolicPoint {
        HyperbolicPoint::from_polar_unchecked(
            Self::side_midpoint_radius(),
            Self::side_midpoint_angle(k),
        )
    }

    /// Hyperbolic midpoint of the geodesic from the origin to corner `k`.
    #[must_use]
    pub fn inner_point(k: usize) -> HyperbolicPoint {
        HyperbolicPoint::from_polar_unchecked(Self::inner_point_radius(), Self::corner_angle(k))
    }

    /// Side that side `k` is glued to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::geometry::octagon::BolzaOctagon;
    ///
    /// assert_eq!(BolzaOctagon::paired_side(1), 5);
    /// assert_eq!(BolzaOctagon::paired_side(6), 2);
    /// ```
    #[must_use]
    pub const fn paired_side(k: usize) -> usize {
        (k + Self::NUM_SIDE_PAIRS) % Self::NUM_SIDES
    }
}
