//! Core trait for topological spaces and related error types.
//!
//! A triangulation lives on a [`TopologicalSpace`]; the space fixes what the
//! Euler characteristic of a valid triangulation must be and whether open
//! sides are allowed.

use thiserror::Error;

/// Errors raised by surface-level topology validation.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::traits::topological_space::TopologyError;
///
/// let error = TopologyError::EulerMismatch {
///     computed: 2,
///     expected: -2,
///     topology_type: "Bolza surface (genus 2)".to_string(),
/// };
/// assert!(error.to_string().contains("computed χ=2"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopologyError {
    /// Euler characteristic does not match expected value.
    #[error(
        "Euler characteristic mismatch: computed χ={computed}, expected χ={expected} for {topology_type}"
    )]
    EulerMismatch {
        /// The computed Euler characteristic.
        computed: isize,
        /// The expected Euler characteristic.
        expected: isize,
        /// Human-readable topology type description.
        topology_type: String,
    },
}

/// Classification of topological spaces for triangulations.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::traits::topological_space::TopologyKind;
///
/// let kind = TopologyKind::Hyperbolic;
/// assert_eq!(format!("{:?}", kind), "Hyperbolic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyKind {
    /// Flat closed surface with periodic boundary conditions (genus 1).
    Toroidal,

    /// Closed surface of constant positive curvature (genus 0).
    Spherical,

    /// Closed surface of constant negative curvature (genus ≥ 2).
    ///
    /// Quotients of the hyperbolic plane by a surface group, such as the
    /// Bolza surface.
    Hyperbolic,
}

/// Trait for the closed surfaces a triangulation can inhabit.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::traits::topological_space::{TopologicalSpace, TopologyKind};
///
/// struct Torus;
///
/// impl TopologicalSpace for Torus {
///     const DIM: usize = 2;
///
///     fn kind(&self) -> TopologyKind {
///         TopologyKind::Toroidal
///     }
///
///     fn allows_boundary(&self) -> bool {
///         false
///     }
///
///     fn genus(&self) -> usize {
///         1
///     }
/// }
///
/// assert_eq!(Torus.euler_characteristic(), 0);
/// assert_eq!(Torus.name(), "Toroidal surface of genus 1");
/// ```
pub trait TopologicalSpace {
    /// The dimension of this topological space.
    const DIM: usize;

    /// Returns the kind of topological space.
    fn kind(&self) -> TopologyKind;

    /// Returns whether open (unglued) face sides are acceptable.
    ///
    /// Closed surfaces return `false`; a triangulation with an open side is
    /// then reported as a boundary on a closed space.
    fn allows_boundary(&self) -> bool;

    /// Genus of the (orientable, closed) surface.
    fn genus(&self) -> usize;

    /// Euler characteristic `χ = 2 − 2g` every valid triangulation must have.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "surface genus is tiny compared to isize::MAX"
    )]
    fn euler_characteristic(&self) -> isize {
        2 - 2 * self.genus() as isize
    }

    /// Human-readable description used in diagnostics.
    fn name(&self) -> String {
        format!("{:?} surface of genus {}", self.kind(), self.genus())
    }
}
