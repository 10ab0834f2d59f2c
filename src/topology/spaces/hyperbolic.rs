//! Hyperbolic surface topology implementation.
//!
//! The Bolza surface is the closed orientable surface of genus 2 obtained from
//! the regular hyperbolic octagon with interior angles π/4 by gluing opposite
//! sides. Its Euler characteristic is `χ = 2 − 2·2 = −2`.

use crate::topology::traits::topological_space::{TopologicalSpace, TopologyKind};

/// The Bolza surface: a closed hyperbolic surface of genus 2.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::spaces::BolzaSurface;
/// use bolza::topology::traits::topological_space::{TopologicalSpace, TopologyKind};
///
/// let space = BolzaSurface::new();
/// assert_eq!(space.kind(), TopologyKind::Hyperbolic);
/// assert!(!space.allows_boundary());
/// assert_eq!(space.euler_characteristic(), -2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BolzaSurface;

impl BolzaSurface {
    /// Genus of the Bolza surface.
    pub const GENUS: usize = 2;

    /// Creates the Bolza surface.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TopologicalSpace for BolzaSurface {
    const DIM: usize = 2;

    fn kind(&self) -> TopologyKind {
        TopologyKind::Hyperbolic
    }

    fn allows_boundary(&self) -> bool {
        false
    }

    fn genus(&self) -> usize {
        Self::GENUS
    }

    fn name(&self) -> String {
        "Bolza surface (genus 2)".to_string()
    }
}
