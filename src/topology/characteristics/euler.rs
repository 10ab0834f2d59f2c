//! Euler characteristic computation for triangulated surfaces.
//!
//! For a triangulated surface the f-vector is `(V, E, F)` and
//! `χ = V − E + F`. A closed orientable surface of genus `g` has
//! `χ = 2 − 2g`, so the edge count of any triangulation of it is fixed by the
//! vertex and face counts: `E = V + F + 2g − 2`.
//!
//! # Examples
//!
//! ```rust
//! use bolza::core::periodic_triangulation::PeriodicHyperbolicTriangulation;
//! use bolza::topology::characteristics::euler;
//!
//! let mut tr = PeriodicHyperbolicTriangulation::new();
//! tr.insert_dummy_points().unwrap();
//!
//! let counts = euler::count_simplices(tr.tds());
//! assert_eq!(euler::euler_characteristic(&counts), -2);
//! ```

use crate::core::triangulation_data_structure::Tds;

/// Counts of k-simplices for all dimensions 0 ≤ k ≤ 2.
///
/// `by_dim = [V, E, F]`. In the topology literature this is commonly called
/// the **f-vector**.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::characteristics::euler::FVector;
///
/// // Boundary of a tetrahedron: 4 vertices, 6 edges, 4 faces
/// let counts = FVector {
///     by_dim: vec![4, 6, 4],
/// };
///
/// assert_eq!(counts.count(0), 4);  // vertices
/// assert_eq!(counts.count(1), 6);  // edges
/// assert_eq!(counts.count(2), 4);  // faces
/// assert_eq!(counts.count(3), 0);  // out of range
/// assert_eq!(counts.dimension(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FVector {
    /// `by_dim[k]` = `f_k` = number of `k`-simplices
    pub by_dim: Vec<usize>,
}

impl FVector {
    /// Get the number of `k`-simplices.
    ///
    /// Returns 0 if `k` is out of range.
    #[must_use]
    #[inline]
    pub fn count(&self, k: usize) -> usize {
        self.by_dim.get(k).copied().unwrap_or(0)
    }

    /// Get the dimension (length of the f-vector minus one).
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.by_dim.len().saturating_sub(1)
    }
}

/// Topological classification of a triangulated surface.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::characteristics::euler::TopologyClassification;
///
/// let surface = TopologyClassification::ClosedSurface { genus: 2 };
/// assert_eq!(format!("{:?}", surface), "ClosedSurface { genus: 2 }");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyClassification {
    /// Empty triangulation (no faces).
    Empty,

    /// Closed orientable surface (every side glued) of the given genus.
    ClosedSurface {
        /// Genus derived from the Euler characteristic.
        genus: usize,
    },

    /// At least one face side is open.
    SurfaceWithBoundary,

    /// Closed, but χ is not `2 − 2g` for any genus (odd or greater than 2).
    Unknown,
}

/// Count all k-simplices in the triangulation.
///
/// - `f₀` (vertices) and `f₂` (faces): direct counts from the TDS
/// - `f₁` (edges): glued side pairs count once, open sides once
///
/// Edges are counted from face sides rather than endpoint pairs so that the
/// multi-edges of periodic quotients are counted correctly.
///
/// # Examples
///
/// ```rust
/// use bolza::core::triangulation_data_structure::Tds;
/// use bolza::topology::characteristics::euler::count_simplices;
///
/// let counts = count_simplices(&Tds::empty());
/// assert_eq!(counts.by_dim, vec![0, 0, 0]);
/// ```
#[must_use]
pub fn count_simplices(tds: &Tds) -> FVector {
    FVector {
        by_dim: vec![
            tds.number_of_vertices(),
            tds.number_of_edges(),
            tds.number_of_faces(),
        ],
    }
}

/// Compute Euler characteristic from simplex counts.
///
/// Uses the alternating sum formula: χ = Σ(-1)^k · `f_k`
///
/// # Examples
///
/// ```rust
/// use bolza::topology::characteristics::euler::{FVector, euler_characteristic};
///
/// // Sphere: V=4, E=6, F=4 → χ = 2
/// assert_eq!(euler_characteristic(&FVector { by_dim: vec![4, 6, 4] }), 2);
///
/// // Bolza surface seed: V=14, E=48, F=32 → χ = -2
/// assert_eq!(euler_characteristic(&FVector { by_dim: vec![14, 48, 32] }), -2);
/// ```
#[must_use]
#[allow(clippy::cast_possible_wrap)] // Simplex counts won't exceed isize::MAX in practice
pub fn euler_characteristic(counts: &FVector) -> isize {
    counts
        .by_dim
        .iter()
        .enumerate()
        .map(|(k, &f_k)| {
            let sign = if k % 2 == 0 { 1 } else { -1 };
            sign * (f_k as isize)
        })
        .sum()
}

/// Genus of a closed orientable surface with Euler characteristic `chi`.
///
/// Returns `None` when `chi` is odd or greater than 2.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::characteristics::euler::genus_from_euler_characteristic;
///
/// assert_eq!(genus_from_euler_characteristic(2), Some(0));
/// assert_eq!(genus_from_euler_characteristic(0), Some(1));
/// assert_eq!(genus_from_euler_characteristic(-2), Some(2));
/// assert_eq!(genus_from_euler_characteristic(1), None);
/// assert_eq!(genus_from_euler_characteristic(4), None);
/// ```
#[must_use]
pub fn genus_from_euler_characteristic(chi: isize) -> Option<usize> {
    if chi > 2 || chi % 2 != 0 {
        return None;
    }
    usize::try_from((2 - chi) / 2).ok()
}

/// Edge count forced by the Euler relation `V − E + F = 2 − 2g`.
///
/// For genus 2 this is `V + F + 2`.
///
/// # Examples
///
/// ```rust
/// use bolza::topology::characteristics::euler::expected_edge_count;
///
/// assert_eq!(expected_edge_count(14, 32, 2), 48);
/// assert_eq!(expected_edge_count(4, 4, 0), 6);
/// ```
#[must_use]
pub const fn expected_edge_count(vertices: usize, faces: usize, genus: usize) -> usize {
    (vertices + faces + 2 * genus).saturating_sub(2)
}

/// Classify the triangulation topologically.
///
/// - No faces → `Empty`
/// - Some side open → `SurfaceWithBoundary`
/// - Closed with `χ = 2 − 2g` → `ClosedSurface { genus: g }`
/// - Otherwise → `Unknown`
///
/// # Examples
///
/// ```rust
/// use bolza::core::periodic_triangulation::PeriodicHyperbolicTriangulation;
/// use bolza::topology::characteristics::euler::{classify_triangulation, TopologyClassification};
///
/// let mut tr = PeriodicHyperbolicTriangulation::new();
/// assert_eq!(classify_triangulation(tr.tds()), TopologyClassification::Empty);
///
/// tr.insert_dummy_points().unwrap();
/// assert_eq!(
///     classify_triangulation(tr.tds()),
///     TopologyClassification::ClosedSurface { genus: 2 }
/// );
/// ```
#[must_use]
pub fn classify_triangulation(tds: &Tds) -> TopologyClassification {
    if tds.number_of_faces() == 0 {
        return TopologyClassification::Empty;
    }

    let has_boundary = tds.sides().any(|side| tds.mirror_side(side).is_none());
    if has_boundary {
        return TopologyClassification::SurfaceWithBoundary;
    }

    let chi = euler_characteristic(&count_simplices(tds));
    genus_from_euler_characteristic(chi).map_or(TopologyClassification::Unknown, |genus| {
        TopologyClassification::ClosedSurface { genus }
    })
}

/// Get expected χ for a topological classification.
///
/// # Expected Values
///
/// - `Empty`: χ = 0
/// - `ClosedSurface { genus }`: χ = 2 − 2·genus
/// - `SurfaceWithBoundary`, `Unknown`: None
///
/// # Examples
///
/// ```rust
/// use bolza::topology::characteristics::euler::{TopologyClassification, expected_chi_for};
///
/// assert_eq!(expected_chi_for(&TopologyClassification::Empty), Some(0));
/// assert_eq!(expected_chi_for(&TopologyClassification::ClosedSurface { genus: 0 }), Some(2));
/// assert_eq!(expected_chi_for(&TopologyClassification::ClosedSurface { genus: 2 }), Some(-2));
/// assert_eq!(expected_chi_for(&TopologyClassification::Unknown), None);
/// ```
#[must_use]
pub fn expected_chi_for(classification: &TopologyClassification) -> Option<isize> {
    match classification {
        TopologyClassification::Empty => Some(0),
        TopologyClassification::ClosedSurface { genus } => {
            isize::try_from(*genus).ok().map(|g| 2 - 2 * g)
        }
        TopologyClassification::SurfaceWithBoundary | TopologyClassification::Unknown => None,
    }
}
