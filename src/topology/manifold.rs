//! # PL-Manifold Validation (Topology Only)
//!
//! Combinatorial invariants certifying that a triangulated surface is a
//! closed **PL 2-manifold**, assuming the triangulation data structure is
//! structurally consistent (every side glued to a mirrored side).
//!
//! ## What is being validated
//!
//! 1. **Vertex-link condition**
//!    For every vertex `v`, the link `Lk(v)` is a circle (S¹): rotating
//!    counter-clockwise through the faces around `v` returns to the starting
//!    face after visiting every face that contains `v` exactly once. Two
//!    cones glued at a vertex (a pinch point) give a link with two cycles and
//!    fail here.
//!
//! 2. **Connectedness**
//!    The dual graph (faces joined across glued sides) is connected, so the
//!    triangulation covers one surface rather than several.
//!
//! These conditions are enforced respectively by [`validate_vertex_links`]
//! and [`validate_connectedness`].
//!
//! On a periodic quotient the link of a vertex can pass through the same
//! neighboring vertex more than once (the corner of the Bolza octagon sees
//! each side midpoint twice), so links are walked over face corners rather
//! than built as graphs on vertex keys.
//!
//! ## What is *not* checked here
//!
//! - Geometric predicates and metric properties
//! - Global topology (Euler characteristic, genus); see
//!   `topology::characteristics`
//! - TDS structural invariants (neighbor pointers, mappings)
//!
//! ## References
//!
//! - J. R. Munkres, *Elements of Algebraic Topology*, Addison–Wesley, 1984.
//!   (Chapter 9: Simplicial Manifolds and Links.)
//! - H. Edelsbrunner & J. Harer, *Computational Topology*, AMS, 2010.

use thiserror::Error;

use crate::core::{
    collections::{FaceKeySet, fast_hash_set_with_capacity},
    triangulation_data_structure::{FaceKey, Tds, VertexKey},
    util::ccw,
};

/// Errors that can occur during manifold (topology) validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ManifoldError {
    /// The triangulation data structure is internally inconsistent.
    #[error("Inconsistent data structure: {message}")]
    InconsistentDataStructure {
        /// Description of the inconsistency.
        message: String,
    },

    /// A vertex link is not a single cycle as required for a closed PL 2-manifold.
    #[error(
        "Vertex link is not a circle: vertex {vertex_key:?} has {star_face_count} incident faces, rotation visited {link_face_count}, closed={closed}"
    )]
    VertexLinkNotManifold {
        /// The vertex whose link failed validation.
        vertex_key: VertexKey,
        /// Number of faces containing the vertex.
        star_face_count: usize,
        /// Number of faces visited by one counter-clockwise rotation.
        link_face_count: usize,
        /// Whether the rotation returned to its starting face.
        closed: bool,
    },

    /// The faces split into more than one connected component.
    #[error("Triangulation is disconnected: reached {reached} of {total} faces from the first face")]
    Disconnected {
        /// Faces reachable from the first face.
        reached: usize,
        /// Total number of faces.
        total: usize,
    },
}

/// Validates that every vertex link is a single closed cycle.
///
/// # Errors
///
/// - [`ManifoldError::VertexLinkNotManifold`] if a rotation around a vertex
///   does not close up, or closes up before visiting every incident face.
/// - [`ManifoldError::InconsistentDataStructure`] if a vertex's incident face
///   is missing.
///
/// # Examples
///
/// ```rust
/// use bolza::core::periodic_triangulation::PeriodicHyperbolicTriangulation;
/// use bolza::topology::manifold::validate_vertex_links;
///
/// let mut tr = PeriodicHyperbolicTriangulation::new();
/// tr.insert_dummy_points().unwrap();
/// assert!(validate_vertex_links(tr.tds()).is_ok());
/// ```
pub fn validate_vertex_links(tds: &Tds) -> Result<(), ManifoldError> {
    if tds.number_of_faces() == 0 {
        return Ok(());
    }

    let vertex_to_faces = tds.build_vertex_to_faces_map();

    for (vertex_key, _vertex) in tds.vertices() {
        let star_face_count = vertex_to_faces.get(&vertex_key).map_or(0, |faces| faces.len());
        validate_single_vertex_link(tds, vertex_key, star_face_count)?;
    }

    Ok(())
}

fn validate_single_vertex_link(
    tds: &Tds,
    vertex_key: VertexKey,
    star_face_count: usize,
) -> Result<(), ManifoldError> {
    let not_manifold = |link_face_count, closed| ManifoldError::VertexLinkNotManifold {
        vertex_key,
        star_face_count,
        link_face_count,
        closed,
    };

    if star_face_count == 0 {
        return Err(not_manifold(0, false));
    }

    let ring: Vec<FaceKey> = tds.faces_around_vertex(vertex_key).collect();
    let (Some(&first), Some(&last)) = (ring.first(), ring.last()) else {
        return Err(ManifoldError::InconsistentDataStructure {
            message: format!("vertex {vertex_key:?} has no usable incident face"),
        });
    };

    let closed = rotate_ccw(tds, last, vertex_key) == Some(first);

    let mut distinct: FaceKeySet = fast_hash_set_with_capacity(ring.len());
    let all_distinct = ring.iter().all(|&face| distinct.insert(face));

    if closed && all_distinct && ring.len() == star_face_count {
        Ok(())
    } else {
        Err(not_manifold(ring.len(), closed))
    }
}

/// The face after `face_key` in the counter-clockwise rotation around `vertex_key`.
fn rotate_ccw(tds: &Tds, face_key: FaceKey, vertex_key: VertexKey) -> Option<FaceKey> {
    let face = tds.get_face_by_key(face_key)?;
    let i = face.index_of(vertex_key)?;
    face.neighbor(ccw(i))
}

/// Validates that all faces form a single component under side adjacency.
///
/// # Errors
///
/// Returns [`ManifoldError::Disconnected`] with the size of the component
/// containing the first face.
///
/// # Examples
///
/// ```rust
/// use bolza::core::triangulation_data_structure::Tds;
/// use bolza::topology::manifold::validate_connectedness;
///
/// assert!(validate_connectedness(&Tds::empty()).is_ok());
/// ```
pub fn validate_connectedness(tds: &Tds) -> Result<(), ManifoldError> {
    let total = tds.number_of_faces();
    let Some((start, _)) = tds.faces().next() else {
        return Ok(());
    };

    let reached = tds.reachable_faces(start).len();
    if reached == total {
        Ok(())
    } else {
        Err(ManifoldError::Disconnected { reached, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        dummy_points::SeedComplex, periodic_triangulation::PeriodicHyperbolicTriangulation,
    };

    /// Boundary of a tetrahedron over seed indices `offset..offset + 4`.
    fn tetrahedron(offset: usize) -> Vec<[usize; 3]> {
        let [a, b, c, d] = [offset, offset + 1, offset + 2, offset + 3];
        vec![[b, c, d], [a, d, c], [a, b, d], [a, c, b]]
    }

    fn seeded(points: usize, faces: &[[usize; 3]]) -> PeriodicHyperbolicTriangulation {
        let seed = SeedComplex::from_vertex_triples(points, faces).unwrap();
        let mut tr = PeriodicHyperbolicTriangulation::new();
        tr.seed_with(&seed).unwrap();
        tr
    }

    #[test]
    fn test_tetrahedron_links_are_cycles() {
        let tr = seeded(4, &tetrahedron(0));
        assert!(validate_vertex_links(tr.tds()).is_ok());
        assert!(validate_connectedness(tr.tds()).is_ok());
    }

    #[test]
    fn test_two_spheres_are_disconnected() {
        let mut faces = tetrahedron(0);
        faces.extend(tetrahedron(4));
        let tr = seeded(8, &faces);

        assert!(validate_vertex_links(tr.tds()).is_ok());
        assert_eq!(
            validate_connectedness(tr.tds()),
            Err(ManifoldError::Disconnected {
                reached: 4,
                total: 8
            })
        );
    }

    #[test]
    fn test_pinched_spheres_fail_vertex_link() {
        // Two tetrahedra sharing vertex 0 only: vertex 0's link is two circles.
        let mut faces = tetrahedron(0);
        faces.extend(
            tetrahedron(3)
                .into_iter()
                .map(|f| f.map(|v| if v == 3 { 0 } else { v })),
        );
        let tr = seeded(7, &faces);

        let err = validate_vertex_links(tr.tds()).unwrap_err();
        assert!(matches!(
            err,
            ManifoldError::VertexLinkNotManifold {
                star_face_count: 6,
                link_face_count: 3,
                closed: true,
                ..
            }
        ));
        // Faces meeting only at a vertex are not side-adjacent.
        assert!(validate_connectedness(tr.tds()).is_err());
    }
}
