//! Triangular faces of a periodic triangulation.
//!
//! Vertices are stored counter-clockwise. `neighbors[i]` is the face across the
//! side opposite `vertices[i]`; that side runs from `vertices[ccw(i)]` to
//! `vertices[cw(i)]`. On a closed surface every side has a neighbor.

use thiserror::Error;

use super::{
    triangulation_data_structure::{FaceKey, VertexKey},
    util::{UuidValidationError, ccw, cw, make_uuid, validate_uuid},
};
use crate::core::collections::Uuid;

/// Errors raised by per-face validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FaceValidationError {
    /// The face has an invalid UUID.
    #[error("Invalid UUID: {source}")]
    InvalidUuid {
        /// The underlying UUID validation error.
        #[from]
        source: UuidValidationError,
    },
    /// The face repeats a vertex.
    #[error("Duplicate vertices: face contains non-unique vertices which is not allowed")]
    DuplicateVertices,
    /// A vertex key referenced by the face was not found in the TDS.
    #[error("Vertex key {key:?} not found in TDS (indicates TDS corruption or inconsistency)")]
    VertexKeyNotFound {
        /// The vertex key that was not found.
        key: VertexKey,
    },
}

/// A triangle of the triangulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    vertices: [VertexKey; 3],
    neighbors: [Option<FaceKey>; 3],
    uuid: Uuid,
}

impl Face {
    /// Creates an unglued face over three vertex keys (counter-clockwise).
    #[must_use]
    pub fn new(vertices: [VertexKey; 3]) -> Self {
        Self {
            vertices,
            neighbors: [None; 3],
            uuid: make_uuid(),
        }
    }

    /// The three vertex keys, counter-clockwise.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[VertexKey; 3] {
        &self.vertices
    }

    /// Vertex `i` (`i < 3`).
    #[inline]
    #[must_use]
    pub const fn vertex(&self, i: usize) -> VertexKey {
        self.vertices[i]
    }

    /// The three neighbor slots.
    #[inline]
    #[must_use]
    pub const fn neighbors(&self) -> &[Option<FaceKey>; 3] {
        &self.neighbors
    }

    /// Neighbor across the side opposite vertex `i`.
    #[inline]
    #[must_use]
    pub const fn neighbor(&self, i: usize) -> Option<FaceKey> {
        self.neighbors[i]
    }

    /// Overwrites one neighbor slot without touching the other face.
    pub const fn set_neighbor(&mut self, i: usize, neighbor: Option<FaceKey>) {
        self.neighbors[i] = neighbor;
    }

    /// The face UUID.
    #[inline]
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Position of `vertex` in this face.
    #[must_use]
    pub fn index_of(&self, vertex: VertexKey) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }

    /// Whether the face contains `vertex`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexKey) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Endpoints of side `i` in counter-clockwise traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::core::face::Face;
    /// use bolza::core::triangulation_data_structure::VertexKey;
    /// use slotmap::KeyData;
    ///
    /// let [a, b, c] = [1, 2, 3].map(|n| VertexKey::from(KeyData::from_ffi(n)));
    /// let face = Face::new([a, b, c]);
    /// assert_eq!(face.side_endpoints(0), (b, c));
    /// assert_eq!(face.side_endpoints(2), (a, b));
    /// ```
    #[must_use]
    pub const fn side_endpoints(&self, i: usize) -> (VertexKey, VertexKey) {
        (self.vertices[ccw(i)], self.vertices[cw(i)])
    }

    /// Checks the face in isolation (UUID and distinct vertices).
    ///
    /// Key existence is checked by the TDS, which owns the vertex storage.
    ///
    /// # Errors
    ///
    /// Returns [`FaceValidationError`] on the first problem found.
    pub fn is_valid(&self) -> Result<(), FaceValidationError> {
        validate_uuid(&self.uuid)?;

        let [a, b, c] = self.vertices;
        if a == b || b == c || a == c {
            return Err(FaceValidationError::DuplicateVertices);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn vk(n: u64) -> VertexKey {
        VertexKey::from(KeyData::from_ffi(n))
    }

    fn fk(n: u64) -> FaceKey {
        FaceKey::from(KeyData::from_ffi(n))
    }

    #[test]
    fn test_side_endpoints_follow_ccw_order() {
        let face = Face::new([vk(1), vk(2), vk(3)]);
        assert_eq!(face.side_endpoints(0), (vk(2), vk(3)));
        assert_eq!(face.side_endpoints(1), (vk(3), vk(1)));
        assert_eq!(face.side_endpoints(2), (vk(1), vk(2)));
    }

    #[test]
    fn test_neighbors_start_unglued() {
        let mut face = Face::new([vk(1), vk(2), vk(3)]);
        assert_eq!(face.neighbors(), &[None, None, None]);

        face.set_neighbor(1, Some(fk(9)));
        assert_eq!(face.neighbor(1), Some(fk(9)));
        assert_eq!(face.neighbor(0), None);
    }

    #[test]
    fn test_index_of_and_contains() {
        let face = Face::new([vk(4), vk(5), vk(6)]);
        assert_eq!(face.index_of(vk(6)), Some(2));
        assert_eq!(face.index_of(vk(7)), None);
        assert!(face.contains_vertex(vk(4)));
    }

    #[test]
    fn test_is_valid_rejects_duplicate_vertices() {
        assert!(Face::new([vk(1), vk(2), vk(3)]).is_valid().is_ok());
        assert_eq!(
            Face::new([vk(1), vk(2), vk(1)]).is_valid(),
            Err(FaceValidationError::DuplicateVertices)
        );
    }
}
