//! Triangulation data structure for closed triangulated surfaces.
//!
//! The [`Tds`] stores vertices and triangular faces in slotmaps and keeps
//! UUID↔key mappings for both. Faces carry neighbor keys (neighbor `i` is
//! opposite vertex `i`) and vertices carry one incident face key. Edges are
//! implicit: a pair of mirrored face sides.
//!
//! The structure is purely combinatorial. It places no restriction on which
//! vertices may be joined more than once, which is what periodic quotients
//! need: on the Bolza surface the corner vertex is joined to each side
//! midpoint by two distinct edges.
//!
//! # Invariants
//!
//! | Invariant | Helper |
//! |---|---|
//! | Vertex mappings | [`Tds::validate_vertex_mappings`] |
//! | Face mappings | [`Tds::validate_face_mappings`] |
//! | Face validity | [`Tds::validate_faces`] |
//! | Neighbor consistency | [`Tds::validate_neighbors`] |
//! | Incident faces | [`Tds::validate_incident_faces`] |
//! | Vertex links | [`crate::topology::manifold::validate_vertex_links`] |
//! | Connectedness | [`crate::topology::manifold::validate_connectedness`] |
//!
//! [`Tds::is_valid`] stops at the first structural failure;
//! [`Tds::validation_report`] collects every failed invariant.

use std::fmt;

use slotmap::new_key_type;
use thiserror::Error;

use super::{
    edge::{EdgeKey, FaceSide},
    face::{Face, FaceValidationError},
    util::{UuidValidationError, ccw},
    vertex::Vertex,
};
use crate::core::collections::{
    Entry, FaceKeySet, SmallBuffer, StorageMap, Uuid, UuidToFaceKeyMap, UuidToVertexKeyMap,
    VertexToFacesMap, fast_hash_map_with_capacity,
};
use crate::topology::manifold::{ManifoldError, validate_connectedness, validate_vertex_links};
use crate::topology::traits::topological_space::TopologyError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Represents the type of entity in the triangulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A vertex entity.
    Vertex,
    /// A face entity.
    Face,
}

/// Errors that can occur while building a [`Tds`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TdsConstructionError {
    /// Attempted to insert an entity with a UUID that already exists.
    #[error("Duplicate UUID: {entity:?} with UUID {uuid} already exists")]
    DuplicateUuid {
        /// The type of entity.
        entity: EntityKind,
        /// The UUID that was duplicated.
        uuid: Uuid,
    },
    /// A face or side referenced a key that is not stored.
    #[error("Unknown {entity:?} key: {message}")]
    UnknownKey {
        /// The type of entity whose key was missing.
        entity: EntityKind,
        /// Description of the missing reference.
        message: String,
    },
    /// The face failed per-face validation.
    #[error("Invalid face: {source}")]
    InvalidFace {
        /// The underlying face validation error.
        #[from]
        source: FaceValidationError,
    },
    /// A side index was not in `0..3`.
    #[error("Side index {index} out of range for a triangle")]
    SideIndexOutOfRange {
        /// The offending index.
        index: usize,
    },
}

/// Errors that can occur during validation of a constructed [`Tds`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TdsValidationError {
    /// The triangulation contains an invalid vertex.
    #[error("Invalid vertex {vertex_id}: {source}")]
    InvalidVertex {
        /// The UUID of the invalid vertex.
        vertex_id: Uuid,
        /// The underlying UUID validation error.
        source: UuidValidationError,
    },
    /// The triangulation contains an invalid face.
    #[error("Invalid face {face_id}: {source}")]
    InvalidFace {
        /// The UUID of the invalid face.
        face_id: Uuid,
        /// The underlying face validation error.
        source: FaceValidationError,
    },
    /// Neighbor relationships are invalid.
    #[error("Invalid neighbor relationships: {message}")]
    InvalidNeighbors {
        /// Description of the neighbor validation failure.
        message: String,
    },
    /// A vertex's incident face pointer is missing or wrong.
    #[error("Invalid incident face: {message}")]
    InvalidIncidentFace {
        /// Description of the incident face failure.
        message: String,
    },
    /// Entity mapping inconsistency (vertex or face).
    #[error("{entity:?} mapping inconsistency: {message}")]
    MappingInconsistency {
        /// The type of entity with the mapping issue.
        entity: EntityKind,
        /// Description of the mapping inconsistency.
        message: String,
    },
    /// The surface is not a 2-manifold (vertex links, connectedness).
    #[error(transparent)]
    Manifold(#[from] ManifoldError),
    /// Global topology does not match the surface (Euler characteristic).
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Classifies the kind of triangulation invariant that failed during validation.
///
/// Used by [`TriangulationValidationReport`] to group related errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantKind {
    /// Vertex UUID↔key mapping invariants.
    VertexMappings,
    /// Face UUID↔key mapping invariants.
    FaceMappings,
    /// Per-face validity (distinct stored vertices, UUID) and per-vertex UUIDs.
    FaceValidity,
    /// Every side glued to a mirrored side of an existing face.
    NeighborConsistency,
    /// Every vertex points at a face that contains it.
    IncidentFaces,
    /// Every vertex link is a single cycle.
    VertexLinks,
    /// The face adjacency graph is connected.
    Connectedness,
    /// `V − E + F` matches the surface's Euler characteristic.
    EulerCharacteristic,
}

impl fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VertexMappings => "vertex mappings",
            Self::FaceMappings => "face mappings",
            Self::FaceValidity => "face validity",
            Self::NeighborConsistency => "neighbor consistency",
            Self::IncidentFaces => "incident faces",
            Self::VertexLinks => "vertex links",
            Self::Connectedness => "connectedness",
            Self::EulerCharacteristic => "Euler characteristic",
        };
        f.write_str(name)
    }
}

/// A single invariant violation recorded during validation diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The kind of invariant that failed.
    pub kind: InvariantKind,
    /// The detailed validation error explaining the failure.
    pub error: TdsValidationError,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.error)
    }
}

/// Aggregate report of one or more validation failures.
///
/// `Display` writes one violation per line; this is the verbose form printed
/// by `is_valid(true)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangulationValidationReport {
    /// The ordered list of invariant violations that occurred.
    pub violations: Vec<InvariantViolation>,
}

impl TriangulationValidationReport {
    /// Returns `true` if no violations were recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation of `kind` was recorded.
    #[must_use]
    pub fn contains(&self, kind: InvariantKind) -> bool {
        self.violations.iter().any(|v| v.kind == kind)
    }

    /// The distinct kinds that failed, in report order.
    #[must_use]
    pub fn kinds(&self) -> Vec<InvariantKind> {
        let mut kinds: Vec<InvariantKind> = Vec::with_capacity(self.violations.len());
        for violation in &self.violations {
            if !kinds.contains(&violation.kind) {
                kinds.push(violation.kind);
            }
        }
        kinds
    }
}

impl fmt::Display for TriangulationValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for TriangulationValidationReport {}

/// Configuration options for [`Tds::validation_report`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Also check vertex links, connectedness, and (at the triangulation
    /// level) the Euler characteristic.
    pub check_topology: bool,
}

impl ValidationOptions {
    /// Structural checks only.
    pub const STRUCTURAL: Self = Self {
        check_topology: false,
    };

    /// Every check.
    pub const ALL: Self = Self {
        check_topology: true,
    };
}

// =============================================================================
// KEY TYPES
// =============================================================================

new_key_type! {
    /// Key type for accessing vertices in the storage map.
    pub struct VertexKey;
}

new_key_type! {
    /// Key type for accessing faces in the storage map.
    pub struct FaceKey;
}

// =============================================================================
// TDS
// =============================================================================

/// Combinatorial storage for a triangulated closed surface.
///
/// # Usage
///
/// ```rust
/// use bolza::core::triangulation_data_structure::Tds;
/// use bolza::core::vertex::Vertex;
/// use bolza::geometry::point::HyperbolicPoint;
///
/// let mut tds = Tds::empty();
/// let a = tds.insert_vertex(Vertex::new(HyperbolicPoint::ORIGIN)).unwrap();
/// let b = tds.insert_vertex(Vertex::new(HyperbolicPoint::new(0.5, 0.0).unwrap())).unwrap();
/// let c = tds.insert_vertex(Vertex::new(HyperbolicPoint::new(0.0, 0.5).unwrap())).unwrap();
/// let face = tds.insert_face([a, b, c]).unwrap();
///
/// assert_eq!(tds.number_of_vertices(), 3);
/// assert_eq!(tds.number_of_faces(), 1);
/// // Three unglued sides are three edges.
/// assert_eq!(tds.number_of_edges(), 3);
/// // A lone triangle is not a closed surface.
/// assert!(tds.is_valid().is_err());
/// # let _ = face;
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tds {
    vertices: StorageMap<VertexKey, Vertex>,
    faces: StorageMap<FaceKey, Face>,
    pub(crate) uuid_to_vertex_key: UuidToVertexKeyMap,
    pub(crate) uuid_to_face_key: UuidToFaceKeyMap,
}

impl Tds {
    /// Creates an empty TDS.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Removes every vertex and face.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.uuid_to_vertex_key.clear();
        self.uuid_to_face_key.clear();
    }

    // =========================================================================
    // COUNTS AND ITERATION
    // =========================================================================

    /// Whether the TDS has neither vertices nor faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Number of stored vertices.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored faces.
    #[must_use]
    pub fn number_of_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of edges: each glued side pair counts once, each open side once.
    ///
    /// A side whose neighbor has no mirror side is counted on its own.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.edges().count()
    }

    /// Iterator over `(key, vertex)` pairs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &Vertex)> {
        self.vertices.iter()
    }

    /// Iterator over `(key, face)` pairs.
    pub fn faces(&self) -> impl Iterator<Item = (FaceKey, &Face)> {
        self.faces.iter()
    }

    /// Iterator over every face side.
    pub fn sides(&self) -> impl Iterator<Item = FaceSide> + '_ {
        self.faces
            .keys()
            .flat_map(|face| (0..3).map(move |i| FaceSide::new(face, i)))
    }

    /// Iterator over canonical edge keys, one per edge.
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.sides().filter_map(|side| {
            let mirror = self.mirror_side(side);
            EdgeKey::is_canonical(side, mirror).then(|| EdgeKey::new(side, mirror))
        })
    }

    // =========================================================================
    // KEY/UUID ACCESS
    // =========================================================================

    /// Gets a vertex by key.
    #[inline]
    #[must_use]
    pub fn get_vertex_by_key(&self, vertex_key: VertexKey) -> Option<&Vertex> {
        self.vertices.get(vertex_key)
    }

    /// Gets a mutable vertex by key.
    #[inline]
    #[must_use]
    pub fn get_vertex_by_key_mut(&mut self, vertex_key: VertexKey) -> Option<&mut Vertex> {
        self.vertices.get_mut(vertex_key)
    }

    /// Gets a face by key.
    #[inline]
    #[must_use]
    pub fn get_face_by_key(&self, face_key: FaceKey) -> Option<&Face> {
        self.faces.get(face_key)
    }

    /// Gets a mutable face by key.
    ///
    /// Prefer [`Tds::glue`] for neighbor changes; raw edits through this
    /// reference are not checked until validation.
    #[inline]
    #[must_use]
    pub fn get_face_by_key_mut(&mut self, face_key: FaceKey) -> Option<&mut Face> {
        self.faces.get_mut(face_key)
    }

    /// Whether `vertex_key` is stored.
    #[inline]
    #[must_use]
    pub fn contains_vertex_key(&self, vertex_key: VertexKey) -> bool {
        self.vertices.contains_key(vertex_key)
    }

    /// Whether `face_key` is stored.
    #[inline]
    #[must_use]
    pub fn contains_face_key(&self, face_key: FaceKey) -> bool {
        self.faces.contains_key(face_key)
    }

    /// Looks up a vertex key by UUID.
    #[inline]
    #[must_use]
    pub fn vertex_key_from_uuid(&self, uuid: &Uuid) -> Option<VertexKey> {
        self.uuid_to_vertex_key.get(uuid).copied()
    }

    /// Looks up a face key by UUID.
    #[inline]
    #[must_use]
    pub fn face_key_from_uuid(&self, uuid: &Uuid) -> Option<FaceKey> {
        self.uuid_to_face_key.get(uuid).copied()
    }

    /// Looks up a vertex UUID by key.
    #[inline]
    #[must_use]
    pub fn vertex_uuid_from_key(&self, vertex_key: VertexKey) -> Option<Uuid> {
        self.vertices.get(vertex_key).map(Vertex::uuid)
    }

    /// Looks up a face UUID by key.
    #[inline]
    #[must_use]
    pub fn face_uuid_from_key(&self, face_key: FaceKey) -> Option<Uuid> {
        self.faces.get(face_key).map(Face::uuid)
    }

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Stores a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`TdsConstructionError::DuplicateUuid`] if a vertex with the
    /// same UUID is already stored.
    pub fn insert_vertex(&mut self, vertex: Vertex) -> Result<VertexKey, TdsConstructionError> {
        let uuid = vertex.uuid();
        match self.uuid_to_vertex_key.entry(uuid) {
            Entry::Occupied(_) => Err(TdsConstructionError::DuplicateUuid {
                entity: EntityKind::Vertex,
                uuid,
            }),
            Entry::Vacant(slot) => {
                let key = self.vertices.insert(vertex);
                slot.insert(key);
                Ok(key)
            }
        }
    }

    /// Stores an unglued face over three existing vertices (counter-clockwise).
    ///
    /// # Errors
    ///
    /// Returns [`TdsConstructionError::UnknownKey`] if a vertex is missing and
    /// [`TdsConstructionError::InvalidFace`] if a vertex is repeated.
    pub fn insert_face(
        &mut self,
        vertices: [VertexKey; 3],
    ) -> Result<FaceKey, TdsConstructionError> {
        if let Some(missing) = vertices.iter().find(|&&v| !self.contains_vertex_key(v)) {
            return Err(TdsConstructionError::UnknownKey {
                entity: EntityKind::Vertex,
                message: format!("face references vertex {missing:?}"),
            });
        }

        let face = Face::new(vertices);
        face.is_valid()?;

        let uuid = face.uuid();
        if self.uuid_to_face_key.contains_key(&uuid) {
            return Err(TdsConstructionError::DuplicateUuid {
                entity: EntityKind::Face,
                uuid,
            });
        }

        let key = self.faces.insert(face);
        self.uuid_to_face_key.insert(uuid, key);
        Ok(key)
    }

    /// Removes a face and clears neighbor slots that pointed at it.
    ///
    /// Vertex incident-face pointers are not repaired; call
    /// [`Tds::assign_incident_faces`] afterwards.
    pub fn remove_face_by_key(&mut self, face_key: FaceKey) -> Option<Face> {
        let removed = self.faces.remove(face_key)?;
        self.uuid_to_face_key.remove(&removed.uuid());

        for neighbor in removed.neighbors().iter().flatten() {
            if let Some(face) = self.faces.get_mut(*neighbor) {
                for i in 0..3 {
                    if face.neighbor(i) == Some(face_key) {
                        face.set_neighbor(i, None);
                    }
                }
            }
        }

        Some(removed)
    }

    /// Glues two face sides to each other.
    ///
    /// Only existence and index range are checked here. Whether the sides
    /// really mirror each other (same endpoints, opposite direction) is a
    /// validation concern, so a malformed seed still produces a TDS that
    /// validation can report on.
    ///
    /// # Errors
    ///
    /// Returns [`TdsConstructionError::UnknownKey`] or
    /// [`TdsConstructionError::SideIndexOutOfRange`].
    pub fn glue(&mut self, a: FaceSide, b: FaceSide) -> Result<(), TdsConstructionError> {
        for side in [a, b] {
            if side.index() >= 3 {
                return Err(TdsConstructionError::SideIndexOutOfRange {
                    index: side.index(),
                });
            }
            if !self.contains_face_key(side.face()) {
                return Err(TdsConstructionError::UnknownKey {
                    entity: EntityKind::Face,
                    message: format!("cannot glue side of missing face {:?}", side.face()),
                });
            }
        }

        if let Some(face) = self.faces.get_mut(a.face()) {
            face.set_neighbor(a.index(), Some(b.face()));
        }
        if let Some(face) = self.faces.get_mut(b.face()) {
            face.set_neighbor(b.index(), Some(a.face()));
        }
        Ok(())
    }

    /// Builds the vertex → faces map (storage order).
    #[must_use]
    pub fn build_vertex_to_faces_map(&self) -> VertexToFacesMap {
        let mut map: VertexToFacesMap = fast_hash_map_with_capacity(self.vertices.len());
        for vertex_key in self.vertices.keys() {
            map.insert(vertex_key, SmallBuffer::new());
        }
        for (face_key, face) in &self.faces {
            for &v in face.vertices() {
                map.entry(v).or_default().push(face_key);
            }
        }
        map
    }

    /// Points every vertex at one face containing it (or `None` if isolated).
    pub fn assign_incident_faces(&mut self) {
        let map = self.build_vertex_to_faces_map();
        for (vertex_key, vertex) in &mut self.vertices {
            vertex.incident_face = map.get(&vertex_key).and_then(|faces| faces.first().copied());
        }
    }

    // =========================================================================
    // ADJACENCY QUERIES
    // =========================================================================

    /// Index `j` such that side `(neighbor(face, i), j)` mirrors side `(face, i)`.
    ///
    /// The mirror points back at `face` and traverses the same two vertices in
    /// the opposite direction.
    #[must_use]
    pub fn mirror_index(&self, face_key: FaceKey, i: usize) -> Option<usize> {
        let face = self.faces.get(face_key)?;
        let neighbor_key = face.neighbor(i)?;
        let neighbor = self.faces.get(neighbor_key)?;
        let (from, to) = face.side_endpoints(i);

        (0..3).find(|&j| {
            (neighbor_key != face_key || j != i)
                && neighbor.neighbor(j) == Some(face_key)
                && neighbor.side_endpoints(j) == (to, from)
        })
    }

    /// The mirrored side of `side`, if glued consistently.
    #[must_use]
    pub fn mirror_side(&self, side: FaceSide) -> Option<FaceSide> {
        let neighbor = self.faces.get(side.face())?.neighbor(side.index())?;
        self.mirror_index(side.face(), side.index())
            .map(|j| FaceSide::new(neighbor, j))
    }

    /// Counter-clockwise circulator over the faces around `vertex_key`.
    ///
    /// Starts at the vertex's incident face and stops when it returns there,
    /// reaches an open side, or leaves the vertex's star.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::core::periodic_triangulation::PeriodicHyperbolicTriangulation;
    ///
    /// let mut tr = PeriodicHyperbolicTriangulation::new();
    /// tr.insert_dummy_points().unwrap();
    /// let (origin, _) = tr.vertices().next().unwrap();
    /// assert_eq!(tr.tds().faces_around_vertex(origin).count(), 8);
    /// ```
    #[must_use]
    pub fn faces_around_vertex(&self, vertex_key: VertexKey) -> FacesAroundVertex<'_> {
        let start = self
            .vertices
            .get(vertex_key)
            .and_then(Vertex::incident_face);
        FacesAroundVertex {
            tds: self,
            vertex: vertex_key,
            start,
            current: start,
            remaining: self.faces.len(),
        }
    }

    /// Number of faces containing `vertex_key` (equal to its edge degree on a
    /// closed surface).
    #[must_use]
    pub fn degree(&self, vertex_key: VertexKey) -> usize {
        self.faces
            .values()
            .filter(|face| face.contains_vertex(vertex_key))
            .count()
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Checks that the vertex UUID↔key mapping is a bijection.
    ///
    /// This corresponds to [`InvariantKind::VertexMappings`].
    ///
    /// # Errors
    ///
    /// Returns [`TdsValidationError::MappingInconsistency`].
    pub fn validate_vertex_mappings(&self) -> Result<(), TdsValidationError> {
        if self.uuid_to_vertex_key.len() != self.vertices.len() {
            return Err(TdsValidationError::MappingInconsistency {
                entity: EntityKind::Vertex,
                message: format!(
                    "{} UUID mappings for {} vertices",
                    self.uuid_to_vertex_key.len(),
                    self.vertices.len()
                ),
            });
        }

        for (vertex_key, vertex) in &self.vertices {
            if self.uuid_to_vertex_key.get(&vertex.uuid()) != Some(&vertex_key) {
                return Err(TdsValidationError::MappingInconsistency {
                    entity: EntityKind::Vertex,
                    message: format!(
                        "vertex {vertex_key:?} with UUID {} is not mapped back to its key",
                        vertex.uuid()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Checks that the face UUID↔key mapping is a bijection.
    ///
    /// This corresponds to [`InvariantKind::FaceMappings`].
    ///
    /// # Errors
    ///
    /// Returns [`TdsValidationError::MappingInconsistency`].
    pub fn validate_face_mappings(&self) -> Result<(), TdsValidationError> {
        if self.uuid_to_face_key.len() != self.faces.len() {
            return Err(TdsValidationError::MappingInconsistency {
                entity: EntityKind::Face,
                message: format!(
                    "{} UUID mappings for {} faces",
                    self.uuid_to_face_key.len(),
                    self.faces.len()
                ),
            });
        }

        for (face_key, face) in &self.faces {
            if self.uuid_to_face_key.get(&face.uuid()) != Some(&face_key) {
                return Err(TdsValidationError::MappingInconsistency {
                    entity: EntityKind::Face,
                    message: format!(
                        "face {face_key:?} with UUID {} is not mapped back to its key",
                        face.uuid()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Checks every vertex UUID and every face (distinct, stored vertices).
    ///
    /// This corresponds to [`InvariantKind::FaceValidity`].
    ///
    /// # Errors
    ///
    /// Returns the first [`TdsValidationError::InvalidVertex`] or
    /// [`TdsValidationError::InvalidFace`] found.
    pub fn validate_faces(&self) -> Result<(), TdsValidationError> {
        for vertex in self.vertices.values() {
            vertex
                .is_valid()
                .map_err(|source| TdsValidationError::InvalidVertex {
                    vertex_id: vertex.uuid(),
                    source,
                })?;
        }

        for face in self.faces.values() {
            let invalid = |source| TdsValidationError::InvalidFace {
                face_id: face.uuid(),
                source,
            };
            face.is_valid().map_err(invalid)?;
            if let Some(&key) = face.vertices().iter().find(|&&v| !self.contains_vertex_key(v)) {
                return Err(invalid(FaceValidationError::VertexKeyNotFound { key }));
            }
        }

        Ok(())
    }

    /// Checks that every side is glued to a mirrored side of an existing face.
    ///
    /// This corresponds to [`InvariantKind::NeighborConsistency`]. The mirror
    /// must point back at this side and traverse the shared edge in the
    /// opposite direction, which also enforces a coherent orientation.
    ///
    /// # Errors
    ///
    /// Returns [`TdsValidationError::InvalidNeighbors`] for the first bad side.
    pub fn validate_neighbors(&self) -> Result<(), TdsValidationError> {
        for (face_key, face) in &self.faces {
            for i in 0..3 {
                let Some(neighbor_key) = face.neighbor(i) else {
                    return Err(TdsValidationError::InvalidNeighbors {
                        message: format!(
                            "face {} side {i} is open (closed surfaces have no boundary)",
                            face.uuid()
                        ),
                    });
                };

                if !self.contains_face_key(neighbor_key) {
                    return Err(TdsValidationError::InvalidNeighbors {
                        message: format!(
                            "face {} side {i} points at missing face {neighbor_key:?}",
                            face.uuid()
                        ),
                    });
                }

                let Some(j) = self.mirror_index(face_key, i) else {
                    return Err(TdsValidationError::InvalidNeighbors {
                        message: format!(
                            "face {} side {i} has no mirrored side in its neighbor {neighbor_key:?}",
                            face.uuid()
                        ),
                    });
                };

                if self.mirror_index(neighbor_key, j) != Some(i) {
                    return Err(TdsValidationError::InvalidNeighbors {
                        message: format!(
                            "face {} side {i} and neighbor {neighbor_key:?} side {j} are not mutual",
                            face.uuid()
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Checks that each vertex points at a stored face that contains it.
    ///
    /// This corresponds to [`InvariantKind::IncidentFaces`]. Isolated vertices
    /// (no face at all) are rejected too, unless the TDS has no faces.
    ///
    /// # Errors
    ///
    /// Returns [`TdsValidationError::InvalidIncidentFace`].
    pub fn validate_incident_faces(&self) -> Result<(), TdsValidationError> {
        if self.faces.is_empty() {
            return Ok(());
        }

        for (vertex_key, vertex) in &self.vertices {
            let Some(face_key) = vertex.incident_face() else {
                return Err(TdsValidationError::InvalidIncidentFace {
                    message: format!("vertex {} has no incident face", vertex.uuid()),
                });
            };
            let contains = self
                .faces
                .get(face_key)
                .is_some_and(|face| face.contains_vertex(vertex_key));
            if !contains {
                return Err(TdsValidationError::InvalidIncidentFace {
                    message: format!(
                        "vertex {} points at face {face_key:?} which does not contain it",
                        vertex.uuid()
                    ),
                });
            }
        }

        Ok(())
    }

    /// Runs the structural checks and returns the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`TdsValidationError`] encountered.
    pub fn is_valid(&self) -> Result<(), TdsValidationError> {
        self.validate_vertex_mappings()?;
        self.validate_face_mappings()?;
        self.validate_faces()?;
        self.validate_neighbors()?;
        self.validate_incident_faces()?;
        Ok(())
    }

    /// Runs all checks selected by `options` and returns a report containing
    /// **all** failed invariants.
    ///
    /// Mapping failures short-circuit the rest of the report. Topological
    /// checks run only when `options.check_topology` is set and every
    /// structural check passed, since a broken neighbor structure makes link
    /// walks meaningless.
    ///
    /// # Errors
    ///
    /// Returns a [`TriangulationValidationReport`] if any check fails.
    pub fn validation_report(
        &self,
        options: ValidationOptions,
    ) -> Result<(), TriangulationValidationReport> {
        let mut violations = Vec::new();

        // 1. Mapping consistency
        if let Err(error) = self.validate_vertex_mappings() {
            violations.push(InvariantViolation {
                kind: InvariantKind::VertexMappings,
                error,
            });
        }
        if let Err(error) = self.validate_face_mappings() {
            violations.push(InvariantViolation {
                kind: InvariantKind::FaceMappings,
                error,
            });
        }
        if !violations.is_empty() {
            return Err(TriangulationValidationReport { violations });
        }

        // 2. Per-element checks
        if let Err(error) = self.validate_faces() {
            violations.push(InvariantViolation {
                kind: InvariantKind::FaceValidity,
                error,
            });
        }

        // 3. Gluing
        if let Err(error) = self.validate_neighbors() {
            violations.push(InvariantViolation {
                kind: InvariantKind::NeighborConsistency,
                error,
            });
        }

        // 4. Vertex → face pointers
        if let Err(error) = self.validate_incident_faces() {
            violations.push(InvariantViolation {
                kind: InvariantKind::IncidentFaces,
                error,
            });
        }

        // 5. Manifold topology
        if options.check_topology && violations.is_empty() {
            if let Err(error) = validate_vertex_links(self) {
                violations.push(InvariantViolation {
                    kind: InvariantKind::VertexLinks,
                    error: error.into(),
                });
            }
            if let Err(error) = validate_connectedness(self) {
                violations.push(InvariantViolation {
                    kind: InvariantKind::Connectedness,
                    error: error.into(),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(TriangulationValidationReport { violations })
        }
    }

    /// Face keys reachable from `start` through neighbor pointers.
    pub(crate) fn reachable_faces(&self, start: FaceKey) -> FaceKeySet {
        let mut visited = FaceKeySet::default();
        let mut stack = vec![start];
        while let Some(face_key) = stack.pop() {
            if !visited.insert(face_key) {
                continue;
            }
            if let Some(face) = self.faces.get(face_key) {
                stack.extend(
                    face.neighbors()
                        .iter()
                        .flatten()
                        .filter(|n| self.contains_face_key(**n) && !visited.contains(*n)),
                );
            }
        }
        visited
    }
}

/// Counter-clockwise circulator returned by [`Tds::faces_around_vertex`].
#[derive(Clone, Debug)]
pub struct FacesAroundVertex<'a> {
    tds: &'a Tds,
    vertex: VertexKey,
    start: Option<FaceKey>,
    current: Option<FaceKey>,
    remaining: usize,
}

impl Iterator for FacesAroundVertex<'_> {
    type Item = FaceKey;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;

        let next = self.tds.faces.get(current).and_then(|face| {
            let i = face.index_of(self.vertex)?;
            face.neighbor(ccw(i))
        });
        self.current = next.filter(|&n| {
            Some(n) != self.start
                && self
                    .tds
                    .faces
                    .get(n)
                    .is_some_and(|face| face.contains_vertex(self.vertex))
        });

        Some(current)
    }
}
