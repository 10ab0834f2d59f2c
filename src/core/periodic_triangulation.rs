//! Periodic triangulations of closed hyperbolic surfaces.
//!
//! [`PeriodicHyperbolicTriangulation`] wraps a [`Tds`] together with the
//! surface it triangulates. It starts empty and is brought to a valid state
//! by seeding it with dummy points; validation combines the structural checks
//! of the TDS with the surface's topology (vertex links, connectedness, and
//! Euler characteristic).
//!
//! # Examples
//!
//! ```rust
//! use bolza::core::periodic_triangulation::PeriodicHyperbolicTriangulation;
//!
//! let mut tr = PeriodicHyperbolicTriangulation::new();
//! tr.insert_dummy_points().unwrap();
//!
//! assert_eq!(tr.number_of_vertices(), 14);
//! assert_eq!(tr.number_of_faces(), 32);
//! assert_eq!(tr.number_of_edges(), 48);
//! assert!(tr.is_valid(false));
//! ```

use crate::core::{
    collections::{EdgeLabelToSidesMap, fast_hash_map_with_capacity},
    dummy_points::{BolzaDummyPoints, DummyPointSeed, SeedError},
    edge::{EdgeKey, FaceSide},
    face::Face,
    triangulation_data_structure::{
        FaceKey, FacesAroundVertex, InvariantKind, InvariantViolation, Tds, TdsValidationError,
        TriangulationValidationReport, ValidationOptions, VertexKey,
    },
    vertex::Vertex,
};
use crate::topology::{
    characteristics::validation::{TopologyCheckResult, validate_triangulation_euler},
    spaces::BolzaSurface,
    traits::topological_space::TopologicalSpace,
};

/// A periodic triangulation of the closed surface `S`.
#[derive(Clone, Debug, Default)]
pub struct PeriodicHyperbolicTriangulation<S: TopologicalSpace = BolzaSurface> {
    tds: Tds,
    space: S,
}

impl PeriodicHyperbolicTriangulation<BolzaSurface> {
    /// Creates an empty triangulation of the Bolza surface.
    #[must_use]
    pub fn new() -> Self {
        Self::with_space(BolzaSurface)
    }

    /// Seeds the empty triangulation with the 14 dummy points of the Bolza surface.
    ///
    /// Returns the number of vertices inserted.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::NotEmpty`] if the triangulation already has
    /// vertices or faces.
    pub fn insert_dummy_points(&mut self) -> Result<usize, SeedError> {
        self.seed_with(&BolzaDummyPoints)
    }
}

impl<S: TopologicalSpace> PeriodicHyperbolicTriangulation<S> {
    /// Creates an empty triangulation of `space`.
    #[must_use]
    pub fn with_space(space: S) -> Self {
        Self {
            tds: Tds::empty(),
            space,
        }
    }

    /// The underlying triangulation data structure.
    #[must_use]
    pub const fn tds(&self) -> &Tds {
        &self.tds
    }

    /// Mutable access to the underlying TDS.
    ///
    /// Edits made through this reference bypass seeding checks; use
    /// [`PeriodicHyperbolicTriangulation::validation_report`] afterwards.
    #[must_use]
    pub const fn tds_mut(&mut self) -> &mut Tds {
        &mut self.tds
    }

    /// The surface being triangulated.
    #[must_use]
    pub const fn space(&self) -> &S {
        &self.space
    }

    /// Whether the triangulation has no vertices and no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tds.is_empty()
    }

    /// Seeds the empty triangulation with an arbitrary seed complex.
    ///
    /// Every seed point becomes a dummy vertex, every seed triangle a face,
    /// and sides sharing an edge label are glued. A label carried by one
    /// side leaves that side open; validation reports it. The triangulation
    /// is only modified if seeding succeeds.
    ///
    /// Returns the number of vertices inserted.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::NotEmpty`] if the triangulation is not empty,
    /// any error of [`crate::core::dummy_points::SeedComplex::validate`], or
    /// [`SeedError::Tds`] if storage rejects the complex.
    pub fn seed_with<D: DummyPointSeed + ?Sized>(&mut self, seed: &D) -> Result<usize, SeedError> {
        if !self.tds.is_empty() {
            return Err(SeedError::NotEmpty {
                vertices: self.tds.number_of_vertices(),
                faces: self.tds.number_of_faces(),
            });
        }

        let complex = seed.seed_complex();
        complex.validate()?;

        tracing::debug!(
            points = complex.points.len(),
            faces = complex.faces.len(),
            "seeding periodic triangulation"
        );

        let mut tds = Tds::empty();

        let vertex_keys = complex
            .points
            .iter()
            .map(|&point| tds.insert_vertex(Vertex::new_dummy(point)))
            .collect::<Result<Vec<VertexKey>, _>>()?;

        let mut sides_by_label: EdgeLabelToSidesMap =
            fast_hash_map_with_capacity(complex.faces.len() * 3 / 2);
        for seed_face in &complex.faces {
            let face_key = tds.insert_face(seed_face.vertices.map(|v| vertex_keys[v]))?;
            for (index, &label) in seed_face.edges.iter().enumerate() {
                sides_by_label
                    .entry(label)
                    .or_default()
                    .push(FaceSide::new(face_key, index));
            }
        }

        let mut labels: Vec<_> = sides_by_label.into_iter().collect();
        labels.sort_unstable_by_key(|(label, _)| *label);
        for (label, sides) in labels {
            match sides.as_slice() {
                &[a, b] => tds.glue(a, b)?,
                &[side] => {
                    tracing::debug!(label, ?side, "edge label carried by one side; left open");
                }
                _ => {
                    return Err(SeedError::EdgeLabelOverused {
                        label,
                        sides: sides.len(),
                    });
                }
            }
        }

        tds.assign_incident_faces();

        tracing::debug!(
            vertices = tds.number_of_vertices(),
            faces = tds.number_of_faces(),
            edges = tds.number_of_edges(),
            "seeding complete"
        );

        let inserted = tds.number_of_vertices();
        self.tds = tds;
        Ok(inserted)
    }

    /// Number of vertices.
    #[must_use]
    pub fn number_of_vertices(&self) -> usize {
        self.tds.number_of_vertices()
    }

    /// Number of faces (triangles).
    #[must_use]
    pub fn number_of_faces(&self) -> usize {
        self.tds.number_of_faces()
    }

    /// Number of edges, counting multi-edges separately.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.tds.number_of_edges()
    }

    /// Number of vertices that came from a dummy point seed.
    #[must_use]
    pub fn number_of_dummy_points(&self) -> usize {
        self.tds.vertices().filter(|(_, v)| v.is_dummy()).count()
    }

    /// Iterator over `(key, vertex)` pairs.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexKey, &Vertex)> {
        self.tds.vertices()
    }

    /// Iterator over `(key, face)` pairs.
    pub fn faces(&self) -> impl Iterator<Item = (FaceKey, &Face)> {
        self.tds.faces()
    }

    /// Iterator over edges, one key per edge.
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.tds.edges()
    }

    /// Counter-clockwise circulator over the faces around a vertex.
    #[must_use]
    pub fn faces_around_vertex(&self, vertex_key: VertexKey) -> FacesAroundVertex<'_> {
        self.tds.faces_around_vertex(vertex_key)
    }

    /// Number of faces containing a vertex.
    #[must_use]
    pub fn degree(&self, vertex_key: VertexKey) -> usize {
        self.tds.degree(vertex_key)
    }

    /// Euler characteristic check against the surface.
    #[must_use]
    pub fn topology_check(&self) -> TopologyCheckResult {
        validate_triangulation_euler(&self.tds, &self.space)
    }

    /// Runs the TDS checks and, with `options.check_topology`, the
    /// surface-level Euler characteristic check.
    ///
    /// The Euler check runs only when no structural invariant failed.
    ///
    /// # Errors
    ///
    /// Returns a [`TriangulationValidationReport`] listing every violation.
    pub fn validation_report(
        &self,
        options: ValidationOptions,
    ) -> Result<(), TriangulationValidationReport> {
        let mut violations = match self.tds.validation_report(options) {
            Ok(()) => Vec::new(),
            Err(report) => report.violations,
        };

        let structurally_sound = violations.iter().all(|violation| {
            matches!(
                violation.kind,
                InvariantKind::VertexLinks | InvariantKind::Connectedness
            )
        });

        if options.check_topology && structurally_sound {
            if let Err(error) = self.topology_check().into_result(self.space.name()) {
                violations.push(InvariantViolation {
                    kind: InvariantKind::EulerCharacteristic,
                    error: TdsValidationError::Topology(error),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(TriangulationValidationReport { violations })
        }
    }

    /// Whether every invariant holds.
    ///
    /// With `verbose`, each violation is logged at `warn` level. The result
    /// does not depend on `verbose`.
    #[must_use]
    pub fn is_valid(&self, verbose: bool) -> bool {
        match self.validation_report(ValidationOptions::ALL) {
            Ok(()) => {
                if verbose {
                    tracing::debug!(
                        vertices = self.number_of_vertices(),
                        faces = self.number_of_faces(),
                        "triangulation is valid"
                    );
                }
                true
            }
            Err(report) => {
                if verbose {
                    for violation in &report.violations {
                        tracing::warn!(kind = %violation.kind, "{}", violation.error);
                    }
                }
                false
            }
        }
    }

    /// Removes all vertices and faces.
    pub fn clear(&mut self) {
        self.tds.clear();
    }
}
