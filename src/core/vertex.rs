//! Vertices of a periodic triangulation.
//!
//! A [`Vertex`] stores its Poincaré disk position (a representative inside the
//! fundamental octagon), a UUID, a key to one incident face, and whether it is
//! one of the dummy points used to bootstrap the triangulation.

use serde::{Deserialize, Serialize};

use super::{
    triangulation_data_structure::FaceKey,
    util::{UuidValidationError, make_uuid, validate_uuid},
};
use crate::core::collections::Uuid;
use crate::geometry::point::HyperbolicPoint;

/// A vertex of the triangulation.
///
/// `incident_face` is a runtime-only key and is skipped during serialization;
/// the TDS rebuilds it with `assign_incident_faces()`.
///
/// # Examples
///
/// ```rust
/// use bolza::core::vertex::Vertex;
/// use bolza::geometry::point::HyperbolicPoint;
///
/// let v = Vertex::new(HyperbolicPoint::new(0.1, 0.2).unwrap());
/// assert!(!v.is_dummy());
/// assert!(v.incident_face().is_none());
/// assert!(v.is_valid().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    point: HyperbolicPoint,
    uuid: Uuid,
    #[serde(skip)]
    pub(crate) incident_face: Option<FaceKey>,
    dummy: bool,
}

impl Vertex {
    /// Creates a regular (non-dummy) vertex with a fresh UUID.
    #[must_use]
    pub fn new(point: HyperbolicPoint) -> Self {
        Self {
            point,
            uuid: make_uuid(),
            incident_face: None,
            dummy: false,
        }
    }

    /// Creates a dummy vertex with a fresh UUID.
    #[must_use]
    pub fn new_dummy(point: HyperbolicPoint) -> Self {
        Self {
            dummy: true,
            ..Self::new(point)
        }
    }

    /// Position in the Poincaré disk.
    #[inline]
    #[must_use]
    pub const fn point(&self) -> &HyperbolicPoint {
        &self.point
    }

    /// The vertex UUID.
    #[inline]
    #[must_use]
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// One face containing this vertex, if assigned.
    #[inline]
    #[must_use]
    pub const fn incident_face(&self) -> Option<FaceKey> {
        self.incident_face
    }

    /// Overrides the incident face pointer.
    ///
    /// Does not check that the face contains the vertex; `Tds::is_valid`
    /// reports a mismatch as an `IncidentFaces` violation.
    pub const fn set_incident_face(&mut self, face: Option<FaceKey>) {
        self.incident_face = face;
    }

    /// Whether this vertex is a dummy point.
    #[inline]
    #[must_use]
    pub const fn is_dummy(&self) -> bool {
        self.dummy
    }

    /// Checks the vertex identity.
    ///
    /// # Errors
    ///
    /// Returns a [`UuidValidationError`] if the UUID is nil or not version 4.
    pub const fn is_valid(&self) -> Result<(), UuidValidationError> {
        validate_uuid(&self.uuid)
    }
}
