//! Edge identifiers for periodic triangulations.
//!
//! Edges are not stored; an edge is a pair of mirrored face sides. On a
//! periodic quotient two different edges may join the same two vertices, so
//! an edge cannot be named by its endpoints. [`EdgeKey`] instead names an edge
//! by one of its face sides, canonicalized to the smaller of the two.
//!
//! ## Determinism
//!
//! Canonical ordering uses raw slotmap key data and is not stable across
//! processes or rebuilds of the triangulation.

use slotmap::Key;

use crate::core::triangulation_data_structure::FaceKey;

/// The side of `face` opposite its vertex `index`.
///
/// # Examples
///
/// ```rust
/// use bolza::core::edge::FaceSide;
/// use bolza::core::triangulation_data_structure::FaceKey;
/// use slotmap::KeyData;
///
/// let side = FaceSide::new(FaceKey::from(KeyData::from_ffi(1)), 2);
/// assert_eq!(side.index(), 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceSide {
    face: FaceKey,
    index: usize,
}

impl FaceSide {
    /// Creates a face side.
    #[inline]
    #[must_use]
    pub const fn new(face: FaceKey, index: usize) -> Self {
        Self { face, index }
    }

    /// The face owning this side.
    #[inline]
    #[must_use]
    pub const fn face(self) -> FaceKey {
        self.face
    }

    /// Index of the vertex opposite this side.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    fn sort_key(self) -> (u64, usize) {
        (self.face.data().as_ffi(), self.index)
    }
}

/// Canonical identifier for an edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    side: FaceSide,
}

impl EdgeKey {
    /// Creates the key for the edge made of `side` and its mirror (if glued).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::core::edge::{EdgeKey, FaceSide};
    /// use bolza::core::triangulation_data_structure::FaceKey;
    /// use slotmap::KeyData;
    ///
    /// let a = FaceSide::new(FaceKey::from(KeyData::from_ffi(1)), 0);
    /// let b = FaceSide::new(FaceKey::from(KeyData::from_ffi(2)), 1);
    /// assert_eq!(EdgeKey::new(a, Some(b)), EdgeKey::new(b, Some(a)));
    /// assert_eq!(EdgeKey::new(a, None).side(), a);
    /// ```
    #[must_use]
    pub fn new(side: FaceSide, mirror: Option<FaceSide>) -> Self {
        match mirror {
            Some(other) if other.sort_key() < side.sort_key() => Self { side: other },
            _ => Self { side },
        }
    }

    /// Whether `side` is the canonical representative of its edge.
    #[must_use]
    pub fn is_canonical(side: FaceSide, mirror: Option<FaceSide>) -> bool {
        Self::new(side, mirror).side == side
    }

    /// The representative face side.
    #[inline]
    #[must_use]
    pub const fn side(self) -> FaceSide {
        self.side
    }
}
