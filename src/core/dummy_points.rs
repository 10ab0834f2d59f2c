//! Dummy point seeds for periodic triangulations.
//!
//! A periodic triangulation cannot start from a single triangle: its very
//! first state must already be a closed triangulation of the whole surface.
//! A *seed* supplies that state as a small abstract complex: a list of points
//! and a list of counter-clockwise triangles whose sides carry edge labels.
//! Sides sharing a label are glued to each other.
//!
//! [`BolzaDummyPoints`] is the canonical 14-point seed of the Bolza surface.
//! Any other [`DummyPointSeed`] (for example a hand-written [`SeedComplex`])
//! goes through the same seeding path, which is how malformed seeds are
//! exercised in tests.

use std::f64::consts::TAU;

use thiserror::Error;

use crate::core::collections::{Entry, FastHashMap, fast_hash_map_with_capacity};
use crate::core::util::{ccw, cw};
use crate::geometry::{octagon::BolzaOctagon, point::HyperbolicPoint};

/// Label naming one edge of a seed complex.
pub type EdgeLabel = usize;

/// Errors raised while seeding a triangulation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeedError {
    /// Seeds can only be inserted into an empty triangulation.
    #[error("Triangulation is not empty: {vertices} vertices, {faces} faces")]
    NotEmpty {
        /// Current number of vertices.
        vertices: usize,
        /// Current number of faces.
        faces: usize,
    },
    /// The seed has no points or no faces.
    #[error("Seed complex is empty ({points} points, {faces} faces)")]
    EmptySeed {
        /// Number of seed points.
        points: usize,
        /// Number of seed faces.
        faces: usize,
    },
    /// A face references a point index that does not exist.
    #[error("Seed face {face} references point {index}, but the seed has {points} points")]
    PointIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range point index.
        index: usize,
        /// Number of seed points.
        points: usize,
    },
    /// A face repeats a point.
    #[error("Seed face {face} is degenerate: {vertices:?}")]
    DegenerateFace {
        /// Index of the offending face.
        face: usize,
        /// The face's point indices.
        vertices: [usize; 3],
    },
    /// More than two sides carry the same edge label.
    #[error("Edge label {label} is used by {sides} face sides (at most 2 allowed)")]
    EdgeLabelOverused {
        /// The overused label.
        label: EdgeLabel,
        /// Number of sides carrying it.
        sides: usize,
    },
    /// The triangulation data structure rejected the seed.
    #[error(transparent)]
    Tds(#[from] crate::core::triangulation_data_structure::TdsConstructionError),
}

/// One triangle of a seed complex.
///
/// `vertices` are point indices in counter-clockwise order; `edges[i]` labels
/// the side opposite `vertices[i]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedFace {
    /// Point indices, counter-clockwise.
    pub vertices: [usize; 3],
    /// Edge label of the side opposite each vertex.
    pub edges: [EdgeLabel; 3],
}

/// An abstract triangulated surface: points plus labelled triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeedComplex {
    /// Seed points; a face's vertex indices refer to this list.
    pub points: Vec<HyperbolicPoint>,
    /// Seed triangles.
    pub faces: Vec<SeedFace>,
}

impl SeedComplex {
    /// Builds a seed from vertex triples, labelling each side by its endpoint pair.
    ///
    /// This suits simplicial complexes, where two vertices share at most one
    /// edge. Points are spread on a circle of disk radius 1/2; their positions
    /// carry no meaning for the combinatorics.
    ///
    /// # Errors
    ///
    /// Returns the first problem reported by [`SeedComplex::validate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::core::dummy_points::SeedComplex;
    ///
    /// // Boundary of a tetrahedron.
    /// let seed = SeedComplex::from_vertex_triples(
    ///     4,
    ///     &[[1, 2, 3], [0, 3, 2], [0, 1, 3], [0, 2, 1]],
    /// )
    /// .unwrap();
    /// assert_eq!(seed.number_of_edges(), 6);
    /// ```
    #[allow(clippy::cast_precision_loss)] // point counts are small
    pub fn from_vertex_triples(points: usize, triples: &[[usize; 3]]) -> Result<Self, SeedError> {
        let positions = (0..points)
            .map(|k| HyperbolicPoint::from_polar_unchecked(0.5, TAU * k as f64 / points as f64))
            .collect();

        let mut labels: FastHashMap<(usize, usize), EdgeLabel> =
            fast_hash_map_with_capacity(triples.len() * 3 / 2);
        let faces = triples
            .iter()
            .map(|&vertices| {
                let edges = std::array::from_fn(|i| {
                    let (a, b) = (vertices[ccw(i)], vertices[cw(i)]);
                    let next = labels.len();
                    *labels.entry((a.min(b), a.max(b))).or_insert(next)
                });
                SeedFace { vertices, edges }
            })
            .collect();

        let seed = Self {
            points: positions,
            faces,
        };
        seed.validate()?;
        Ok(seed)
    }

    /// Number of distinct edge labels.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.label_multiplicities().len()
    }

    /// How many sides carry each label.
    #[must_use]
    pub fn label_multiplicities(&self) -> FastHashMap<EdgeLabel, usize> {
        let mut counts: FastHashMap<EdgeLabel, usize> =
            fast_hash_map_with_capacity(self.faces.len() * 3 / 2);
        for face in &self.faces {
            for &label in &face.edges {
                *counts.entry(label).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Checks the seed before any storage is touched.
    ///
    /// A label carried by a single side is allowed here (the side stays
    /// open and validation reports it later); three or more is not.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::EmptySeed`], [`SeedError::PointIndexOutOfRange`],
    /// [`SeedError::DegenerateFace`], or [`SeedError::EdgeLabelOverused`].
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.points.is_empty() || self.faces.is_empty() {
            return Err(SeedError::EmptySeed {
                points: self.points.len(),
                faces: self.faces.len(),
            });
        }

        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face.vertices.iter().find(|&&v| v >= self.points.len()) {
                return Err(SeedError::PointIndexOutOfRange {
                    face: face_index,
                    index,
                    points: self.points.len(),
                });
            }
            let [a, b, c] = face.vertices;
            if a == b || b == c || a == c {
                return Err(SeedError::DegenerateFace {
                    face: face_index,
                    vertices: face.vertices,
                });
            }
        }

        let mut overused: Vec<(EdgeLabel, usize)> = self
            .label_multiplicities()
            .into_iter()
            .filter(|&(_, sides)| sides > 2)
            .collect();
        overused.sort_unstable();
        if let Some(&(label, sides)) = overused.first() {
            return Err(SeedError::EdgeLabelOverused { label, sides });
        }

        Ok(())
    }
}

/// Source of the initial closed complex of a periodic triangulation.
pub trait DummyPointSeed {
    /// The complex to seed with.
    fn seed_complex(&self) -> SeedComplex;
}

impl DummyPointSeed for SeedComplex {
    fn seed_complex(&self) -> SeedComplex {
        self.clone()
    }
}

/// Position of a seed point in the octagon chart.
///
/// The chart has eight corners and eight side midpoints; on the surface they
/// collapse to one corner point and four midpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChartPoint {
    /// The center of the octagon.
    Origin,
    /// Corner `k` of the octagon (`k < 8`).
    Corner(usize),
    /// Midpoint of side `k` (`k < 8`).
    SideMidpoint(usize),
    /// Hyperbolic midpoint between the origin and corner `k` (`k < 8`).
    Inner(usize),
}

impl ChartPoint {
    /// Index of the surface point this chart point represents.
    ///
    /// | index | point |
    /// |---|---|
    /// | 0 | origin |
    /// | 1 | the corner (all eight chart corners) |
    /// | 2..6 | side midpoints `k mod 4` |
    /// | 6..14 | inner points |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::core::dummy_points::ChartPoint;
    ///
    /// assert_eq!(ChartPoint::Corner(5).surface_index(), 1);
    /// assert_eq!(ChartPoint::SideMidpoint(6).surface_index(), 4);
    /// assert_eq!(ChartPoint::Inner(7).surface_index(), 13);
    /// ```
    #[must_use]
    pub const fn surface_index(self) -> usize {
        match self {
            Self::Origin => 0,
            Self::Corner(_) => 1,
            Self::SideMidpoint(k) => 2 + k % BolzaOctagon::NUM_SIDE_PAIRS,
            Self::Inner(k) => 6 + k % BolzaOctagon::NUM_SIDES,
        }
    }

    /// Position in the Poincaré disk.
    #[must_use]
    pub fn point(self) -> HyperbolicPoint {
        match self {
            Self::Origin => HyperbolicPoint::ORIGIN,
            Self::Corner(k) => BolzaOctagon::corner(k),
            Self::SideMidpoint(k) => BolzaOctagon::side_midpoint(k),
            Self::Inner(k) => BolzaOctagon::inner_point(k),
        }
    }
}

/// Key of a chart edge after applying the side pairing.
///
/// Half-sides of side `k + 4` are mapped onto side `k`; since the pairing
/// reverses direction, corner `k + 4` lands on corner `k + 1` and corner
/// `k + 5` on corner `k`.
fn glued_edge_key(a: ChartPoint, b: ChartPoint) -> (ChartPoint, ChartPoint) {
    let fold = |corner: ChartPoint, midpoint: ChartPoint| match (corner, midpoint) {
        (ChartPoint::Corner(c), ChartPoint::SideMidpoint(s))
            if s >= BolzaOctagon::NUM_SIDE_PAIRS =>
        {
            let k = s - BolzaOctagon::NUM_SIDE_PAIRS;
            let image = if c == s { (k + 1) % BolzaOctagon::NUM_SIDES } else { k };
            (ChartPoint::Corner(image), ChartPoint::SideMidpoint(k))
        }
        other => other,
    };

    let (a, b) = match (a, b) {
        (ChartPoint::SideMidpoint(_), ChartPoint::Corner(_)) => {
            let (corner, midpoint) = fold(b, a);
            (midpoint, corner)
        }
        _ => fold(a, b),
    };
    (a.min(b), a.max(b))
}

/// The 14 dummy points of the Bolza surface and their 32 triangles.
///
/// Each of the eight sectors `(O, P_k, P_{k+1})` of the octagon is cut into
/// four counter-clockwise triangles through the midpoint `S_k` of side `k`
/// and the inner points `Q_k`, `Q_{k+1}`:
///
/// ```text
/// (Q_k, P_k, S_k)   (S_k, P_{k+1}, Q_{k+1})   (Q_k, S_k, Q_{k+1})   (O, Q_k, Q_{k+1})
/// ```
///
/// # Examples
///
/// ```rust
/// use bolza::core::dummy_points::{BolzaDummyPoints, DummyPointSeed};
///
/// let seed = BolzaDummyPoints.seed_complex();
/// assert_eq!(seed.points.len(), BolzaDummyPoints::NUM_POINTS);
/// assert_eq!(seed.faces.len(), BolzaDummyPoints::NUM_FACES);
/// assert_eq!(seed.number_of_edges(), BolzaDummyPoints::NUM_EDGES);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BolzaDummyPoints;

impl BolzaDummyPoints {
    /// Number of dummy points.
    pub const NUM_POINTS: usize = 14;

    /// Number of triangles in the seed.
    pub const NUM_FACES: usize = 32;

    /// Number of edges in the seed (`V + F + 2` for genus 2).
    pub const NUM_EDGES: usize = 48;

    /// The seed points in surface-index order.
    #[must_use]
    pub fn points() -> Vec<HyperbolicPoint> {
        let mut points = Vec::with_capacity(Self::NUM_POINTS);
        points.push(ChartPoint::Origin.point());
        points.push(ChartPoint::Corner(0).point());
        points.extend((0..BolzaOctagon::NUM_SIDE_PAIRS).map(|k| ChartPoint::SideMidpoint(k).point()));
        points.extend((0..BolzaOctagon::NUM_SIDES).map(|k| ChartPoint::Inner(k).point()));
        points
    }

    /// The 32 triangles in chart coordinates, counter-clockwise.
    #[must_use]
    pub fn chart_faces() -> Vec<[ChartPoint; 3]> {
        use ChartPoint::{Corner, Inner, Origin, SideMidpoint};

        (0..BolzaOctagon::NUM_SIDES)
            .flat_map(|k| {
                let n = (k + 1) % BolzaOctagon::NUM_SIDES;
                [
                    [Inner(k), Corner(k), SideMidpoint(k)],
                    [SideMidpoint(k), Corner(n), Inner(n)],
                    [Inner(k), SideMidpoint(k), Inner(n)],
                    [Origin, Inner(k), Inner(n)],
                ]
            })
            .collect()
    }
}

impl DummyPointSeed for BolzaDummyPoints {
    fn seed_complex(&self) -> SeedComplex {
        let mut labels: FastHashMap<(ChartPoint, ChartPoint), EdgeLabel> =
            fast_hash_map_with_capacity(Self::NUM_EDGES);

        let faces = Self::chart_faces()
            .into_iter()
            .map(|chart| {
                let edges = std::array::from_fn(|i| {
                    let key = glued_edge_key(chart[ccw(i)], chart[cw(i)]);
                    let next = labels.len();
                    match labels.entry(key) {
                        Entry::Occupied(slot) => *slot.get(),
                        Entry::Vacant(slot) => *slot.insert(next),
                    }
                });
                SeedFace {
                    vertices: chart.map(ChartPoint::surface_index),
                    edges,
                }
            })
            .collect();

        SeedComplex {
            points: Self::points(),
            faces,
        }
    }
}
