//! Topology validation functions for triangulated surfaces.
//!
//! Combines simplex counting, classification, and the Euler characteristic
//! check against the surface the triangulation is supposed to cover.

use crate::core::triangulation_data_structure::Tds;
use crate::topology::{
    characteristics::euler::{
        FVector, TopologyClassification, classify_triangulation, count_simplices,
        euler_characteristic,
    },
    traits::topological_space::{TopologicalSpace, TopologyError},
};

/// Result of Euler characteristic validation.
///
/// Contains the computed Euler characteristic, the value the surface demands,
/// the classification, and diagnostic notes.
///
/// # Examples
///
/// ```rust
/// use bolza::core::periodic_triangulation::PeriodicHyperbolicTriangulation;
/// use bolza::topology::characteristics::validation;
/// use bolza::topology::spaces::BolzaSurface;
///
/// let mut tr = PeriodicHyperbolicTriangulation::new();
/// tr.insert_dummy_points().unwrap();
///
/// let result = validation::validate_triangulation_euler(tr.tds(), &BolzaSurface);
/// assert_eq!(result.chi, -2);
/// assert!(result.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyCheckResult {
    /// Computed Euler characteristic.
    pub chi: isize,

    /// Expected χ (None if it cannot be determined).
    pub expected: Option<isize>,

    /// Topological classification.
    pub classification: TopologyClassification,

    /// Full simplex counts (f-vector).
    pub counts: FVector,

    /// Diagnostic notes or warnings.
    pub notes: Vec<String>,
}

impl TopologyCheckResult {
    /// Returns `true` if χ matches expectation and there are no notes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bolza::topology::characteristics::{euler::*, validation::TopologyCheckResult};
    ///
    /// let valid_result = TopologyCheckResult {
    ///     chi: -2,
    ///     expected: Some(-2),
    ///     classification: TopologyClassification::ClosedSurface { genus: 2 },
    ///     counts: FVector { by_dim: vec![14, 48, 32] },
    ///     notes: vec![],
    /// };
    /// assert!(valid_result.is_valid());
    ///
    /// let invalid_result = TopologyCheckResult {
    ///     chi: 4,
    ///     expected: Some(-2),
    ///     classification: TopologyClassification::Unknown,
    ///     counts: FVector { by_dim: vec![8, 12, 8] },
    ///     notes: vec!["Mismatch".to_string()],
    /// };
    /// assert!(!invalid_result.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.expected.is_none_or(|exp| self.chi == exp) && self.notes.is_empty()
    }

    /// Converts a failed check into a [`TopologyError::EulerMismatch`].
    ///
    /// # Errors
    ///
    /// Returns the mismatch if [`TopologyCheckResult::is_valid`] is false.
    pub fn into_result(self, topology_type: impl Into<String>) -> Result<Self, TopologyError> {
        if self.is_valid() {
            return Ok(self);
        }
        Err(TopologyError::EulerMismatch {
            computed: self.chi,
            expected: self.expected.unwrap_or(self.chi),
            topology_type: topology_type.into(),
        })
    }
}

/// Validate the triangulation's Euler characteristic against `space`.
///
/// An empty triangulation is expected to have χ = 0; anything else must have
/// the surface's χ. A boundary on a closed space is noted as a failure.
#[must_use]
pub fn validate_triangulation_euler<S: TopologicalSpace>(
    tds: &Tds,
    space: &S,
) -> TopologyCheckResult {
    let counts = count_simplices(tds);
    let chi = euler_characteristic(&counts);
    let classification = classify_triangulation(tds);

    let expected = match classification {
        TopologyClassification::Empty => Some(0),
        _ => Some(space.euler_characteristic()),
    };

    let mut notes = Vec::new();

    if let Some(exp) = expected.filter(|&exp| chi != exp) {
        notes.push(format!(
            "Euler characteristic mismatch: computed {chi}, expected {exp} for {}",
            space.name()
        ));
    }
    if classification == TopologyClassification::SurfaceWithBoundary && !space.allows_boundary() {
        notes.push(format!("{} is closed but the triangulation has open sides", space.name()));
    }

    TopologyCheckResult {
        chi,
        expected,
        classification,
        counts,
        notes,
    }
}
