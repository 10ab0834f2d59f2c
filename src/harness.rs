//! Dummy point validation harness.
//!
//! Drives one periodic triangulation through
//! `Uninitialized → Seeded → Validated → Done`: seed it with dummy points,
//! report vertex/face/edge counts together with the edge count the Euler
//! relation predicts, and require the triangulation to be valid.
//!
//! The report is written to any [`std::io::Write`]; verbose validation
//! diagnostics go through `tracing`.
//!
//! # Examples
//!
//! ```rust
//! use bolza::harness::ValidationHarness;
//!
//! let mut out = Vec::new();
//! let summary = ValidationHarness::new().run(&mut out).unwrap();
//! assert_eq!(summary.edges, summary.expected_edges);
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.ends_with("Triangulation is valid: YES\n"));
//! ```

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::core::{
    dummy_points::{BolzaDummyPoints, DummyPointSeed, SeedError},
    periodic_triangulation::PeriodicHyperbolicTriangulation,
    triangulation_data_structure::{TriangulationValidationReport, ValidationOptions},
};
use crate::topology::{
    characteristics::euler::expected_edge_count, traits::topological_space::TopologicalSpace,
};

/// Line printed once seeding succeeded.
pub const SEEDED_MESSAGE: &str = "Triangulation successfully initialized with dummy points!";

/// Separator printed between the seeding message and the counts.
pub const SEPARATOR: &str = "---------------------------------------------";

/// Stages of a harness run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HarnessState {
    /// Nothing has happened yet.
    Uninitialized,
    /// Dummy points are inserted.
    Seeded,
    /// The validity predicate held.
    Validated,
    /// The run is over.
    Done,
}

impl fmt::Display for HarnessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Errors that end a harness run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HarnessError {
    /// Dummy points could not be inserted.
    #[error("Failed to seed triangulation with dummy points: {0}")]
    Seeding(#[from] SeedError),
    /// The seeded triangulation is not valid.
    #[error("Triangulation is not valid:\n{0}")]
    InvalidTopology(TriangulationValidationReport),
    /// A step was called in the wrong state.
    #[error("Harness step out of order: expected state {expected}, found {found}")]
    OutOfOrder {
        /// State the step requires.
        expected: HarnessState,
        /// State the harness was in.
        found: HarnessState,
    },
    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Counts reported after seeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TriangulationSummary {
    /// Number of vertices.
    pub vertices: usize,
    /// Number of faces.
    pub faces: usize,
    /// Number of edges actually present.
    pub edges: usize,
    /// Edges predicted by the Euler relation for the surface's genus.
    pub expected_edges: usize,
    /// Genus of the surface.
    pub genus: usize,
}

impl fmt::Display for TriangulationSummary {
    /// The separator and the four count lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Number of vertices:                  {}", self.vertices)?;
        writeln!(f, "Number of faces:                     {}", self.faces)?;
        writeln!(f, "Number of edges:                     {}", self.edges)?;
        write!(
            f,
            "Expected edges (by Euler relation):  {}",
            self.expected_edges
        )
    }
}

/// Runs the dummy point check on one triangulation.
#[derive(Debug)]
pub struct ValidationHarness<D: DummyPointSeed = BolzaDummyPoints> {
    seed: D,
    triangulation: PeriodicHyperbolicTriangulation,
    state: HarnessState,
}

impl ValidationHarness<BolzaDummyPoints> {
    /// Harness over the canonical Bolza dummy points.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(BolzaDummyPoints)
    }
}

impl Default for ValidationHarness<BolzaDummyPoints> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DummyPointSeed> ValidationHarness<D> {
    /// Harness over an arbitrary seed.
    #[must_use]
    pub fn with_seed(seed: D) -> Self {
        Self {
            seed,
            triangulation: PeriodicHyperbolicTriangulation::new(),
            state: HarnessState::Uninitialized,
        }
    }

    /// Current stage.
    #[must_use]
    pub const fn state(&self) -> HarnessState {
        self.state
    }

    /// The triangulation under test.
    #[must_use]
    pub const fn triangulation(&self) -> &PeriodicHyperbolicTriangulation {
        &self.triangulation
    }

    fn expect_state(&self, expected: HarnessState) -> Result<(), HarnessError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(HarnessError::OutOfOrder {
                expected,
                found: self.state,
            })
        }
    }

    /// Inserts the dummy points and writes the success line.
    ///
    /// # Errors
    ///
    /// [`HarnessError::OutOfOrder`] unless uninitialized,
    /// [`HarnessError::Seeding`] if seeding fails, [`HarnessError::Io`] if
    /// writing fails.
    pub fn seed<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        self.expect_state(HarnessState::Uninitialized)?;
        self.triangulation.seed_with(&self.seed)?;
        self.state = HarnessState::Seeded;
        writeln!(out, "{SEEDED_MESSAGE}")?;
        Ok(())
    }

    /// Counts of the seeded triangulation.
    ///
    /// # Errors
    ///
    /// [`HarnessError::OutOfOrder`] before seeding or after the run ended.
    pub fn summary(&self) -> Result<TriangulationSummary, HarnessError> {
        if matches!(
            self.state,
            HarnessState::Uninitialized | HarnessState::Done
        ) {
            return Err(HarnessError::OutOfOrder {
                expected: HarnessState::Seeded,
                found: self.state,
            });
        }

        let genus = self.triangulation.space().genus();
        let vertices = self.triangulation.number_of_vertices();
        let faces = self.triangulation.number_of_faces();
        Ok(TriangulationSummary {
            vertices,
            faces,
            edges: self.triangulation.number_of_edges(),
            expected_edges: expected_edge_count(vertices, faces, genus),
            genus,
        })
    }

    /// Runs the validity predicate verbosely, writes `YES`/`NO`, then
    /// requires the terse predicate to hold.
    ///
    /// # Errors
    ///
    /// [`HarnessError::OutOfOrder`] unless seeded,
    /// [`HarnessError::InvalidTopology`] with the full report if invalid,
    /// [`HarnessError::Io`] if writing fails.
    pub fn validate<W: Write>(&mut self, out: &mut W) -> Result<(), HarnessError> {
        self.expect_state(HarnessState::Seeded)?;

        let verbose = self.triangulation.is_valid(true);
        writeln!(
            out,
            "Triangulation is valid: {}",
            if verbose { "YES" } else { "NO" }
        )?;

        if !self.triangulation.is_valid(false) {
            let report = self
                .triangulation
                .validation_report(ValidationOptions::ALL)
                .err()
                .unwrap_or_default();
            tracing::error!(violations = report.violations.len(), "triangulation is not valid");
            return Err(HarnessError::InvalidTopology(report));
        }

        self.state = HarnessState::Validated;
        Ok(())
    }

    /// Ends the run.
    ///
    /// # Errors
    ///
    /// [`HarnessError::OutOfOrder`] unless validated.
    pub fn finish(&mut self) -> Result<(), HarnessError> {
        self.expect_state(HarnessState::Validated)?;
        self.state = HarnessState::Done;
        Ok(())
    }

    /// Seeds, reports, validates, and finishes in one go.
    ///
    /// Output, in order: the seeding message, the separator, the four count
    /// lines, and the validity line. `out` is flushed before the run counts
    /// as done.
    ///
    /// # Errors
    ///
    /// Any error of the individual steps.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<TriangulationSummary, HarnessError> {
        self.seed(out)?;
        let summary = self.summary()?;
        tracing::info!(
            vertices = summary.vertices,
            faces = summary.faces,
            edges = summary.edges,
            expected_edges = summary.expected_edges,
            "dummy points inserted"
        );
        writeln!(out, "{summary}")?;
        self.validate(out)?;
        out.flush()?;
        self.finish()?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_before_seeding_is_out_of_order() {
        let harness = ValidationHarness::new();
        assert!(matches!(
            harness.summary(),
            Err(HarnessError::OutOfOrder {
                expected: HarnessState::Seeded,
                found: HarnessState::Uninitialized
            })
        ));
    }

    #[test]
    fn test_validate_before_seeding_is_out_of_order() {
        let mut harness = ValidationHarness::new();
        let mut out = Vec::new();
        assert!(matches!(
            harness.validate(&mut out),
            Err(HarnessError::OutOfOrder { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_second_seed_is_out_of_order() {
        let mut harness = ValidationHarness::new();
        let mut out = Vec::new();
        harness.seed(&mut out).unwrap();
        assert!(matches!(
            harness.seed(&mut out),
            Err(HarnessError::OutOfOrder {
                expected: HarnessState::Uninitialized,
                found: HarnessState::Seeded
            })
        ));
    }

    #[test]
    fn test_run_walks_every_state() {
        let mut harness = ValidationHarness::new();
        let mut out = Vec::new();
        assert_eq!(harness.state(), HarnessState::Uninitialized);
        let summary = harness.run(&mut out).unwrap();
        assert_eq!(harness.state(), HarnessState::Done);
        assert_eq!(
            summary,
            TriangulationSummary {
                vertices: 14,
                faces: 32,
                edges: 48,
                expected_edges: 48,
                genus: 2,
            }
        );
        assert!(harness.finish().is_err());
    }

    /// Accepts writes, fails every flush.
    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    #[test]
    fn test_run_reports_flush_failure() {
        let mut harness = ValidationHarness::new();
        let mut out = UnflushableWriter(Vec::new());

        assert!(matches!(harness.run(&mut out), Err(HarnessError::Io(_))));
        assert_eq!(harness.state(), HarnessState::Validated);
        assert!(String::from_utf8_lossy(&out.0).ends_with("Triangulation is valid: YES\n"));
    }

    #[test]
    fn test_summary_display_format() {
        let summary = TriangulationSummary {
            vertices: 14,
            faces: 32,
            edges: 48,
            expected_edges: 48,
            genus: 2,
        };
        let text = summary.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].len(), 45);
        assert_eq!(lines[1], "Number of vertices:                  14");
        assert_eq!(lines[4], "Expected edges (by Euler relation):  48");
    }
}
