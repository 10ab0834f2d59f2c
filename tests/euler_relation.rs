//! Deterministic integration tests for the Euler relation on triangulated surfaces.
//!
//! ## Test Coverage
//!
//! - Empty triangulations (χ = 0)
//! - The Bolza dummy point seed (χ = −2, genus 2, E = V + F + 2)
//! - Closed simplicial spheres and tori built from vertex triples
//! - Classification of surfaces with boundary

use bolza::prelude::*;
use bolza::topology::characteristics::{euler, validation};

/// Boundary of a tetrahedron (a sphere).
const TETRAHEDRON: [[usize; 3]; 4] = [[1, 2, 3], [0, 3, 2], [0, 1, 3], [0, 2, 1]];

/// Möbius's 7-vertex torus: triangles `(i, i+1, i+3)` and `(i, i+3, i+2)` mod 7.
fn seven_vertex_torus() -> Vec<[usize; 3]> {
    (0..7)
        .flat_map(|i| [[i, (i + 1) % 7, (i + 3) % 7], [i, (i + 3) % 7, (i + 2) % 7]])
        .collect()
}

fn seeded_from(points: usize, triples: &[[usize; 3]]) -> PeriodicHyperbolicTriangulation {
    let seed = SeedComplex::from_vertex_triples(points, triples).unwrap();
    let mut tr = PeriodicHyperbolicTriangulation::new();
    tr.seed_with(&seed).unwrap();
    tr
}

// =============================================================================
// DETERMINISTIC TESTS - KNOWN CONFIGURATIONS
// =============================================================================

#[test]
fn test_empty_triangulation_euler() {
    let tds = Tds::empty();

    let counts = euler::count_simplices(&tds);
    assert_eq!(counts.count(0), 0);
    assert_eq!(counts.count(2), 0);
    assert_eq!(euler::euler_characteristic(&counts), 0);

    let classification = euler::classify_triangulation(&tds);
    assert_eq!(classification, euler::TopologyClassification::Empty);
    assert_eq!(euler::expected_chi_for(&classification), Some(0));
}

#[test]
fn test_bolza_seed_euler_relation() {
    let mut tr = PeriodicHyperbolicTriangulation::new();
    tr.insert_dummy_points().unwrap();

    let (v, e, f) = (
        tr.number_of_vertices(),
        tr.number_of_edges(),
        tr.number_of_faces(),
    );
    assert_eq!(e, v + f + 2, "genus 2: V − E + F = −2");
    assert_eq!(euler::expected_edge_count(v, f, BolzaSurface::GENUS), v + f + 2);

    let result = tr.topology_check();
    assert_eq!(result.counts.by_dim, vec![14, 48, 32]);
    assert_eq!(result.chi, -2);
    assert_eq!(result.expected, Some(-2));
    assert_eq!(
        result.classification,
        euler::TopologyClassification::ClosedSurface { genus: 2 }
    );
    assert!(result.notes.is_empty());
    assert!(result.is_valid());
}

#[test]
fn test_sphere_counts_and_mismatch_on_bolza_surface() {
    let tr = seeded_from(4, &TETRAHEDRON);

    let result = tr.topology_check();
    assert_eq!(result.counts.by_dim, vec![4, 6, 4]);
    assert_eq!(result.chi, 2);
    assert_eq!(
        result.classification,
        euler::TopologyClassification::ClosedSurface { genus: 0 }
    );
    // A sphere is a fine closed surface, just not the Bolza surface.
    assert_eq!(result.expected, Some(-2));
    assert!(!result.is_valid());

    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
    assert_eq!(report.kinds(), vec![InvariantKind::EulerCharacteristic]);
    assert!(matches!(
        report.violations[0].error,
        TdsValidationError::Topology(TopologyError::EulerMismatch {
            computed: 2,
            expected: -2,
            ..
        })
    ));
}

#[test]
fn test_torus_is_genus_one() {
    let tr = seeded_from(7, &seven_vertex_torus());

    let counts = euler::count_simplices(tr.tds());
    assert_eq!(counts.by_dim, vec![7, 21, 14]);
    assert_eq!(euler::euler_characteristic(&counts), 0);
    assert_eq!(
        euler::classify_triangulation(tr.tds()),
        euler::TopologyClassification::ClosedSurface { genus: 1 }
    );
    assert_eq!(euler::expected_edge_count(7, 14, 1), 21);

    // Structurally a closed 2-manifold; only the Euler check fails.
    assert!(tr.validation_report(ValidationOptions::STRUCTURAL).is_ok());
    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
    assert_eq!(report.kinds(), vec![InvariantKind::EulerCharacteristic]);
}

#[test]
fn test_single_open_triangle_has_boundary() {
    let tr = seeded_from(3, &[[0, 1, 2]]);

    let counts = euler::count_simplices(tr.tds());
    assert_eq!(counts.by_dim, vec![3, 3, 1]);
    assert_eq!(euler::euler_characteristic(&counts), 1);
    assert_eq!(
        euler::classify_triangulation(tr.tds()),
        euler::TopologyClassification::SurfaceWithBoundary
    );

    let result = validation::validate_triangulation_euler(tr.tds(), &BolzaSurface);
    assert!(!result.is_valid());
    assert_eq!(result.notes.len(), 2);
}

#[test]
fn test_genus_round_trip_through_edge_count() {
    for genus in 0..6 {
        let (v, f) = (30, 60 + 4 * genus);
        let e = euler::expected_edge_count(v, f, genus);
        let chi = euler::euler_characteristic(&euler::FVector {
            by_dim: vec![v, e, f],
        });
        assert_eq!(euler::genus_from_euler_characteristic(chi), Some(genus));
    }
}
