//! Regression tests: the validity predicate must reject broken complexes.
//!
//! Each test builds a complex that violates exactly one family of invariants
//! and checks that the report names it, and that the harness prints `NO`.

use bolza::prelude::*;

const TETRAHEDRON: [[usize; 3]; 4] = [[1, 2, 3], [0, 3, 2], [0, 1, 3], [0, 2, 1]];

fn seeded(seed: &SeedComplex) -> PeriodicHyperbolicTriangulation {
    let mut tr = PeriodicHyperbolicTriangulation::new();
    tr.seed_with(seed).unwrap();
    tr
}

/// Bolza seed with one edge label replaced by a fresh one, leaving two open sides.
fn bolza_with_open_edge() -> SeedComplex {
    let mut seed = BolzaDummyPoints.seed_complex();
    seed.faces[0].edges[0] = 10_000;
    seed
}

#[test]
fn test_canonical_seed_passes_every_check() {
    let mut tr = PeriodicHyperbolicTriangulation::new();
    tr.insert_dummy_points().unwrap();

    assert!(tr.validation_report(ValidationOptions::ALL).is_ok());
    assert!(tr.tds().is_valid().is_ok());
    assert!(tr.is_valid(true));
    assert!(tr.is_valid(false));
}

#[test]
fn test_two_disjoint_spheres_are_disconnected() {
    let triples: Vec<[usize; 3]> = TETRAHEDRON
        .iter()
        .copied()
        .chain(TETRAHEDRON.iter().map(|t| t.map(|v| v + 4)))
        .collect();
    let tr = seeded(&SeedComplex::from_vertex_triples(8, &triples).unwrap());

    // Each component is a fine sphere on its own.
    assert!(tr.validation_report(ValidationOptions::STRUCTURAL).is_ok());

    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
    assert_eq!(
        report.kinds(),
        vec![InvariantKind::Connectedness, InvariantKind::EulerCharacteristic]
    );
    assert!(matches!(
        report.violations[0].error,
        TdsValidationError::Manifold(ManifoldError::Disconnected {
            reached: 4,
            total: 8
        })
    ));
    assert!(!tr.is_valid(true));
    assert!(!tr.is_valid(false));
}

#[test]
fn test_pinched_spheres_fail_the_vertex_link_check() {
    // Two tetrahedron boundaries sharing only vertex 0.
    let triples = [
        [1, 2, 3],
        [0, 3, 2],
        [0, 1, 3],
        [0, 2, 1],
        [4, 5, 6],
        [0, 6, 5],
        [0, 4, 6],
        [0, 5, 4],
    ];
    let tr = seeded(&SeedComplex::from_vertex_triples(7, &triples).unwrap());

    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
    assert!(report.contains(InvariantKind::VertexLinks));
    assert!(report.contains(InvariantKind::Connectedness));
    assert!(!report.contains(InvariantKind::NeighborConsistency));
    assert!(!tr.is_valid(false));
}

#[test]
fn test_open_edge_is_reported_as_neighbor_violation() {
    let tr = seeded(&bolza_with_open_edge());
    assert_eq!(tr.number_of_faces(), 32);
    // Two open sides now count as two edges.
    assert_eq!(tr.number_of_edges(), 49);

    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
    assert_eq!(report.kinds(), vec![InvariantKind::NeighborConsistency]);
    assert!(report.to_string().contains("is open"));
    assert!(!tr.is_valid(false));
}

#[test]
fn test_inconsistent_orientation_is_rejected() {
    let mut triples = TETRAHEDRON;
    triples[0] = [1, 3, 2];
    let tr = seeded(&SeedComplex::from_vertex_triples(4, &triples).unwrap());

    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
    assert_eq!(report.kinds(), vec![InvariantKind::NeighborConsistency]);
    assert!(matches!(
        report.violations[0].error,
        TdsValidationError::InvalidNeighbors { .. }
    ));
}

#[test]
fn test_overused_label_is_rejected_before_seeding() {
    let mut seed = BolzaDummyPoints.seed_complex();
    let label = seed.faces[0].edges[0];
    seed.faces[1].edges[0] = label;

    let mut tr = PeriodicHyperbolicTriangulation::new();
    assert_eq!(
        tr.seed_with(&seed),
        Err(SeedError::EdgeLabelOverused { label, sides: 3 })
    );
    assert!(tr.is_empty());
}

#[test]
fn test_malformed_seeds_are_rejected() {
    assert_eq!(
        SeedComplex::from_vertex_triples(3, &[[0, 1, 3]]),
        Err(SeedError::PointIndexOutOfRange {
            face: 0,
            index: 3,
            points: 3
        })
    );
    assert_eq!(
        SeedComplex::from_vertex_triples(3, &[[0, 1, 1]]),
        Err(SeedError::DegenerateFace {
            face: 0,
            vertices: [0, 1, 1]
        })
    );
    assert_eq!(
        SeedComplex::from_vertex_triples(0, &[]),
        Err(SeedError::EmptySeed {
            points: 0,
            faces: 0
        })
    );
}

#[test]
fn test_seeding_twice_is_rejected() {
    let mut tr = PeriodicHyperbolicTriangulation::new();
    tr.insert_dummy_points().unwrap();
    assert_eq!(
        tr.insert_dummy_points(),
        Err(SeedError::NotEmpty {
            vertices: 14,
            faces: 32
        })
    );
    assert!(tr.is_valid(false));
}

#[test]
fn test_dangling_incident_face_is_reported() {
    let mut tr = PeriodicHyperbolicTriangulation::new();
    tr.insert_dummy_points().unwrap();

    let (vertex_key, _) = tr.vertices().next().unwrap();
    tr.tds_mut()
        .get_vertex_by_key_mut(vertex_key)
        .unwrap()
        .set_incident_face(None);

    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
    assert_eq!(report.kinds(), vec![InvariantKind::IncidentFaces]);

    tr.tds_mut().assign_incident_faces();
    assert!(tr.is_valid(false));
}

#[test]
fn test_harness_prints_no_for_broken_seed() {
    let mut harness = ValidationHarness::with_seed(bolza_with_open_edge());
    let mut out = Vec::new();

    match harness.run(&mut out) {
        Err(HarnessError::InvalidTopology(report)) => {
            assert!(report.contains(InvariantKind::NeighborConsistency));
        }
        other => panic!("expected InvalidTopology, got {other:?}"),
    }
    assert_eq!(harness.state(), HarnessState::Seeded);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Triangulation is valid: NO"));
    assert!(!text.contains("YES"));
}

#[test]
fn test_harness_stops_when_seeding_fails() {
    // One triangle whose three sides all claim the same edge.
    let seed = SeedComplex {
        points: vec![HyperbolicPoint::ORIGIN; 3],
        faces: vec![SeedFace {
            vertices: [0, 1, 2],
            edges: [7, 7, 7],
        }],
    };
    let mut harness = ValidationHarness::with_seed(seed);
    let mut out = Vec::new();

    assert!(matches!(
        harness.run(&mut out),
        Err(HarnessError::Seeding(SeedError::EdgeLabelOverused {
            label: 7,
            sides: 3
        }))
    ));
    assert_eq!(harness.state(), HarnessState::Uninitialized);
    assert!(harness.triangulation().is_empty());
    assert!(out.is_empty());
}
