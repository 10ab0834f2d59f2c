//! Property-based tests for the validity predicate.
//!
//! Starting from closed, valid seeds (the Bolza dummy points and a 7-vertex
//! torus), these tests check that:
//!
//! 1. **Relabeling invariance**: edge label values and face order do not matter
//! 2. **Verbosity independence**: verbose and terse validation always agree
//! 3. **Corruption detection**: clearing or redirecting one neighbor pointer,
//!    removing one face, or splitting one edge makes the triangulation invalid

use bolza::prelude::*;
use proptest::prelude::*;

/// Flat torus of genus 1, used as a second closed surface.
#[derive(Clone, Copy, Debug, Default)]
struct Torus;

impl TopologicalSpace for Torus {
    const DIM: usize = 2;

    fn kind(&self) -> TopologyKind {
        TopologyKind::Toroidal
    }

    fn allows_boundary(&self) -> bool {
        false
    }

    fn genus(&self) -> usize {
        1
    }
}

fn bolza_seed() -> SeedComplex {
    BolzaDummyPoints.seed_complex()
}

/// Möbius's 7-vertex torus.
fn torus_seed() -> SeedComplex {
    let triples: Vec<[usize; 3]> = (0..7)
        .flat_map(|i| [[i, (i + 1) % 7, (i + 3) % 7], [i, (i + 3) % 7, (i + 2) % 7]])
        .collect();
    SeedComplex::from_vertex_triples(7, &triples).unwrap()
}

fn seeded<S: TopologicalSpace>(space: S, seed: &SeedComplex) -> PeriodicHyperbolicTriangulation<S> {
    let mut tr = PeriodicHyperbolicTriangulation::with_space(space);
    tr.seed_with(seed).unwrap();
    tr
}

fn face_key_at<S: TopologicalSpace>(tr: &PeriodicHyperbolicTriangulation<S>, index: usize) -> FaceKey {
    tr.faces().nth(index).map(|(key, _)| key).unwrap()
}

/// Generates the validity properties for one closed seed.
macro_rules! test_validity_properties {
    ($name:ident, $space:expr, $seed:expr, $faces:literal) => {
        pastey::paste! {
            proptest! {
                /// Property: renaming edge labels injectively keeps the seed valid.
                #[test]
                fn [<prop_label_renaming_preserves_validity_ $name>](
                    offset in 0usize..1_000,
                    stride in 1usize..7,
                ) {
                    let mut seed = $seed;
                    for face in &mut seed.faces {
                        face.edges = face.edges.map(|label| offset + stride * label);
                    }
                    let tr = seeded($space, &seed);
                    prop_assert!(tr.is_valid(false));
                }

                /// Property: the order in which faces are inserted does not matter.
                #[test]
                fn [<prop_face_order_preserves_validity_ $name>](
                    faces in Just($seed.faces).prop_shuffle()
                ) {
                    let seed = SeedComplex { faces, ..$seed };
                    let tr = seeded($space, &seed);
                    prop_assert_eq!(tr.number_of_faces(), $faces);
                    prop_assert!(tr.is_valid(false));
                }

                /// Property: clearing one neighbor pointer is always detected.
                #[test]
                fn [<prop_cleared_neighbor_is_invalid_ $name>](
                    face_index in 0usize..$faces,
                    side in 0usize..3,
                ) {
                    let mut tr = seeded($space, &$seed);
                    let face_key = face_key_at(&tr, face_index);
                    tr.tds_mut().get_face_by_key_mut(face_key).unwrap().set_neighbor(side, None);

                    let verbose = tr.is_valid(true);
                    let terse = tr.is_valid(false);
                    prop_assert_eq!(verbose, terse);
                    prop_assert!(!terse);

                    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
                    prop_assert!(report.contains(InvariantKind::NeighborConsistency));
                }

                /// Property: pointing a side at the wrong face is always detected.
                #[test]
                fn [<prop_redirected_neighbor_is_invalid_ $name>](
                    face_index in 0usize..$faces,
                    side in 0usize..3,
                    target_index in 0usize..$faces,
                ) {
                    let mut tr = seeded($space, &$seed);
                    let face_key = face_key_at(&tr, face_index);
                    let target = face_key_at(&tr, target_index);
                    let current = tr.tds().get_face_by_key(face_key).unwrap().neighbor(side);
                    prop_assume!(current != Some(target));

                    tr.tds_mut().get_face_by_key_mut(face_key).unwrap().set_neighbor(side, Some(target));

                    prop_assert_eq!(tr.is_valid(true), tr.is_valid(false));
                    prop_assert!(!tr.is_valid(false));
                }

                /// Property: removing any face opens three sides.
                #[test]
                fn [<prop_removed_face_is_invalid_ $name>](face_index in 0usize..$faces) {
                    let mut tr = seeded($space, &$seed);
                    let face_key = face_key_at(&tr, face_index);
                    prop_assert!(tr.tds_mut().remove_face_by_key(face_key).is_some());
                    tr.tds_mut().assign_incident_faces();

                    prop_assert_eq!(tr.number_of_faces(), $faces - 1);
                    prop_assert!(!tr.is_valid(false));
                    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
                    prop_assert!(report.contains(InvariantKind::NeighborConsistency));
                }

                /// Property: splitting one edge into two open sides is detected
                /// while seeding still succeeds.
                #[test]
                fn [<prop_split_edge_is_invalid_ $name>](
                    face_index in 0usize..$faces,
                    side in 0usize..3,
                ) {
                    let mut seed = $seed;
                    seed.faces[face_index].edges[side] = usize::MAX;
                    let tr = seeded($space, &seed);

                    prop_assert_eq!(tr.number_of_edges(), seed.number_of_edges());
                    let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
                    prop_assert_eq!(report.kinds(), vec![InvariantKind::NeighborConsistency]);
                }
            }
        }
    };
}

test_validity_properties!(bolza, BolzaSurface, bolza_seed(), 32);
test_validity_properties!(torus, Torus, torus_seed(), 14);

#[test]
fn test_unmodified_seeds_are_valid() {
    assert!(seeded(BolzaSurface, &bolza_seed()).is_valid(false));
    assert!(seeded(Torus, &torus_seed()).is_valid(false));
    // Right combinatorics, wrong surface.
    assert!(!seeded(BolzaSurface, &torus_seed()).is_valid(false));
}
