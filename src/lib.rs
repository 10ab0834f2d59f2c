//! # bolza
//!
//! Combinatorial periodic triangulations of the
//! [Bolza surface](https://en.wikipedia.org/wiki/Bolza_surface), the most
//! symmetric closed hyperbolic surface of genus 2, inspired by
//! [CGAL](https://www.cgal.org)'s periodic hyperbolic triangulations.
//!
//! # Features
//!
//! - Slotmap-backed triangulation data structure for closed triangulated surfaces,
//!   with multi-edges (two distinct edges between the same vertices)
//! - The canonical 14 dummy points of the Bolza surface and their 32 triangles
//! - Structural and topological validation collected into a report
//!   (vertex links, connectedness, Euler characteristic)
//! - A harness that seeds a triangulation, prints its counts next to the
//!   Euler-relation prediction, and checks validity
//! - Serialization/Deserialization of points and vertices with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use bolza::prelude::*;
//!
//! let mut tr = PeriodicHyperbolicTriangulation::new();
//! tr.insert_dummy_points().unwrap();
//!
//! assert_eq!(tr.number_of_vertices(), 14);
//! assert_eq!(tr.number_of_faces(), 32);
//! assert_eq!(tr.number_of_edges(), 48);
//!
//! // Euler relation on a genus-2 surface: V − E + F = −2, so E = V + F + 2.
//! assert_eq!(
//!     tr.number_of_edges(),
//!     tr.number_of_vertices() + tr.number_of_faces() + 2
//! );
//! assert!(tr.is_valid(false));
//! ```
//!
//! # Triangulation Invariants
//!
//! - **Vertex mappings** – every vertex UUID has a corresponding key and vice versa.
//! - **Face mappings** – every face UUID has a corresponding key and vice versa.
//! - **Face validity** – each face has three distinct, stored vertices.
//! - **Neighbor consistency** – every side is glued to a side of its neighbor
//!   that runs between the same vertices in the opposite direction.
//! - **Incident faces** – every vertex points at a face containing it.
//! - **Vertex links** – the faces around every vertex form one cycle.
//! - **Connectedness** – the faces form one component.
//! - **Euler characteristic** – `V − E + F` equals `2 − 2g` for the surface.
//!
//! [`PeriodicHyperbolicTriangulation::validation_report`](core::periodic_triangulation::PeriodicHyperbolicTriangulation::validation_report)
//! returns every violated invariant;
//! [`PeriodicHyperbolicTriangulation::is_valid`](core::periodic_triangulation::PeriodicHyperbolicTriangulation::is_valid)
//! reduces the report to a boolean and logs it when asked to be verbose.
//!
//! ```rust
//! use bolza::prelude::*;
//!
//! // Two tetrahedron boundaries: closed, but two spheres instead of one genus-2 surface.
//! let seed = SeedComplex::from_vertex_triples(
//!     8,
//!     &[
//!         [1, 2, 3], [0, 3, 2], [0, 1, 3], [0, 2, 1],
//!         [5, 6, 7], [4, 7, 6], [4, 5, 7], [4, 6, 5],
//!     ],
//! )
//! .unwrap();
//!
//! let mut tr = PeriodicHyperbolicTriangulation::new();
//! tr.seed_with(&seed).unwrap();
//!
//! let report = tr.validation_report(ValidationOptions::ALL).unwrap_err();
//! assert!(report.contains(InvariantKind::Connectedness));
//! assert!(report.contains(InvariantKind::EulerCharacteristic));
//! ```

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

/// The `core` module contains the triangulation data structure, its
/// components (vertices, faces, edges), dummy point seeds, and the periodic
/// triangulation built on top of them.
pub mod core {
    pub mod collections;
    pub mod dummy_points;
    pub mod edge;
    pub mod face;
    pub mod periodic_triangulation;
    pub mod triangulation_data_structure;
    pub mod util;
    pub mod vertex;

    pub use dummy_points::*;
    pub use face::*;
    pub use periodic_triangulation::*;
    pub use triangulation_data_structure::*;
    pub use util::*;
    pub use vertex::*;
    // Note: collections module not re-exported here to avoid namespace pollution
    // Import specific types via prelude or use crate::core::collections::
}

/// Points of the Poincaré disk and the octagon that is the fundamental
/// domain of the Bolza surface.
pub mod geometry {
    pub mod octagon;
    pub mod point;

    pub use octagon::*;
    pub use point::*;
}

/// Topological characteristics and validation of triangulated surfaces.
pub mod topology {
    /// Euler characteristic, f-vectors, and classification.
    pub mod characteristics {
        pub mod euler;
        pub mod validation;
    }
    pub mod manifold;
    /// Concrete surfaces.
    pub mod spaces {
        pub mod hyperbolic;
        pub use hyperbolic::*;
    }
    /// Traits describing topological spaces.
    pub mod traits {
        pub mod topological_space;
        pub use topological_space::*;
    }
}

pub mod harness;

/// A prelude module that re-exports commonly used types.
/// This makes it easier to import the most commonly used items from the crate.
pub mod prelude {
    // Re-export from core
    pub use crate::core::{
        dummy_points::*, edge::*, face::*, periodic_triangulation::*,
        triangulation_data_structure::*, util::*, vertex::*,
    };

    // Re-export commonly used collection types from core::collections
    pub use crate::core::collections::{
        FastHashMap, FastHashSet, SmallBuffer, fast_hash_map_with_capacity,
        fast_hash_set_with_capacity,
    };

    // Re-export from geometry
    pub use crate::geometry::{octagon::*, point::*};

    // Re-export from topology
    pub use crate::topology::{
        characteristics::{euler::*, validation::*},
        manifold::*,
        spaces::*,
        traits::topological_space::*,
    };

    pub use crate::harness::{HarnessError, HarnessState, TriangulationSummary, ValidationHarness};
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
