//! Collection types used by the triangulation data structure.
//!
//! Aliases over `rustc-hash`, `smallvec`, and `slotmap` keep the concrete
//! hashing and storage choices in one place.

mod aliases;
mod helpers;
mod key_maps;
mod triangulation_maps;

pub use aliases::*;
pub use helpers::*;
pub use key_maps::*;
pub use triangulation_maps::*;
