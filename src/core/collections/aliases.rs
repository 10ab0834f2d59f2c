use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use smallvec::SmallVec;

#[cfg(not(feature = "dense-slotmap"))]
use slotmap::SlotMap;

#[cfg(feature = "dense-slotmap")]
use slotmap::DenseSlotMap;

// Re-export UUID for convenience in type aliases
pub use uuid::Uuid;

// =============================================================================
// STORAGE BACKEND
// =============================================================================

/// Internal storage backend for vertices and faces.
///
/// `DenseSlotMap` by default (the `dense-slotmap` feature); plain `SlotMap`
/// when built with `--no-default-features`. Public methods return iterators
/// rather than exposing this type.
#[cfg(not(feature = "dense-slotmap"))]
pub type StorageMap<K, V> = SlotMap<K, V>;

/// Internal storage backend for vertices and faces.
#[cfg(feature = "dense-slotmap")]
pub type StorageMap<K, V> = DenseSlotMap<K, V>;

// =============================================================================
// CORE OPTIMIZED TYPES
// =============================================================================

/// `HashMap` with the non-cryptographic `FxHasher`.
///
/// ⚠️ **Not DoS-resistant**: only use with internal keys (slotmap keys, UUIDs
/// we generated, seed labels).
///
/// # Examples
///
/// ```rust
/// use bolza::core::collections::FastHashMap;
///
/// let mut map: FastHashMap<u64, usize> = FastHashMap::default();
/// map.insert(123, 456);
/// ```
pub type FastHashMap<K, V> = FxHashMap<K, V>;

/// Build hasher that instantiates `FxHasher`.
pub type FastBuildHasher = FxBuildHasher;

/// Entry API for [`FastHashMap`].
pub use std::collections::hash_map::Entry;

/// `HashSet` with the non-cryptographic `FxHasher`.
///
/// # Examples
///
/// ```rust
/// use bolza::core::collections::FastHashSet;
/// use uuid::Uuid;
///
/// let mut set: FastHashSet<Uuid> = FastHashSet::default();
/// set.insert(Uuid::new_v4());
/// ```
pub type FastHashSet<T> = FxHashSet<T>;

/// Small-optimized Vec: stack storage up to `N` elements, heap beyond.
///
/// # Size Guidelines
///
/// - **N=2**: face sides sharing an edge label
/// - **N=3**: vertices or neighbors of a triangle
/// - **N=16**: faces around a vertex (the Bolza corner vertex has degree 16)
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Inline capacity for per-vertex face rings.
pub const VERTEX_RING_BUFFER_SIZE: usize = 16;
