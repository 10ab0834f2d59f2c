use super::{FastHashMap, FastHashSet, Uuid};
use crate::core::triangulation_data_structure::{FaceKey, VertexKey};

// =============================================================================
// UUID-KEY MAPPING TYPES
// =============================================================================

/// Mapping from vertex UUIDs to storage keys.
///
/// Key → UUID lookups go through the storage map directly.
pub type UuidToVertexKeyMap = FastHashMap<Uuid, VertexKey>;

/// Mapping from face UUIDs to storage keys.
pub type UuidToFaceKeyMap = FastHashMap<Uuid, FaceKey>;

// =============================================================================
// KEY SETS
// =============================================================================

/// Set of face keys (visited sets during traversal).
pub type FaceKeySet = FastHashSet<FaceKey>;
