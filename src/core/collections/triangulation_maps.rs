use super::{FastHashMap, SmallBuffer, VERTEX_RING_BUFFER_SIZE};
use crate::core::dummy_points::EdgeLabel;
use crate::core::edge::FaceSide;
use crate::core::triangulation_data_structure::{FaceKey, VertexKey};

/// Seed edge label → the face sides carrying it.
///
/// A well-formed closed seed has exactly two sides per label; one side means an
/// open edge and three or more is rejected during gluing.
pub type EdgeLabelToSidesMap = FastHashMap<EdgeLabel, SmallBuffer<FaceSide, 2>>;

/// Vertex → faces containing it, in storage order (not rotational order).
pub type VertexToFacesMap = FastHashMap<VertexKey, SmallBuffer<FaceKey, VERTEX_RING_BUFFER_SIZE>>;
