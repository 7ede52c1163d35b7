use thiserror::Error;

/// Errors raised while consolidating geometry into a [`Mesh`](crate::Mesh).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Fewer than 3 usable points were supplied, so no triangle can be formed.
    #[error("cannot construct a mesh from {count} points, at least 3 are required")]
    InsufficientInput { count: usize },

    /// A pre-indexed facet refers to a vertex that does not exist.
    #[error("facet {facet} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        facet: usize,
        index: u32,
        vertex_count: usize,
    },

    /// More distinct vertices than a `u32` index can address.
    #[error("too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}
