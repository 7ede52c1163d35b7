use meshweld_mesh::MeshError;
use thiserror::Error;

/// Errors raised while flattening a scene into a mesh.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene has no meshes")]
    EmptyScene,

    #[error("there are no vertices in the scene")]
    NoVertices,

    #[error("there are no triangles in the scene")]
    NoTriangles,

    #[error("node '{node}' references mesh {mesh} but the scene has {mesh_count} meshes")]
    InvalidMeshReference {
        node: String,
        mesh: usize,
        mesh_count: usize,
    },

    #[error("mesh {mesh} has a face referencing vertex {index} but only {vertex_count} vertices")]
    InvalidFaceIndex {
        mesh: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("scene has more than {limit} nodes")]
    TooManyNodes { limit: usize },

    #[error("scene has too many vertices to index: {count}")]
    TooManyVertices { count: usize },

    #[error(transparent)]
    Mesh(#[from] MeshError),
}
