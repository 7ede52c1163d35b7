//! Loads meshes from resources: retrieve bytes, import a scene, flatten it into one mesh.
//!
//! ```no_run
//! let mesh = meshweld::load_mesh("models/cube.stl").unwrap();
//! println!("{} vertices, {} triangles", mesh.vertex_count(), mesh.triangle_count());
//! ```

mod error;
mod format;
mod load;
mod retriever;

pub use error::*;
pub use format::*;
pub use load::*;
pub use retriever::*;

pub use meshweld_mesh::{Facet, Mesh, MeshError, Triangle, TriangleSoup, Vector3, VertexIndex};
pub use meshweld_scene::{
    mesh_from_scene, FlattenConfig, ImportError, Scene, SceneError, SceneImporter,
    DEFAULT_NODE_LIMIT, IDENTITY_SCALE,
};
pub use meshweld_gltf::GltfImporter;
pub use meshweld_stl::StlImporter;
