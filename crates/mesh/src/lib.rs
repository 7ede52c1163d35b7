//! Consolidation of raw geometry into a canonical indexed triangle mesh.
//!
//! ```text
//! TriangleSoup::Raw ──> VertexIndex::weld ─┐
//!                                          ├─> Mesh::assemble ──> normals
//! TriangleSoup::Indexed ───────────────────┘
//! ```

mod builder;
mod error;
mod geometry;
mod mesh;
pub mod normals;
mod shapes;
mod vertex_index;

pub use builder::*;
pub use error::*;
pub use geometry::*;
pub use mesh::*;
pub use vertex_index::*;
