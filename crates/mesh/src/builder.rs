use crate::{Facet, Mesh, MeshError, Vector3, VertexIndex};

/// Geometry on its way into a [`Mesh`].
///
/// Every construction entry point converges here: loose triangle soups are welded first,
/// pre-indexed data is checked and passed through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum TriangleSoup {
    /// Every three consecutive points form one triangle. Coincident points are welded.
    Raw(Vec<Vector3>),
    /// Points plus facets that index into them. No welding is performed.
    Indexed {
        points: Vec<Vector3>,
        facets: Vec<Facet>,
    },
}

impl TriangleSoup {
    /// Consolidates the soup into a finished mesh.
    pub fn build(self) -> Result<Mesh, MeshError> {
        match self {
            TriangleSoup::Raw(points) => {
                let VertexIndex { points, facets } = VertexIndex::weld(&points)?;
                Ok(Mesh::assemble(points, facets))
            }
            TriangleSoup::Indexed { points, facets } => {
                check_indices(points.len(), &facets)?;
                Ok(Mesh::assemble(points, facets))
            }
        }
    }
}

fn check_indices(vertex_count: usize, facets: &[Facet]) -> Result<(), MeshError> {
    for (facet, f) in facets.iter().enumerate() {
        if let Some(index) = f.indices().into_iter().find(|&i| i as usize >= vertex_count) {
            log::warn!(
                "facet {} references vertex {} but only {} vertices were supplied",
                facet,
                index,
                vertex_count
            );
            return Err(MeshError::IndexOutOfRange {
                facet,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

impl Mesh {
    /// Builds a mesh from a triangle soup, welding exactly coincident points.
    pub fn from_points(points: &[Vector3]) -> Result<Mesh, MeshError> {
        TriangleSoup::Raw(points.to_vec()).build()
    }

    /// Builds a mesh from already indexed geometry, keeping the vertex table as given.
    pub fn from_indexed(points: Vec<Vector3>, facets: Vec<Facet>) -> Result<Mesh, MeshError> {
        TriangleSoup::Indexed { points, facets }.build()
    }
}
