use cgmath::{EuclideanSpace, Point3, SquareMatrix, Transform};
use meshweld_mesh::{Facet, Mesh, TriangleSoup, Vector3};

use crate::{FlattenConfig, Matrix4, PrimitiveMesh, Scene, SceneError, SceneNode};

/// Scene geometry moved into one global frame, indexed but not welded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlatGeometry {
    pub points: Vec<Vector3>,
    pub facets: Vec<Facet>,
}

impl FlatGeometry {
    fn append(
        &mut self,
        mesh_index: usize,
        mesh: &PrimitiveMesh,
        transform: &Matrix4,
        scale: Vector3,
    ) -> Result<(), SceneError> {
        let offset = self.points.len();
        let end = offset + mesh.positions.len();
        if end > u32::MAX as usize {
            return Err(SceneError::TooManyVertices { count: end });
        }
        let offset = offset as u32;

        self.points.extend(mesh.positions.iter().map(|p| {
            let q = transform.transform_point(Point3::from_vec(*p));
            Vector3::new(q.x * scale.x, q.y * scale.y, q.z * scale.z)
        }));

        for face in &mesh.faces {
            // Anything that is not a triangle should have been triangulated by the importer.
            let &[a, b, c] = face.as_slice() else {
                continue;
            };
            if let Some(&index) = [a, b, c]
                .iter()
                .find(|&&i| i as usize >= mesh.positions.len())
            {
                return Err(SceneError::InvalidFaceIndex {
                    mesh: mesh_index,
                    index,
                    vertex_count: mesh.positions.len(),
                });
            }
            self.facets
                .push(Facet::new(offset + a, offset + b, offset + c));
        }
        Ok(())
    }
}

/// Collects the geometry of every node into one vertex and facet list.
///
/// Nodes are visited depth first in pre-order, children in their given order. Each vertex is
/// moved by the product of the transforms from the root down to its node and then multiplied
/// component-wise by `config.scale`. Facet indices are offset so they point into the combined
/// vertex list. Faces that are not triangles are dropped.
pub fn flatten(scene: &Scene, config: &FlattenConfig) -> Result<FlatGeometry, SceneError> {
    if scene.meshes.is_empty() {
        return Err(SceneError::EmptyScene);
    }

    let mut flat = FlatGeometry::default();
    let mut visited = 0usize;
    // Explicit stack; imported hierarchies may be arbitrarily deep.
    let mut stack: Vec<(&SceneNode, Matrix4)> = vec![(&scene.root, Matrix4::identity())];
    while let Some((node, parent_transform)) = stack.pop() {
        visited += 1;
        if visited > config.node_limit {
            return Err(SceneError::TooManyNodes {
                limit: config.node_limit,
            });
        }

        let transform = parent_transform * node.transform;
        for &mesh_index in &node.meshes {
            let mesh = scene
                .meshes
                .get(mesh_index)
                .ok_or_else(|| SceneError::InvalidMeshReference {
                    node: node.name.clone(),
                    mesh: mesh_index,
                    mesh_count: scene.meshes.len(),
                })?;
            flat.append(mesh_index, mesh, &transform, config.scale)?;
        }

        stack.extend(node.children.iter().rev().map(|child| (child, transform)));
    }

    if flat.points.is_empty() {
        return Err(SceneError::NoVertices);
    }
    if flat.facets.is_empty() {
        return Err(SceneError::NoTriangles);
    }
    log::debug!(
        "flattened {} nodes into {} vertices and {} triangles",
        visited,
        flat.points.len(),
        flat.facets.len()
    );
    Ok(flat)
}

/// Flattens `scene` and builds a mesh from the result.
///
/// Vertices shared between sub-meshes are kept separate: scene geometry is not welded. `name`
/// identifies the scene in diagnostics.
pub fn mesh_from_scene(
    scene: &Scene,
    config: &FlattenConfig,
    name: &str,
) -> Result<Mesh, SceneError> {
    let FlatGeometry { points, facets } = flatten(scene, config).map_err(|e| {
        log::warn!("cannot flatten scene {}: {}", name, e);
        e
    })?;
    Ok(TriangleSoup::Indexed { points, facets }.build()?)
}
