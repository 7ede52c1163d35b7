//! glTF 2.0 import. Both `.gltf` documents with embedded (`data:`) buffers and binary `.glb`
//! containers are accepted; buffers referenced by external URI are not.

use std::ops::Range;

use meshweld_mesh::Vector3;
use meshweld_scene::{
    ImportError, Matrix4, PrimitiveMesh, Scene, SceneImporter, SceneNode, DEFAULT_NODE_LIMIT,
};

fn parse_error(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> ImportError {
    ImportError::Parse {
        format: "gltf",
        source: source.into(),
    }
}

/// Reads the triangle primitives of every mesh into one table.
///
/// Each glTF mesh may hold several primitives, so alongside the table this returns, per glTF
/// mesh index, the range of table entries holding that mesh's primitives.
fn read_meshes(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
) -> (Vec<PrimitiveMesh>, Vec<Range<usize>>) {
    let mut table = Vec::new();
    let mut ranges = Vec::new();
    for mesh in document.meshes() {
        let start = table.len();
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "skipping {:?} primitive {} of mesh {}",
                    primitive.mode(),
                    primitive.index(),
                    mesh.index()
                );
                continue;
            }
            let reader =
                primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));
            let Some(positions) = reader.read_positions() else {
                log::warn!(
                    "primitive {} of mesh {} has no positions",
                    primitive.index(),
                    mesh.index()
                );
                continue;
            };
            let positions: Vec<Vector3> = positions
                .map(|[x, y, z]| Vector3::new(x as f64, y as f64, z as f64))
                .collect();
            // Non-indexed primitives list their vertices in triangle order.
            let indices: Vec<u32> = match reader.read_indices() {
                Some(indices) => indices.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            let faces = indices.chunks(3).map(|face| face.to_vec()).collect();
            table.push(PrimitiveMesh::new(positions, faces));
        }
        ranges.push(start..table.len());
    }
    (table, ranges)
}

fn scene_node(node: &gltf::Node, meshes: &[Range<usize>]) -> SceneNode {
    let name = node
        .name()
        .map_or_else(|| format!("node{}", node.index()), str::to_string);
    // glTF matrices are column-major, as are cgmath's.
    let matrix = node.transform().matrix().map(|column| column.map(f64::from));
    let mut scene_node = SceneNode::new(name).with_transform(Matrix4::from(matrix));
    if let Some(range) = node.mesh().and_then(|mesh| meshes.get(mesh.index())) {
        scene_node.meshes.extend(range.clone());
    }
    scene_node
}

/// Builds the node hierarchy below `scene` without recursion.
///
/// glTF forbids cycles but does not stop a malformed file from containing one, so the number
/// of nodes created is capped by `node_limit`.
fn build_tree(
    scene: gltf::Scene,
    meshes: &[Range<usize>],
    node_limit: usize,
) -> Result<SceneNode, ImportError> {
    let mut root = SceneNode::new(scene.name().unwrap_or("scene"));
    let mut visited = 0usize;
    let mut count = || {
        visited += 1;
        if visited > node_limit {
            return Err(parse_error(format!(
                "node hierarchy exceeds {} nodes",
                node_limit
            )));
        }
        Ok(())
    };
    for top in scene.nodes() {
        count()?;
        let mut stack = vec![(scene_node(&top, meshes), top.children())];
        while let Some((_, children)) = stack.last_mut() {
            if let Some(child) = children.next() {
                count()?;
                stack.push((scene_node(&child, meshes), child.children()));
                continue;
            }
            if let Some((done, _)) = stack.pop() {
                match stack.last_mut() {
                    Some((parent, _)) => parent.children.push(done),
                    None => root.children.push(done),
                }
            }
        }
    }
    Ok(root)
}

/// Imports the default scene of a glTF document (or its first scene when none is marked).
#[derive(Debug, Clone, Copy)]
pub struct GltfImporter {
    pub node_limit: usize,
}

impl Default for GltfImporter {
    fn default() -> Self {
        Self {
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }
}

impl SceneImporter for GltfImporter {
    fn import(&self, data: &[u8], _hint: &str) -> Result<Scene, ImportError> {
        let (document, buffers, _images) = gltf::import_slice(data).map_err(parse_error)?;
        let Some(scene) = document
            .default_scene()
            .or_else(|| document.scenes().next())
        else {
            return Err(parse_error("document has no scene"));
        };
        let (meshes, ranges) = read_meshes(&document, &buffers);
        let root = build_tree(scene, &ranges, self.node_limit)?;
        log::debug!(
            "imported glTF scene '{}' with {} primitives",
            root.name,
            meshes.len()
        );
        Ok(Scene::new(meshes, root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshweld_test_data::{GLB_NESTED, GLTF_NESTED};

    // One mesh with an unindexed triangle primitive and a point primitive, on two root nodes.
    const UNINDEXED: &str = r#"{
        "asset": { "version": "2.0" },
        "scenes": [ { "nodes": [0, 1] } ],
        "nodes": [ { "mesh": 0 }, { "name": "empty" } ],
        "meshes": [ { "primitives": [
            { "attributes": { "POSITION": 0 } },
            { "attributes": { "POSITION": 0 }, "mode": 0 }
        ] } ],
        "buffers": [ {
            "byteLength": 36,
            "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAAAAQAAAAAAAAAAAAAAAAAAAAEAAAAAA"
        } ],
        "bufferViews": [ { "buffer": 0, "byteLength": 36 } ],
        "accessors": [ {
            "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
            "min": [0, 0, 0], "max": [2, 2, 0]
        } ]
    }"#;

    #[test]
    fn nested_hierarchy() {
        let scene = GltfImporter::default()
            .import(GLTF_NESTED.bytes, "nested.gltf")
            .unwrap();
        assert_eq!(1, scene.meshes.len());
        assert_eq!(vec![vec![0, 1, 2]], scene.meshes[0].faces);

        let root = &scene.root;
        assert_eq!("arm", root.name);
        let base = &root.children[0];
        let elbow = &base.children[0];
        let tip = &elbow.children[0];
        assert_eq!(
            vec!["base", "elbow", "tip"],
            [base, elbow, tip].map(|n| n.name.as_str()).to_vec()
        );
        assert!([base, elbow, tip].iter().all(|n| n.meshes == vec![0]));
        assert!(tip.children.is_empty());

        assert_eq!(
            Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0)),
            base.transform
        );
        assert_eq!(
            Matrix4::new(
                0.0, 1.0, 0.0, 0.0, //
                -1.0, 0.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 2.0, 0.0, 1.0,
            ),
            elbow.transform
        );
    }

    #[test]
    fn glb_matches_gltf() {
        let importer = GltfImporter::default();
        let gltf = importer.import(GLTF_NESTED.bytes, "gltf").unwrap();
        let glb = importer.import(GLB_NESTED.bytes, "glb").unwrap();
        assert_eq!(gltf, glb);
    }

    #[test]
    fn unindexed_and_non_triangle_primitives() {
        let scene = GltfImporter::default()
            .import(UNINDEXED.as_bytes(), "gltf")
            .unwrap();
        // The point primitive is dropped.
        assert_eq!(1, scene.meshes.len());
        assert_eq!(vec![vec![0, 1, 2]], scene.meshes[0].faces);
        assert_eq!(Vector3::new(2.0, 0.0, 0.0), scene.meshes[0].positions[1]);

        assert_eq!("scene", scene.root.name);
        assert_eq!(2, scene.root.children.len());
        assert_eq!(vec![0], scene.root.children[0].meshes);
        assert_eq!("empty", scene.root.children[1].name);
        assert!(scene.root.children[1].meshes.is_empty());
    }

    #[test]
    fn node_limit() {
        let err = GltfImporter { node_limit: 2 }
            .import(GLTF_NESTED.bytes, "gltf")
            .err()
            .unwrap();
        assert!(matches!(err, ImportError::Parse { format: "gltf", .. }));
        assert!(GltfImporter { node_limit: 3 }
            .import(GLTF_NESTED.bytes, "gltf")
            .is_ok());
    }

    #[test]
    fn invalid_document() {
        let err = GltfImporter::default()
            .import(b"{ not json", "gltf")
            .err()
            .unwrap();
        assert!(matches!(err, ImportError::Parse { format: "gltf", .. }));
    }
}
