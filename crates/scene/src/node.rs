use cgmath::SquareMatrix;
use meshweld_mesh::Vector3;

pub type Matrix4 = cgmath::Matrix4<f64>;

/// Geometry attached to a scene node, in the node's local frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrimitiveMesh {
    pub positions: Vec<Vector3>,
    /// Faces as lists of indices into `positions`. Only faces with exactly three indices are
    /// turned into triangles.
    pub faces: Vec<Vec<u32>>,
}

impl PrimitiveMesh {
    pub fn new(positions: Vec<Vector3>, faces: Vec<Vec<u32>>) -> Self {
        Self { positions, faces }
    }

    pub fn from_triangles(positions: Vec<Vector3>, triangles: &[[u32; 3]]) -> Self {
        Self {
            positions,
            faces: triangles.iter().map(|t| t.to_vec()).collect(),
        }
    }
}

/// A node of an imported scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    /// Transform from this node's frame into its parent's frame.
    pub transform: Matrix4,
    /// Indices into [`Scene::meshes`].
    pub meshes: Vec<usize>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Matrix4::identity(),
            meshes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Matrix4) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_mesh(mut self, mesh: usize) -> Self {
        self.meshes.push(mesh);
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }
}

impl Drop for SceneNode {
    fn drop(&mut self) {
        // Iterative drop so deep hierarchies cannot overflow the stack.
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

/// An imported scene: a table of meshes and a node hierarchy referencing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub meshes: Vec<PrimitiveMesh>,
    pub root: SceneNode,
}

impl Scene {
    pub fn new(meshes: Vec<PrimitiveMesh>, root: SceneNode) -> Self {
        Self { meshes, root }
    }

    /// A scene holding `mesh` on an untransformed root node.
    pub fn single(mesh: PrimitiveMesh) -> Self {
        Self {
            meshes: vec![mesh],
            root: SceneNode::new("root").with_mesh(0),
        }
    }
}
