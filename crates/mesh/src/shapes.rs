use crate::{Facet, Mesh, Vector3};

// Two triangles per side, wound counter-clockwise when viewed from outside.
const BOX_FACETS: [[u32; 3]; 12] = [
    [0, 1, 2],
    [2, 3, 0],
    [4, 3, 2],
    [2, 6, 4],
    [7, 6, 2],
    [2, 1, 7],
    [3, 4, 5],
    [5, 0, 3],
    [0, 5, 7],
    [7, 1, 0],
    [7, 5, 4],
    [4, 6, 7],
];

impl Mesh {
    /// Builds an axis-aligned box centered on the origin with the given full extents.
    ///
    /// The result always has 8 vertices and 12 triangles. Extents are expected to be positive;
    /// anything else still produces a mesh (possibly inside out or flat) and logs a warning.
    pub fn from_box(size: Vector3) -> Mesh {
        if !(size.x > 0.0 && size.y > 0.0 && size.z > 0.0) {
            log::warn!(
                "box extents should be positive, got ({}, {}, {})",
                size.x,
                size.y,
                size.z
            );
        }
        let x = size.x / 2.0;
        let y = size.y / 2.0;
        let z = size.z / 2.0;

        let points = vec![
            Vector3::new(-x, -y, -z),
            Vector3::new(x, -y, -z),
            Vector3::new(x, -y, z),
            Vector3::new(-x, -y, z),
            Vector3::new(-x, y, z),
            Vector3::new(-x, y, -z),
            Vector3::new(x, y, z),
            Vector3::new(x, y, -z),
        ];
        let facets = BOX_FACETS.iter().copied().map(Facet::from).collect();
        Mesh::assemble(points, facets)
    }
}
