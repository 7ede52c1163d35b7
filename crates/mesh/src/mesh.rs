use crate::{normals, Bounds, Facet, Triangle, Vector3};

/// A canonical indexed triangle mesh with per-facet and per-vertex normals.
///
/// A `Mesh` is only ever handed out fully built: every facet index is less than
/// [`vertex_count`](Mesh::vertex_count) and both normal arrays are populated. The buffers are
/// private, so the mesh cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    points: Vec<Vector3>,
    facets: Vec<Facet>,
    triangle_normals: Vec<Vector3>,
    vertex_normals: Vec<Vector3>,
}

// Meshes are plain data and may be handed to other threads.
static_assertions::assert_impl_all!(Mesh: Send, Sync);

impl Mesh {
    /// Takes ownership of the final buffers and computes normals.
    ///
    /// Callers must have checked that every index in `facets` is less than `points.len()`.
    pub(crate) fn assemble(points: Vec<Vector3>, facets: Vec<Facet>) -> Self {
        debug_assert!(facets
            .iter()
            .flat_map(Facet::indices)
            .all(|i| (i as usize) < points.len()));

        let triangle_normals = normals::triangle_normals(&points, &facets);
        let vertex_normals = normals::vertex_normals(points.len(), &facets, &triangle_normals);
        log::debug!(
            "assembled mesh with {} vertices and {} triangles",
            points.len(),
            facets.len()
        );
        Mesh {
            points,
            facets,
            triangle_normals,
            vertex_normals,
        }
    }

    /// Number of vertices (N).
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Number of triangles (M).
    pub fn triangle_count(&self) -> usize {
        self.facets.len()
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.points
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn triangle_normals(&self) -> &[Vector3] {
        &self.triangle_normals
    }

    pub fn vertex_normals(&self) -> &[Vector3] {
        &self.vertex_normals
    }

    /// Vertex positions as a flat `[x0, y0, z0, x1, ...]` slice of length `3 * N`.
    pub fn vertex_coords(&self) -> &[f64] {
        // Safety: Vector3 is repr(C) with the size and alignment of [f64; 3] (checked by the
        // static assertions in geometry.rs), so N contiguous Vector3 values are exactly 3N
        // contiguous f64 values.
        unsafe {
            std::slice::from_raw_parts(self.points.as_ptr() as *const f64, self.points.len() * 3)
        }
    }

    /// Facet indices as a flat `[a0, b0, c0, a1, ...]` vector of length `3 * M`.
    pub fn triangle_indices(&self) -> Vec<u32> {
        self.facets.iter().flat_map(Facet::indices).collect()
    }

    /// Iterates over the facets resolved to their positions.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets.iter().map(|f| Triangle {
            p0: self.points[f.p0 as usize],
            p1: self.points[f.p1 as usize],
            p2: self.points[f.p2 as usize],
        })
    }

    /// The axis-aligned bounds of the vertices, or `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.points)
    }
}
