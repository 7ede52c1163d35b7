//! Normal computation for finished position and facet buffers.
//!
//! Degenerate input never produces NaN: a triangle with zero area, or a vertex whose incident
//! normals cancel (or that no facet references), gets the zero vector.

use cgmath::InnerSpace;

use crate::{geometry::ZERO, Facet, Vector3};

/// Normalizes `v`, or returns the zero vector if `v` has no usable length.
#[inline]
fn normalize_or_zero(v: Vector3) -> Vector3 {
    let len = v.magnitude();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        ZERO
    }
}

/// The unit normal of the triangle `p0, p1, p2` following counter-clockwise winding.
pub fn triangle_normal(p0: Vector3, p1: Vector3, p2: Vector3) -> Vector3 {
    let u = p1 - p0;
    let v = p2 - p0;
    normalize_or_zero(u.cross(v))
}

/// One unit normal per facet.
///
/// Every index in `facets` must be less than `points.len()`.
pub fn triangle_normals(points: &[Vector3], facets: &[Facet]) -> Vec<Vector3> {
    facets
        .iter()
        .map(|f| {
            triangle_normal(
                points[f.p0 as usize],
                points[f.p1 as usize],
                points[f.p2 as usize],
            )
        })
        .collect()
}

/// One normal per vertex: the normalized, unweighted sum of the normals of every facet that
/// references the vertex.
///
/// A facet that references the same vertex twice contributes its normal twice. `triangle_normals`
/// must hold one entry per facet.
pub fn vertex_normals(
    vertex_count: usize,
    facets: &[Facet],
    triangle_normals: &[Vector3],
) -> Vec<Vector3> {
    let mut sums = vec![ZERO; vertex_count];
    for (facet, normal) in facets.iter().zip(triangle_normals) {
        for index in facet.indices() {
            sums[index as usize] += *normal;
        }
    }
    sums.into_iter().map(normalize_or_zero).collect()
}
