use std::collections::{btree_map::Entry, BTreeMap};

use ordered_float::OrderedFloat;

use crate::{Facet, MeshError, Triangle, Vector3};

/// Lexicographic (x, y, z) key used to find coincident points.
///
/// `OrderedFloat` compares with IEEE equality for ordinary values, so `-0.0` and `0.0` land on
/// the same key, and it gives NaN a fixed place in the order so the map stays total.
type VertexKey = [OrderedFloat<f64>; 3];

fn vertex_key(p: &Vector3) -> VertexKey {
    [OrderedFloat(p.x), OrderedFloat(p.y), OrderedFloat(p.z)]
}

/// A distinct point together with the index it was assigned when first seen.
#[derive(Debug, Clone, Copy)]
struct VertexRecord {
    position: Vector3,
    index: u32,
}

/// A welded vertex table and the facets that index into it.
///
/// Produced from a triangle soup where every three consecutive points form one triangle. Points
/// that are exactly equal share a single entry in `points`; nothing is merged on approximate
/// equality, so points that differ only by floating point noise stay distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexIndex {
    /// Distinct points, ordered by the index assigned to them.
    pub points: Vec<Vector3>,
    /// One facet per input triple, in input order.
    pub facets: Vec<Facet>,
}

impl VertexIndex {
    /// Welds a triangle soup.
    ///
    /// Indices are assigned in order of first discovery: the first distinct point is `0`, the
    /// next new point `1`, and so on. A trailing partial triangle is dropped with a warning.
    pub fn weld(source: &[Vector3]) -> Result<Self, MeshError> {
        if source.len() % 3 != 0 {
            log::warn!(
                "the number of vertices to construct a mesh from ({}) is not divisible by 3, \
                 ignoring the trailing {}",
                source.len(),
                source.len() % 3
            );
        }
        let usable = source.len() - source.len() % 3;
        if usable < 3 {
            log::warn!(
                "cannot construct a mesh from {} vertices, at least 3 are required",
                source.len()
            );
            return Err(MeshError::InsufficientInput {
                count: source.len(),
            });
        }

        let mut lookup: BTreeMap<VertexKey, VertexRecord> = BTreeMap::new();
        let mut facets = Vec::with_capacity(usable / 3);
        for triangle in source[..usable].chunks_exact(3) {
            let mut indices = [0u32; 3];
            for (slot, point) in indices.iter_mut().zip(triangle) {
                let next = lookup.len();
                *slot = match lookup.entry(vertex_key(point)) {
                    Entry::Occupied(e) => e.get().index,
                    Entry::Vacant(e) => {
                        let index =
                            u32::try_from(next).map_err(|_| MeshError::TooManyVertices {
                                count: next + 1,
                                max: u32::MAX as usize,
                            })?;
                        e.insert(VertexRecord {
                            position: *point,
                            index,
                        });
                        index
                    }
                };
            }
            facets.push(Facet::from(indices));
        }

        // The map is ordered by position; emission must follow the assigned indices.
        let mut records: Vec<VertexRecord> = lookup.into_values().collect();
        records.sort_unstable_by_key(|r| r.index);
        let points: Vec<Vector3> = records.into_iter().map(|r| r.position).collect();

        log::debug!(
            "welded {} points into {} vertices and {} facets",
            usable,
            points.len(),
            facets.len()
        );
        Ok(VertexIndex { points, facets })
    }

    /// Welds a list of positional triangles.
    pub fn from_triangles(triangles: &[Triangle]) -> Result<Self, MeshError> {
        let points: Vec<Vector3> = triangles
            .iter()
            .flat_map(|t| [t.p0, t.p1, t.p2])
            .collect();
        Self::weld(&points)
    }
}
