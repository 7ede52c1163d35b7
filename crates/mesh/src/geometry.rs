pub type Vector3 = cgmath::Vector3<f64>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f64; 3]);
static_assertions::assert_eq_align!(Vector3, f64);

/// The zero vector, used for the normals of degenerate geometry.
pub const ZERO: Vector3 = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 0.0,
};

#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        Self {
            p0: ZERO,
            p1: ZERO,
            p2: ZERO,
        }
    }
}

/// Maintains geometry for a single facet.
///
/// This type must be paired with a list of vertices. The points here are only indices into
/// another vector. We do this so we can store each vertex as 4 bytes instead of the 24 bytes
/// required to store the entire Vector3. This has further savings if a vertex is reused.
///
/// As a simple example, consider a simple geometry such as:
///
/// ```text
///    *-------*
///    |\     /|
///    | \   / |
///    |  \ /  |
///    |   *   |
///    |  / \  |
///    | /   \ |
///    |/     \|
///    *-------*
/// ```
///
/// Here we have 5 points and 4 facets. Storing every facet as a series of points takes
/// 3 doubles * 8b * 3 points * 4 facets = 288 bytes, while 5 shared points plus 4 index
/// triples take 120b + 48b = 168 bytes.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

impl Facet {
    pub const fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }
}

impl From<[u32; 3]> for Facet {
    fn from([p0, p1, p2]: [u32; 3]) -> Self {
        Self { p0, p1, p2 }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Bounds {
    pub min: Vector3,
    pub max: Vector3,
}

impl Bounds {
    /// Returns the bounds of `points`, or `None` if there are no points.
    pub fn of(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            Bounds {
                min: *first,
                max: *first,
            },
            |mut b, p| {
                b.min.x = b.min.x.min(p.x);
                b.min.y = b.min.y.min(p.y);
                b.min.z = b.min.z.min(p.z);
                b.max.x = b.max.x.max(p.x);
                b.max.y = b.max.y.max(p.y);
                b.max.z = b.max.z.max(p.z);
                b
            },
        ))
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_nothing() {
        assert_eq!(None, Bounds::of(&[]));
    }

    #[test]
    fn bounds_of_points() {
        let bounds = Bounds::of(&[
            Vector3::new(1.0, -2.0, 3.0),
            Vector3::new(-1.0, 5.0, 0.5),
            Vector3::new(0.0, 0.0, 7.0),
        ])
        .unwrap();
        assert_eq!(Vector3::new(-1.0, -2.0, 0.5), bounds.min);
        assert_eq!(Vector3::new(1.0, 5.0, 7.0), bounds.max);
        assert_eq!(Vector3::new(2.0, 7.0, 6.5), bounds.size());
    }
}
