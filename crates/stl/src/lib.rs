use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use meshweld_mesh::{Triangle, Vector3};
use meshweld_scene::{ImportError, PrimitiveMesh, Scene, SceneImporter};
use std::io::{Read, Seek};

const HEADER_LEN: usize = 80;
// Normal, three vertices and the attribute byte count.
const BINARY_TRIANGLE_LEN: usize = 50;
// Don't trust the triangle count in the header for preallocation.
const MAX_PREALLOC: usize = 1 << 16;

pub struct StlFile {
    pub triangles: Vec<Triangle>,
}

impl StlFile {
    /// Returns the number of triangles included in the STL file.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Converts the file into a single-node scene.
    ///
    /// STL files provide one point for every facet vertex, so the faces are simply an identity
    /// mapping (ex: face[i] == [3i, 3i + 1, 3i + 2]).
    pub fn into_scene(self) -> Scene {
        let positions: Vec<Vector3> = self
            .triangles
            .iter()
            .flat_map(|t| [t.p0, t.p1, t.p2])
            .collect();
        let faces = (0..self.triangles.len() as u32)
            .map(|i| vec![3 * i, 3 * i + 1, 3 * i + 2])
            .collect();
        Scene::single(PrimitiveMesh::new(positions, faces))
    }
}

fn read_vertex<T: Read>(f: &mut T) -> std::io::Result<Vector3> {
    Ok(Vector3 {
        x: f.read_f32::<LittleEndian>()? as f64,
        y: f.read_f32::<LittleEndian>()? as f64,
        z: f.read_f32::<LittleEndian>()? as f64,
    })
}

fn read_binary<T: Read + Seek>(f: &mut T) -> std::io::Result<StlFile> {
    // Binary files start with an 80 byte header. There is no defined structure for this
    // header but some implementations will stash some metadata in this header. For now
    // we'll just skip the header and load the geometry.
    f.seek(std::io::SeekFrom::Start(HEADER_LEN as u64))?;

    // Immediately following the header is an unsigned 32-bit integer that indicates the
    // number of triagles that follow.
    let n_triangles = f.read_u32::<LittleEndian>()? as usize;

    let mut triangles = Vec::<Triangle>::with_capacity(n_triangles.min(MAX_PREALLOC));
    for _ in 0..n_triangles {
        // Each triangle is specified by a normal vector followed by 3 verticies of the
        // triangle. While the normal vector may be included, it is generally expected
        // that verticies be listed in counter-clockwise order and so the normal vector
        // maybe specified as (0, 0, 0). Normals are recomputed from the geometry anyway.
        let _normal = read_vertex(f)?;
        triangles.push(Triangle {
            p0: read_vertex(f)?,
            p1: read_vertex(f)?,
            p2: read_vertex(f)?,
        });
        // After the triangle geometry there is a 2-byte unsigned integer called the
        // "attribute byte count". There is no standard structure of this field, but
        // some applications use this for color data.
        let _attribute_byte_count = f.read_u16::<LittleEndian>()?;
    }
    Ok(StlFile { triangles })
}

fn invalid_data(message: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, message)
}

fn read_coordinate<'a, I: Iterator<Item = &'a str>>(tokens: &mut I) -> std::io::Result<f64> {
    let token = tokens
        .next()
        .ok_or_else(|| invalid_data("unexpected end of vertex".to_string()))?;
    token
        .parse::<f64>()
        .map_err(|e| invalid_data(format!("invalid coordinate '{}': {}", token, e)))
}

fn read_ascii(text: &str) -> std::io::Result<StlFile> {
    // ASCII files are line oriented, one keyword at the start of each line:
    //
    //   solid name
    //     facet normal nx ny nz
    //       outer loop
    //         vertex x y z
    //         vertex x y z
    //         vertex x y z
    //       endloop
    //     endfacet
    //   endsolid name
    //
    // Only the vertices matter, the normal is recomputed from the geometry. The solid name
    // is free text and may itself look like a keyword.
    let mut triangles = Vec::new();
    let mut facet: Option<Vec<Vector3>> = None;
    let mut closed = false;
    for (n, line) in text.lines().enumerate() {
        let line_no = n + 1;
        let mut tokens = line.split_ascii_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "facet" => {
                if facet.is_some() {
                    return Err(invalid_data(format!(
                        "line {}: facet opened before endfacet",
                        line_no
                    )));
                }
                facet = Some(Vec::with_capacity(3));
            }
            "vertex" => {
                let Some(vertices) = facet.as_mut() else {
                    return Err(invalid_data(format!(
                        "line {}: vertex outside of a facet",
                        line_no
                    )));
                };
                vertices.push(Vector3 {
                    x: read_coordinate(&mut tokens)?,
                    y: read_coordinate(&mut tokens)?,
                    z: read_coordinate(&mut tokens)?,
                });
            }
            "endfacet" => match facet.take().as_deref() {
                Some(&[p0, p1, p2]) => triangles.push(Triangle { p0, p1, p2 }),
                Some(other) => {
                    return Err(invalid_data(format!(
                        "line {}: facet {} has {} vertices",
                        line_no,
                        triangles.len(),
                        other.len()
                    )))
                }
                None => {
                    return Err(invalid_data(format!(
                        "line {}: endfacet without facet",
                        line_no
                    )))
                }
            },
            "endsolid" => {
                closed = true;
                break;
            }
            _ => (),
        }
    }
    if facet.is_some() {
        return Err(invalid_data(format!(
            "unterminated facet after {} triangles",
            triangles.len()
        )));
    }
    if !closed {
        return Err(invalid_data("missing endsolid".to_string()));
    }
    Ok(StlFile { triangles })
}

/// Guesses whether `data` is a binary STL file.
///
/// Binary files may start with "solid" too, so a length that matches the triangle count in the
/// header wins over the ASCII keyword.
pub fn is_binary(data: &[u8]) -> bool {
    if data.len() >= HEADER_LEN + 4 {
        let n = LittleEndian::read_u32(&data[HEADER_LEN..HEADER_LEN + 4]) as usize;
        let expected = n
            .checked_mul(BINARY_TRIANGLE_LEN)
            .and_then(|len| len.checked_add(HEADER_LEN + 4));
        if expected == Some(data.len()) {
            return true;
        }
    }
    let start = data
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(data.len());
    !data[start..].starts_with(b"solid")
}

pub fn parse_stl(data: &[u8]) -> std::io::Result<StlFile> {
    if is_binary(data) {
        let mut c = std::io::Cursor::new(data);
        read_binary(&mut c)
    } else {
        let text = std::str::from_utf8(data).map_err(|e| invalid_data(e.to_string()))?;
        read_ascii(text)
    }
}

/// Imports binary and ASCII STL data as a single-node scene.
#[derive(Debug, Default, Clone, Copy)]
pub struct StlImporter;

impl SceneImporter for StlImporter {
    fn import(&self, data: &[u8], _hint: &str) -> Result<Scene, ImportError> {
        let stl = parse_stl(data).map_err(|source| ImportError::Parse {
            format: "stl",
            source: source.into(),
        })?;
        log::debug!("parsed {} STL triangles", stl.triangle_count());
        Ok(stl.into_scene())
    }
}
