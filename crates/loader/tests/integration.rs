use std::path::{Path, PathBuf};

use meshweld::{load_mesh, load_mesh_scaled, LoadError, Vector3};

fn model_path<P: AsRef<Path>>(path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join(path)
}

#[test]
fn load_cube() {
    let path = model_path("res/cube/cube-bin.stl");
    let mesh = load_mesh(path.to_str().unwrap()).expect("failed to load cube");
    // 2 triangles per face x 6 faces, one vertex per triangle corner.
    assert_eq!(12, mesh.triangle_count());
    assert_eq!(36, mesh.vertex_count());
    assert_eq!(36 * 3, mesh.vertex_coords().len());
    assert_eq!(12 * 3, mesh.triangle_indices().len());
}

#[test]
fn load_cube_uri_scaled() {
    let path = model_path("res/cube/cube-ascii.stl");
    let uri = format!("file://{}", path.to_str().unwrap());
    let mesh = load_mesh_scaled(&uri, Vector3::new(0.5, 0.5, 0.5)).unwrap();
    let bounds = mesh.bounds().unwrap();
    assert_eq!(Vector3::new(10.0, 10.0, 10.0), bounds.max);
}

#[test]
fn load_missing() {
    let path = model_path("res/cube/missing.stl");
    assert!(matches!(
        load_mesh(path.to_str().unwrap()),
        Err(LoadError::Retrieval { .. })
    ));
}

#[test]
fn load_nested_gltf() {
    for file in ["res/gltf/nested.gltf", "res/gltf/nested.glb"] {
        let path = model_path(file);
        let mesh = load_mesh(path.to_str().unwrap()).unwrap();
        assert_eq!(3, mesh.triangle_count());
        assert_eq!(9, mesh.vertex_count());
        // The innermost node sits 3 units up, inside a rotated and translated parent.
        assert_eq!(Vector3::new(1.0, 2.0, 3.0), mesh.vertices()[6]);
    }
}
