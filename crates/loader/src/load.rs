use meshweld_mesh::{Mesh, Vector3};
use meshweld_scene::{mesh_from_scene, FlattenConfig, SceneImporter};

use crate::{FileRetriever, FormatImporter, LoadError, Retriever};

/// Builds a mesh from an encoded buffer.
///
/// `hint` tells the importer which format to expect and names the data in diagnostics.
pub fn create_mesh_from_binary<I>(
    data: &[u8],
    hint: &str,
    config: &FlattenConfig,
    importer: &I,
) -> Result<Mesh, LoadError>
where
    I: SceneImporter + ?Sized,
{
    if data.is_empty() {
        log::warn!("cannot construct mesh from empty binary buffer");
        return Err(LoadError::EmptyPayload);
    }
    let scene = importer.import(data, hint).map_err(|source| {
        log::warn!("importer reports no scene in {}: {}", hint, source);
        LoadError::Import {
            hint: hint.to_string(),
            source,
        }
    })?;
    Ok(mesh_from_scene(&scene, config, hint)?)
}

/// Retrieves `resource` and builds a mesh from its contents.
pub fn create_mesh_from_resource<R, I>(
    resource: &str,
    config: &FlattenConfig,
    retriever: &R,
    importer: &I,
) -> Result<Mesh, LoadError>
where
    R: Retriever + ?Sized,
    I: SceneImporter + ?Sized,
{
    let data = retriever.get(resource).map_err(|source| {
        log::error!("failed to retrieve '{}': {}", resource, source);
        LoadError::Retrieval {
            resource: resource.to_string(),
            source,
        }
    })?;
    if data.is_empty() {
        log::warn!("retrieved empty mesh for resource '{}'", resource);
        return Err(LoadError::EmptyPayload);
    }
    create_mesh_from_binary(&data, resource, config, importer).map_err(|e| {
        log::warn!("no mesh produced from '{}'", resource);
        e
    })
}

/// Loads a mesh from a file path or `file://` URI without scaling.
pub fn load_mesh(resource: &str) -> Result<Mesh, LoadError> {
    load_mesh_with(resource, &FlattenConfig::default())
}

/// Loads a mesh from a file path or `file://` URI, scaling it per axis.
pub fn load_mesh_scaled(resource: &str, scale: Vector3) -> Result<Mesh, LoadError> {
    load_mesh_with(resource, &FlattenConfig::with_scale(scale))
}

pub fn load_mesh_with(resource: &str, config: &FlattenConfig) -> Result<Mesh, LoadError> {
    create_mesh_from_resource(resource, config, &FileRetriever, &FormatImporter)
}

#[cfg(test)]
mod tests {
    use meshweld_scene::{ImportError, Matrix4, PrimitiveMesh, Scene, SceneError, SceneNode};
    use meshweld_test_data::{STL_CUBE, STL_CUBE_ASCII};

    use super::*;
    use crate::MemoryRetriever;

    fn cube_retriever() -> MemoryRetriever {
        let mut retriever = MemoryRetriever::new();
        retriever.insert("mem://cube.stl", STL_CUBE.bytes);
        retriever.insert("mem://cube-ascii.STL", STL_CUBE_ASCII.bytes);
        retriever.insert("mem://empty.stl", Vec::new());
        retriever.insert("mem://cube.dae", STL_CUBE.bytes);
        retriever
    }

    #[test]
    fn resource_to_mesh() {
        let retriever = cube_retriever();
        let config = FlattenConfig::default();
        for resource in ["mem://cube.stl", "mem://cube-ascii.STL"] {
            let mesh =
                create_mesh_from_resource(resource, &config, &retriever, &FormatImporter).unwrap();
            assert_eq!(36, mesh.vertex_count());
            assert_eq!(12, mesh.triangle_count());
        }
    }

    #[test]
    fn resource_is_scaled() {
        let retriever = cube_retriever();
        let config = FlattenConfig::with_scale(Vector3::new(0.5, 2.0, -1.0));
        let mesh =
            create_mesh_from_resource("mem://cube.stl", &config, &retriever, &FormatImporter)
                .unwrap();
        let bounds = mesh.bounds().unwrap();
        assert_eq!(Vector3::new(0.0, 0.0, -20.0), bounds.min);
        assert_eq!(Vector3::new(10.0, 40.0, 0.0), bounds.max);
    }

    #[test]
    fn missing_resource() {
        let err = create_mesh_from_resource(
            "mem://nothing.stl",
            &FlattenConfig::default(),
            &cube_retriever(),
            &FormatImporter,
        )
        .err()
        .unwrap();
        assert!(matches!(err, LoadError::Retrieval { .. }));
    }

    #[test]
    fn empty_resource() {
        let err = create_mesh_from_resource(
            "mem://empty.stl",
            &FlattenConfig::default(),
            &cube_retriever(),
            &FormatImporter,
        )
        .err()
        .unwrap();
        assert!(matches!(err, LoadError::EmptyPayload));
    }

    #[test]
    fn unsupported_resource() {
        let err = create_mesh_from_resource(
            "mem://cube.dae",
            &FlattenConfig::default(),
            &cube_retriever(),
            &FormatImporter,
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            LoadError::Import {
                source: ImportError::UnsupportedFormat(_),
                ..
            }
        ));
    }

    #[test]
    fn empty_binary() {
        let err = create_mesh_from_binary(b"", "stl", &FlattenConfig::default(), &FormatImporter)
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::EmptyPayload));
    }

    #[test]
    fn custom_importer_scene() {
        let importer = |_: &[u8], _: &str| -> Result<Scene, ImportError> {
            let mesh = PrimitiveMesh::from_triangles(
                vec![
                    Vector3::new(1.0, 0.0, 0.0),
                    Vector3::new(0.0, 1.0, 0.0),
                    Vector3::new(0.0, 0.0, 0.0),
                ],
                &[[0, 1, 2]],
            );
            let root = SceneNode::new("root").with_child(
                SceneNode::new("child")
                    .with_transform(Matrix4::from_translation(Vector3::new(2.0, 0.0, 0.0)))
                    .with_mesh(0),
            );
            Ok(Scene::new(vec![mesh], root))
        };
        let mesh =
            create_mesh_from_binary(b"x", "custom", &FlattenConfig::default(), &importer).unwrap();
        assert_eq!(Vector3::new(3.0, 0.0, 0.0), mesh.vertices()[0]);
    }

    #[test]
    fn scene_errors_pass_through() {
        let importer = |_: &[u8], _: &str| -> Result<Scene, ImportError> {
            Ok(Scene::new(Vec::new(), SceneNode::new("root")))
        };
        let err = create_mesh_from_binary(b"x", "custom", &FlattenConfig::default(), &importer)
            .err()
            .unwrap();
        assert!(matches!(err, LoadError::Scene(SceneError::EmptyScene)));
    }
}
