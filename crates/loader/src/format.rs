use meshweld_gltf::GltfImporter;
use meshweld_scene::{ImportError, Scene, SceneImporter};
use meshweld_stl::StlImporter;

/// Reduces a resource name or extension to a lowercase format name.
///
/// The text after the last `.` is used if there is one. Any name mentioning `stl` (such as
/// `stlb`) is treated as `stl`.
pub fn normalize_hint(hint: &str) -> String {
    let ext = hint.rsplit_once('.').map_or(hint, |(_, ext)| ext);
    let ext = ext.to_ascii_lowercase();
    if ext.contains("stl") {
        "stl".to_string()
    } else {
        ext
    }
}

/// Picks an importer from the type hint: `stl`, `gltf` or `glb`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatImporter;

impl SceneImporter for FormatImporter {
    fn import(&self, data: &[u8], hint: &str) -> Result<Scene, ImportError> {
        match normalize_hint(hint).as_str() {
            "stl" => StlImporter.import(data, hint),
            "gltf" | "glb" => GltfImporter::default().import(data, hint),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}
