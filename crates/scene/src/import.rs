use thiserror::Error;

use crate::Scene;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no importer for format '{0}'")]
    UnsupportedFormat(String),

    #[error("failed to parse {format} data")]
    Parse {
        format: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Decodes raw bytes into a scene graph.
///
/// `hint` names the data format, usually a file extension such as `stl`.
pub trait SceneImporter {
    fn import(&self, data: &[u8], hint: &str) -> Result<Scene, ImportError>;
}

impl<F> SceneImporter for F
where
    F: Fn(&[u8], &str) -> Result<Scene, ImportError>,
{
    fn import(&self, data: &[u8], hint: &str) -> Result<Scene, ImportError> {
        self(data, hint)
    }
}
