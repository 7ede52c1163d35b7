use meshweld_scene::{ImportError, SceneError};
use thiserror::Error;

use crate::RetrievalError;

/// Reasons a resource or buffer did not produce a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to retrieve '{resource}'")]
    Retrieval {
        resource: String,
        #[source]
        source: RetrievalError,
    },

    #[error("cannot construct mesh from empty data")]
    EmptyPayload,

    #[error("failed to import '{hint}'")]
    Import {
        hint: String,
        #[source]
        source: ImportError,
    },

    #[error(transparent)]
    Scene(#[from] SceneError),
}
