use std::path::PathBuf;

/// Errors that can occur while building a network from a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A connector references a node id that was never declared.
    #[error("scene node '{id}' not found (referenced by connector)")]
    NodeNotFound { id: String },

    /// Two node declarations share an id.
    #[error("duplicate scene node id '{id}'")]
    DuplicateNode { id: String },

    /// A material name does not match anything in the registry.
    #[error("material '{name}' not found in registry")]
    MaterialNotFound { name: String },

    /// Failed to parse a scene file.
    #[error("parse error in {file:?}: {detail}")]
    Parse { file: Option<PathBuf>, detail: String },

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
