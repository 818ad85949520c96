//! Scene loading and network construction for the aqueduct engine.
//!
//! The excluded game layer describes a level as a RON scene: a list of node
//! declarations plus a list of connectors. This crate parses that description
//! and produces a ready-to-tick [`aqueduct_core::network::Network`] with all
//! association references resolved.

pub mod builder;
pub mod error;
pub mod schema;

pub use builder::{build_network, BuiltScene};
pub use error::SceneError;
pub use schema::{ConnectorSpec, NodeKindSpec, NodeSpec, SceneData};

use std::path::Path;

/// Parse scene data from a RON string.
pub fn load_scene(content: &str) -> Result<SceneData, SceneError> {
    ron::from_str(content).map_err(|e| SceneError::Parse {
        file: None,
        detail: e.to_string(),
    })
}

/// Load scene data from a RON file on disk.
pub fn load_scene_file(path: &Path) -> Result<SceneData, SceneError> {
    let content = std::fs::read_to_string(path)?;
    ron::from_str(&content).map_err(|e| SceneError::Parse {
        file: Some(path.to_path_buf()),
        detail: e.to_string(),
    })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_scene() {
        let data = load_scene(r#"(name: "empty", nodes: [])"#).unwrap();
        assert_eq!(data.name, "empty");
        assert!(data.nodes.is_empty());
        assert!(data.connectors.is_empty());
    }

    #[test]
    fn parse_failure_reports_detail() {
        let err = load_scene("(name:").unwrap_err();
        match err {
            SceneError::Parse { file, detail } => {
                assert!(file.is_none());
                assert!(!detail.is_empty());
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }
}
