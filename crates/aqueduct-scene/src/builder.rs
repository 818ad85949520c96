//! Builds a [`Network`] from a declarative scene.
//!
//! The builder is the adapter the level/entity layer uses to populate the
//! simulation; it owns no simulation logic. Endpoint resolution is strict:
//! a connector naming an undeclared node is a build-time error rather than a
//! silently inert pipe.

use std::collections::HashMap;

use aqueduct_core::id::{MaterialId, NodeId};
use aqueduct_core::material::MaterialRegistry;
use aqueduct_core::network::Network;
use aqueduct_core::node::Node;
use aqueduct_core::state::PhysicalState;

use crate::error::SceneError;
use crate::schema::{NodeKindSpec, SceneData};

/// A fully constructed network plus the scene-id map the host layer uses to
/// address nodes.
#[derive(Debug)]
pub struct BuiltScene {
    pub network: Network,
    /// Scene node id -> arena key, for entity placement and debug display.
    pub node_ids: HashMap<String, NodeId>,
}

fn resolve_contents(
    materials: &MaterialRegistry,
    name: Option<&str>,
) -> Result<Vec<MaterialId>, SceneError> {
    match name {
        Some(name) => {
            let id = materials
                .id_by_name(name)
                .ok_or_else(|| SceneError::MaterialNotFound {
                    name: name.to_string(),
                })?;
            Ok(vec![id])
        }
        None => Ok(Vec::new()),
    }
}

/// Build a network from scene data, resolving every association reference.
pub fn build_network(
    scene: &SceneData,
    materials: &MaterialRegistry,
) -> Result<BuiltScene, SceneError> {
    let mut network = Network::with_capacity(scene.nodes.len() + scene.connectors.len());
    let mut node_ids: HashMap<String, NodeId> = HashMap::with_capacity(scene.nodes.len());

    for spec in &scene.nodes {
        if node_ids.contains_key(&spec.id) {
            return Err(SceneError::DuplicateNode {
                id: spec.id.clone(),
            });
        }

        let state = PhysicalState {
            quantity: spec.quantity,
            max_volume: spec.max_volume,
            area: spec.area,
            base_elevation: spec.elevation,
            contents: resolve_contents(materials, spec.material.as_deref())?,
            is_junction: spec.junction,
            ..Default::default()
        };

        let mut node = match spec.kind {
            NodeKindSpec::Reservoir => Node::reservoir(&spec.id, state),
            NodeKindSpec::Generator => Node::generator(&spec.id, state),
        };
        if let Some(color) = spec.color {
            node = node.with_color(color);
        }

        node_ids.insert(spec.id.clone(), network.add_node(node));
    }

    for conn in &scene.connectors {
        let from = *node_ids
            .get(&conn.from)
            .ok_or_else(|| SceneError::NodeNotFound {
                id: conn.from.clone(),
            })?;
        let to = *node_ids
            .get(&conn.to)
            .ok_or_else(|| SceneError::NodeNotFound {
                id: conn.to.clone(),
            })?;

        let label = conn
            .label
            .clone()
            .unwrap_or_else(|| format!("{}->{}", conn.from, conn.to));
        let mut pipe = Node::pipe(&label, Some(from), Some(to), conn.length, conn.radius);
        if let Some(spec) = pipe.pipe_spec_mut() {
            spec.pump_head = conn.pump_head;
        }
        pipe.state.quantity = conn.quantity;
        pipe.state.contents = resolve_contents(materials, conn.material.as_deref())?;

        network.add_node(pipe);
    }

    Ok(BuiltScene { network, node_ids })
}

// ===========================================================================
// Tests
// ===========================================================================
