//! Node variants stored in the network arena.
//!
//! A node is a common record (label, color, [`PhysicalState`]) plus a tagged
//! kind. Pipes double as edges: they carry non-owning `NodeId` back-references
//! to the two nodes they connect, so the same node may be referenced by any
//! number of pipes.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::state::PhysicalState;

/// Connectivity and geometry for a pipe node.
///
/// Endpoints are association references into the arena, never owned. `None`
/// marks an unresolved endpoint; that side of the pipe is inert (no head
/// contribution, no flow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeSpec {
    pub from: Option<NodeId>,
    pub to: Option<NodeId>,
    pub length: f64,
    pub radius: f64,
    /// Additional head applied on the `from` side, e.g. by an inline pump.
    #[serde(default)]
    pub pump_head: f64,
}

/// Variant tag carried by every node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Pure storage.
    Reservoir,
    /// Storage plus connectivity: behaves as an intermediate node with its
    /// own capacity between its two endpoints.
    Pipe(PipeSpec),
    /// Producer variant. Present in the model but inert in the solver; its
    /// production semantics are not defined yet.
    Generator,
}

/// A node in the network: reservoir, pipe, or generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Short display identifier, e.g. "A" or "R0042".
    pub label: String,
    /// RGB display color for the rendering layer.
    pub color: [u8; 3],
    pub state: PhysicalState,
    pub kind: NodeKind,
}

impl Node {
    /// Create a reservoir with the given state.
    pub fn reservoir(label: &str, state: PhysicalState) -> Self {
        Self {
            label: label.to_string(),
            color: [0, 0, 255],
            state,
            kind: NodeKind::Reservoir,
        }
    }

    /// Create a pipe between two (possibly unresolved) endpoints.
    ///
    /// Cross-sectional area and maximum volume are derived from the geometry:
    /// `area = pi * radius^2`, `max_volume = area * length`.
    pub fn pipe(label: &str, from: Option<NodeId>, to: Option<NodeId>, length: f64, radius: f64) -> Self {
        let area = PI * radius * radius;
        Self {
            label: label.to_string(),
            color: [128, 128, 128],
            state: PhysicalState {
                area,
                max_volume: area * length,
                ..Default::default()
            },
            kind: NodeKind::Pipe(PipeSpec {
                from,
                to,
                length,
                radius,
                pump_head: 0.0,
            }),
        }
    }

    /// Create a generator with the given state.
    pub fn generator(label: &str, state: PhysicalState) -> Self {
        Self {
            label: label.to_string(),
            color: [255, 128, 0],
            state,
            kind: NodeKind::Generator,
        }
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn is_pipe(&self) -> bool {
        matches!(self.kind, NodeKind::Pipe(_))
    }

    pub fn pipe_spec(&self) -> Option<&PipeSpec> {
        match &self.kind {
            NodeKind::Pipe(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn pipe_spec_mut(&mut self) -> Option<&mut PipeSpec> {
        match &mut self.kind {
            NodeKind::Pipe(spec) => Some(spec),
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
