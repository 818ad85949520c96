//! The node arena and the two-phase tick scheduler.
//!
//! A tick advances in two strictly separated phases:
//!
//! 1. **Staging** -- every pipe runs the flow solver against each of its
//!    endpoints, reading only pre-tick state and writing only staged deltas
//!    (Jacobi relaxation: no edge observes another edge's effect within the
//!    same tick, so results do not depend on enumeration order).
//! 2. **Commit** -- every node folds its staged delta into its quantity,
//!    floored at 0, and clears the delta.
//!
//! Collapsing the two phases into one in-place pass would turn the scheme
//! Gauss-Seidel and make results depend on pipe order; keep them separate.
//! The split also leaves staging embarrassingly parallel (reads of committed
//! state, writes to per-node accumulators) should that ever be needed.

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::hydraulics::{compute_flow, total_head};
use crate::id::{NodeId, Ticks};
use crate::material::MaterialRegistry;
use crate::node::{Node, NodeKind};

/// The physical simulation advances every this many raw ticks, decoupling
/// simulation cadence from the host's frame rate.
pub const MACRO_STEP_INTERVAL: Ticks = 10;

/// Events emitted by the commit pass on state transitions only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkEvent {
    /// A node's stored volume reached its capacity this commit.
    StorageFull { node: NodeId, tick: Ticks },
    /// A node holding quantity drained to empty this commit.
    StorageEmpty { node: NodeId, tick: Ticks },
}

/// A network of reservoirs, pipes, and generators.
///
/// Owns the flat node arena, the list of connector nodes, and the tick
/// counter -- nothing else. Built once at scenario setup and mutated every
/// tick for the lifetime of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    nodes: SlotMap<NodeId, Node>,
    /// Arena keys of every pipe, in insertion order. Staging iterates this.
    pipes: Vec<NodeId>,
    tick: Ticks,
}

impl Network {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            pipes: Vec::new(),
            tick: 0,
        }
    }

    /// Create a network with arena capacity reserved up front. Worth it for
    /// the million-node workloads.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(nodes),
            pipes: Vec::new(),
            tick: 0,
        }
    }

    /// Insert a node into the arena. Pipes are additionally tracked for the
    /// staging pass.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let is_pipe = node.is_pipe();
        let id = self.nodes.insert(node);
        if is_pipe {
            self.pipes.push(id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Iterate all nodes, pipes included.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Arena keys of every pipe.
    pub fn pipes(&self) -> &[NodeId] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Raw tick counter, incremented on every call to [`Network::tick`].
    pub fn current_tick(&self) -> Ticks {
        self.tick
    }

    /// Advance the simulation by one raw tick.
    ///
    /// On macro-tick boundaries (`counter % MACRO_STEP_INTERVAL == 0`) this
    /// runs the staging and commit phases and returns any transition events;
    /// all other ticks leave every node untouched.
    pub fn tick(&mut self, materials: &MaterialRegistry) -> Vec<NetworkEvent> {
        self.tick += 1;
        if self.tick % MACRO_STEP_INTERVAL != 0 {
            return Vec::new();
        }

        // Staging: each pipe acts as an intermediate node with its own
        // capacity between its endpoints.
        for &pipe_id in &self.pipes {
            let Some((from, to, pump_head)) = self
                .nodes
                .get(pipe_id)
                .and_then(Node::pipe_spec)
                .map(|spec| (spec.from, spec.to, spec.pump_head))
            else {
                continue;
            };
            compute_flow(&mut self.nodes, materials, from, Some(pipe_id), pump_head);
            compute_flow(&mut self.nodes, materials, Some(pipe_id), to, 0.0);
        }

        self.commit(materials)
    }

    /// Commit phase: apply staged deltas, clamp, clear, and report
    /// full/empty transitions.
    fn commit(&mut self, materials: &MaterialRegistry) -> Vec<NetworkEvent> {
        let mut events = Vec::new();
        for (id, node) in self.nodes.iter_mut() {
            let density = materials.dominant(&node.state.contents).density;
            let s = &mut node.state;
            let before = s.quantity;
            s.quantity = (s.quantity + s.staged).max(0.0);
            s.staged = 0.0;

            if density > 0.0 && s.max_volume > 0.0 {
                let capacity = s.max_volume * density;
                if s.quantity >= capacity && before < capacity {
                    events.push(NetworkEvent::StorageFull {
                        node: id,
                        tick: self.tick,
                    });
                }
            }
            if before > 0.0 && s.quantity == 0.0 {
                events.push(NetworkEvent::StorageEmpty {
                    node: id,
                    tick: self.tick,
                });
            }
        }
        events
    }

    /// Multi-line human-readable summary of committed state. Debug display
    /// only; the format carries no compatibility guarantee.
    pub fn status_report(&self, materials: &MaterialRegistry) -> String {
        use std::fmt::Write;

        let mut out = format!("Tick {}", self.tick);
        for (id, node) in self.nodes.iter() {
            match &node.kind {
                NodeKind::Pipe(spec) => {
                    let endpoint = |id: Option<NodeId>| {
                        id.and_then(|id| self.nodes.get(id))
                            .map(|n| n.label.clone())
                            .unwrap_or_else(|| "?".to_string())
                    };
                    let _ = write!(
                        out,
                        "\n  (Pipe {} -> {}) Vol: {:.1}",
                        endpoint(spec.from),
                        endpoint(spec.to),
                        node.state.quantity,
                    );
                }
                _ => {
                    let _ = write!(
                        out,
                        "\n  [{}] Vol: {:.1} Head: {:.2}",
                        node.label,
                        node.state.quantity,
                        total_head(self.nodes.get(id), materials),
                    );
                }
            }
        }
        out
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
