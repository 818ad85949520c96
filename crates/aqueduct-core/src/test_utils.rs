//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::id::NodeId;
use crate::material::MaterialRegistry;
use crate::network::Network;
use crate::node::Node;
use crate::state::PhysicalState;

// ===========================================================================
// Node constructors
// ===========================================================================

/// A water-filled reservoir with the given physics.
pub fn water_reservoir(
    materials: &MaterialRegistry,
    label: &str,
    quantity: f64,
    max_volume: f64,
    area: f64,
    elevation: f64,
) -> Node {
    let water = materials
        .id_by_name("Water")
        .expect("stock registry has Water");
    Node::reservoir(
        label,
        PhysicalState {
            quantity,
            max_volume,
            area,
            base_elevation: elevation,
            contents: vec![water],
            ..Default::default()
        },
    )
}

/// Connect two existing nodes with a pipe and return the pipe's arena key.
pub fn connect(network: &mut Network, from: NodeId, to: NodeId, length: f64, radius: f64) -> NodeId {
    network.add_node(Node::pipe("pipe", Some(from), Some(to), length, radius))
}

// ===========================================================================
// Network builders
// ===========================================================================

/// Total committed quantity across the whole network.
pub fn total_quantity(network: &Network) -> f64 {
    network.nodes().map(|(_, node)| node.state.quantity).sum()
}

/// Build a chain of `n` reservoirs, each linked to the next by a pipe.
///
/// Start quantities and pipe geometry vary deterministically with the index
/// so neighbouring nodes never sit at equal head.
pub fn build_chain(materials: &MaterialRegistry, n: usize) -> Network {
    let mut network = Network::with_capacity(n * 2);
    let mut reservoirs = Vec::with_capacity(n);

    for i in 0..n {
        let capacity = 1000.0;
        // Staggered start volumes in [0, capacity), cycling with the index.
        let quantity = (i % 10) as f64 * 100.0;
        let label = format!("R{i:04}");
        reservoirs.push(network.add_node(water_reservoir(
            materials, &label, quantity, capacity, 5.0, 0.0,
        )));
    }

    for i in 0..n.saturating_sub(1) {
        let radius = 1.0 + (i % 4) as f64 * 0.25;
        let length = 0.5 + (i % 3) as f64 * 0.75;
        connect(&mut network, reservoirs[i], reservoirs[i + 1], length, radius);
    }

    network
}
