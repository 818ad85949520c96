//! Aqueduct Core -- hydraulic network simulation engine.
//!
//! Simulates mass transfer through a network of storage nodes (reservoirs)
//! connected by conduits (pipes), driven by head differences, material
//! density, and simple loss coefficients. Designed to stay flat and
//! cache-friendly at very large node counts (the reference workload is a
//! chain of two million nodes).
//!
//! # Two-Phase Tick Pipeline
//!
//! Each call to [`network::Network::tick`] advances the raw tick counter;
//! every [`network::MACRO_STEP_INTERVAL`]-th tick runs the physics:
//!
//! 1. **Staging** -- every pipe invokes the flow solver against each of its
//!    endpoints, computed entirely from pre-tick state and written only to
//!    staged deltas (Jacobi relaxation, order-independent).
//! 2. **Commit** -- every node folds its staged delta into its quantity,
//!    floored at 0, and resets the delta. Full/empty transitions are
//!    reported as [`network::NetworkEvent`]s.
//!
//! # Key Types
//!
//! - [`network::Network`] -- flat node arena plus the tick scheduler.
//! - [`node::Node`] -- tagged node variants: Reservoir, Pipe (with
//!   connectivity and geometry), Generator.
//! - [`state::PhysicalState`] -- quantity, capacity, geometry, staged delta.
//! - [`material::MaterialRegistry`] -- immutable material table with the
//!   reference-fluid fallback rule.
//! - [`hydraulics`] -- head calculation and the per-edge flow solver.

pub mod hydraulics;
pub mod id;
pub mod material;
pub mod network;
pub mod node;
pub mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
