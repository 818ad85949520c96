//! Head calculation and the per-edge flow solver.
//!
//! Head is the single scalar driving flow: it folds elevation, stored-column
//! height, and gas pressure into one length-unit measure so the solver stays
//! material-agnostic. The solver writes staged deltas only; committed
//! quantities are never touched outside the network's commit pass.

use std::f64::consts::PI;

use slotmap::SlotMap;

use crate::id::NodeId;
use crate::material::{MaterialRegistry, MaterialType};
use crate::node::Node;

pub const GRAVITY: f64 = 9.81;
/// Fixed time step of one macro-tick, in seconds.
pub const TIME_STEP: f64 = 1.0 / 6.0;
/// Darcy-style wall friction factor.
pub const FRICTION_FACTOR: f64 = 0.02;
/// Lumped fitting-loss coefficient.
pub const MINOR_LOSS: f64 = 1.5;
/// Head differences below this stage no transfer, preventing jitter at
/// equilibrium.
pub const HEAD_EPSILON: f64 = 1e-5;
/// Nominal conduit radius used when neither endpoint is a pipe.
pub const FALLBACK_RADIUS: f64 = 0.5;
/// Nominal conduit length used when neither endpoint is a pipe.
pub const FALLBACK_LENGTH: f64 = 1.0;

/// Total head of a node, in length units. Total and never-failing: absent
/// nodes contribute 0, degenerate parameters fall back to the base elevation.
pub fn total_head(node: Option<&Node>, materials: &MaterialRegistry) -> f64 {
    let Some(node) = node else {
        return 0.0;
    };
    let s = &node.state;
    let material = materials.dominant(&s.contents);
    match material.kind {
        MaterialType::Fluid => {
            if material.density > 0.0 && s.area > 0.0 {
                s.base_elevation + s.quantity / (material.density * s.area)
            } else {
                s.base_elevation
            }
        }
        MaterialType::Gas => match material.gas_constant {
            Some(gas_constant) if gas_constant > 0.0 => {
                let pressure = if s.max_volume > 0.0 {
                    s.quantity * gas_constant / s.max_volume
                } else {
                    0.0
                };
                let reference_density = materials.reference_fluid().density;
                if reference_density > 0.0 {
                    s.base_elevation + pressure / (reference_density * GRAVITY)
                } else {
                    s.base_elevation
                }
            }
            _ => s.base_elevation,
        },
        MaterialType::Solid => s.base_elevation,
    }
}

/// Conduit geometry resolved for one solver invocation.
struct Conduit {
    length: f64,
    radius: f64,
    area: f64,
}

impl Default for Conduit {
    fn default() -> Self {
        Self {
            length: FALLBACK_LENGTH,
            radius: FALLBACK_RADIUS,
            area: PI * FALLBACK_RADIUS * FALLBACK_RADIUS,
        }
    }
}

fn conduit_of(node: Option<&Node>) -> Option<Conduit> {
    let node = node?;
    let spec = node.pipe_spec()?;
    Some(Conduit {
        length: spec.length,
        radius: spec.radius,
        area: node.state.area,
    })
}

/// Compute one directional transfer between `from` and `to` and accumulate it
/// into both staged deltas.
///
/// A simplified Bernoulli relation converts the head difference into a
/// velocity, conduit area and the fixed time step into a volume, and the
/// source's dominant density into mass. The amount is clamped to the source's
/// available quantity and the destination's free capacity. Missing endpoints
/// and degenerate densities make the call a no-op; partially-specified
/// networks are tolerated, never an error.
pub fn compute_flow(
    nodes: &mut SlotMap<NodeId, Node>,
    materials: &MaterialRegistry,
    from: Option<NodeId>,
    to: Option<NodeId>,
    pump_head: f64,
) {
    let (Some(from_id), Some(to_id)) = (from, to) else {
        return;
    };

    let delta_h = (total_head(nodes.get(from_id), materials) + pump_head)
        - total_head(nodes.get(to_id), materials);
    if delta_h.abs() < HEAD_EPSILON {
        return;
    }

    // Source is always the higher effective head.
    let (src_id, dst_id, delta_h) = if delta_h > 0.0 {
        (from_id, to_id, delta_h)
    } else {
        (to_id, from_id, -delta_h)
    };

    // Whichever endpoint is a pipe supplies the conduit geometry, the `from`
    // side winning when both are; reservoir-to-reservoir transfers use the
    // nominal conduit.
    let conduit = conduit_of(nodes.get(from_id))
        .or_else(|| conduit_of(nodes.get(to_id)))
        .unwrap_or_default();
    if conduit.radius <= 0.0 || conduit.area <= 0.0 {
        return;
    }

    let (density, available) = match nodes.get(src_id) {
        Some(src) => (
            materials.dominant(&src.state.contents).density,
            src.state.quantity,
        ),
        None => return,
    };
    if density <= 0.0 {
        return;
    }

    let friction_loss = FRICTION_FACTOR * (conduit.length / (2.0 * conduit.radius));
    let velocity = (2.0 * GRAVITY * delta_h / (1.0 + friction_loss + MINOR_LOSS)).sqrt();
    let flow_volume = velocity * conduit.area * TIME_STEP;

    let free_capacity = match nodes.get(dst_id) {
        Some(dst) => dst.state.free_volume(density) * density,
        None => return,
    };
    if free_capacity <= 0.0 {
        return;
    }

    let amount = (flow_volume * density).min(available).min(free_capacity);
    if amount <= 0.0 {
        return;
    }

    nodes[src_id].state.staged -= amount;
    nodes[dst_id].state.staged += amount;
}

// ===========================================================================
// Tests
// ===========================================================================
