use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Identifies a node (reservoir, pipe, or generator) in the network arena.
    pub struct NodeId;
}

/// Identifies a material in the registry. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// Ticks are the atomic unit of simulation time.
pub type Ticks = u64;
