//! Physical state attached to every node in the network.

use serde::{Deserialize, Serialize};

use crate::id::MaterialId;

/// Mutable physical state, owned exclusively by its node.
///
/// `quantity` is mass-equivalent; `max_volume` is volumetric. The two meet
/// only through a density conversion (see the flow solver). Invariants upheld
/// by the tick scheduler: `quantity >= 0` after every commit, and `staged`
/// is exactly 0 outside the staging phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalState {
    /// Current stored quantity, in mass-equivalent units.
    pub quantity: f64,
    /// Maximum volumetric capacity. 0 means the node can hold nothing.
    pub max_volume: f64,
    /// Cross-sectional area.
    pub area: f64,
    /// Elevation of the node's base, in length units.
    pub base_elevation: f64,
    /// Net quantity change accumulated during staging, applied at commit.
    #[serde(default)]
    pub staged: f64,
    /// Currently-held materials. The first entry is the dominant material;
    /// empty means the reference fluid.
    #[serde(default)]
    pub contents: Vec<MaterialId>,
    /// Marks a near-zero-volume node used purely to split or merge flow.
    #[serde(default)]
    pub is_junction: bool,
}

impl PhysicalState {
    /// The dominant material, if any is held.
    pub fn dominant(&self) -> Option<MaterialId> {
        self.contents.first().copied()
    }

    /// Fill fraction for rendering: `quantity / max_volume`, 0 when the node
    /// has no capacity.
    pub fn fill_fraction(&self) -> f64 {
        if self.max_volume > 0.0 {
            self.quantity / self.max_volume
        } else {
            0.0
        }
    }

    /// Stored volume under the given density, 0 when density is degenerate.
    pub fn stored_volume(&self, density: f64) -> f64 {
        if density > 0.0 {
            self.quantity / density
        } else {
            0.0
        }
    }

    /// Remaining volumetric headroom under the given density. May be
    /// negative when the node is over-filled.
    pub fn free_volume(&self, density: f64) -> f64 {
        self.max_volume - self.stored_volume(density)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_fraction_zero_capacity() {
        let state = PhysicalState {
            quantity: 500.0,
            max_volume: 0.0,
            ..Default::default()
        };
        assert_eq!(state.fill_fraction(), 0.0);
    }

    #[test]
    fn fill_fraction_partial() {
        let state = PhysicalState {
            quantity: 250.0,
            max_volume: 1000.0,
            ..Default::default()
        };
        assert_eq!(state.fill_fraction(), 0.25);
    }

    #[test]
    fn free_volume_converts_through_density() {
        let state = PhysicalState {
            quantity: 2000.0,
            max_volume: 10.0,
            ..Default::default()
        };
        // 2000 mass units at density 1000 occupy 2 volume units.
        assert_eq!(state.stored_volume(1000.0), 2.0);
        assert_eq!(state.free_volume(1000.0), 8.0);
        // Degenerate density contributes no stored volume.
        assert_eq!(state.stored_volume(0.0), 0.0);
    }

    #[test]
    fn default_state_is_empty_and_unstaged() {
        let state = PhysicalState::default();
        assert_eq!(state.quantity, 0.0);
        assert_eq!(state.staged, 0.0);
        assert!(state.contents.is_empty());
        assert!(!state.is_junction);
    }
}
