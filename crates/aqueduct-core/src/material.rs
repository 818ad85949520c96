//! Material definitions and the immutable material registry.
//!
//! Materials are purely descriptive: the registry is populated at startup and
//! never mutated afterwards. Every head or flow computation resolves a node's
//! dominant material through [`MaterialRegistry::dominant`], which substitutes
//! the reference fluid when a node holds nothing, so the math never operates
//! on an undefined material.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::id::MaterialId;

/// Broad phase classification of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialType {
    Solid,
    Fluid,
    Gas,
}

/// An immutable material definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Display name, also used for lookup by the scene builder.
    pub name: String,
    pub kind: MaterialType,
    /// Density in kg/m^3 (or arbitrary game units). Always >= 0; a fluid or
    /// gas with density 0 contributes no head rather than dividing by zero.
    pub density: f64,
    /// Ideal-gas-style constant for gases. `None` for other materials.
    pub gas_constant: Option<f64>,
    /// Empirical flow constant. Unused by the Bernoulli solver but carried
    /// for materials whose transport is rate-limited.
    pub flow_constant: Option<f64>,
}

impl MaterialDef {
    pub fn new(name: &str, kind: MaterialType, density: f64) -> Self {
        Self {
            name: name.to_string(),
            kind,
            density,
            gas_constant: None,
            flow_constant: None,
        }
    }
}

/// Immutable table of material definitions.
///
/// Two-phase lifecycle in the manner of the engine registries: register
/// everything at startup, then hand out shared references for the rest of the
/// process. There are no removal or mutation operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRegistry {
    materials: Vec<MaterialDef>,
    name_to_id: HashMap<String, MaterialId>,
    reference: MaterialId,
}

impl MaterialRegistry {
    /// Create an empty registry whose first registered material becomes the
    /// reference fluid.
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            name_to_id: HashMap::new(),
            reference: MaterialId(0),
        }
    }

    /// Create a registry pre-loaded with the stock materials. Water is the
    /// reference fluid.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MaterialDef {
            name: "Water".to_string(),
            kind: MaterialType::Fluid,
            density: 1000.0,
            gas_constant: None,
            flow_constant: Some(0.5),
        });
        registry.register(MaterialDef {
            name: "Steam".to_string(),
            kind: MaterialType::Gas,
            density: 0.6,
            gas_constant: Some(200.0),
            flow_constant: None,
        });
        registry.register(MaterialDef {
            name: "Coal".to_string(),
            kind: MaterialType::Solid,
            density: 1500.0,
            gas_constant: None,
            flow_constant: None,
        });
        registry
    }

    /// Register a material definition. Returns its ID.
    pub fn register(&mut self, def: MaterialDef) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.name_to_id.insert(def.name.clone(), id);
        self.materials.push(def);
        id
    }

    /// Look up a material by ID.
    pub fn get(&self, id: MaterialId) -> Option<&MaterialDef> {
        self.materials.get(id.0 as usize)
    }

    /// Look up a material ID by display name.
    pub fn id_by_name(&self, name: &str) -> Option<MaterialId> {
        self.name_to_id.get(name).copied()
    }

    /// The reference fluid, substituted wherever a material is undefined.
    pub fn reference_fluid(&self) -> &MaterialDef {
        &self.materials[self.reference.0 as usize]
    }

    /// Resolve the dominant material for a set of held contents: the first
    /// entry wins, and an empty set (or an unknown ID) resolves to the
    /// reference fluid.
    pub fn dominant(&self, contents: &[MaterialId]) -> &MaterialDef {
        contents
            .first()
            .and_then(|id| self.get(*id))
            .unwrap_or_else(|| self.reference_fluid())
    }
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_registry_contents() {
        let registry = MaterialRegistry::with_defaults();
        let water = registry.id_by_name("Water").unwrap();
        let steam = registry.id_by_name("Steam").unwrap();
        let coal = registry.id_by_name("Coal").unwrap();

        assert_eq!(registry.get(water).unwrap().kind, MaterialType::Fluid);
        assert_eq!(registry.get(water).unwrap().density, 1000.0);
        assert_eq!(registry.get(steam).unwrap().gas_constant, Some(200.0));
        assert_eq!(registry.get(coal).unwrap().kind, MaterialType::Solid);
    }

    #[test]
    fn reference_fluid_is_water() {
        let registry = MaterialRegistry::with_defaults();
        assert_eq!(registry.reference_fluid().name, "Water");
    }

    #[test]
    fn dominant_picks_first_entry() {
        let registry = MaterialRegistry::with_defaults();
        let steam = registry.id_by_name("Steam").unwrap();
        let coal = registry.id_by_name("Coal").unwrap();
        assert_eq!(registry.dominant(&[steam, coal]).name, "Steam");
    }

    #[test]
    fn dominant_falls_back_to_reference_fluid() {
        let registry = MaterialRegistry::with_defaults();
        assert_eq!(registry.dominant(&[]).name, "Water");
        // Unknown IDs resolve to the reference fluid rather than failing.
        assert_eq!(registry.dominant(&[MaterialId(999)]).name, "Water");
    }

    #[test]
    fn registered_materials_get_sequential_ids() {
        let mut registry = MaterialRegistry::new();
        let a = registry.register(MaterialDef::new("Brine", MaterialType::Fluid, 1025.0));
        let b = registry.register(MaterialDef::new("Slag", MaterialType::Solid, 2700.0));
        assert_eq!(a, MaterialId(0));
        assert_eq!(b, MaterialId(1));
        assert_eq!(registry.id_by_name("Brine"), Some(a));
    }
}
