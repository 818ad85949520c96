use serde::Deserialize;

/// Top-level scene definition loaded from `scene.ron`.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub connectors: Vec<ConnectorSpec>,
}

/// What kind of storage node a [`NodeSpec`] declares. Pipes are declared as
/// connectors, not nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKindSpec {
    #[default]
    Reservoir,
    Generator,
}

/// A storage node declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    /// Unique ID within this scene (used by connectors to reference nodes).
    pub id: String,
    #[serde(default)]
    pub kind: NodeKindSpec,
    /// Initial stored quantity, mass-equivalent units.
    #[serde(default)]
    pub quantity: f64,
    /// Volumetric capacity.
    #[serde(default = "default_max_volume")]
    pub max_volume: f64,
    /// Cross-sectional area.
    #[serde(default = "default_area")]
    pub area: f64,
    /// Base elevation, length units.
    #[serde(default)]
    pub elevation: f64,
    /// Material name from the registry. Empty means the reference fluid.
    #[serde(default)]
    pub material: Option<String>,
    /// RGB override for rendering.
    #[serde(default)]
    pub color: Option<[u8; 3]>,
    /// Marks a near-zero-volume split/merge point.
    #[serde(default)]
    pub junction: bool,
    /// 2D layout position for the entity layer. Unused by the simulation.
    #[serde(default)]
    pub position: Option<(f32, f32)>,
}

/// A pipe connecting two declared nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorSpec {
    /// Source scene node ID.
    pub from: String,
    /// Destination scene node ID.
    pub to: String,
    #[serde(default = "default_length")]
    pub length: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Extra head applied on the `from` side by an inline pump.
    #[serde(default)]
    pub pump_head: f64,
    /// Initial quantity already sitting in the pipe.
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_max_volume() -> f64 {
    1000.0
}

fn default_area() -> f64 {
    5.0
}

fn default_length() -> f64 {
    1.0
}

fn default_radius() -> f64 {
    0.5
}
