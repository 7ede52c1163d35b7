use meshweld_mesh::Vector3;

/// Per-axis scale that leaves geometry unchanged.
pub const IDENTITY_SCALE: Vector3 = Vector3 {
    x: 1.0,
    y: 1.0,
    z: 1.0,
};

/// Maximum number of scene nodes visited before flattening gives up.
pub const DEFAULT_NODE_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenConfig {
    /// Multiplies every transformed vertex component-wise.
    pub scale: Vector3,
    pub node_limit: usize,
}

impl FlattenConfig {
    pub fn with_scale(scale: Vector3) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            scale: IDENTITY_SCALE,
            node_limit: DEFAULT_NODE_LIMIT,
        }
    }
}
