use crate::collision::DEFAULT_CELL_SIZE;

use bitflags::bitflags;

bitflags! {
    /// Feature toggles for the simulation. Toggling a flag only affects
    /// subsequent ticks, never retroactively.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldFeatures: u32 {
        /// Debris-to-debris gravitational attraction
        const GRAVITY = 0x01;

        /// Collision detection and impulse response
        const COLLISIONS = 0x02;

        /// Shattering on high-energy impacts
        const FRAGMENTATION = 0x04;

        /// Removal of expired debris at the end of each tick
        const EXPIRY_CLEANUP = 0x08;
    }
}

impl Default for FieldFeatures {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration parameters for a debris field
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Spatial grid cell size in world units
    pub cell_size: f32,

    /// Hard cap on simultaneously live debris
    pub max_debris: usize,

    /// Which simulation features are active
    pub features: FieldFeatures,

    /// Multiplied by the larger collider's size to get the kinetic energy
    /// above which a collision shatters debris
    pub fragmentation_energy_factor: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            max_debris: 500,
            features: FieldFeatures::default(),
            fragmentation_energy_factor: 1000.0,
        }
    }
}
