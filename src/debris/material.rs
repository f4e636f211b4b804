use rand::Rng;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The material kind of a piece of debris, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum DebrisKind {
    /// Hull plating and structural scrap
    Metal,

    /// Frozen volatiles that slowly sublimate away
    Ice,

    /// Recognizable ship components with salvage value
    ShipPart,

    /// Heavy rock broken off a larger asteroid
    AsteroidChunk,
}

/// Kind-specific material data carried alongside the common physical fields
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum MaterialProfile {
    Metal,
    Ice {
        /// Fraction of size lost per second
        sublimation_rate: f32,
    },
    ShipPart {
        /// Credits recovered when salvaged
        salvage_value: f32,
    },
    AsteroidChunk,
}

impl MaterialProfile {
    /// Returns the kind this profile belongs to
    pub fn kind(&self) -> DebrisKind {
        match self {
            MaterialProfile::Metal => DebrisKind::Metal,
            MaterialProfile::Ice { .. } => DebrisKind::Ice,
            MaterialProfile::ShipPart { .. } => DebrisKind::ShipPart,
            MaterialProfile::AsteroidChunk => DebrisKind::AsteroidChunk,
        }
    }
}

impl DebrisKind {
    /// Samples a profile for this kind, rolling the kind-specific extras
    pub fn sample_profile<R: Rng>(&self, rng: &mut R) -> MaterialProfile {
        match self {
            DebrisKind::Metal => MaterialProfile::Metal,
            DebrisKind::Ice => MaterialProfile::Ice {
                sublimation_rate: rng.gen_range(0.01..0.05),
            },
            DebrisKind::ShipPart => MaterialProfile::ShipPart {
                salvage_value: rng.gen_range(10.0..50.0),
            },
            DebrisKind::AsteroidChunk => MaterialProfile::AsteroidChunk,
        }
    }

    /// Mass per unit of size (radius), so mass = density * size
    pub fn density(&self) -> f32 {
        match self {
            DebrisKind::Metal => 1.0,
            DebrisKind::Ice => 0.4,
            DebrisKind::ShipPart => 0.7,
            DebrisKind::AsteroidChunk => 2.0,
        }
    }

    /// The range of sizes (bounding-circle radii) this kind spawns at
    pub fn size_range(&self) -> (f32, f32) {
        match self {
            DebrisKind::Metal => (8.0, 16.0),
            DebrisKind::Ice => (6.0, 14.0),
            DebrisKind::ShipPart => (8.0, 18.0),
            DebrisKind::AsteroidChunk => (15.0, 30.0),
        }
    }

    /// Coefficient of restitution (bounciness), 0-1
    pub fn restitution(&self) -> f32 {
        match self {
            DebrisKind::Metal => 0.6,
            DebrisKind::Ice => 0.3,
            DebrisKind::ShipPart => 0.4,
            DebrisKind::AsteroidChunk => 0.2,
        }
    }

    /// Per-update velocity retention factor ("space drag", not time-scaled)
    pub fn friction(&self) -> f32 {
        match self {
            DebrisKind::Metal => 0.999,
            DebrisKind::Ice => 0.9995,
            DebrisKind::ShipPart => 0.998,
            DebrisKind::AsteroidChunk => 0.9998,
        }
    }

    /// Whether this kind responds to magnetic salvage equipment
    pub fn is_magnetic(&self) -> bool {
        matches!(self, DebrisKind::Metal | DebrisKind::ShipPart)
    }
}
