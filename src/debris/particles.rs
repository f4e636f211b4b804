use crate::math::Vector2;

/// How long a trail particle lives, in seconds
pub const TRAIL_PARTICLE_LIFETIME: f32 = 1.0;

/// How long a collision spark lives, in seconds
pub const SPARK_LIFETIME: f32 = 0.5;

/// Velocity retention applied to sparks each update
const SPARK_FRICTION: f32 = 0.9;

/// A fading point left behind by fast-moving debris.
///
/// Pure presentation state: physics never reads these.
#[derive(Debug, Clone, Copy)]
pub struct TrailParticle {
    position: Vector2,
    life: f32,
}

impl TrailParticle {
    /// Creates a new trail particle at the given position
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            life: TRAIL_PARTICLE_LIFETIME,
        }
    }

    /// Ages the particle
    pub fn update(&mut self, dt: f32) {
        self.life -= dt;
    }

    /// Returns whether the particle should still be drawn
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Returns the particle position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Remaining life as a 0-1 fraction, for renderer fading
    pub fn fade(&self) -> f32 {
        (self.life / TRAIL_PARTICLE_LIFETIME).clamp(0.0, 1.0)
    }
}

/// A short-lived spark emitted at a collision point
#[derive(Debug, Clone, Copy)]
pub struct SparkParticle {
    position: Vector2,
    velocity: Vector2,
    life: f32,
}

impl SparkParticle {
    /// Creates a new spark with its own small velocity
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            life: SPARK_LIFETIME,
        }
    }

    /// Moves and ages the spark
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.velocity *= SPARK_FRICTION;
        self.life -= dt;
    }

    /// Returns whether the spark should still be drawn
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Returns the spark position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Remaining life as a 0-1 fraction, for renderer fading
    pub fn fade(&self) -> f32 {
        (self.life / SPARK_LIFETIME).clamp(0.0, 1.0)
    }
}
