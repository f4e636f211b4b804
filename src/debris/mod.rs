mod debris;
mod material;
mod particles;

pub use self::debris::{
    Debris, FRAGMENT_MIN_SIZE, MIN_DEBRIS_SIZE, TRAIL_SPEED_THRESHOLD,
};
pub use self::material::{DebrisKind, MaterialProfile};
pub use self::particles::{SparkParticle, TrailParticle, SPARK_LIFETIME, TRAIL_PARTICLE_LIFETIME};
