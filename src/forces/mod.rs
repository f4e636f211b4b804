mod gravity;

pub use self::gravity::{
    gravity_between, gravity_force, GravitySource, GRAVITY_CONSTANT, GRAVITY_MASS_RATIO,
    MAX_INTERACTION_DISTANCE, MIN_INTERACTION_DISTANCE,
};
