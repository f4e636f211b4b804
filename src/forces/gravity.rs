use crate::debris::Debris;
use crate::math::Vector2;

/// Gravitational constant for debris-to-debris attraction
pub const GRAVITY_CONSTANT: f32 = 50.0;

/// Below this separation gravity is cut off to avoid instability
pub const MIN_INTERACTION_DISTANCE: f32 = 5.0;

/// Beyond this separation gravity is cut off; debris gravity is a
/// short/medium-range effect, not universal
pub const MAX_INTERACTION_DISTANCE: f32 = 300.0;

/// A source must be at least this many times heavier than the body it
/// pulls on. Gameplay heuristic: same-size debris never attracts, which
/// keeps the relevant-neighbor set small.
pub const GRAVITY_MASS_RATIO: f32 = 2.0;

/// A copyable snapshot of a gravity-exerting neighbor.
///
/// The field hands these to [`Debris::update`] instead of references so no
/// borrow of the live arena outlives the query that produced it.
#[derive(Debug, Clone, Copy)]
pub struct GravitySource {
    /// The source position
    pub position: Vector2,

    /// The source mass
    pub mass: f32,
}

impl From<&Debris> for GravitySource {
    fn from(debris: &Debris) -> Self {
        Self {
            position: debris.get_position(),
            mass: debris.get_mass(),
        }
    }
}

/// Computes the gravitational force a source exerts on a body.
///
/// Returns the zero vector when the separation falls outside
/// [`MIN_INTERACTION_DISTANCE`, `MAX_INTERACTION_DISTANCE`] or when the
/// source is not at least [`GRAVITY_MASS_RATIO`] times heavier than the
/// body. Otherwise the magnitude is `G * m1 * m2 / r^2`, pointing toward
/// the source.
pub fn gravity_force(position: Vector2, mass: f32, source: &GravitySource) -> Vector2 {
    let delta = source.position - position;
    let distance = delta.length();

    if distance < MIN_INTERACTION_DISTANCE || distance > MAX_INTERACTION_DISTANCE {
        return Vector2::zero();
    }

    if source.mass < mass * GRAVITY_MASS_RATIO {
        return Vector2::zero();
    }

    let magnitude = GRAVITY_CONSTANT * mass * source.mass / (distance * distance);
    delta / distance * magnitude
}

/// Convenience wrapper: the force `b` exerts on `a`
pub fn gravity_between(a: &Debris, b: &Debris) -> Vector2 {
    gravity_force(a.get_position(), a.get_mass(), &GravitySource::from(b))
}
