use crate::debris::Debris;
use crate::math::EPSILON;

/// Resolves a circle-circle collision between two debris pieces with an
/// impulse along the contact normal.
///
/// The normal points from `a` to `b`. Coincident centers and pairs that
/// are already separating are left untouched. The impulse is applied
/// equal-and-opposite so momentum is conserved; restitution is the average
/// of the two materials. Overlapping pairs are additionally pushed apart
/// by half the overlap each to prevent persistent penetration.
///
/// Returns whether an impulse was applied.
pub fn resolve_collision(a: &mut Debris, b: &mut Debris) -> bool {
    let delta = b.get_position() - a.get_position();
    let distance = delta.length();

    // Degenerate: coincident centers, no usable normal
    if distance < EPSILON {
        return false;
    }

    let normal = delta / distance;

    let relative_velocity = a.get_velocity() - b.get_velocity();
    let vn = relative_velocity.dot(&normal);

    // Closing speed along the normal is negative when the pair is already
    // separating; resolving it would glue the objects together
    if vn < 0.0 {
        return false;
    }

    let restitution = (a.get_restitution() + b.get_restitution()) / 2.0;
    let inv_mass_sum = 1.0 / a.get_mass() + 1.0 / b.get_mass();
    let impulse = -(1.0 + restitution) * vn / inv_mass_sum;

    a.set_velocity(a.get_velocity() + normal * (impulse / a.get_mass()));
    b.set_velocity(b.get_velocity() - normal * (impulse / b.get_mass()));

    // Positional correction: push each half the overlap apart
    let overlap = (a.get_size() + b.get_size()) - distance;
    if overlap > 0.0 {
        let correction = normal * (overlap / 2.0);
        a.set_position(a.get_position() - correction);
        b.set_position(b.get_position() + correction);
    }

    true
}
