use debris_field::collision::resolve_collision;
use debris_field::debris::{Debris, DebrisKind};
use debris_field::forces::{
    gravity_between, gravity_force, GravitySource, GRAVITY_CONSTANT, GRAVITY_MASS_RATIO,
    MAX_INTERACTION_DISTANCE, MIN_INTERACTION_DISTANCE,
};
use debris_field::math::Vector2;

use approx::assert_relative_eq;

fn debris_with(position: Vector2, mass: f32, size: f32, velocity: Vector2) -> Debris {
    let mut debris = Debris::new(position, DebrisKind::Metal);
    debris.set_mass(mass);
    debris.set_size(size);
    debris.set_velocity(velocity);
    debris
}

#[test]
fn test_gravity_in_range() {
    let source = GravitySource {
        position: Vector2::new(100.0, 0.0),
        mass: 50.0,
    };

    let force = gravity_force(Vector2::zero(), 10.0, &source);

    // F = G * m1 * m2 / r^2, pointing toward the source
    let expected = GRAVITY_CONSTANT * 10.0 * 50.0 / (100.0 * 100.0);
    assert_relative_eq!(force.x, expected, epsilon = 1.0e-4);
    assert_relative_eq!(force.y, 0.0);
}

#[test]
fn test_gravity_distance_cutoffs() {
    let heavy = |position| GravitySource {
        position,
        mass: 1000.0,
    };

    // Too close
    let close = gravity_force(
        Vector2::zero(),
        10.0,
        &heavy(Vector2::new(MIN_INTERACTION_DISTANCE * 0.5, 0.0)),
    );
    assert!(close.is_zero());

    // Too far
    let far = gravity_force(
        Vector2::zero(),
        10.0,
        &heavy(Vector2::new(MAX_INTERACTION_DISTANCE + 1.0, 0.0)),
    );
    assert!(far.is_zero());

    // Coincident positions never divide by zero
    let coincident = gravity_force(Vector2::zero(), 10.0, &heavy(Vector2::zero()));
    assert!(coincident.is_zero());
    assert!(!coincident.x.is_nan());
}

#[test]
fn test_gravity_mass_ratio_cutoff() {
    // The source must be at least GRAVITY_MASS_RATIO times heavier
    let light_source = GravitySource {
        position: Vector2::new(100.0, 0.0),
        mass: 10.0 * GRAVITY_MASS_RATIO - 0.1,
    };
    assert!(gravity_force(Vector2::zero(), 10.0, &light_source).is_zero());

    let heavy_source = GravitySource {
        position: Vector2::new(100.0, 0.0),
        mass: 10.0 * GRAVITY_MASS_RATIO,
    };
    assert!(!gravity_force(Vector2::zero(), 10.0, &heavy_source).is_zero());
}

#[test]
fn test_gravity_between_debris_is_asymmetric() {
    let light = debris_with(Vector2::zero(), 10.0, 8.0, Vector2::zero());
    let heavy = debris_with(Vector2::new(100.0, 0.0), 40.0, 20.0, Vector2::zero());

    // The heavy piece pulls the light one, never the reverse
    assert!(!gravity_between(&light, &heavy).is_zero());
    assert!(gravity_between(&heavy, &light).is_zero());
}

#[test]
fn test_collision_head_on() {
    // Two equal pieces meeting head-on with restitution 0.6 each
    let mut a = debris_with(Vector2::new(100.0, 100.0), 10.0, 8.0, Vector2::new(10.0, 0.0));
    let mut b = debris_with(
        Vector2::new(105.0, 100.0),
        10.0,
        8.0,
        Vector2::new(-10.0, 0.0),
    );

    assert!(resolve_collision(&mut a, &mut b));

    // j = -(1 + 0.6) * 20 / (1/10 + 1/10) = -160, dv = 16 each
    assert_relative_eq!(a.get_velocity().x, -6.0, epsilon = 1.0e-3);
    assert_relative_eq!(b.get_velocity().x, 6.0, epsilon = 1.0e-3);

    // Restitution < 1 dissipates energy
    let energy_after = a.kinetic_energy() + b.kinetic_energy();
    assert!(energy_after < 0.5 * 10.0 * 100.0 * 2.0);

    // Overlapping pieces were pushed apart
    let distance = a.get_position().distance(&b.get_position());
    assert!(distance > 5.0);
}

#[test]
fn test_collision_conserves_momentum() {
    let cases = [
        (2.0, Vector2::new(30.0, 0.0), 50.0, Vector2::new(-1.0, 0.0)),
        (10.0, Vector2::new(10.0, 5.0), 10.0, Vector2::new(-10.0, 5.0)),
        (7.5, Vector2::new(12.0, -3.0), 22.0, Vector2::new(-4.0, 8.0)),
    ];

    for (mass_a, velocity_a, mass_b, velocity_b) in cases {
        let mut a = debris_with(Vector2::zero(), mass_a, 8.0, velocity_a);
        let mut b = debris_with(Vector2::new(10.0, 0.0), mass_b, 8.0, velocity_b);

        let momentum_before = a.get_velocity() * mass_a + b.get_velocity() * mass_b;
        resolve_collision(&mut a, &mut b);
        let momentum_after = a.get_velocity() * mass_a + b.get_velocity() * mass_b;

        assert_relative_eq!(momentum_before.x, momentum_after.x, epsilon = 1.0e-2);
        assert_relative_eq!(momentum_before.y, momentum_after.y, epsilon = 1.0e-2);
    }
}

#[test]
fn test_collision_separating_is_noop() {
    let mut a = debris_with(Vector2::zero(), 10.0, 8.0, Vector2::new(-5.0, 0.0));
    let mut b = debris_with(Vector2::new(10.0, 0.0), 10.0, 8.0, Vector2::new(5.0, 0.0));

    assert!(!resolve_collision(&mut a, &mut b));
    assert_eq!(a.get_velocity(), Vector2::new(-5.0, 0.0));
    assert_eq!(b.get_velocity(), Vector2::new(5.0, 0.0));
}

#[test]
fn test_collision_coincident_centers_is_noop() {
    let position = Vector2::new(50.0, 50.0);
    let mut a = debris_with(position, 10.0, 8.0, Vector2::new(1.0, 0.0));
    let mut b = debris_with(position, 10.0, 8.0, Vector2::new(-1.0, 0.0));

    assert!(!resolve_collision(&mut a, &mut b));
    assert!(!a.get_velocity().x.is_nan());
    assert_eq!(a.get_velocity(), Vector2::new(1.0, 0.0));
}

#[test]
fn test_collision_oblique_keeps_tangential_velocity() {
    // b sits directly above a; only the y component should change
    let mut a = debris_with(Vector2::zero(), 10.0, 8.0, Vector2::new(3.0, 10.0));
    let mut b = debris_with(Vector2::new(0.0, 10.0), 10.0, 8.0, Vector2::new(0.0, -10.0));

    assert!(resolve_collision(&mut a, &mut b));
    assert_relative_eq!(a.get_velocity().x, 3.0);
    assert_relative_eq!(b.get_velocity().x, 0.0);
    assert!(a.get_velocity().y < 10.0);
}
