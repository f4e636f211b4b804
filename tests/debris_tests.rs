use debris_field::debris::{
    Debris, DebrisKind, MaterialProfile, FRAGMENT_MIN_SIZE, TRAIL_SPEED_THRESHOLD,
};
use debris_field::math::Vector2;

use approx::assert_relative_eq;

#[test]
fn test_debris_kind_properties() {
    let metal = Debris::new(Vector2::new(100.0, 100.0), DebrisKind::Metal);
    assert_eq!(metal.kind(), DebrisKind::Metal);
    assert!(metal.get_mass() > 0.0);
    assert!(metal.is_magnetic());
    assert_eq!(metal.get_restitution(), 0.6);

    let ice = Debris::new(Vector2::new(200.0, 200.0), DebrisKind::Ice);
    assert_eq!(ice.kind(), DebrisKind::Ice);
    assert!(!ice.is_magnetic());
    assert!(matches!(
        ice.get_profile(),
        MaterialProfile::Ice { sublimation_rate } if sublimation_rate > 0.0
    ));
    // Ice is lighter than metal
    assert!(ice.get_mass() < metal.get_mass());

    let ship_part = Debris::new(Vector2::new(300.0, 300.0), DebrisKind::ShipPart);
    assert!(ship_part.is_magnetic());
    assert!(ship_part.get_salvage_value().is_some());
    assert!(metal.get_salvage_value().is_none());

    let asteroid = Debris::new(Vector2::new(400.0, 400.0), DebrisKind::AsteroidChunk);
    assert!(!asteroid.is_magnetic());
    // Asteroid chunks are the heaviest
    assert!(asteroid.get_mass() > metal.get_mass());
}

#[test]
fn test_debris_outline_shape() {
    let debris = Debris::new(Vector2::zero(), DebrisKind::Metal);
    let outline = debris.get_shape_outline();

    assert!(outline.len() >= 4 && outline.len() <= 8);
    for vertex in outline {
        let radius = vertex.length();
        assert!(radius >= 0.59 && radius <= 1.01);
    }
}

#[test]
fn test_debris_update_mechanics() {
    let mut debris = Debris::new(Vector2::new(100.0, 100.0), DebrisKind::Metal);
    debris.set_velocity(Vector2::new(5.0, 0.0));
    debris.set_angular_velocity(10.0);
    let original_position = debris.get_position();
    let original_rotation = debris.get_rotation();

    debris.update(1.0, &[]);

    assert!(debris.get_position() != original_position);
    assert!(debris.get_rotation() != original_rotation);
    assert!(debris.get_age() > 0.0);
}

#[test]
fn test_debris_friction_slows_velocity() {
    let mut debris = Debris::new(Vector2::zero(), DebrisKind::ShipPart);
    debris.set_velocity(Vector2::new(100.0, 0.0));

    for _ in 0..50 {
        debris.update(0.016, &[]);
    }

    assert!(debris.get_velocity().length() < 100.0);
}

#[test]
fn test_debris_expiry() {
    let mut debris = Debris::new(Vector2::new(100.0, 100.0), DebrisKind::Ice);
    assert!(!debris.is_expired());
    assert_eq!(debris.get_age(), 0.0);

    debris.set_age(debris.get_lifetime() + 1.0);
    assert!(debris.is_expired());
}

#[test]
fn test_ice_sublimation_shrinks_and_expires() {
    let mut ice = Debris::new(Vector2::new(200.0, 200.0), DebrisKind::Ice);
    let original_size = ice.get_size();

    for _ in 0..100 {
        ice.update(1.0, &[]);
    }
    assert!(ice.get_size() < original_size);

    // Keep sublimating until it disappears entirely
    for _ in 0..1000 {
        ice.update(1.0, &[]);
    }
    assert!(ice.is_expired());
}

#[test]
fn test_kinetic_energy() {
    let mut debris = Debris::new(Vector2::zero(), DebrisKind::Metal);
    debris.set_mass(10.0);
    debris.set_velocity(Vector2::new(3.0, 4.0));

    // 0.5 * 10 * 25
    assert_relative_eq!(debris.kinetic_energy(), 125.0);
}

#[test]
fn test_fragmentation() {
    let mut large = Debris::new(Vector2::new(100.0, 100.0), DebrisKind::ShipPart);
    large.set_size(30.0);
    large.set_velocity(Vector2::new(40.0, 0.0));

    let fragments = large.fragment(Some(3));
    assert_eq!(fragments.len(), 3);
    for fragment in &fragments {
        assert!(fragment.get_size() < large.get_size());
        assert!(fragment.get_mass() < large.get_mass());
        assert_eq!(fragment.kind(), large.kind());
        // Offset stays within the parent's bounding circle
        assert!(fragment.get_position().distance(&large.get_position()) <= large.get_size());
    }
}

#[test]
fn test_small_debris_never_fragments() {
    let mut small = Debris::new(Vector2::new(200.0, 200.0), DebrisKind::Ice);
    small.set_size(FRAGMENT_MIN_SIZE - 1.0);

    assert!(small.fragment(None).is_empty());
    assert!(small.fragment(Some(4)).is_empty());
}

#[test]
fn test_collide_with_requires_overlap() {
    let mut a = Debris::new(Vector2::zero(), DebrisKind::Metal);
    let mut b = Debris::new(Vector2::new(1000.0, 0.0), DebrisKind::Metal);
    let velocity_a = a.get_velocity();

    assert!(!a.collide_with(&mut b));
    assert_eq!(a.get_velocity(), velocity_a);
    assert!(a.get_collision_sparks().is_empty());
}

#[test]
fn test_collide_with_emits_sparks() {
    let mut a = Debris::new(Vector2::new(100.0, 100.0), DebrisKind::Metal);
    let mut b = Debris::new(Vector2::new(110.0, 100.0), DebrisKind::Ice);
    a.set_velocity(Vector2::new(10.0, 0.0));
    b.set_velocity(Vector2::new(-10.0, 0.0));

    assert!(a.collide_with(&mut b));
    assert!(!a.get_collision_sparks().is_empty());
    assert!(!b.get_collision_sparks().is_empty());
}

#[test]
fn test_particle_trail_generation() {
    let mut debris = Debris::new(Vector2::new(100.0, 100.0), DebrisKind::Metal);
    debris.set_velocity(Vector2::new(50.0, 0.0));
    assert!(debris.get_velocity().length() > TRAIL_SPEED_THRESHOLD);

    debris.update(0.1, &[]);
    assert!(!debris.get_particle_trail().is_empty());

    // Slow debris leaves no trail, and old particles fade out
    debris.set_velocity(Vector2::zero());
    for _ in 0..30 {
        debris.update(0.1, &[]);
    }
    assert!(debris.get_particle_trail().is_empty());
}

#[test]
fn test_external_acceleration_is_consumed() {
    let mut debris = Debris::new(Vector2::zero(), DebrisKind::Metal);
    debris.set_velocity(Vector2::zero());

    debris.apply_acceleration(Vector2::new(100.0, 0.0));
    debris.update(0.1, &[]);
    let boosted = debris.get_velocity().x;
    assert!(boosted > 0.0);

    // Accumulator is cleared; the next update only applies friction
    debris.update(0.1, &[]);
    assert!(debris.get_velocity().x <= boosted);
    assert!(debris.get_acceleration().is_zero());
}
