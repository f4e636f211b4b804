use approx::assert_relative_eq;
use debris_field::math::{approx_eq, approx_zero, clamp, lerp, to_degrees, to_radians, Vector2};
use std::f32::consts::PI;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 5.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0);

    // Cross product magnitude
    let cross = v1.cross(&v2);
    assert_eq!(cross, 1.0 * 5.0 - 2.0 * 4.0);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f32 + 4.0).sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);
}

#[test]
fn test_vector2_normalize_zero_is_safe() {
    let zero = Vector2::zero();
    let normalized = zero.normalize();
    assert!(normalized.is_zero());
    assert!(!normalized.x.is_nan());
}

#[test]
fn test_vector2_distance_and_lerp() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(3.0, 4.0);

    assert_relative_eq!(a.distance(&b), 5.0);
    assert_relative_eq!(a.distance_squared(&b), 25.0);

    let mid = a.lerp(&b, 0.5);
    assert_relative_eq!(mid.x, 1.5);
    assert_relative_eq!(mid.y, 2.0);
}

#[test]
fn test_vector2_angle_and_perpendicular() {
    let v = Vector2::unit_x();
    assert_relative_eq!(v.angle(), 0.0);

    let up = Vector2::unit_y();
    assert_relative_eq!(up.angle(), PI / 2.0);

    let perp = v.perpendicular();
    assert_relative_eq!(perp.dot(&v), 0.0);

    let from_angle = Vector2::from_angle(PI / 2.0);
    assert_relative_eq!(from_angle.x, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(from_angle.y, 1.0);
}

#[test]
fn test_vector2_compound_assignment() {
    let mut v = Vector2::new(1.0, 1.0);
    v += Vector2::new(2.0, 3.0);
    assert_eq!(v, Vector2::new(3.0, 4.0));

    v *= 2.0;
    assert_eq!(v, Vector2::new(6.0, 8.0));

    v -= Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(5.0, 7.0));

    v /= 5.0;
    assert_relative_eq!(v.x, 1.0);
}

#[test]
fn test_nalgebra_round_trip() {
    let v = Vector2::new(1.5, -2.5);
    let na = v.to_nalgebra();
    let back = Vector2::from_nalgebra(&na);
    assert_eq!(v, back);
}

#[test]
fn test_scalar_helpers() {
    assert!(approx_eq(1.0, 1.0 + 1.0e-8));
    assert!(approx_zero(1.0e-8));
    assert!(!approx_zero(0.1));

    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_relative_eq!(lerp(0.0, 10.0, 0.25), 2.5);

    assert_relative_eq!(to_radians(180.0), PI);
    assert_relative_eq!(to_degrees(PI), 180.0);
}
