//! Math type aliases and the polar conversion the chart is built on.

use std::f32::consts::FRAC_PI_2;

/// Alias for `euclid::default::Point2D<f32>`.
pub type Point = euclid::default::Point2D<f32>;

/// Alias for `euclid::default::Vector2D<f32>`.
pub type Vector = euclid::default::Vector2D<f32>;

/// An angle in radians.
pub type Angle = euclid::Angle<f32>;

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

/// Converts a position on a circle into cartesian coordinates.
///
/// Angles are measured clockwise with zero at twelve o'clock: a quarter turn
/// is subtracted before the trigonometric conversion, matching the additional
/// quarter-turn group rotation applied when the composed chart is rendered.
pub fn polar_to_cartesian(center: Point, radius: f32, angle: Angle) -> Point {
    let a = angle.radians - FRAC_PI_2;
    center + vector(radius * a.cos(), radius * a.sin())
}

#[cfg(test)]
fn assert_approx_eq(p: Point, expected: Point) {
    assert!(
        (p - expected).length() < 1e-4,
        "{:?} != {:?}",
        p,
        expected
    );
}

#[test]
fn polar_cardinal_points() {
    let center = point(100.0, 100.0);

    assert_approx_eq(
        polar_to_cartesian(center, 50.0, Angle::degrees(0.0)),
        point(100.0, 50.0),
    );
    assert_approx_eq(
        polar_to_cartesian(center, 50.0, Angle::degrees(90.0)),
        point(150.0, 100.0),
    );
    assert_approx_eq(
        polar_to_cartesian(center, 50.0, Angle::degrees(180.0)),
        point(100.0, 150.0),
    );
    assert_approx_eq(
        polar_to_cartesian(center, 50.0, Angle::degrees(270.0)),
        point(50.0, 100.0),
    );
}

#[test]
fn polar_full_turn() {
    let center = point(10.0, 10.0);
    assert_approx_eq(
        polar_to_cartesian(center, 5.0, Angle::degrees(360.0)),
        polar_to_cartesian(center, 5.0, Angle::degrees(0.0)),
    );
}
