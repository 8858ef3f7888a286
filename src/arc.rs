//! The stroked arc primitive and its SVG-style path description.

use crate::math::{polar_to_cartesian, Angle, Point};
use crate::{Dimensions, StrokeCap};

/// Stroke width of a rounding patch per degree of sweep.
///
/// Only meaningful for the one-degree patches emitted by the divider
/// synthesis; applied to anything wider it produces absurd strokes.
const PATCH_WIDTH_PER_DEGREE: f32 = 5.0;

/// Flag parameters for arcs as described by the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    pub large_arc: bool,
    pub sweep: bool,
}

/// A two-point arc path description: move to `from`, arc to `to` with the
/// given radius and flags.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcPath {
    pub from: Point,
    pub to: Point,
    pub radius: f32,
    pub flags: ArcFlags,
}

/// Describes an arc of a circle as its two endpoints plus the SVG arc flags.
///
/// The path starts at the arc's *end* angle and sweeps back to the start
/// angle with a fixed counter-clockwise direction (sweep flag 0). Swapping
/// the two endpoints flips the visual direction of the stroke. `large_arc`
/// is set iff the sweep covers more than half the circle.
pub fn describe_arc(center: Point, radius: f32, start_angle: Angle, sweep_angle: Angle) -> ArcPath {
    let end_angle = start_angle + sweep_angle;
    ArcPath {
        from: polar_to_cartesian(center, radius, end_angle),
        to: polar_to_cartesian(center, radius, start_angle),
        radius,
        flags: ArcFlags {
            large_arc: sweep_angle.to_degrees().abs() > 180.0,
            sweep: false,
        },
    }
}

/// One drawable stroked arc of a composed chart.
///
/// The host surface draws these in sequence order, back to front, onto a
/// square canvas twice the ring's outer radius. Angles are logical (zero at
/// twelve o'clock); the composition as a whole is rotated a quarter turn
/// counter-clockwise around `center` at render time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcShape<C> {
    /// Center of the circle the arc lies on.
    pub center: Point,
    /// Radius of the stroked centerline.
    pub radius: f32,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
    pub color: C,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    /// Whether this arc is a rounding patch (stroke width derived from its
    /// sweep rather than from the band).
    pub patch: bool,
}

impl<C> ArcShape<C> {
    /// A band arc stroked along the ring's centerline at full band width.
    pub fn band(
        dimensions: &Dimensions,
        color: C,
        stroke_cap: StrokeCap,
        start_angle: Angle,
        sweep_angle: Angle,
    ) -> Self {
        ArcShape {
            center: dimensions.center(),
            radius: dimensions.centerline_radius(),
            start_angle,
            sweep_angle,
            color,
            stroke_width: dimensions.band_width,
            stroke_cap,
            patch: false,
        }
    }

    /// A rounding patch on the band centerline.
    ///
    /// The stroke width scales with the sweep, which only produces the
    /// intended dot for sweeps of about one degree.
    pub fn rounding_patch(
        dimensions: &Dimensions,
        color: C,
        start_angle: Angle,
        sweep_angle: Angle,
    ) -> Self {
        ArcShape {
            center: dimensions.center(),
            radius: dimensions.centerline_radius(),
            start_angle,
            sweep_angle,
            color,
            stroke_width: sweep_angle.to_degrees() * PATCH_WIDTH_PER_DEGREE,
            stroke_cap: StrokeCap::Butt,
            patch: true,
        }
    }

    /// A full circle stroked at an explicit radius. The background and the
    /// cleanup rings use raw radii instead of the band centerline.
    pub fn circle(center: Point, radius: f32, color: C, stroke_width: f32) -> Self {
        ArcShape {
            center,
            radius,
            start_angle: Angle::degrees(0.0),
            sweep_angle: Angle::degrees(360.0),
            color,
            stroke_width,
            stroke_cap: StrokeCap::Butt,
            patch: false,
        }
    }

    /// The SVG-style path description of this arc.
    pub fn path(&self) -> ArcPath {
        describe_arc(self.center, self.radius, self.start_angle, self.sweep_angle)
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn describe_reverses_endpoints() {
    let path = describe_arc(point(0.0, 0.0), 10.0, Angle::degrees(0.0), Angle::degrees(90.0));

    // The path begins at the end angle (90°, three o'clock) and finishes at
    // the start angle (0°, twelve o'clock).
    assert!((path.from - point(10.0, 0.0)).length() < 1e-4);
    assert!((path.to - point(0.0, -10.0)).length() < 1e-4);
    assert!(!path.flags.large_arc);
    assert!(!path.flags.sweep);
}

#[test]
fn large_arc_flag() {
    let center = point(0.0, 0.0);
    assert!(!describe_arc(center, 1.0, Angle::degrees(0.0), Angle::degrees(180.0)).flags.large_arc);
    assert!(describe_arc(center, 1.0, Angle::degrees(0.0), Angle::degrees(181.0)).flags.large_arc);
    assert!(describe_arc(center, 1.0, Angle::degrees(0.0), Angle::degrees(360.0)).flags.large_arc);
}

#[test]
fn band_geometry() {
    let dimensions = Dimensions::new(100.0, 80.0, 0.0);
    let arc = ArcShape::band(
        &dimensions,
        "red",
        StrokeCap::Butt,
        Angle::degrees(0.0),
        Angle::degrees(180.0),
    );

    assert_eq!(arc.center, point(100.0, 100.0));
    assert_eq!(arc.radius, 90.0);
    assert_eq!(arc.stroke_width, 20.0);
    assert!(!arc.patch);
}

#[test]
fn patch_width_from_sweep() {
    let dimensions = Dimensions::new(100.0, 80.0, 5.0);
    let patch = ArcShape::rounding_patch(
        &dimensions,
        "red",
        Angle::degrees(42.0),
        Angle::degrees(1.0),
    );

    assert!((patch.stroke_width - 5.0).abs() < 1e-4);
    assert_eq!(patch.stroke_cap, StrokeCap::Butt);
    assert!(patch.patch);
}
