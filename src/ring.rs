//! Ring composition: background, section bands, divider patches and cleanup
//! circles, in draw order.

use crate::arc::ArcShape;
use crate::dividers::round_divider_patches;
use crate::layout::{layout_sections, Section, SectionLayout};
use crate::math::Angle;
use crate::{Dimensions, StrokeCap};

/// Band widths at or above this threshold skip the cleanup circles.
const CLEANUP_MAX_BAND_WIDTH: f32 = 100.0;

/// A ring chart description: the input sections plus the knobs of the
/// composition. [`Ring::compose`] turns it into drawable arcs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Ring<C> {
    pub sections: Vec<Section<C>>,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub background_color: C,
    pub stroke_cap: StrokeCap,
    /// Angular gap between sections, in degrees. Non-finite values disable
    /// dividers.
    pub divider_size: f32,
}

impl<C: Clone> Ring<C> {
    /// A full disc (inner radius zero) with butt caps and no dividers.
    pub fn new(sections: Vec<Section<C>>, outer_radius: f32, background_color: C) -> Self {
        Ring {
            sections,
            outer_radius,
            inner_radius: 0.0,
            background_color,
            stroke_cap: StrokeCap::Butt,
            divider_size: 0.0,
        }
    }

    pub fn with_inner_radius(mut self, inner_radius: f32) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    pub fn with_divider_size(mut self, divider_size: f32) -> Self {
        self.divider_size = divider_size;
        self
    }

    /// Requesting [`StrokeCap::Round`] turns on the fake rounded divider
    /// caps (and their cleanup circles) rather than a rounded band stroke.
    pub fn with_stroke_cap(mut self, stroke_cap: StrokeCap) -> Self {
        self.stroke_cap = stroke_cap;
        self
    }

    /// The derived radial dimensions of this ring.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.outer_radius, self.inner_radius, self.divider_size)
    }

    /// Composes the chart into arcs in draw order: background, section
    /// bands, divider patches, cleanup circles.
    ///
    /// Composition is a pure function of the ring description; identical
    /// inputs yield identical arc sequences. Angles in the output are
    /// logical (zero at twelve o'clock) and the host applies the quarter
    /// turn counter-clockwise around the chart center when rendering.
    pub fn compose(&self) -> Vec<ArcShape<C>> {
        let dimensions = self.dimensions();
        let round_dividers = self.stroke_cap == StrokeCap::Round;

        let mut arcs = vec![ArcShape::band(
            &dimensions,
            self.background_color.clone(),
            StrokeCap::Butt,
            Angle::degrees(0.0),
            Angle::degrees(360.0),
        )];

        let SectionLayout { arcs: bands, painted } =
            layout_sections(&self.sections, &dimensions, round_dividers);
        arcs.extend(bands);

        if round_dividers {
            arcs.extend(round_divider_patches(
                &painted,
                &dimensions,
                &self.background_color,
            ));

            // The patches overpaint past the band's radial edges. Two
            // background circles hugging the band cover the spill. Bands of
            // width 100 and up skip them.
            if dimensions.band_width < CLEANUP_MAX_BAND_WIDTH {
                let width = dimensions.band_width;
                arcs.push(ArcShape::circle(
                    dimensions.center(),
                    dimensions.inner_radius - width / 2.0,
                    self.background_color.clone(),
                    width,
                ));
                arcs.push(ArcShape::circle(
                    dimensions.center(),
                    dimensions.outer_radius + width / 2.0,
                    self.background_color.clone(),
                    width,
                ));
            }
        }

        arcs
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn assert_deg_eq(actual: Angle, expected: f32) {
    let actual = actual.to_degrees();
    assert!((actual - expected).abs() < 1e-3, "{} != {}", actual, expected);
}

#[test]
fn two_even_sections() {
    let ring = Ring::new(
        vec![Section::new(50.0, "red"), Section::new(50.0, "blue")],
        100.0,
        "#fff",
    )
    .with_inner_radius(80.0);
    let arcs = ring.compose();

    // Background plus one band per section; no patches, no cleanup circles.
    assert_eq!(arcs.len(), 3);

    assert_eq!(arcs[0].color, "#fff");
    assert_deg_eq(arcs[0].start_angle, 0.0);
    assert_deg_eq(arcs[0].sweep_angle, 360.0);

    assert_eq!(arcs[1].color, "red");
    assert_deg_eq(arcs[1].start_angle, 0.0);
    assert_deg_eq(arcs[1].sweep_angle, 180.0);

    assert_eq!(arcs[2].color, "blue");
    assert_deg_eq(arcs[2].start_angle, 180.0);
    assert_deg_eq(arcs[2].sweep_angle, 180.0);

    for arc in &arcs {
        assert_eq!(arc.center, point(100.0, 100.0));
        assert_eq!(arc.radius, 90.0);
        assert_eq!(arc.stroke_width, 20.0);
    }
}

#[test]
fn divided_sections() {
    let ring = Ring::new(
        vec![Section::new(30.0, "a"), Section::new(70.0, "b")],
        100.0,
        "#fff",
    )
    .with_inner_radius(80.0)
    .with_divider_size(5.0);
    let arcs = ring.compose();

    assert_eq!(arcs.len(), 3);
    assert_deg_eq(arcs[1].start_angle, 5.0);
    assert_deg_eq(arcs[1].sweep_angle, 103.0);
    assert_deg_eq(arcs[2].start_angle, 113.0);
    assert_deg_eq(arcs[2].sweep_angle, 247.0);
}

#[test]
fn round_dividers_add_patches_and_cleanup() {
    let ring = Ring::new(
        vec![Section::new(30.0, "a"), Section::new(70.0, "b")],
        100.0,
        "#fff",
    )
    .with_inner_radius(80.0)
    .with_divider_size(5.0)
    .with_stroke_cap(StrokeCap::Round);
    let arcs = ring.compose();

    // Background + 2 bands + 2 × 14 patches + 2 cleanup circles.
    assert_eq!(arcs.len(), 1 + 2 + 28 + 2);
    assert_eq!(arcs.iter().filter(|arc| arc.patch).count(), 28);

    let cleanup = &arcs[arcs.len() - 2..];
    assert_eq!(cleanup[0].radius, 70.0);
    assert_eq!(cleanup[1].radius, 110.0);
    for circle in cleanup {
        assert_eq!(circle.color, "#fff");
        assert_eq!(circle.stroke_width, 20.0);
        assert_deg_eq(circle.sweep_angle, 360.0);
    }
}

#[test]
fn wide_bands_skip_cleanup_circles() {
    let ring = Ring::new(
        vec![Section::new(50.0, "a"), Section::new(50.0, "b")],
        120.0,
        "#fff",
    )
    .with_stroke_cap(StrokeCap::Round);
    let arcs = ring.compose();

    // Band width is 120: patches are emitted, the cleanup circles are not.
    assert_eq!(arcs.len(), 1 + 2 + 2 * 4);
    assert!(arcs.last().unwrap().patch);
}

#[test]
fn empty_sections_yield_background_only() {
    let ring = Ring::new(Vec::<Section<&str>>::new(), 100.0, "#fff");
    let arcs = ring.compose();

    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[0].color, "#fff");
    assert_deg_eq(arcs[0].sweep_angle, 360.0);
}

#[test]
fn composition_is_idempotent() {
    let ring = Ring::new(
        vec![Section::new(30.0, "a"), Section::new(70.0, "b")],
        100.0,
        "#fff",
    )
    .with_inner_radius(80.0)
    .with_divider_size(5.0)
    .with_stroke_cap(StrokeCap::Round);

    assert_eq!(ring.compose(), ring.compose());
}
