//! Section layout: converts percentage-weighted sections into band arcs.

use crate::arc::ArcShape;
use crate::math::Angle;
use crate::{Dimensions, StrokeCap};

/// One section of the ring: a share of the circle and its color.
///
/// Sections are ordered; their order defines both the draw order and the
/// cumulative angle offset. Percentages conventionally sum to 100 but this
/// is not enforced, the total sweep simply differs from a full circle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Section<C> {
    pub percentage: f32,
    pub color: C,
}

impl<C> Section<C> {
    pub fn new(percentage: f32, color: C) -> Self {
        Section { percentage, color }
    }
}

/// The span a section covers before divider compensation.
///
/// Recorded only when round dividers are requested; the divider patch
/// synthesis is its only consumer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PaintedSection<C> {
    pub percentage: f32,
    pub color: C,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
}

/// The band arcs of a layout pass plus the painted-section ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionLayout<C> {
    pub arcs: Vec<ArcShape<C>>,
    pub painted: Vec<PaintedSection<C>>,
}

/// Whether gaps are carved between sections.
///
/// A single section has no seams, and a non-finite divider size means no
/// divider was configured at all.
fn should_show_dividers<C>(sections: &[Section<C>], divider_size: f32) -> bool {
    sections.len() > 1 && divider_size.is_finite()
}

/// Lays the sections out around the ring in order.
///
/// A cursor accumulates raw percentages and each start angle is derived from
/// the running total, so consecutive bands stay contiguous instead of
/// collecting per-section scaling drift. When dividers are shown, each band
/// is shifted forward by the divider size and shortened by the same amount:
/// the whole gap is carved from the band's leading side. A divider at least
/// as large as a section's span is passed through unclamped and leaves a
/// zero-length or reversed arc.
///
/// When `round_dividers` is set, the pre-compensation span of every section
/// is pushed onto the returned ledger.
pub fn layout_sections<C: Clone>(
    sections: &[Section<C>],
    dimensions: &Dimensions,
    round_dividers: bool,
) -> SectionLayout<C> {
    let divider_size = dimensions.divider_size;
    let show_dividers = should_show_dividers(sections, divider_size);

    let mut arcs = Vec::with_capacity(sections.len());
    let mut painted = Vec::new();

    let mut cursor = 0.0;
    for section in sections {
        let start = cursor / 100.0 * 360.0;
        let sweep = section.percentage / 100.0 * 360.0;
        cursor += section.percentage;

        if round_dividers {
            painted.push(PaintedSection {
                percentage: section.percentage,
                color: section.color.clone(),
                start_angle: Angle::degrees(start),
                sweep_angle: Angle::degrees(sweep),
            });
        }

        let (start, sweep) = if show_dividers {
            (start + divider_size, sweep - divider_size)
        } else {
            (start, sweep)
        };

        arcs.push(ArcShape::band(
            dimensions,
            section.color.clone(),
            StrokeCap::Butt,
            Angle::degrees(start),
            Angle::degrees(sweep),
        ));
    }

    SectionLayout { arcs, painted }
}

#[cfg(test)]
fn degrees<C>(arc: &ArcShape<C>) -> (f32, f32) {
    (arc.start_angle.to_degrees(), arc.sweep_angle.to_degrees())
}

#[cfg(test)]
fn assert_deg_eq(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < 1e-3, "{} != {}", actual, expected);
}

#[test]
fn single_full_section() {
    let dimensions = Dimensions::new(100.0, 80.0, 0.0);
    let layout = layout_sections(&[Section::new(100.0, "red")], &dimensions, false);

    assert_eq!(layout.arcs.len(), 1);
    let (start, sweep) = degrees(&layout.arcs[0]);
    assert_deg_eq(start, 0.0);
    assert_deg_eq(sweep, 360.0);
    assert!(layout.painted.is_empty());
}

#[test]
fn contiguous_sections() {
    let dimensions = Dimensions::new(100.0, 80.0, 0.0);
    let sections = [
        Section::new(25.0, "a"),
        Section::new(25.0, "b"),
        Section::new(50.0, "c"),
    ];
    let layout = layout_sections(&sections, &dimensions, false);

    let mut total = 0.0;
    let mut expected_start = 0.0;
    for arc in &layout.arcs {
        let (start, sweep) = degrees(arc);
        assert_deg_eq(start, expected_start);
        expected_start = start + sweep;
        total += sweep;
    }
    assert_deg_eq(total, 360.0);
}

#[test]
fn divider_compensation() {
    let dimensions = Dimensions::new(100.0, 80.0, 10.0);
    let sections = [Section::new(50.0, "a"), Section::new(50.0, "b")];
    let layout = layout_sections(&sections, &dimensions, false);

    let (start_a, sweep_a) = degrees(&layout.arcs[0]);
    let (start_b, sweep_b) = degrees(&layout.arcs[1]);
    assert_deg_eq(start_a, 10.0);
    assert_deg_eq(sweep_a, 170.0);
    assert_deg_eq(start_b, 190.0);
    assert_deg_eq(sweep_b, 170.0);
    assert_deg_eq(sweep_a + sweep_b, 360.0 - 2.0 * 10.0);
}

#[test]
fn single_section_shows_no_divider() {
    let dimensions = Dimensions::new(100.0, 80.0, 10.0);
    let layout = layout_sections(&[Section::new(100.0, "a")], &dimensions, false);

    let (start, sweep) = degrees(&layout.arcs[0]);
    assert_deg_eq(start, 0.0);
    assert_deg_eq(sweep, 360.0);
}

#[test]
fn nan_divider_disables_dividers() {
    let dimensions = Dimensions::new(100.0, 80.0, f32::NAN);
    let sections = [Section::new(50.0, "a"), Section::new(50.0, "b")];
    let layout = layout_sections(&sections, &dimensions, false);

    let (start, sweep) = degrees(&layout.arcs[0]);
    assert_deg_eq(start, 0.0);
    assert_deg_eq(sweep, 180.0);
}

#[test]
fn oversized_divider_leaves_negative_sweep() {
    // A 2% section spans 7.2°; a 10° divider shoots past its end. The sweep
    // goes negative and is passed through as-is.
    let dimensions = Dimensions::new(100.0, 80.0, 10.0);
    let sections = [Section::new(2.0, "a"), Section::new(98.0, "b")];
    let layout = layout_sections(&sections, &dimensions, false);

    let (_, sweep) = degrees(&layout.arcs[0]);
    assert!(sweep < 0.0);
}

#[test]
fn ledger_records_uncompensated_spans() {
    let dimensions = Dimensions::new(100.0, 80.0, 5.0);
    let sections = [Section::new(30.0, "a"), Section::new(70.0, "b")];
    let layout = layout_sections(&sections, &dimensions, true);

    assert_eq!(layout.painted.len(), 2);
    assert_deg_eq(layout.painted[0].start_angle.to_degrees(), 0.0);
    assert_deg_eq(layout.painted[0].sweep_angle.to_degrees(), 108.0);
    assert_deg_eq(layout.painted[1].start_angle.to_degrees(), 108.0);
    assert_deg_eq(layout.painted[1].sweep_angle.to_degrees(), 252.0);

    // The emitted arcs are compensated, the ledger is not.
    let (start, sweep) = degrees(&layout.arcs[0]);
    assert_deg_eq(start, 5.0);
    assert_deg_eq(sweep, 103.0);
}

#[test]
fn ledger_empty_without_round_dividers() {
    let dimensions = Dimensions::new(100.0, 80.0, 5.0);
    let sections = [Section::new(30.0, "a"), Section::new(70.0, "b")];
    let layout = layout_sections(&sections, &dimensions, false);

    assert!(layout.painted.is_empty());
}

#[test]
fn percentages_need_not_sum_to_100() {
    let dimensions = Dimensions::new(100.0, 80.0, 0.0);
    let sections = [Section::new(30.0, "a"), Section::new(30.0, "b")];
    let layout = layout_sections(&sections, &dimensions, false);

    let (start_b, sweep_b) = degrees(&layout.arcs[1]);
    assert_deg_eq(start_b, 108.0);
    assert_deg_eq(start_b + sweep_b, 216.0);
}
