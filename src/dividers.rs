//! Round divider synthesis.
//!
//! A rounded stroke cap on a band arc rounds the radial edge of the stroke,
//! not the angular seam between two sections. To fake a rounded divider, a
//! cluster of thin one-degree arcs is painted across each seam, fading from
//! the section color into the background color.

use crate::arc::ArcShape;
use crate::layout::PaintedSection;
use crate::math::Angle;
use crate::Dimensions;

/// Sweep of a single rounding patch, in degrees.
const PATCH_SWEEP_DEGREES: f32 = 1.0;

/// Pull-back centering the patch cluster on the seam, in degrees.
///
/// Empirically tuned together with the one-degree patch sweep; changing
/// either shifts the fake cap off the gap.
fn divider_offset(divider_size: f32) -> f32 {
    divider_size * 2.0 + 6.0
}

/// Synthesizes the rounding patches for every seam of a layout.
///
/// For each painted section, `divider_size + 2` integer offsets are walked
/// and two one-degree patches emitted per offset: a background-colored one
/// trailing the seam and a section-colored one leading into it, both pulled
/// back by [`divider_offset`]. That is `2 × (divider_size + 2)` patches per
/// section. Layouts with fewer than two sections have no seams and produce
/// nothing, as does a non-finite divider size.
pub fn round_divider_patches<C: Clone>(
    painted: &[PaintedSection<C>],
    dimensions: &Dimensions,
    background: &C,
) -> Vec<ArcShape<C>> {
    let divider_size = dimensions.divider_size;
    if painted.len() < 2 || !divider_size.is_finite() {
        return Vec::new();
    }

    let offset = divider_offset(divider_size);
    let steps = divider_size.max(0.0) as i32 + 2;
    let sweep = Angle::degrees(PATCH_SWEEP_DEGREES);

    let mut patches = Vec::with_capacity(painted.len() * steps as usize * 2);
    for section in painted {
        let end = section.start_angle.to_degrees() + section.sweep_angle.to_degrees();
        for i in 0..steps {
            let i = i as f32;
            patches.push(ArcShape::rounding_patch(
                dimensions,
                background.clone(),
                Angle::degrees(end + divider_size + i - offset),
                sweep,
            ));
            patches.push(ArcShape::rounding_patch(
                dimensions,
                section.color.clone(),
                Angle::degrees(end - divider_size + i - offset),
                sweep,
            ));
        }
    }

    patches
}

#[cfg(test)]
use crate::layout::{layout_sections, Section};

#[cfg(test)]
fn two_section_ledger(divider_size: f32) -> (Dimensions, Vec<PaintedSection<&'static str>>) {
    let dimensions = Dimensions::new(100.0, 80.0, divider_size);
    let sections = [Section::new(30.0, "a"), Section::new(70.0, "b")];
    let layout = layout_sections(&sections, &dimensions, true);
    (dimensions, layout.painted)
}

#[test]
fn patch_count_per_section() {
    let (dimensions, painted) = two_section_ledger(5.0);
    let patches = round_divider_patches(&painted, &dimensions, &"#fff");

    // 2 × (5 + 2) patches per painted section.
    assert_eq!(patches.len(), 2 * 14);
    assert!(patches.iter().all(|patch| patch.patch));
}

#[test]
fn zero_divider_still_patches() {
    let (dimensions, painted) = two_section_ledger(0.0);
    let patches = round_divider_patches(&painted, &dimensions, &"#fff");

    assert_eq!(patches.len(), 2 * 4);
}

#[test]
fn patch_angles_straddle_the_seam() {
    let (dimensions, painted) = two_section_ledger(5.0);
    let patches = round_divider_patches(&painted, &dimensions, &"#fff");

    // First section ends at 108°, divider offset is 5 × 2 + 6 = 16.
    let background = patches[0].start_angle.to_degrees();
    let foreground = patches[1].start_angle.to_degrees();
    assert!((background - (108.0 + 5.0 - 16.0)).abs() < 1e-3);
    assert!((foreground - (108.0 - 5.0 - 16.0)).abs() < 1e-3);
    assert_eq!(patches[0].color, "#fff");
    assert_eq!(patches[1].color, "a");
}

#[test]
fn single_section_produces_no_patches() {
    let dimensions = Dimensions::new(100.0, 80.0, 5.0);
    let layout = layout_sections(&[Section::new(100.0, "a")], &dimensions, true);
    let patches = round_divider_patches(&layout.painted, &dimensions, &"#fff");

    assert!(patches.is_empty());
}

#[test]
fn non_finite_divider_produces_no_patches() {
    let (dimensions, painted) = {
        let dimensions = Dimensions::new(100.0, 80.0, f32::NAN);
        let sections = [Section::new(50.0, "a"), Section::new(50.0, "b")];
        (dimensions, layout_sections(&sections, &dimensions, true).painted)
    };
    let patches = round_divider_patches(&painted, &dimensions, &"#fff");

    assert!(patches.is_empty());
}
