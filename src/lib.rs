#![deny(bare_trait_objects)]

//! Ring/donut chart arc geometry.
//!
//! # Overview
//!
//! This crate computes the geometry of a ring chart: a circle divided into
//! colored arc sections, with optional gaps between them. Composing a chart
//! yields an ordered list of [`ArcShape`] primitives (center, radius, start
//! and sweep angles, stroke attributes) that any vector-graphics surface can
//! draw back to front; the crate itself never draws. The [`svg`] module
//! serializes a composition into a standalone SVG document for hosts that
//! want one.
//!
//! Colors are opaque to the crate and carried through as a generic
//! parameter.
//!
//! # Example
//!
//! ```
//! use annulus::{Ring, Section};
//!
//! let ring = Ring::new(
//!     vec![Section::new(30.0, "#e44"), Section::new(70.0, "#49f")],
//!     100.0,
//!     "#fff",
//! )
//! .with_inner_radius(80.0);
//!
//! // One background circle plus one band per section.
//! let arcs = ring.compose();
//! assert_eq!(arcs.len(), 3);
//! ```

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
pub mod dividers;
pub mod layout;
pub mod math;
pub mod ring;
pub mod svg;

#[doc(inline)]
pub use crate::arc::{describe_arc, ArcFlags, ArcPath, ArcShape};
#[doc(inline)]
pub use crate::dividers::round_divider_patches;
#[doc(inline)]
pub use crate::layout::{layout_sections, PaintedSection, Section, SectionLayout};
#[doc(inline)]
pub use crate::math::{point, polar_to_cartesian, vector, Angle, Point, Vector};
#[doc(inline)]
pub use crate::ring::Ring;

/// Line cap applied by the host surface when stroking an arc.
///
/// Requesting `Round` on a ring does not round the band strokes themselves
/// (that would round their radial edges, not the seams); it turns on the
/// divider patch synthesis in [`dividers`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum StrokeCap {
    Butt,
    Round,
}

impl StrokeCap {
    /// The SVG `stroke-linecap` value.
    pub fn to_str(self) -> &'static str {
        match self {
            StrokeCap::Butt => "butt",
            StrokeCap::Round => "round",
        }
    }
}

impl Default for StrokeCap {
    fn default() -> Self {
        StrokeCap::Butt
    }
}

/// Radial dimensions of a composed ring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub outer_radius: f32,
    pub inner_radius: f32,
    /// Width of the visible band, `outer_radius - inner_radius`.
    pub band_width: f32,
    /// Angular gap between sections, in degrees.
    pub divider_size: f32,
}

impl Dimensions {
    pub fn new(outer_radius: f32, inner_radius: f32, divider_size: f32) -> Self {
        Dimensions {
            outer_radius,
            inner_radius,
            band_width: outer_radius - inner_radius,
            divider_size,
        }
    }

    /// Center of the chart in its square canvas of side `2 × outer_radius`.
    pub fn center(&self) -> Point {
        point(self.outer_radius, self.outer_radius)
    }

    /// Radius of the band's stroked centerline.
    pub fn centerline_radius(&self) -> f32 {
        self.outer_radius - self.band_width / 2.0
    }
}

#[test]
fn dimensions_derive_band_width() {
    let dimensions = Dimensions::new(100.0, 80.0, 0.0);
    assert_eq!(dimensions.band_width, 20.0);
    assert_eq!(dimensions.center(), point(100.0, 100.0));
    assert_eq!(dimensions.centerline_radius(), 90.0);
}
