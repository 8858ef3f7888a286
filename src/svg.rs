//! SVG serialization of a composed chart.
//!
//! No effort is put into making the writer performant or the output compact.
//! It emits one `<path>` element per arc inside a group rotated a quarter
//! turn counter-clockwise around the chart center, in a square viewport
//! twice the outer radius.

use std::io;

use crate::arc::ArcPath;
use crate::ring::Ring;

/// The SVG path data for an arc: a move-to followed by an elliptical arc
/// command.
pub fn path_data(path: &ArcPath) -> String {
    format!(
        "M {} {} A {} {} 0 {} {} {} {}",
        path.from.x,
        path.from.y,
        path.radius,
        path.radius,
        path.flags.large_arc as u32,
        path.flags.sweep as u32,
        path.to.x,
        path.to.y,
    )
}

/// Writes the composed ring as a standalone SVG document.
pub fn write_document<W, C>(output: &mut W, ring: &Ring<C>) -> io::Result<()>
where
    W: io::Write,
    C: AsRef<str> + Clone,
{
    let radius = ring.outer_radius;
    let size = radius * 2.0;
    writeln!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        size, size
    )?;
    writeln!(output, r#"  <g transform="rotate(-90 {} {})">"#, radius, radius)?;
    for arc in ring.compose() {
        writeln!(
            output,
            r#"    <path d="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}" fill="none"/>"#,
            path_data(&arc.path()),
            arc.color.as_ref(),
            arc.stroke_width,
            arc.stroke_cap.to_str(),
        )?;
    }
    writeln!(output, "  </g>")?;
    writeln!(output, "</svg>")
}

/// Builds the SVG document in memory.
pub fn document_string<C: AsRef<str> + Clone>(ring: &Ring<C>) -> String {
    let mut output = Vec::new();
    // Writing into a Vec cannot fail.
    write_document(&mut output, ring).unwrap();
    String::from_utf8(output).unwrap()
}

#[cfg(test)]
use crate::arc::describe_arc;
#[cfg(test)]
use crate::layout::Section;
#[cfg(test)]
use crate::math::{point, Angle};

#[test]
fn path_data_syntax() {
    let path = describe_arc(point(0.0, 0.0), 10.0, Angle::degrees(0.0), Angle::degrees(270.0));
    let data = path_data(&path);

    assert!(data.starts_with("M "));
    assert!(data.contains(" A 10 10 0 1 0 "), "{}", data);
}

#[test]
fn document_structure() {
    let ring = Ring::new(
        vec![Section::new(50.0, "red"), Section::new(50.0, "blue")],
        100.0,
        "#fff",
    )
    .with_inner_radius(80.0);
    let document = document_string(&ring);

    assert!(document.starts_with("<svg "));
    assert!(document.contains(r#"width="200" height="200""#));
    assert!(document.contains(r#"rotate(-90 100 100)"#));
    assert_eq!(document.matches("<path ").count(), 3);
    assert!(document.contains(r#"stroke="red""#));
    assert!(document.contains(r#"stroke-linecap="butt""#));
    assert!(document.ends_with("</svg>\n"));
}
