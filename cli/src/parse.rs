//! Parsing of the command-line section list.

use annulus::Section;
use thiserror::Error;

/// Errors produced while parsing a `percentage:color` section list.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Expected a percentage, got {src:?}.")]
    Number { src: String },
    #[error("Section {src:?} is missing a color.")]
    MissingColor { src: String },
    #[error("Expected at least one percentage:color section.")]
    Empty,
}

/// Parses a comma-separated list of `percentage:color` sections, for
/// example `"30:#e44,70:#49f"`. Empty entries are skipped, whitespace
/// around tokens is ignored.
pub fn parse_sections(src: &str) -> Result<Vec<Section<String>>, ParseError> {
    let mut sections = Vec::new();
    for entry in src.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let mut parts = entry.splitn(2, ':');
        let number = parts.next().unwrap_or("").trim();
        let color = match parts.next() {
            Some(color) if !color.trim().is_empty() => color.trim(),
            _ => {
                return Err(ParseError::MissingColor {
                    src: entry.to_string(),
                })
            }
        };

        let percentage: f32 = number.parse().map_err(|_| ParseError::Number {
            src: number.to_string(),
        })?;

        sections.push(Section::new(percentage, color.to_string()));
    }

    if sections.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(sections)
}

#[test]
fn parses_sections_in_order() {
    let sections = parse_sections("30:#e44, 70 : blue").unwrap();

    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].percentage, 30.0);
    assert_eq!(sections[0].color, "#e44");
    assert_eq!(sections[1].percentage, 70.0);
    assert_eq!(sections[1].color, "blue");
}

#[test]
fn skips_empty_entries() {
    let sections = parse_sections("50:red,,50:blue,").unwrap();
    assert_eq!(sections.len(), 2);
}

#[test]
fn rejects_bad_percentage() {
    assert_eq!(
        parse_sections("abc:red"),
        Err(ParseError::Number {
            src: "abc".to_string()
        })
    );
}

#[test]
fn rejects_missing_color() {
    assert_eq!(
        parse_sections("50"),
        Err(ParseError::MissingColor {
            src: "50".to_string()
        })
    );
    assert_eq!(
        parse_sections("50:"),
        Err(ParseError::MissingColor {
            src: "50:".to_string()
        })
    );
}

#[test]
fn rejects_empty_input() {
    assert_eq!(parse_sections(""), Err(ParseError::Empty));
    assert_eq!(parse_sections(" , "), Err(ParseError::Empty));
}
