//! Command-line front end: parses a section list, composes the ring and
//! writes the SVG document.

mod parse;

use std::fs::File;
use std::io::{self, Write};
use std::process;

use annulus::{svg, Ring, StrokeCap};
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "annulus", version, about = "Ring chart SVG generator")]
struct Args {
    /// Comma-separated percentage:color sections, e.g. "50:red,50:blue".
    sections: String,

    /// Outer radius of the ring.
    #[arg(short, long, default_value_t = 100.0)]
    radius: f32,

    /// Inner radius of the ring (0 for a full disc).
    #[arg(long, default_value_t = 0.0)]
    inner_radius: f32,

    /// Background color.
    #[arg(long, default_value = "#fff")]
    background: String,

    /// Angular gap between sections, in degrees.
    #[arg(short, long, default_value_t = 0.0)]
    divider_size: f32,

    /// Fake rounded divider caps.
    #[arg(long)]
    round: bool,

    /// Output file (stdout when omitted).
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sections = match parse::parse_sections(&args.sections) {
        Ok(sections) => sections,
        Err(err) => {
            let _ = writeln!(io::stderr(), "{}", err);
            process::exit(1);
        }
    };
    debug!("parsed {} sections", sections.len());

    let stroke_cap = if args.round {
        StrokeCap::Round
    } else {
        StrokeCap::Butt
    };
    let ring = Ring::new(sections, args.radius, args.background)
        .with_inner_radius(args.inner_radius)
        .with_divider_size(args.divider_size)
        .with_stroke_cap(stroke_cap);
    debug!(
        "band width {}, divider size {}",
        ring.dimensions().band_width,
        ring.divider_size
    );

    match args.output {
        Some(path) => {
            let mut file = File::create(&path)?;
            svg::write_document(&mut file, &ring)?;
            info!("wrote {}", path);
        }
        None => {
            let stdout = io::stdout();
            svg::write_document(&mut stdout.lock(), &ring)?;
        }
    }

    Ok(())
}
