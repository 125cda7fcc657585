//! CLI tool for gridview - prints a text rendering of one frame
//!
//! The grid holds the demo data set: 1000 x 1000 cells where every cell in
//! column `c` reads `c + 1`.
//!
//! Usage:
//!   gridview_cli                          # 1000x800 viewport at A1
//!   gridview_cli --size 600x300           # viewport size in pixels
//!   gridview_cli --scroll 250,440         # raw scroll position in pixels
//!   gridview_cli --select B2:D5           # selection to mark with `*`
//!   gridview_cli --config grid.json       # GridConfig as camelCase JSON

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use gridview::cell_ref::parse_cell_range;
use gridview::logging::ConsoleLayer;
use gridview::render::{RenderBackend, TextRenderer};
use gridview::{Engine, GridConfig, InputEvent, SelectionRect, SparseGrid};

const DEMO_ROWS: u32 = 1000;
const DEMO_COLS: u32 = 1000;

fn usage() -> ! {
    eprintln!(
        "Usage: gridview_cli [--size WxH] [--scroll LEFT,TOP] [--select A1:C3] [--config file.json]"
    );
    std::process::exit(1);
}

fn parse_pair(value: &str, sep: char) -> Option<(f64, f64)> {
    let (a, b) = value.split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

fn demo_grid() -> SparseGrid {
    SparseGrid::from_rows(
        (0..DEMO_ROWS).map(|_| (0..DEMO_COLS).map(|col| (u64::from(col) + 1).to_string())),
    )
}

fn main() {
    let stderr = ConsoleLayer::new(Level::WARN, |_level, line: &str| eprintln!("{line}"));
    let _ = tracing::subscriber::set_global_default(tracing_subscriber::registry().with(stderr));

    let args: Vec<String> = env::args().skip(1).collect();

    let mut size = (1000.0, 800.0);
    let mut scroll = None;
    let mut selection = None;
    let mut config = GridConfig::default();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let Some(value) = iter.next() else { usage() };
        match flag.as_str() {
            "--size" => size = parse_pair(value, 'x').unwrap_or_else(|| usage()),
            "--scroll" => scroll = Some(parse_pair(value, ',').unwrap_or_else(|| usage())),
            "--select" => {
                let ((x1, y1), (x2, y2)) = parse_cell_range(value).unwrap_or_else(|| usage());
                selection = Some(SelectionRect::new(x1, y1, x2, y2));
            }
            "--config" => {
                let text = match fs::read_to_string(value) {
                    Ok(t) => t,
                    Err(e) => {
                        eprintln!("Error reading {}: {}", value, e);
                        std::process::exit(1);
                    }
                };
                config = match serde_json::from_str(&text) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Error parsing config: {}", e);
                        std::process::exit(1);
                    }
                };
            }
            _ => usage(),
        }
    }

    let mut engine = match Engine::new(config, size.0, size.1) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let store = demo_grid();
    if let Some((left, top)) = scroll {
        engine.handle(InputEvent::Scroll { left, top }, &store);
    }
    engine.set_selection(selection);

    let frame = engine.frame(&store);
    let mut renderer = TextRenderer::new();
    if let Err(e) = renderer.render(&frame) {
        eprintln!("Error rendering: {}", e);
        std::process::exit(1);
    }
    io::stdout().write_all(renderer.output().as_bytes()).unwrap();
}
