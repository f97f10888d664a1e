//! XFrame demo - lay out a decorated text view and dump the draw pass.
//!
//! Reads a JSON view description, paints it once into a recording canvas
//! and prints the layout plus every recorded canvas operation as JSON.
//!
//! ```text
//! RUST_LOG=debug xframe-demo demos/share_button.json --pretty
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use xframe_widget::{
    DrawOp, DrawableTextAttrs, DrawableTextView, LayoutResult, MonospaceMeasure, RecordingCanvas,
};

#[derive(Debug, Parser)]
#[command(name = "xframe-demo", about = "Lay out a decorated text view and dump the draw pass")]
struct Args {
    /// JSON view description.
    path: PathBuf,

    /// Advance of one text column, in pixels.
    #[arg(long, default_value_t = xframe_widget::measure::CHAR_WIDTH)]
    advance: f32,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    layout: LayoutResult,
    ops: &'a [DrawOp<String>],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::info!("Rendering {}", args.path.display());

    let attrs = DrawableTextAttrs::load(&args.path)
        .with_context(|| format!("Failed to load view description: {}", args.path.display()))?;

    // Drawables are plain resource names here; each name stands for itself.
    let mut view = DrawableTextView::from_attrs(&attrs, |name| Some(name.to_string()))
        .context("Failed to build view")?;

    let measure = MonospaceMeasure {
        advance: args.advance,
        ..MonospaceMeasure::default()
    };
    let mut canvas = RecordingCanvas::new();
    let layout = view.draw(&mut canvas, &measure);

    tracing::info!(
        dx = layout.translation.dx,
        dy = layout.translation.dy,
        decorations = layout.placements().count(),
        "Layout complete"
    );

    let report = Report {
        layout,
        ops: canvas.ops(),
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
