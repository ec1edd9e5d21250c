//! Headless heatmap renderer.
//!
//! # Responsibility
//! - Load a journal dataset, mount the engine once and write the settled
//!   scene as SVG.
//! - Keep stdout clean for the SVG; diagnostics go to the log file only.

use anyhow::{Context, Result};
use clap::Parser;
use diarygrid_core::{
    init_logging, load_entries_from_path, DetailMode, EngineConfig, HeatmapEngine, MetricMode,
    Variant,
};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Settled animations never run longer than this.
const SETTLE_MS: f64 = 60_000.0;

#[derive(Parser, Debug)]
#[command(name = "diarygrid", version, about = "Render a journal dataset as a calendar heatmap")]
struct Args {
    /// JSON array of journal entries
    dataset: PathBuf,
    /// entry-numbers | sentiment-grid | sentiment-detail | significance-detail | content-detail
    #[arg(long, default_value = "sentiment-detail")]
    variant: Variant,
    /// Fixed column count (overrides the variant's density)
    #[arg(long)]
    columns: Option<usize>,
    /// sentiment | significance
    #[arg(long)]
    metric: Option<MetricMode>,
    /// none | summary | content
    #[arg(long)]
    detail: Option<DetailMode>,
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,
    /// Zoom scale applied before rendering
    #[arg(long)]
    zoom: Option<f64>,
    /// Output file; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<String>,
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::preset(self.variant);
        if let Some(metric) = self.metric {
            config = config.with_metric_mode(metric);
        }
        if let Some(columns) = self.columns {
            config = config.with_columns(columns);
        }
        if let Some(detail) = self.detail {
            config.detail_mode = detail;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        init_logging(&args.log_level, log_dir).context("failed to start logging")?;
    }

    let entries = load_entries_from_path(&args.dataset)
        .with_context(|| format!("failed to load `{}`", args.dataset.display()))?;
    let entry_count = entries.len();

    let mut engine = HeatmapEngine::new(args.engine_config()).context("invalid engine config")?;
    engine
        .mount(entries, args.width, 0.0)
        .context("failed to mount heatmap")?;
    if let Some(scale) = args.zoom {
        engine.zoom_to(scale, 0.0);
    }
    engine.tick(SETTLE_MS);

    let svg = engine
        .surface()
        .map(|scene| scene.to_svg())
        .context("heatmap has no surface")?;

    match &args.output {
        Some(path) => fs::write(path, svg)
            .with_context(|| format!("failed to write `{}`", path.display()))?,
        None => print!("{svg}"),
    }

    info!(
        "event=render_cli module=cli status=ok entries={} lod={:?}",
        entry_count,
        engine.lod()
    );
    Ok(())
}
