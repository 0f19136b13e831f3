// ABOUTME: Replay harness entry point.
// ABOUTME: Loads a layout, applies a scripted event stream, and prints the final placements.

mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use stage_core::LayoutConfig;
use stage_layout::LayoutEngine;

fn usage() -> &'static str {
    "usage: stage-layout <events.json> [layout.toml]"
}

fn load_layout(path: Option<PathBuf>) -> Result<LayoutConfig> {
    match path {
        Some(path) => LayoutConfig::load(&path)
            .with_context(|| format!("Failed to load layout from {}", path.display())),
        None => {
            let config = LayoutConfig::load_or_default();
            tracing::info!("Using default layout with {} panels", config.panels.len());
            Ok(config)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting stage-layout");

    let mut args = std::env::args_os().skip(1);
    let script_path = PathBuf::from(args.next().context(usage())?);
    let layout_path = args.next().map(PathBuf::from);

    let config = load_layout(layout_path)?;
    let mut engine = LayoutEngine::from_config(&config)?;

    let json = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read events from {}", script_path.display()))?;
    let events = script::parse(&json).context("Failed to parse event script")?;

    let rejected = events.iter().filter(|event| !event.apply(&mut engine)).count();
    tracing::info!("Replayed {} events ({} ignored)", events.len(), rejected);

    if let Some((id, kind)) = engine.active() {
        tracing::warn!("Script ended with {:?} still active on {}", kind, id);
    }

    let snapshot = serde_json::to_string_pretty(&engine.snapshot())?;
    println!("{}", snapshot);

    Ok(())
}
