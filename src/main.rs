mod app;
mod color;
mod data;
mod figure;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::NetPlotApp;
use eframe::egui;
use figure::Figure;

/// Input file, resolved against the current working directory.
const POINTS_FILE: &str = "points.csv";

fn main() -> Result<()> {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

fn run() -> Result<()> {
    let figure = load_figure(Path::new(POINTS_FILE))?;
    show_figure(figure)
}

/// Load `path` and build the comparison figure. No window exists yet, so
/// an error here means nothing is ever displayed.
fn load_figure(path: &Path) -> Result<Figure> {
    let dataset = data::loader::load_file(path)
        .with_context(|| format!("loading {}", path.display()))?;
    if dataset.is_empty() {
        log::warn!("{} has no data rows; plotting empty series", path.display());
    } else {
        log::info!("Loaded {} samples from {}", dataset.len(), path.display());
    }

    let figure = Figure::comparison(&dataset);
    log::debug!("Legend entries: {:?}", figure.legend_entries());
    Ok(figure)
}

/// Open the viewer window; blocks until it is closed.
fn show_figure(figure: Figure) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(figure.title.as_str())
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let app_name = figure.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(|_cc| Ok(Box::new(NetPlotApp::new(figure)))),
    )
    .map_err(|e| with_sources(&e).context("displaying figure"))
}

/// Rebuild `err` and its `source()` chain as an `anyhow` chain.
/// `eframe::Error` is not always `Send + Sync`, so it cannot be wrapped
/// directly.
fn with_sources(err: &(dyn std::error::Error + 'static)) -> anyhow::Error {
    let messages: Vec<String> = std::iter::successors(Some(err), |e| e.source())
        .map(|e| e.to_string())
        .collect();

    let mut chain = messages.iter().rev();
    let innermost = chain.next().cloned().unwrap_or_default();
    chain.fold(anyhow::anyhow!(innermost), |acc, msg| acc.context(msg.clone()))
}
