mod app;
mod color;
mod state;
mod ui;

use std::path::Path;

use anyhow::Result;
use app::ScatterApp;
use eframe::egui;
use label_scatter::data::loader;
use state::PlotState;

/// Input file, relative to the working directory.
const INPUT_PATH: &str = "./combined.txt";

fn main() -> Result<()> {
    env_logger::init();

    let dataset = loader::load_file(Path::new(INPUT_PATH))?;
    log::info!("Loaded {} rows from {INPUT_PATH}", dataset.len());
    let state = PlotState::from_dataset(&dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Label Scatter",
        options,
        Box::new(move |cc| {
            // Black points need a light background.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(ScatterApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("display failed: {e}"))
}
