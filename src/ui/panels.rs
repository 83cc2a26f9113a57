use eframe::egui::{RichText, Ui};

use crate::state::PlotState;

// ---------------------------------------------------------------------------
// Top bar – row counts per layer
// ---------------------------------------------------------------------------

/// Summary line: rows loaded, points plotted, then one coloured count per layer.
pub fn status_bar(ui: &mut Ui, state: &PlotState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} rows loaded, {} plotted",
            state.total_rows,
            state.plotted_points()
        ));

        for layer in &state.layers {
            ui.separator();
            ui.label(
                RichText::new(format!("{}: {}", layer.category, layer.len())).color(layer.color),
            );
        }
    });
}
