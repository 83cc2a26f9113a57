use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::state::PlotState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render every non-empty layer as a filled point cloud.
pub fn scatter_plot(ui: &mut Ui, state: &PlotState) {
    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for layer in state.drawable_layers() {
                let points = Points::new(PlotPoints::from(layer.points.clone()))
                    .name(layer.category.to_string())
                    .color(layer.color)
                    .radius(layer.point_size)
                    .filled(true);

                plot_ui.points(points);
            }
        });
}
