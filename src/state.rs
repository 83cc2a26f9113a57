use eframe::egui::Color32;

use label_scatter::data::filter::{partition, unclassified_count};
use label_scatter::data::model::{Category, Dataset, Row};

use crate::color::category_color;

/// Marker radius shared by every layer, in screen points.
pub const POINT_SIZE: f32 = 1.0;

// ---------------------------------------------------------------------------
// ScatterLayer – one category's points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayer {
    pub category: Category,
    pub color: Color32,
    pub point_size: f32,
    /// `[x, y]` pairs in file order.
    pub points: Vec<[f64; 2]>,
}

impl ScatterLayer {
    /// Column 0 becomes the horizontal coordinate, column 1 the vertical one.
    pub fn from_subset(category: Category, rows: &[Row]) -> Self {
        ScatterLayer {
            category,
            color: category_color(category),
            point_size: POINT_SIZE,
            points: rows.iter().map(Row::xy).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ---------------------------------------------------------------------------
// PlotState – everything the window draws, built once before it opens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PlotState {
    /// One layer per category, in category order. Empty layers are kept.
    pub layers: Vec<ScatterLayer>,
    /// Rows in the loaded file, including ones no layer shows.
    pub total_rows: usize,
}

impl PlotState {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let layers: Vec<ScatterLayer> = partition(dataset)
            .iter()
            .map(|(&category, rows)| ScatterLayer::from_subset(category, rows))
            .collect();

        for layer in &layers {
            log::debug!("{}: {} points", layer.category, layer.len());
        }
        let skipped = unclassified_count(dataset);
        if skipped > 0 {
            log::warn!("{skipped} rows have a label other than 1, 2 or 3 and are not plotted");
        }

        PlotState {
            layers,
            total_rows: dataset.len(),
        }
    }

    /// Layers that have at least one point.
    pub fn drawable_layers(&self) -> impl Iterator<Item = &ScatterLayer> {
        self.layers.iter().filter(|layer| !layer.is_empty())
    }

    pub fn plotted_points(&self) -> usize {
        self.layers.iter().map(ScatterLayer::len).sum()
    }
}
