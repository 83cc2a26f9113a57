use eframe::egui::Color32;
use palette::{named, Srgb};

use label_scatter::data::model::Category;

// ---------------------------------------------------------------------------
// Fixed category colours
// ---------------------------------------------------------------------------

/// Convert an 8-bit sRGB colour into egui's colour type.
pub fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Colour of a category's scatter layer: 1 → red, 2 → black, 3 → blue.
pub fn category_color(category: Category) -> Color32 {
    let named = match category {
        Category::One => named::RED,
        Category::Two => named::BLACK,
        Category::Three => named::BLUE,
    };
    to_color32(named)
}
