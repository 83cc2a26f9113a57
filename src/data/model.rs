use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Row – one line of the input file
// ---------------------------------------------------------------------------

/// A single labelled point `(x, y, label)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Horizontal coordinate (column 0).
    pub x: f64,
    /// Vertical coordinate (column 1).
    pub y: f64,
    /// Categorical label (column 2), stored as read.
    pub label: f64,
}

impl Row {
    pub fn new(x: f64, y: f64, label: f64) -> Self {
        Row { x, y, label }
    }

    /// The `[x, y]` pair used for plotting.
    pub fn xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 3]> for Row {
    fn from([x, y, label]: [f64; 3]) -> Self {
        Row { x, y, label }
    }
}

// ---------------------------------------------------------------------------
// Category – the fixed set of labels that get a scatter layer
// ---------------------------------------------------------------------------

/// The three labels the viewer knows how to colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    One,
    Two,
    Three,
}

impl Category {
    /// All categories in drawing order.
    pub const ALL: [Category; 3] = [Category::One, Category::Two, Category::Three];

    /// The label value rows must carry to belong to this category.
    pub fn label(self) -> f64 {
        match self {
            Category::One => 1.0,
            Category::Two => 2.0,
            Category::Three => 3.0,
        }
    }

    /// Reverse of [`Category::label`]; `None` for labels without a layer.
    pub fn from_label(label: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "label {}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// All rows of the input file, in file order. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Dataset { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label(0.0), None);
        assert_eq!(Category::from_label(1.5), None);
        assert_eq!(Category::from_label(f64::NAN), None);
    }

    #[test]
    fn display_names_the_label() {
        assert_eq!(Category::Two.to_string(), "label 2");
    }

    #[test]
    fn row_from_array() {
        let row = Row::from([0.5, -1.0, 3.0]);
        assert_eq!(row, Row::new(0.5, -1.0, 3.0));
        assert_eq!(row.xy(), [0.5, -1.0]);
    }
}
