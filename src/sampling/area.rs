use std::fmt;

use rand::Rng;

// ---------------------------------------------------------------------------
// Point2D
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ---------------------------------------------------------------------------
// SampleArea – axis-aligned rectangle candidates are drawn from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleArea {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SampleArea {
    /// Rectangle of `width` × `height` centred on `center`.
    pub fn from_center(center: Point2D, width: f64, height: f64) -> Self {
        SampleArea {
            min_x: center.x - width * 0.5,
            max_x: center.x + width * 0.5,
            min_y: center.y - height * 0.5,
            max_y: center.y + height * 0.5,
        }
    }

    /// Rectangle spanning the given bounds; swapped bounds are reordered.
    pub fn from_bounds(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        SampleArea {
            min_x: min_x.min(max_x),
            max_x: min_x.max(max_x),
            min_y: min_y.min(max_y),
            max_y: min_y.max(max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Half-open containment, matching the range candidates are drawn from.
    pub fn contains(&self, p: &Point2D) -> bool {
        p.x >= self.min_x && p.x < self.max_x && p.y >= self.min_y && p.y < self.max_y
    }

    /// Uniformly distributed point inside the area.
    ///
    /// A degenerate (zero-width or zero-height) side yields its single
    /// coordinate instead of panicking on an empty range.
    pub fn random_point(&self, rng: &mut impl Rng) -> Point2D {
        Point2D {
            x: uniform_in(self.min_x, self.max_x, rng),
            y: uniform_in(self.min_y, self.max_y, rng),
        }
    }
}

fn uniform_in(low: f64, high: f64, rng: &mut impl Rng) -> f64 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        low
    }
}

impl fmt::Display for SampleArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}..{}, y: {}..{}",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
