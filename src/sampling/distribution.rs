use super::area::Point2D;

/// A 2D acceptance profile: the probability that a candidate point is kept.
///
/// Implementations return values in `[0, 1]`.
pub trait Distribution {
    fn probability_at(&self, p: &Point2D) -> f64;
}

// ---------------------------------------------------------------------------
// Centred: exponential falloff from a point
// ---------------------------------------------------------------------------

/// `exp(-d / sigma)` where `d` is the distance to `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenteredDistribution {
    pub center: Point2D,
    pub sigma: f64,
}

impl CenteredDistribution {
    pub fn new(center: Point2D, sigma: f64) -> Self {
        CenteredDistribution { center, sigma }
    }
}

impl Default for CenteredDistribution {
    fn default() -> Self {
        Self::new(Point2D::default(), 1.0)
    }
}

impl Distribution for CenteredDistribution {
    fn probability_at(&self, p: &Point2D) -> f64 {
        (-p.distance_to(&self.center) / self.sigma).exp()
    }
}

// ---------------------------------------------------------------------------
// Ring: gaussian band around a circle
// ---------------------------------------------------------------------------

/// `exp(-((d - radius) / radial_sigma)^2)` where `d` is the distance to `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingDistribution {
    pub center: Point2D,
    pub radius: f64,
    pub radial_sigma: f64,
}

impl RingDistribution {
    pub fn new(center: Point2D, radius: f64, radial_sigma: f64) -> Self {
        RingDistribution {
            center,
            radius,
            radial_sigma,
        }
    }
}

impl Default for RingDistribution {
    fn default() -> Self {
        Self::new(Point2D::default(), 1.0, 0.1)
    }
}

impl Distribution for RingDistribution {
    fn probability_at(&self, p: &Point2D) -> f64 {
        let offset = p.distance_to(&self.center) - self.radius;
        (-(offset / self.radial_sigma).powi(2)).exp()
    }
}

// ---------------------------------------------------------------------------
// Line: gaussian band around the line through two points
// ---------------------------------------------------------------------------

/// `exp(-(d / sigma)^2)` where `d` is the perpendicular distance to the
/// infinite line through `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDistribution {
    pub start: Point2D,
    pub end: Point2D,
    pub sigma: f64,
}

impl LineDistribution {
    pub fn from_points(start: Point2D, end: Point2D, sigma: f64) -> Self {
        LineDistribution { start, end, sigma }
    }

    /// Line through `middle` at `angle` radians, with both defining points
    /// `separation` away from the middle.
    pub fn from_middle(middle: Point2D, separation: f64, angle: f64, sigma: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = separation * cos;
        let dy = separation * sin;
        LineDistribution {
            start: Point2D::new(middle.x + dx, middle.y + dy),
            end: Point2D::new(middle.x - dx, middle.y - dy),
            sigma,
        }
    }

    /// Perpendicular distance from `p` to the line. Falls back to the
    /// distance from `start` when both defining points coincide.
    pub fn distance_from_line(&self, p: &Point2D) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let length = dx.hypot(dy);
        if length == 0.0 {
            return p.distance_to(&self.start);
        }
        (dy * p.x - dx * p.y + self.end.x * self.start.y - self.end.y * self.start.x).abs() / length
    }
}

impl Default for LineDistribution {
    fn default() -> Self {
        Self::from_points(Point2D::new(-1.0, 0.0), Point2D::new(1.0, 0.0), 0.25)
    }
}

impl Distribution for LineDistribution {
    fn probability_at(&self, p: &Point2D) -> f64 {
        (-(self.distance_from_line(p) / self.sigma).powi(2)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn centered_peaks_at_center_and_decays() {
        let dist = CenteredDistribution::new(Point2D::new(2.0, 2.0), 1.0);
        assert!((dist.probability_at(&Point2D::new(2.0, 2.0)) - 1.0).abs() < EPS);

        let one_sigma = dist.probability_at(&Point2D::new(3.0, 2.0));
        assert!((one_sigma - (-1.0f64).exp()).abs() < EPS);
        assert!(dist.probability_at(&Point2D::new(5.0, 2.0)) < one_sigma);
    }

    #[test]
    fn ring_peaks_on_the_circle() {
        let dist = RingDistribution::new(Point2D::new(1.0, 0.5), 2.0, 0.5);
        assert!((dist.probability_at(&Point2D::new(3.0, 0.5)) - 1.0).abs() < EPS);
        assert!((dist.probability_at(&Point2D::new(1.0, -1.5)) - 1.0).abs() < EPS);

        let center = dist.probability_at(&Point2D::new(1.0, 0.5));
        assert!(center < 1e-6);
    }

    #[test]
    fn line_is_symmetric_across_the_band() {
        let dist = LineDistribution::default();
        assert!((dist.probability_at(&Point2D::new(5.0, 0.0)) - 1.0).abs() < EPS);

        let above = dist.probability_at(&Point2D::new(0.3, 0.2));
        let below = dist.probability_at(&Point2D::new(-0.7, -0.2));
        assert!((above - below).abs() < EPS);
        assert!((dist.distance_from_line(&Point2D::new(0.0, 0.2)) - 0.2).abs() < EPS);
    }

    #[test]
    fn diagonal_line_distance() {
        let dist = LineDistribution::from_points(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0), 0.1);
        let d = dist.distance_from_line(&Point2D::new(1.0, 0.0));
        assert!((d - std::f64::consts::FRAC_1_SQRT_2).abs() < EPS);
    }

    #[test]
    fn from_middle_places_points_on_both_sides() {
        let dist = LineDistribution::from_middle(
            Point2D::new(1.0, 1.0),
            0.5,
            std::f64::consts::FRAC_PI_2,
            0.1,
        );
        assert!((dist.start.x - 1.0).abs() < EPS && (dist.start.y - 1.5).abs() < EPS);
        assert!((dist.end.x - 1.0).abs() < EPS && (dist.end.y - 0.5).abs() < EPS);
        assert!(dist.distance_from_line(&Point2D::new(1.0, 7.0)) < EPS);
    }

    #[test]
    fn degenerate_line_measures_from_start() {
        let p = Point2D::new(1.0, 1.0);
        let dist = LineDistribution::from_points(p, p, 1.0);
        assert!((dist.distance_from_line(&Point2D::new(4.0, 5.0)) - 5.0).abs() < EPS);
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let dists: [&dyn Distribution; 3] = [
            &CenteredDistribution::default(),
            &RingDistribution::default(),
            &LineDistribution::default(),
        ];
        for dist in dists {
            for i in -20..=20 {
                for j in -20..=20 {
                    let p = dist.probability_at(&Point2D::new(i as f64 * 0.25, j as f64 * 0.25));
                    assert!((0.0..=1.0).contains(&p));
                }
            }
        }
    }
}
