use rand::Rng;

use super::area::{Point2D, SampleArea};
use super::distribution::Distribution;
use crate::data::model::Row;

/// Keep `p` with probability `distribution.probability_at(p)`.
pub fn sample(p: Point2D, distribution: &dyn Distribution, rng: &mut impl Rng) -> Option<Point2D> {
    let u: f64 = rng.gen_range(0.0..1.0);
    (u < distribution.probability_at(&p)).then_some(p)
}

/// A fixed number of rejection-sampling attempts against one distribution,
/// with the label every accepted point is written with.
pub struct SamplingTask<'a> {
    distribution: &'a dyn Distribution,
    attempts: u64,
    label: f64,
}

impl<'a> SamplingTask<'a> {
    pub fn new(distribution: &'a dyn Distribution, attempts: u64, label: f64) -> Self {
        SamplingTask {
            distribution,
            attempts,
            label,
        }
    }

    pub fn distribution(&self) -> &dyn Distribution {
        self.distribution
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn label(&self) -> f64 {
        self.label
    }

    /// Draw `attempts` candidates uniformly from `area` and keep the accepted ones.
    pub fn run(&self, area: &SampleArea, rng: &mut impl Rng) -> Vec<Row> {
        (0..self.attempts)
            .filter_map(|_| {
                let candidate = area.random_point(rng);
                sample(candidate, self.distribution, rng)
            })
            .map(|p| Row::new(p.x, p.y, self.label))
            .collect()
    }
}

/// Run every task in order against the same area and RNG, concatenating rows.
pub fn run_tasks(area: &SampleArea, tasks: &[SamplingTask<'_>], rng: &mut impl Rng) -> Vec<Row> {
    let mut rows = Vec::new();
    for task in tasks {
        let accepted = task.run(area, rng);
        log::info!(
            "label {}: kept {} of {} candidates",
            task.label(),
            accepted.len(),
            task.attempts()
        );
        rows.extend(accepted);
    }
    rows
}
