use std::path::Path;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use label_scatter::data::export::save_file;
use label_scatter::sampling::{
    run_tasks, CenteredDistribution, LineDistribution, Point2D, RingDistribution, SampleArea,
    SamplingTask,
};

const OUTPUT_PATH: &str = "./combined.txt";
const SEED: u64 = 0;
const ATTEMPTS_PER_TASK: u64 = 1000;

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SmallRng::seed_from_u64(SEED);

    let area = SampleArea::from_center(Point2D::new(2.0, 2.0), 1.0, 1.0);

    let centred = CenteredDistribution::new(Point2D::new(2.0, 2.0), 1.0);
    let ring = RingDistribution::new(Point2D::new(1.0, 0.5), 2.0, 0.5);
    let line = LineDistribution::from_points(Point2D::new(1.5, 1.5), Point2D::new(2.5, 2.5), 0.1);

    let tasks = [
        SamplingTask::new(&centred, ATTEMPTS_PER_TASK, 1.0),
        SamplingTask::new(&ring, ATTEMPTS_PER_TASK, 2.0),
        SamplingTask::new(&line, ATTEMPTS_PER_TASK, 3.0),
    ];

    log::info!("Sampling {} tasks in {area}", tasks.len());
    let rows = run_tasks(&area, &tasks, &mut rng);
    save_file(Path::new(OUTPUT_PATH), &rows)?;

    println!("Wrote {} points to {OUTPUT_PATH}", rows.len());
    Ok(())
}
