/// Synthetic data: analytic 2D distributions sampled by rejection inside a
/// rectangular area. Feeds the `generate_sample` binary.
pub mod area;
pub mod distribution;
pub mod task;

pub use area::{Point2D, SampleArea};
pub use distribution::{CenteredDistribution, Distribution, LineDistribution, RingDistribution};
pub use task::{run_tasks, sample, SamplingTask};
