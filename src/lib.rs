//! Labelled 2D point sets: loading, partitioning by label, and the sample
//! generator that produces them.

pub mod data;
pub mod sampling;
