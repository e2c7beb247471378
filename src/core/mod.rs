pub mod classifier;
pub mod constants;
pub mod description;
pub mod detectors;
pub mod error;
