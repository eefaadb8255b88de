//! Batch scenario inputs: CSV loading and sensitivity sweeps

pub mod generator;
pub mod loader;

pub use generator::SweepParams;
pub use loader::{load_scenarios, load_scenarios_from_reader};
