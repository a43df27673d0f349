//! Application services

pub mod scenario;

pub use scenario::{Scenario, ScenarioOutcome, ScenarioService};
