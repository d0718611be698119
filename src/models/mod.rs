//! Core data models for the salary engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod request;
mod state;

pub use calculation_result::{CalculationResult, CurvePoint, PartTimeScenario, ScenarioSet};
pub use request::{
    CalculationRequest, DEFAULT_AGE, DEFAULT_HEALTH_ADD_ON_RATE, HealthInsurance, Period,
    SimulationSettings, TaxClass,
};
pub use state::FederalState;
