//! Calculation logic for the salary engine.
//!
//! This module contains the income tax tariff and marginal-rate estimate,
//! the solidarity surcharge and church tax, the resolution of simulation
//! overrides, the four social insurance branches, and the scenario engine
//! composing them into single evaluations, part-time scenario sets and
//! gross-income curves.

mod engine;
mod income_tax;
mod rates;
mod rounding;
mod social_insurance;
mod surcharges;

pub use engine::{DEFAULT_CURVE_STEPS, evaluate, generate_curve, run_scenarios};
pub use income_tax::{compute_income_tax, compute_marginal_rate};
pub use rates::ResolvedRates;
pub use rounding::{floor_euros, round_cents};
pub use social_insurance::{Contributions, InsuredPerson, compute_contributions};
pub use surcharges::{compute_church_tax, compute_solidarity_surcharge};
