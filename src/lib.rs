//! German gross-to-net salary engine.
//!
//! This crate estimates an employee's net salary from gross salary, tax
//! class, federal state, family status and age under the 2026 statutory
//! rules: progressive income tax, solidarity surcharge, church tax and the
//! four social insurance branches. It also projects net salary under future
//! parameter sets and across part-time and salary variations.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_engine::calculation::evaluate;
//! use salary_engine::config::ConfigLoader;
//! use salary_engine::models::{CalculationRequest, FederalState};
//!
//! let config = ConfigLoader::builtin();
//! let request = CalculationRequest::new(dec!(50000), FederalState::Berlin);
//!
//! let result = evaluate(&request, config.constants().year(), config.constants());
//! assert!(result.net_income < result.gross_income);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
