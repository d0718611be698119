//! Configuration loading and management for the salary engine.
//!
//! This module provides functionality to load the constants of a tax year
//! (income tax tariff, surcharges, deductions, social insurance) and the
//! named scenario presets from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/de2026").unwrap();
//! println!("Loaded rules: {}", config.constants().metadata.name);
//! ```

mod loader;
mod server;
mod types;

pub use loader::ConfigLoader;
pub use server::{CONFIG_DIR_VAR, LISTEN_ADDR_VAR, ServerSettings};
pub use types::{
    AgeRelief, CareEmployerShareException, ChurchTaxConstants, DeductionConstants,
    IncomeTaxConstants, LinearZone, QuadraticZone, ScenarioPreset, ScenarioPresets,
    SocialInsuranceConstants, SolidarityConstants, TaxYearConstants, TaxYearFile,
    TaxYearMetadata,
};
