//! Application state for the salary engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxYearConstants};

/// Shared application state.
///
/// Holds the loaded tax-year configuration. It is immutable after startup,
/// so handlers share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded tax-year configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the tax-year constants.
    pub fn constants(&self) -> &TaxYearConstants {
        self.config.constants()
    }

    /// The reference year for age derivation, taken from the loaded rules.
    pub fn reference_year(&self) -> i32 {
        self.config.constants().year()
    }
}
