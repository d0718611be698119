//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax-year
//! constants and scenario presets from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    ScenarioPreset, ScenarioPresets, SocialInsuranceConstants, TaxYearConstants, TaxYearFile,
};

/// Loads and provides access to the constants of one tax year.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/de2026/
/// ├── tax_year.yaml          # Tariff, surcharges, deductions
/// ├── social_insurance.yaml  # Ceilings and contribution rates
/// └── presets.yaml           # Named future scenarios
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/de2026").unwrap();
/// println!("Loaded rules: {}", loader.constants().metadata.name);
///
/// let settings = loader.preset("realist_2035").unwrap().settings();
/// println!("Income tax factor: {}", settings.income_tax_factor);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    constants: TaxYearConstants,
    presets: ScenarioPresets,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/de2026")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tax_year = Self::load_yaml::<TaxYearFile>(&path.join("tax_year.yaml"))?;
        let social_insurance =
            Self::load_yaml::<SocialInsuranceConstants>(&path.join("social_insurance.yaml"))?;
        let presets = Self::load_yaml::<ScenarioPresets>(&path.join("presets.yaml"))?;

        Ok(Self {
            constants: TaxYearConstants::from_parts(tax_year, social_insurance),
            presets,
        })
    }

    /// Creates a loader from the compiled-in 2026 values, without touching
    /// the filesystem.
    pub fn builtin() -> Self {
        Self {
            constants: TaxYearConstants::year_2026(),
            presets: ScenarioPresets::builtin(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the tax-year constants.
    pub fn constants(&self) -> &TaxYearConstants {
        &self.constants
    }

    /// Returns all scenario presets.
    pub fn presets(&self) -> &ScenarioPresets {
        &self.presets
    }

    /// Looks up a named scenario preset.
    ///
    /// # Arguments
    ///
    /// * `name` - The preset name (e.g., "pessimist_2035")
    ///
    /// # Returns
    ///
    /// Returns the preset, or `UnknownPreset` if no preset has that name.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin();
    /// let settings = loader.preset("optimist_2035")?.settings();
    /// assert_eq!(settings.care_rate, Some(dec!(0.04)));
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn preset(&self, name: &str) -> EngineResult<&ScenarioPreset> {
        self.presets
            .get(name)
            .ok_or_else(|| EngineError::UnknownPreset {
                name: name.to_string(),
            })
    }
}
