//! Configuration types for a tax year.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML files of a tax-year configuration directory, and the
//! compiled-in values for 2026.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::models::{FederalState, SimulationSettings};

/// Metadata identifying a tax year configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxYearMetadata {
    /// The calendar year the rules apply to.
    pub year: i32,
    /// Human-readable name of the rule set.
    pub name: String,
}

/// A progression zone whose tax is a quadratic polynomial in the
/// normalized variable `(base - lower_bound) / zone_divisor`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuadraticZone {
    /// Inclusive upper bound of the zone.
    pub upper_limit: Decimal,
    /// Coefficient of the squared term.
    pub quadratic: Decimal,
    /// Coefficient of the linear term.
    pub linear: Decimal,
    /// Constant added to the polynomial.
    #[serde(default)]
    pub constant: Decimal,
}

/// A zone whose tax is `rate * base - offset`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinearZone {
    /// Inclusive upper bound of the zone, `None` for the top zone.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// Marginal rate of the zone.
    pub rate: Decimal,
    /// Amount subtracted from `rate * base`.
    pub offset: Decimal,
}

/// Relief on taxable income for older taxpayers (Altersentlastungsbetrag).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgeRelief {
    /// Relief applies strictly above this age.
    pub age_threshold: u32,
    /// Share of the taxable base that is relieved.
    pub rate: Decimal,
    /// Upper bound of the relief amount.
    pub maximum: Decimal,
}

/// Income tax tariff constants (§ 32a EStG).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IncomeTaxConstants {
    /// Basic tax-free allowance (Grundfreibetrag).
    pub basic_allowance: Decimal,
    /// Divisor used to normalize the zone-local variable.
    pub zone_divisor: Decimal,
    /// First progression zone, starting above the basic allowance.
    pub entry_zone: QuadraticZone,
    /// Second progression zone.
    pub progression_zone: QuadraticZone,
    /// First proportional zone.
    pub proportional_zone: LinearZone,
    /// Top zone (Reichensteuer), unbounded.
    pub top_zone: LinearZone,
    /// Age-based relief.
    pub age_relief: AgeRelief,
}

/// Solidarity surcharge constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SolidarityConstants {
    /// Full surcharge rate on the income tax.
    pub rate: Decimal,
    /// Rate applied to the income tax above the threshold in the
    /// mitigation zone.
    pub mitigation_rate: Decimal,
    /// Income-tax threshold for single filers.
    pub threshold_single: Decimal,
    /// Income-tax threshold for joint filers.
    pub threshold_joint: Decimal,
}

/// Church tax constants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChurchTaxConstants {
    /// Rate applied in most states.
    pub standard_rate: Decimal,
    /// Rate applied in the reduced-rate states.
    pub reduced_rate: Decimal,
    /// States levying the reduced rate.
    pub reduced_rate_states: Vec<FederalState>,
}

/// Flat deductions subtracted from gross income to reach taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeductionConstants {
    /// Employee expense lump sum (Werbungskostenpauschale).
    pub employee_lump_sum: Decimal,
    /// Special expense lump sum (Sonderausgaben-Pauschbetrag).
    pub special_expense_lump_sum: Decimal,
}

/// A state in which the employer's care-insurance share is fixed by statute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CareEmployerShareException {
    /// The state the exception applies to.
    pub state: FederalState,
    /// The fixed employer rate; the employee pays the remainder.
    pub employer_rate: Decimal,
}

/// Social insurance ceilings and rates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialInsuranceConstants {
    /// Annual contribution ceiling for pension and unemployment insurance.
    pub pension_ceiling: Decimal,
    /// Annual contribution ceiling for health and care insurance.
    pub health_ceiling: Decimal,
    /// Total pension insurance rate.
    pub pension_rate: Decimal,
    /// Total unemployment insurance rate.
    pub unemployment_rate: Decimal,
    /// General health insurance rate, excluding the add-on.
    pub health_base_rate: Decimal,
    /// Total long-term care rate.
    pub care_rate: Decimal,
    /// Employee surcharge for childless insured persons.
    pub care_childless_surcharge: Decimal,
    /// The childless surcharge applies strictly above this age.
    pub care_childless_min_age: i32,
    /// Employee relief per child from the second child on.
    pub care_child_relief: Decimal,
    /// Child count at which the relief stops growing.
    pub care_child_relief_max_children: Decimal,
    /// States with a statutory employer share for care insurance.
    #[serde(default)]
    pub care_employer_share_exceptions: Vec<CareEmployerShareException>,
}

/// The full set of constants for one tax year.
///
/// Every calculator is parameterized by this value, so supporting another
/// year means supplying another `TaxYearConstants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYearConstants {
    /// Identifying metadata.
    pub metadata: TaxYearMetadata,
    /// Income tax tariff.
    pub income_tax: IncomeTaxConstants,
    /// Solidarity surcharge.
    pub solidarity: SolidarityConstants,
    /// Church tax.
    pub church_tax: ChurchTaxConstants,
    /// Lump-sum deductions.
    pub deductions: DeductionConstants,
    /// Social insurance.
    pub social_insurance: SocialInsuranceConstants,
}

/// Layout of `tax_year.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearFile {
    /// Identifying metadata.
    pub metadata: TaxYearMetadata,
    /// Income tax tariff.
    pub income_tax: IncomeTaxConstants,
    /// Solidarity surcharge.
    pub solidarity: SolidarityConstants,
    /// Church tax.
    pub church_tax: ChurchTaxConstants,
    /// Lump-sum deductions.
    pub deductions: DeductionConstants,
}

impl TaxYearConstants {
    /// Assembles the constants from the contents of the two YAML files.
    pub fn from_parts(tax_year: TaxYearFile, social_insurance: SocialInsuranceConstants) -> Self {
        Self {
            metadata: tax_year.metadata,
            income_tax: tax_year.income_tax,
            solidarity: tax_year.solidarity,
            church_tax: tax_year.church_tax,
            deductions: tax_year.deductions,
            social_insurance,
        }
    }

    /// The statutory values for 2026.
    pub fn year_2026() -> Self {
        Self {
            metadata: TaxYearMetadata {
                year: 2026,
                name: "Germany 2026".to_string(),
            },
            income_tax: IncomeTaxConstants {
                basic_allowance: dec!(12348),
                zone_divisor: dec!(10000),
                entry_zone: QuadraticZone {
                    upper_limit: dec!(17799),
                    quadratic: dec!(914.51),
                    linear: dec!(1400),
                    constant: Decimal::ZERO,
                },
                progression_zone: QuadraticZone {
                    upper_limit: dec!(69878),
                    quadratic: dec!(173.10),
                    linear: dec!(2397),
                    constant: dec!(1034.87),
                },
                proportional_zone: LinearZone {
                    upper_limit: Some(dec!(277825)),
                    rate: dec!(0.42),
                    offset: dec!(11135.63),
                },
                top_zone: LinearZone {
                    upper_limit: None,
                    rate: dec!(0.45),
                    offset: dec!(19470.38),
                },
                age_relief: AgeRelief {
                    age_threshold: 64,
                    rate: dec!(0.128),
                    maximum: dec!(608),
                },
            },
            solidarity: SolidarityConstants {
                rate: dec!(0.055),
                mitigation_rate: dec!(0.119),
                threshold_single: dec!(20350),
                threshold_joint: dec!(40700),
            },
            church_tax: ChurchTaxConstants {
                standard_rate: dec!(0.09),
                reduced_rate: dec!(0.08),
                reduced_rate_states: vec![FederalState::Bavaria, FederalState::BadenWuerttemberg],
            },
            deductions: DeductionConstants {
                employee_lump_sum: dec!(1230),
                special_expense_lump_sum: dec!(36),
            },
            social_insurance: SocialInsuranceConstants {
                pension_ceiling: dec!(101400),
                health_ceiling: dec!(69750),
                pension_rate: dec!(0.186),
                unemployment_rate: dec!(0.026),
                health_base_rate: dec!(0.146),
                care_rate: dec!(0.036),
                care_childless_surcharge: dec!(0.006),
                care_childless_min_age: 23,
                care_child_relief: dec!(0.0025),
                care_child_relief_max_children: dec!(5),
                care_employer_share_exceptions: vec![CareEmployerShareException {
                    state: FederalState::Saxony,
                    employer_rate: dec!(0.013),
                }],
            },
        }
    }

    /// The reference year these constants belong to.
    pub fn year(&self) -> i32 {
        self.metadata.year
    }
}

/// A named future-scenario preset.
///
/// Rates are stored in percent, the way they are published and entered;
/// [`ScenarioPreset::settings`] converts them to the decimal fractions the
/// engine expects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioPreset {
    /// Short display label.
    pub label: String,
    /// One-line description of the assumptions.
    pub description: String,
    /// Total pension rate in percent.
    pub pension_rate_percent: Decimal,
    /// Total unemployment rate in percent.
    pub unemployment_rate_percent: Decimal,
    /// Health add-on rate in percent.
    pub health_add_on_percent: Decimal,
    /// Total care rate in percent.
    pub care_rate_percent: Decimal,
    /// Income tax multiplier.
    pub income_tax_factor: Decimal,
    /// Solidarity surcharge multiplier.
    pub solidarity_factor: Decimal,
}

impl ScenarioPreset {
    /// Expands the preset into simulation settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_engine::config::ScenarioPresets;
    ///
    /// let presets = ScenarioPresets::builtin();
    /// let settings = presets.get("pessimist_2035").unwrap().settings();
    /// assert_eq!(settings.pension_rate, Some(dec!(0.225)));
    /// assert_eq!(settings.health_add_on_rate, Some(dec!(0.07)));
    /// ```
    pub fn settings(&self) -> SimulationSettings {
        let hundred = Decimal::ONE_HUNDRED;
        SimulationSettings {
            pension_rate: Some(self.pension_rate_percent / hundred),
            unemployment_rate: Some(self.unemployment_rate_percent / hundred),
            health_add_on_rate: Some(self.health_add_on_percent / hundred),
            care_rate: Some(self.care_rate_percent / hundred),
            income_tax_factor: self.income_tax_factor,
            solidarity_factor: self.solidarity_factor,
        }
    }
}

/// Layout of `presets.yaml`: preset name to preset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioPresets {
    /// Presets keyed by name.
    pub presets: BTreeMap<String, ScenarioPreset>,
}

impl ScenarioPresets {
    /// Looks up a preset by name.
    pub fn get(&self, name: &str) -> Option<&ScenarioPreset> {
        self.presets.get(name)
    }

    /// The compiled-in demographic-pressure presets.
    pub fn builtin() -> Self {
        let preset = |label: &str,
                      description: &str,
                      rates: [Decimal; 4],
                      income_tax_factor: Decimal,
                      solidarity_factor: Decimal| ScenarioPreset {
            label: label.to_string(),
            description: description.to_string(),
            pension_rate_percent: rates[0],
            unemployment_rate_percent: rates[1],
            health_add_on_percent: rates[2],
            care_rate_percent: rates[3],
            income_tax_factor,
            solidarity_factor,
        };

        let mut presets = BTreeMap::new();
        presets.insert(
            "current".to_string(),
            preset(
                "Current (2026)",
                "Rules in force",
                [dec!(18.6), dec!(2.6), dec!(2.9), dec!(3.6)],
                dec!(1.0),
                dec!(1.0),
            ),
        );
        presets.insert(
            "pessimist_2035".to_string(),
            preset(
                "Pessimistic scenario (2035)",
                "Status quo under rapid ageing",
                [dec!(22.5), dec!(3.0), dec!(7.0), dec!(7.0)],
                dec!(1.1),
                dec!(1.1),
            ),
        );
        presets.insert(
            "realist_2035".to_string(),
            preset(
                "Realistic scenario (2035)",
                "Moderate adjustments for stabilisation",
                [dec!(20.5), dec!(2.8), dec!(4.5), dec!(5.0)],
                dec!(1.05),
                dec!(1.0),
            ),
        );
        presets.insert(
            "optimist_2035".to_string(),
            preset(
                "Optimistic scenario (2035)",
                "Comprehensive structural reforms",
                [dec!(19.5), dec!(2.6), dec!(3.5), dec!(4.0)],
                dec!(1.02),
                dec!(1.0),
            ),
        );

        Self { presets }
    }
}
