//! Request types for the salary engine API.
//!
//! This module defines the JSON request body shared by the `/calculate`,
//! `/simulate` and `/curve` endpoints, and its validation into a domain
//! [`CalculationRequest`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationRequest, DEFAULT_HEALTH_ADD_ON_RATE, FederalState, HealthInsurance, Period,
    SimulationSettings, TaxClass,
};

const MAX_GROSS_INCOME: Decimal = dec!(2000000);
const MAX_CHILD_COUNT: Decimal = dec!(20);
const MAX_AGE: u32 = 120;
const MIN_YEAR_OF_BIRTH: i32 = 1900;
const MAX_ADD_ON_RATE: Decimal = dec!(10);
const MAX_PRIVATE_PREMIUM: Decimal = dec!(10000);
const MAX_ADD_ON_OVERRIDE: Decimal = dec!(0.20);
const MIN_FACTOR: Decimal = dec!(0.5);
const MAX_FACTOR: Decimal = dec!(3.0);

/// Health insurance type as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthInsuranceType {
    /// Statutory insurance (GKV).
    #[default]
    Statutory,
    /// Private insurance (PKV).
    Private,
}

/// Request body for the calculation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// Gross income in the given period.
    pub gross_income: Decimal,
    /// Wage-tax class, 1 to 6.
    pub tax_class: u8,
    /// Whether church tax is due.
    pub church_tax: bool,
    /// Two-letter state code.
    pub state: String,
    /// Whether `gross_income` is a yearly or monthly amount.
    pub period: Period,
    /// Whether the employee has children.
    #[serde(default)]
    pub has_children: bool,
    /// Number of children.
    #[serde(default)]
    pub child_count: Decimal,
    /// Age in completed years.
    #[serde(default)]
    pub age: Option<u32>,
    /// Year of birth.
    #[serde(default)]
    pub year_of_birth: Option<i32>,
    /// Health insurance type.
    #[serde(default)]
    pub health_insurance_type: HealthInsuranceType,
    /// Statutory add-on rate in percentage points.
    #[serde(default)]
    pub kv_add_rate: Option<Decimal>,
    /// Private monthly premium.
    #[serde(default)]
    pub private_kv_amount: Option<Decimal>,
    /// Future-scenario overrides.
    #[serde(default)]
    pub simulation_settings: Option<SimulationSettings>,
}

impl TaxRequest {
    /// Validates the request and converts it into a yearly domain request.
    ///
    /// A monthly gross is converted to a yearly one before its range check,
    /// so the bound applies to the amount the calculation works on.
    ///
    /// # Arguments
    ///
    /// * `reference_year` - Upper bound for `year_of_birth`
    ///
    /// # Returns
    ///
    /// The domain request, or `InvalidField` naming the first field that
    /// violates its constraint.
    pub fn validate(self, reference_year: i32) -> EngineResult<CalculationRequest> {
        let gross_income = self.period.to_yearly(self.gross_income);
        check_range("gross_income", gross_income, Decimal::ZERO, MAX_GROSS_INCOME)?;

        let tax_class = TaxClass::new(self.tax_class).ok_or_else(|| {
            EngineError::invalid_field(
                "tax_class",
                format!("must be between 1 and 6, got {}", self.tax_class),
            )
        })?;

        let state: FederalState = self.state.parse()?;

        check_range("child_count", self.child_count, Decimal::ZERO, MAX_CHILD_COUNT)?;

        if let Some(age) = self.age {
            if age > MAX_AGE {
                return Err(EngineError::invalid_field(
                    "age",
                    format!("must be between 0 and {}, got {}", MAX_AGE, age),
                ));
            }
        }

        if let Some(year) = self.year_of_birth {
            if !(MIN_YEAR_OF_BIRTH..=reference_year).contains(&year) {
                return Err(EngineError::invalid_field(
                    "year_of_birth",
                    format!(
                        "must be between {} and {}, got {}",
                        MIN_YEAR_OF_BIRTH, reference_year, year
                    ),
                ));
            }
        }

        let add_on_rate = self.kv_add_rate.unwrap_or(DEFAULT_HEALTH_ADD_ON_RATE);
        check_range("kv_add_rate", add_on_rate, Decimal::ZERO, MAX_ADD_ON_RATE)?;

        let monthly_premium = self.private_kv_amount.unwrap_or(Decimal::ZERO);
        check_range("private_kv_amount", monthly_premium, Decimal::ZERO, MAX_PRIVATE_PREMIUM)?;

        if let Some(settings) = &self.simulation_settings {
            validate_simulation(settings)?;
        }

        let health_insurance = match self.health_insurance_type {
            HealthInsuranceType::Statutory => HealthInsurance::Statutory { add_on_rate },
            HealthInsuranceType::Private => HealthInsurance::Private { monthly_premium },
        };

        Ok(CalculationRequest {
            gross_income,
            tax_class,
            church_tax: self.church_tax,
            state,
            has_children: self.has_children,
            child_count: self.child_count,
            age: self.age,
            year_of_birth: self.year_of_birth,
            health_insurance,
            simulation: self.simulation_settings,
        })
    }
}

fn validate_simulation(settings: &SimulationSettings) -> EngineResult<()> {
    let totals = [
        ("simulation_settings.rv_rate_total", settings.pension_rate),
        ("simulation_settings.av_rate_total", settings.unemployment_rate),
        ("simulation_settings.pv_rate_total", settings.care_rate),
    ];
    for (field, rate) in totals {
        if let Some(rate) = rate {
            check_range(field, rate, Decimal::ZERO, Decimal::ONE)?;
        }
    }

    if let Some(rate) = settings.health_add_on_rate {
        check_range(
            "simulation_settings.kv_rate_add",
            rate,
            Decimal::ZERO,
            MAX_ADD_ON_OVERRIDE,
        )?;
    }

    check_range(
        "simulation_settings.income_tax_factor",
        settings.income_tax_factor,
        MIN_FACTOR,
        MAX_FACTOR,
    )?;
    check_range(
        "simulation_settings.soli_factor",
        settings.solidarity_factor,
        MIN_FACTOR,
        MAX_FACTOR,
    )
}

/// Checks `min <= value <= max`.
fn check_range(field: &str, value: Decimal, min: Decimal, max: Decimal) -> EngineResult<()> {
    if value < min || value > max {
        return Err(EngineError::invalid_field(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        ));
    }
    Ok(())
}
