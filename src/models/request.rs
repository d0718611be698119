//! Calculation request model and its building blocks.
//!
//! A [`CalculationRequest`] is the validated, yearly-normalized input the
//! calculation core works on. Wire-level concerns (optional fields,
//! reporting period, range checks) are handled by the API layer before a
//! request of this type is built.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::FederalState;

/// Age assumed when a request carries neither age nor birth year.
pub const DEFAULT_AGE: u32 = 30;

/// Statutory health add-on rate in percentage points used when the caller
/// does not supply one.
pub const DEFAULT_HEALTH_ADD_ON_RATE: Decimal = dec!(1.7);

/// The period a gross amount on the wire refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// The amount is an annual figure.
    #[default]
    Yearly,
    /// The amount is a monthly figure.
    Monthly,
}

impl Period {
    /// Converts an amount in this period to an annual amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_engine::models::Period;
    ///
    /// assert_eq!(Period::Monthly.to_yearly(dec!(4000)), dec!(48000));
    /// assert_eq!(Period::Yearly.to_yearly(dec!(48000)), dec!(48000));
    /// ```
    pub fn to_yearly(self, amount: Decimal) -> Decimal {
        match self {
            Period::Yearly => amount,
            Period::Monthly => amount * Decimal::from(12),
        }
    }
}

/// German wage-tax class (Steuerklasse) 1 to 6.
///
/// The class is carried through for callers but does not alter the annual
/// estimate; the withholding factor method is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TaxClass(u8);

impl TaxClass {
    /// Creates a tax class, returning `None` outside 1..=6.
    pub fn new(class: u8) -> Option<Self> {
        (1..=6).contains(&class).then_some(Self(class))
    }

    /// Returns the numeric class.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for TaxClass {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for TaxClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TaxClass::new(value).ok_or_else(|| format!("tax class must be between 1 and 6, got {}", value))
    }
}

impl From<TaxClass> for u8 {
    fn from(class: TaxClass) -> Self {
        class.0
    }
}

/// How the employee is health-insured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthInsurance {
    /// Statutory insurance with the fund's add-on rate in percentage points
    /// (e.g. `1.7` for 1.7 %).
    Statutory {
        /// Add-on contribution rate in percentage points.
        add_on_rate: Decimal,
    },
    /// Private insurance with a fixed monthly premium.
    Private {
        /// Monthly premium paid by the employee.
        monthly_premium: Decimal,
    },
}

impl Default for HealthInsurance {
    fn default() -> Self {
        HealthInsurance::Statutory {
            add_on_rate: DEFAULT_HEALTH_ADD_ON_RATE,
        }
    }
}

/// Overrides for projecting net salary under future parameter sets.
///
/// Every rate field is optional; `None` keeps the statutory default for that
/// field only. Rates are decimal fractions (`0.225` is 22.5 %), including the
/// health add-on rate. The two multipliers are mandatory and scale the
/// computed tax amounts, not the taxable base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Total pension insurance rate (employer + employee).
    #[serde(rename = "rv_rate_total", default)]
    pub pension_rate: Option<Decimal>,
    /// Total unemployment insurance rate (employer + employee).
    #[serde(rename = "av_rate_total", default)]
    pub unemployment_rate: Option<Decimal>,
    /// Health add-on rate as a decimal fraction.
    #[serde(rename = "kv_rate_add", default)]
    pub health_add_on_rate: Option<Decimal>,
    /// Total long-term care rate (employer + employee).
    #[serde(rename = "pv_rate_total", default)]
    pub care_rate: Option<Decimal>,
    /// Multiplier applied to the computed income tax.
    pub income_tax_factor: Decimal,
    /// Multiplier applied to the computed solidarity surcharge.
    #[serde(rename = "soli_factor")]
    pub solidarity_factor: Decimal,
}

impl SimulationSettings {
    /// Settings that override nothing and apply neutral multipliers.
    pub fn neutral() -> Self {
        Self {
            pension_rate: None,
            unemployment_rate: None,
            health_add_on_rate: None,
            care_rate: None,
            income_tax_factor: Decimal::ONE,
            solidarity_factor: Decimal::ONE,
        }
    }
}

/// A validated request for a single net-salary evaluation.
///
/// `gross_income` is always an annual amount.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    /// Annual gross income.
    pub gross_income: Decimal,
    /// Wage-tax class.
    pub tax_class: TaxClass,
    /// Whether the employee pays church tax.
    pub church_tax: bool,
    /// Federal state of employment.
    pub state: FederalState,
    /// Whether the employee has children.
    pub has_children: bool,
    /// Number of children; fractional counts are permitted.
    pub child_count: Decimal,
    /// Age in completed years, if known.
    pub age: Option<u32>,
    /// Year of birth, if known.
    pub year_of_birth: Option<i32>,
    /// Health insurance arrangement.
    pub health_insurance: HealthInsurance,
    /// Optional future-scenario overrides.
    pub simulation: Option<SimulationSettings>,
}

impl CalculationRequest {
    /// Creates a request for a childless, statutorily insured employee in tax
    /// class 1 without church tax, with age and birth year left unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_engine::models::{CalculationRequest, FederalState};
    ///
    /// let request = CalculationRequest::new(dec!(50000), FederalState::Berlin);
    /// assert_eq!(request.age_in(2026), 30);
    /// assert_eq!(request.birth_year_in(2026), 1996);
    /// ```
    pub fn new(gross_income: Decimal, state: FederalState) -> Self {
        Self {
            gross_income,
            tax_class: TaxClass::default(),
            church_tax: false,
            state,
            has_children: false,
            child_count: Decimal::ZERO,
            age: None,
            year_of_birth: None,
            health_insurance: HealthInsurance::default(),
            simulation: None,
        }
    }

    /// Returns a copy of this request with a different gross income.
    pub fn with_gross_income(&self, gross_income: Decimal) -> Self {
        Self {
            gross_income,
            ..self.clone()
        }
    }

    /// Effective age in `reference_year`.
    ///
    /// An explicit age wins; otherwise it is derived from the birth year, and
    /// falls back to [`DEFAULT_AGE`].
    pub fn age_in(&self, reference_year: i32) -> u32 {
        match (self.age, self.year_of_birth) {
            (Some(age), _) => age,
            (None, Some(year)) => u32::try_from(reference_year - year).unwrap_or(0),
            (None, None) => DEFAULT_AGE,
        }
    }

    /// Effective birth year relative to `reference_year`.
    ///
    /// An explicit birth year wins; otherwise it is derived from the age
    /// (or [`DEFAULT_AGE`]).
    pub fn birth_year_in(&self, reference_year: i32) -> i32 {
        self.year_of_birth.unwrap_or_else(|| {
            let age = self.age.unwrap_or(DEFAULT_AGE);
            reference_year - i32::try_from(age).unwrap_or(i32::MAX)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_defaults() {
        let request = CalculationRequest::new(dec!(60000), FederalState::Berlin);

        assert_eq!(request.tax_class.value(), 1);
        assert!(!request.church_tax);
        assert!(!request.has_children);
        assert_eq!(request.child_count, Decimal::ZERO);
        assert_eq!(
            request.health_insurance,
            HealthInsurance::Statutory {
                add_on_rate: dec!(1.7)
            }
        );
        assert!(request.simulation.is_none());
    }

    #[test]
    fn test_age_prefers_explicit_value() {
        let mut request = CalculationRequest::new(dec!(60000), FederalState::Berlin);
        request.age = Some(45);
        request.year_of_birth = Some(1990);

        assert_eq!(request.age_in(2026), 45);
        assert_eq!(request.birth_year_in(2026), 1990);
    }

    #[test]
    fn test_age_derived_from_birth_year() {
        let mut request = CalculationRequest::new(dec!(60000), FederalState::Berlin);
        request.year_of_birth = Some(1961);

        assert_eq!(request.age_in(2026), 65);
        assert_eq!(request.age_in(2030), 69);
    }

    #[test]
    fn test_birth_year_derived_from_age() {
        let mut request = CalculationRequest::new(dec!(60000), FederalState::Berlin);
        request.age = Some(23);

        assert_eq!(request.birth_year_in(2026), 2003);
    }

    #[test]
    fn test_birth_year_after_reference_year_gives_age_zero() {
        let mut request = CalculationRequest::new(dec!(60000), FederalState::Berlin);
        request.year_of_birth = Some(2030);

        assert_eq!(request.age_in(2026), 0);
    }

    #[test]
    fn test_with_gross_income_keeps_other_fields() {
        let mut request = CalculationRequest::new(dec!(60000), FederalState::Saxony);
        request.church_tax = true;
        request.child_count = dec!(2);

        let scaled = request.with_gross_income(dec!(30000));

        assert_eq!(scaled.gross_income, dec!(30000));
        assert_eq!(scaled.state, FederalState::Saxony);
        assert!(scaled.church_tax);
        assert_eq!(scaled.child_count, dec!(2));
    }

    #[test]
    fn test_tax_class_bounds() {
        assert!(TaxClass::new(0).is_none());
        assert_eq!(TaxClass::new(1).map(TaxClass::value), Some(1));
        assert_eq!(TaxClass::new(6).map(TaxClass::value), Some(6));
        assert!(TaxClass::new(7).is_none());
    }

    #[test]
    fn test_tax_class_deserialization_rejects_out_of_range() {
        assert!(serde_json::from_str::<TaxClass>("3").is_ok());
        assert!(serde_json::from_str::<TaxClass>("9").is_err());
    }

    #[test]
    fn test_period_serialization() {
        assert_eq!(serde_json::to_string(&Period::Yearly).unwrap(), "\"yearly\"");
        assert_eq!(serde_json::to_string(&Period::Monthly).unwrap(), "\"monthly\"");
    }

    #[test]
    fn test_simulation_settings_deserialize_with_nulls() {
        let json = r#"{
            "rv_rate_total": 0.225,
            "av_rate_total": null,
            "kv_rate_add": 0.07,
            "income_tax_factor": 1.1,
            "soli_factor": 1.0
        }"#;

        let settings: SimulationSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.pension_rate, Some(dec!(0.225)));
        assert_eq!(settings.unemployment_rate, None);
        assert_eq!(settings.health_add_on_rate, Some(dec!(0.07)));
        assert_eq!(settings.care_rate, None);
        assert_eq!(settings.income_tax_factor, dec!(1.1));
        assert_eq!(settings.solidarity_factor, dec!(1.0));
    }

    #[test]
    fn test_simulation_settings_require_multipliers() {
        let json = r#"{ "rv_rate_total": 0.2, "income_tax_factor": 1.0 }"#;
        assert!(serde_json::from_str::<SimulationSettings>(json).is_err());
    }
}
