//! Calculation result models for the salary engine.
//!
//! This module contains the [`CalculationResult`] produced by a single
//! evaluation, the [`ScenarioSet`] of part-time variants and the
//! [`CurvePoint`] samples of a gross-income sweep.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full outcome of one net-salary evaluation.
///
/// All amounts are annual and rounded to cents. The serialized field names
/// follow the established wire format (`soli`, `kv_employee`, ...).
///
/// `net_income` always equals `gross_income - total_tax -
/// total_social_security` exactly.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::models::CalculationResult;
///
/// let result = CalculationResult {
///     gross_income: dec!(30000.00),
///     taxable_income: dec!(22412.50),
///     income_tax: dec!(2172.00),
///     solidarity_surcharge: dec!(0.00),
///     church_tax: dec!(0.00),
///     total_tax: dec!(2172.00),
///     pension_contribution: dec!(2790.00),
///     unemployment_contribution: dec!(390.00),
///     health_contribution: dec!(2445.00),
///     care_contribution: dec!(720.00),
///     total_social_insurance: dec!(6345.00),
///     net_income: dec!(21483.00),
///     net_income_monthly: dec!(1790.25),
///     average_tax_rate: dec!(7.24),
///     marginal_tax_rate: dec!(24.09),
/// };
/// assert!(result.is_balanced());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Annual gross income.
    pub gross_income: Decimal,
    /// Taxable income (zvE) after deductions.
    pub taxable_income: Decimal,
    /// Income tax after any simulation multiplier.
    pub income_tax: Decimal,
    /// Solidarity surcharge.
    #[serde(rename = "soli")]
    pub solidarity_surcharge: Decimal,
    /// Church tax, zero when not liable.
    pub church_tax: Decimal,
    /// Sum of income tax, solidarity surcharge and church tax.
    pub total_tax: Decimal,
    /// Employee pension insurance contribution.
    #[serde(rename = "rv_employee")]
    pub pension_contribution: Decimal,
    /// Employee unemployment insurance contribution.
    #[serde(rename = "av_employee")]
    pub unemployment_contribution: Decimal,
    /// Employee health insurance contribution (or private premium).
    #[serde(rename = "kv_employee")]
    pub health_contribution: Decimal,
    /// Employee long-term care contribution.
    #[serde(rename = "pv_employee")]
    pub care_contribution: Decimal,
    /// Sum of the four contributions.
    #[serde(rename = "total_social_security")]
    pub total_social_insurance: Decimal,
    /// Annual net income.
    pub net_income: Decimal,
    /// Net income divided by twelve.
    pub net_income_monthly: Decimal,
    /// Total tax as a percentage of gross income.
    #[serde(rename = "tax_rate_average")]
    pub average_tax_rate: Decimal,
    /// Marginal income tax rate in percent.
    #[serde(rename = "tax_rate_marginal")]
    pub marginal_tax_rate: Decimal,
}

impl CalculationResult {
    /// Returns true if net income equals gross minus taxes minus
    /// contributions.
    pub fn is_balanced(&self) -> bool {
        self.net_income == self.gross_income - self.total_tax - self.total_social_insurance
    }
}

/// A part-time variant evaluated by the scenario engine.
///
/// Variants order by decreasing working time and serialize to their stable
/// scenario labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartTimeScenario {
    /// 90 % of the base gross income.
    #[serde(rename = "A_Time_90")]
    Time90,
    /// 80 % of the base gross income.
    #[serde(rename = "B_Time_80")]
    Time80,
    /// 70 % of the base gross income.
    #[serde(rename = "C_Time_70")]
    Time70,
    /// 50 % of the base gross income.
    #[serde(rename = "D_Time_50")]
    Time50,
}

impl PartTimeScenario {
    /// All variants in label order.
    pub const ALL: [PartTimeScenario; 4] = [
        PartTimeScenario::Time90,
        PartTimeScenario::Time80,
        PartTimeScenario::Time70,
        PartTimeScenario::Time50,
    ];

    /// The share of the base gross income this variant earns.
    pub fn ratio(self) -> Decimal {
        match self {
            PartTimeScenario::Time90 => Decimal::new(90, 2),
            PartTimeScenario::Time80 => Decimal::new(80, 2),
            PartTimeScenario::Time70 => Decimal::new(70, 2),
            PartTimeScenario::Time50 => Decimal::new(50, 2),
        }
    }

    /// The stable scenario label.
    pub fn label(self) -> &'static str {
        match self {
            PartTimeScenario::Time90 => "A_Time_90",
            PartTimeScenario::Time80 => "B_Time_80",
            PartTimeScenario::Time70 => "C_Time_70",
            PartTimeScenario::Time50 => "D_Time_50",
        }
    }
}

/// Results for every part-time variant, keyed by scenario.
pub type ScenarioSet = BTreeMap<PartTimeScenario, CalculationResult>;

/// One sample of a gross-income sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Scaling factor applied to the base gross, in whole percent.
    pub factor_percent: u32,
    /// Gross income at this point.
    pub gross: Decimal,
    /// Net income at this point.
    pub net: Decimal,
    /// Marginal income tax rate in percent at this point.
    pub marginal_tax: Decimal,
}
