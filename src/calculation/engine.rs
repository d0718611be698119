//! Scenario engine.
//!
//! This module composes the individual calculators into a full gross-to-net
//! evaluation and provides the two derived call shapes built on top of it:
//! the part-time scenario set and the gross-income curve.
//!
//! Every function here is pure. The reference year used for age derivation
//! is an explicit argument so that results never depend on the wall clock.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::debug;

use crate::config::TaxYearConstants;
use crate::models::{
    CalculationRequest, CalculationResult, CurvePoint, PartTimeScenario, ScenarioSet,
};

use super::income_tax::{compute_income_tax, compute_marginal_rate};
use super::rates::ResolvedRates;
use super::rounding::round_cents;
use super::social_insurance::{InsuredPerson, compute_contributions};
use super::surcharges::{compute_church_tax, compute_solidarity_surcharge};

/// Number of increments used by [`generate_curve`] when the caller does not
/// choose one.
pub const DEFAULT_CURVE_STEPS: u32 = 20;

const CURVE_START: Decimal = dec!(0.5);
const CURVE_END: Decimal = dec!(1.5);
const CURVE_EPSILON: Decimal = dec!(0.001);

/// Evaluates a single request.
///
/// The evaluation proceeds as follows:
/// 1. Resolve simulation overrides and compute the four contributions.
/// 2. Derive taxable income as gross minus pension, health and care
///    contributions and the two lump-sum deductions, floored at zero. The
///    full health and care contributions are deducted.
/// 3. Compute income tax with the income-tax multiplier and the request's
///    age, rounded to cents.
/// 4. Compute the solidarity surcharge (single filer) and, if liable,
///    church tax from the income tax.
/// 5. Assemble totals, net income and the average and marginal rates.
///
/// The returned result always satisfies
/// `net_income == gross_income - total_tax - total_social_security`.
///
/// # Arguments
///
/// * `request` - The validated request with a yearly gross income
/// * `reference_year` - The year ages and birth years are related to
/// * `constants` - The tax-year constants
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::evaluate;
/// use salary_engine::config::TaxYearConstants;
/// use salary_engine::models::{CalculationRequest, FederalState};
///
/// let constants = TaxYearConstants::year_2026();
/// let mut request = CalculationRequest::new(dec!(50000), FederalState::Berlin);
/// request.age = Some(35);
///
/// let result = evaluate(&request, 2026, &constants);
/// assert_eq!(result.total_social_insurance, dec!(10575.00));
/// assert_eq!(result.income_tax, dec!(6835.00));
/// assert_eq!(result.net_income, dec!(32590.00));
/// assert!(result.is_balanced());
/// ```
pub fn evaluate(
    request: &CalculationRequest,
    reference_year: i32,
    constants: &TaxYearConstants,
) -> CalculationResult {
    let gross_income = round_cents(request.gross_income.max(Decimal::ZERO));

    let rates = ResolvedRates::resolve(
        &constants.social_insurance,
        &request.health_insurance,
        request.simulation.as_ref(),
    );
    let person = InsuredPerson::from_request(request, reference_year);
    let contributions = compute_contributions(
        gross_income,
        &person,
        reference_year,
        &rates,
        &constants.social_insurance,
    );

    let deductions = &constants.deductions;
    let taxable_income = (gross_income
        - contributions.pension
        - (contributions.health + contributions.care)
        - deductions.employee_lump_sum
        - deductions.special_expense_lump_sum)
        .max(Decimal::ZERO);

    let income_tax = round_cents(compute_income_tax(
        taxable_income,
        rates.income_tax_factor,
        request.age_in(reference_year),
        &constants.income_tax,
    ));
    let solidarity_surcharge = compute_solidarity_surcharge(
        income_tax,
        false,
        rates.solidarity_factor,
        &constants.solidarity,
    );
    let church_tax = if request.church_tax {
        compute_church_tax(income_tax, request.state, &constants.church_tax)
    } else {
        Decimal::ZERO
    };

    let total_tax = income_tax + solidarity_surcharge + church_tax;
    let total_social_insurance = contributions.total();
    let net_income = gross_income - total_tax - total_social_insurance;

    let average_tax_rate = if gross_income.is_zero() {
        Decimal::ZERO
    } else {
        round_cents(total_tax / gross_income * Decimal::ONE_HUNDRED)
    };

    CalculationResult {
        gross_income,
        taxable_income,
        income_tax,
        solidarity_surcharge,
        church_tax,
        total_tax,
        pension_contribution: contributions.pension,
        unemployment_contribution: contributions.unemployment,
        health_contribution: contributions.health,
        care_contribution: contributions.care,
        total_social_insurance,
        net_income,
        net_income_monthly: round_cents(net_income / Decimal::from(12)),
        average_tax_rate,
        marginal_tax_rate: compute_marginal_rate(taxable_income, &constants.income_tax),
    }
}

/// Evaluates the four part-time variants of a request.
///
/// Each variant scales the gross income by its ratio (90, 80, 70 and 50 %)
/// and keeps every other field of the request.
pub fn run_scenarios(
    request: &CalculationRequest,
    reference_year: i32,
    constants: &TaxYearConstants,
) -> ScenarioSet {
    debug!(
        gross_income = %request.gross_income,
        state = %request.state,
        "Running part-time scenarios"
    );

    PartTimeScenario::ALL
        .into_iter()
        .map(|scenario| {
            let scaled = request.with_gross_income(request.gross_income * scenario.ratio());
            (scenario, evaluate(&scaled, reference_year, constants))
        })
        .collect()
}

/// Sweeps gross income from 50 % to 150 % of the request's gross.
///
/// The sweep has `steps` equal increments and includes both endpoints, so
/// it yields `steps + 1` points ordered by increasing percentage. A `steps`
/// of zero is treated as one.
///
/// # Arguments
///
/// * `request` - The base request
/// * `reference_year` - The year ages and birth years are related to
/// * `steps` - Number of increments between 50 % and 150 %
/// * `constants` - The tax-year constants
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::{DEFAULT_CURVE_STEPS, generate_curve};
/// use salary_engine::config::TaxYearConstants;
/// use salary_engine::models::{CalculationRequest, FederalState};
///
/// let constants = TaxYearConstants::year_2026();
/// let request = CalculationRequest::new(dec!(60000), FederalState::Hesse);
///
/// let curve = generate_curve(&request, 2026, DEFAULT_CURVE_STEPS, &constants);
/// assert_eq!(curve.len(), 21);
/// assert_eq!(curve[0].factor_percent, 50);
/// assert_eq!(curve[20].factor_percent, 150);
/// assert_eq!(curve[20].gross, dec!(90000));
/// ```
pub fn generate_curve(
    request: &CalculationRequest,
    reference_year: i32,
    steps: u32,
    constants: &TaxYearConstants,
) -> Vec<CurvePoint> {
    let steps = steps.max(1);
    let increment = (CURVE_END - CURVE_START) / Decimal::from(steps);

    debug!(
        gross_income = %request.gross_income,
        steps,
        "Generating gross income curve"
    );

    (0..=steps)
        .map(|i| CURVE_START + increment * Decimal::from(i))
        .take_while(|factor| *factor <= CURVE_END + CURVE_EPSILON)
        .map(|factor| {
            let scaled = request.with_gross_income(request.gross_income * factor);
            let result = evaluate(&scaled, reference_year, constants);

            CurvePoint {
                factor_percent: (factor * Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                    .to_u32()
                    .unwrap_or_default(),
                gross: result.gross_income,
                net: result.net_income,
                marginal_tax: result.marginal_tax_rate,
            }
        })
        .collect()
}
