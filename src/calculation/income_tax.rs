//! Income tax calculation functionality.
//!
//! This module implements the statutory income tax tariff: a basic
//! allowance followed by two quadratic progression zones and two
//! proportional zones. It also provides the forward-difference estimate of
//! the marginal tax rate.

use rust_decimal::Decimal;

use crate::config::{IncomeTaxConstants, QuadraticZone};

use super::rounding::{floor_euros, round_cents};

/// Width of the forward difference used for the marginal rate, in euros.
const MARGINAL_RATE_STEP: Decimal = Decimal::ONE_HUNDRED;

/// Age assumed when estimating the marginal rate; below every relief
/// threshold.
const MARGINAL_RATE_AGE: u32 = 30;

/// Calculates the income tax for a taxable income.
///
/// The calculation proceeds as follows:
/// 1. The taxable income is floored to whole euros.
/// 2. Above the age-relief threshold, `min(base * rate, maximum)` is
///    subtracted and the result floored again (never below zero).
/// 3. Up to and including the basic allowance the tax is zero.
/// 4. Otherwise the zone containing the base (upper bounds inclusive)
///    determines the tax, which is floored to whole euros.
/// 5. The floored tax is multiplied by `factor`.
///
/// # Arguments
///
/// * `taxable_income` - The taxable income (zvE)
/// * `factor` - Multiplier applied to the final tax amount
/// * `age` - The taxpayer's age in completed years
/// * `constants` - The tariff constants for the tax year
///
/// # Returns
///
/// The income tax. With `factor == 1` it is always a whole number of euros.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::compute_income_tax;
/// use salary_engine::config::TaxYearConstants;
///
/// let constants = TaxYearConstants::year_2026();
/// let tax = compute_income_tax(dec!(38809), Decimal::ONE, 35, &constants.income_tax);
/// assert_eq!(tax, dec!(6835));
/// ```
pub fn compute_income_tax(
    taxable_income: Decimal,
    factor: Decimal,
    age: u32,
    constants: &IncomeTaxConstants,
) -> Decimal {
    let mut base = floor_euros(taxable_income);

    let relief = &constants.age_relief;
    if age > relief.age_threshold {
        let deduction = (base * relief.rate).min(relief.maximum);
        base = floor_euros((base - deduction).max(Decimal::ZERO));
    }

    tariff(base, constants) * factor
}

/// Evaluates the zone formula for an already floored base.
fn tariff(base: Decimal, constants: &IncomeTaxConstants) -> Decimal {
    if base <= constants.basic_allowance {
        return Decimal::ZERO;
    }

    let entry = &constants.entry_zone;
    let progression = &constants.progression_zone;
    let proportional = &constants.proportional_zone;
    let top = &constants.top_zone;

    let tax = if base <= entry.upper_limit {
        quadratic(entry, base, constants.basic_allowance, constants.zone_divisor)
    } else if base <= progression.upper_limit {
        quadratic(progression, base, entry.upper_limit, constants.zone_divisor)
    } else if proportional.upper_limit.is_none_or(|limit| base <= limit) {
        proportional.rate * base - proportional.offset
    } else {
        top.rate * base - top.offset
    };

    floor_euros(tax)
}

/// `(quadratic * x + linear) * x + constant` with
/// `x = (base - lower_bound) / divisor`.
fn quadratic(zone: &QuadraticZone, base: Decimal, lower_bound: Decimal, divisor: Decimal) -> Decimal {
    let x = (base - lower_bound) / divisor;
    (zone.quadratic * x + zone.linear) * x + zone.constant
}

/// Estimates the marginal income tax rate in percent.
///
/// Uses a 100-euro forward difference on the tariff, which smooths out the
/// stair-stepping caused by flooring every zone result to whole euros. The
/// estimate is made without multiplier and without age relief.
///
/// # Arguments
///
/// * `taxable_income` - The taxable income (zvE)
/// * `constants` - The tariff constants for the tax year
///
/// # Returns
///
/// The marginal rate rounded to two decimals; zero below the basic
/// allowance.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::compute_marginal_rate;
/// use salary_engine::config::TaxYearConstants;
///
/// let constants = TaxYearConstants::year_2026();
/// assert_eq!(compute_marginal_rate(dec!(100000), &constants.income_tax), dec!(42));
/// assert_eq!(compute_marginal_rate(dec!(10000), &constants.income_tax), dec!(0));
/// ```
pub fn compute_marginal_rate(taxable_income: Decimal, constants: &IncomeTaxConstants) -> Decimal {
    if taxable_income < constants.basic_allowance {
        return Decimal::ZERO;
    }

    let lower = compute_income_tax(taxable_income, Decimal::ONE, MARGINAL_RATE_AGE, constants);
    let upper = compute_income_tax(
        taxable_income + MARGINAL_RATE_STEP,
        Decimal::ONE,
        MARGINAL_RATE_AGE,
        constants,
    );

    round_cents((upper - lower) / MARGINAL_RATE_STEP * Decimal::ONE_HUNDRED)
}
