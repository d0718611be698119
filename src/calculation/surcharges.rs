//! Surcharges levied on the income tax.
//!
//! The solidarity surcharge and church tax are both percentages of the
//! income tax amount rather than of income.

use rust_decimal::Decimal;

use crate::config::{ChurchTaxConstants, SolidarityConstants};
use crate::models::FederalState;

use super::rounding::round_cents;

/// Calculates the solidarity surcharge on an income tax amount.
///
/// Up to the filing-status threshold nothing is due. Above it the surcharge
/// is the lesser of the full rate on the whole tax and the mitigation rate on
/// the excess over the threshold, which phases the surcharge in without a
/// cliff.
///
/// # Arguments
///
/// * `income_tax` - The income tax the surcharge is levied on
/// * `joint_filing` - Whether the joint-filing threshold applies
/// * `factor` - Multiplier applied to the surcharge
/// * `constants` - Solidarity surcharge constants
///
/// # Returns
///
/// The surcharge rounded to two decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::compute_solidarity_surcharge;
/// use salary_engine::config::TaxYearConstants;
///
/// let constants = TaxYearConstants::year_2026();
/// let soli = compute_solidarity_surcharge(dec!(25000), false, Decimal::ONE, &constants.solidarity);
/// assert_eq!(soli, dec!(553.35));
/// ```
pub fn compute_solidarity_surcharge(
    income_tax: Decimal,
    joint_filing: bool,
    factor: Decimal,
    constants: &SolidarityConstants,
) -> Decimal {
    let threshold = if joint_filing {
        constants.threshold_joint
    } else {
        constants.threshold_single
    };

    if income_tax <= threshold {
        return Decimal::ZERO;
    }

    let full = income_tax * constants.rate;
    let mitigated = (income_tax - threshold) * constants.mitigation_rate;

    round_cents(full.min(mitigated) * factor)
}

/// Calculates church tax on an income tax amount.
///
/// Bavaria and Baden-Württemberg levy the reduced rate, every other state
/// the standard rate. No capping is applied.
pub fn compute_church_tax(
    income_tax: Decimal,
    state: FederalState,
    constants: &ChurchTaxConstants,
) -> Decimal {
    let rate = if constants.reduced_rate_states.contains(&state) {
        constants.reduced_rate
    } else {
        constants.standard_rate
    };

    round_cents(income_tax * rate)
}
