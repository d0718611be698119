//! Rounding helpers shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to whole cents, with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::round_cents;
///
/// assert_eq!(round_cents(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_cents(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_cents(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Truncates towards negative infinity to whole euros.
///
/// The statutory tariff works on whole euros throughout, both for the
/// taxable base and for each zone's tax amount.
pub fn floor_euros(value: Decimal) -> Decimal {
    value.floor()
}
