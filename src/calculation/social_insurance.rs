//! Employee social insurance contributions.
//!
//! This module computes the employee share of the four statutory branches:
//! pension (RV), unemployment (AV), health (KV) and long-term care (PV).
//! Each branch caps its contribution base at the branch's ceiling and
//! rounds its amount to cents independently.

use rust_decimal::Decimal;

use crate::config::SocialInsuranceConstants;
use crate::models::{CalculationRequest, FederalState, HealthInsurance};

use super::rates::ResolvedRates;
use super::rounding::round_cents;

/// The attributes of an insured employee that contributions depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsuredPerson {
    /// Federal state of employment.
    pub state: FederalState,
    /// Whether the employee has children.
    pub has_children: bool,
    /// Number of children.
    pub child_count: Decimal,
    /// Year of birth.
    pub birth_year: i32,
    /// Health insurance arrangement.
    pub health_insurance: HealthInsurance,
}

impl InsuredPerson {
    /// Extracts the insured person from a request, deriving the birth year
    /// relative to `reference_year` when the request carries only an age.
    pub fn from_request(request: &CalculationRequest, reference_year: i32) -> Self {
        Self {
            state: request.state,
            has_children: request.has_children,
            child_count: request.child_count,
            birth_year: request.birth_year_in(reference_year),
            health_insurance: request.health_insurance,
        }
    }
}

/// Annual employee contributions per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contributions {
    /// Pension insurance.
    pub pension: Decimal,
    /// Unemployment insurance.
    pub unemployment: Decimal,
    /// Health insurance, or the annual private premium.
    pub health: Decimal,
    /// Long-term care insurance.
    pub care: Decimal,
}

impl Contributions {
    /// Sum of the four branches.
    pub fn total(&self) -> Decimal {
        self.pension + self.unemployment + self.health + self.care
    }
}

/// Calculates the employee contributions for an annual gross income.
///
/// # Arguments
///
/// * `gross_income` - Annual gross income
/// * `person` - The insured employee
/// * `reference_year` - Year used to derive the age for the childless surcharge
/// * `rates` - Effective rates after simulation overrides
/// * `constants` - Ceilings and care-insurance rules
///
/// # Returns
///
/// The four contributions, each rounded to cents.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_engine::calculation::{InsuredPerson, ResolvedRates, compute_contributions};
/// use salary_engine::config::TaxYearConstants;
/// use salary_engine::models::{CalculationRequest, FederalState};
///
/// let constants = TaxYearConstants::year_2026();
/// let mut request = CalculationRequest::new(dec!(50000), FederalState::Berlin);
/// request.age = Some(35);
///
/// let person = InsuredPerson::from_request(&request, 2026);
/// let rates = ResolvedRates::resolve(&constants.social_insurance, &person.health_insurance, None);
/// let contributions =
///     compute_contributions(dec!(50000), &person, 2026, &rates, &constants.social_insurance);
///
/// assert_eq!(contributions.pension, dec!(4650.00));
/// assert_eq!(contributions.care, dec!(1200.00));
/// assert_eq!(contributions.total(), dec!(10575.00));
/// ```
pub fn compute_contributions(
    gross_income: Decimal,
    person: &InsuredPerson,
    reference_year: i32,
    rates: &ResolvedRates,
    constants: &SocialInsuranceConstants,
) -> Contributions {
    let gross = gross_income.max(Decimal::ZERO);
    let pension_base = gross.min(constants.pension_ceiling);
    let health_base = gross.min(constants.health_ceiling);
    let two = Decimal::TWO;

    let pension = round_cents(pension_base * rates.pension_rate / two);
    let unemployment = round_cents(pension_base * rates.unemployment_rate / two);

    let (health, care) = match person.health_insurance {
        HealthInsurance::Private { monthly_premium } => {
            (round_cents(monthly_premium * Decimal::from(12)), Decimal::ZERO)
        }
        HealthInsurance::Statutory { .. } => {
            let health_rate = constants.health_base_rate / two
                + rates.health_add_on_points / Decimal::ONE_HUNDRED / two;
            let care_rate = care_employee_rate(person, reference_year, rates.care_rate, constants);

            (
                round_cents(health_base * health_rate),
                round_cents(health_base * care_rate),
            )
        }
    };

    Contributions {
        pension,
        unemployment,
        health,
        care,
    }
}

/// The employee's long-term care rate after the state split, the childless
/// surcharge and the child relief, never below zero.
fn care_employee_rate(
    person: &InsuredPerson,
    reference_year: i32,
    total_rate: Decimal,
    constants: &SocialInsuranceConstants,
) -> Decimal {
    let mut rate = constants
        .care_employer_share_exceptions
        .iter()
        .find(|exception| exception.state == person.state)
        .map_or(total_rate / Decimal::TWO, |exception| {
            total_rate - exception.employer_rate
        });

    let age = reference_year - person.birth_year;
    if !person.has_children && age > constants.care_childless_min_age {
        rate += constants.care_childless_surcharge;
    }

    if person.has_children && person.child_count >= Decimal::TWO {
        let relieved_children =
            person.child_count.min(constants.care_child_relief_max_children) - Decimal::ONE;
        rate -= relieved_children * constants.care_child_relief;
    }

    rate.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxYearConstants;
    use crate::models::SimulationSettings;
    use rust_decimal_macros::dec;

    const YEAR: i32 = 2026;

    fn constants() -> SocialInsuranceConstants {
        TaxYearConstants::year_2026().social_insurance
    }

    fn person(state: FederalState) -> InsuredPerson {
        InsuredPerson {
            state,
            has_children: false,
            child_count: Decimal::ZERO,
            birth_year: 1991,
            health_insurance: HealthInsurance::default(),
        }
    }

    fn contributions(gross: Decimal, person: &InsuredPerson) -> Contributions {
        let consts = constants();
        let rates = ResolvedRates::resolve(&consts, &person.health_insurance, None);
        compute_contributions(gross, person, YEAR, &rates, &consts)
    }

    // ==========================================================================
    // Pension, unemployment, health
    // ==========================================================================

    /// SV-001: Reference example, 50,000 in Berlin, aged 35, childless
    #[test]
    fn test_reference_example() {
        let result = contributions(dec!(50000), &person(FederalState::Berlin));

        assert_eq!(result.pension, dec!(4650.00));
        assert_eq!(result.unemployment, dec!(650.00));
        assert_eq!(result.health, dec!(4075.00));
        assert_eq!(result.care, dec!(1200.00));
        assert_eq!(result.total(), dec!(10575.00));
    }

    /// SV-002: Pension and unemployment are capped at their ceiling
    #[test]
    fn test_pension_ceiling() {
        let p = person(FederalState::Berlin);
        let at_ceiling = contributions(dec!(101400), &p);
        let above = contributions(dec!(150000), &p);

        assert_eq!(at_ceiling.pension, above.pension);
        assert_eq!(at_ceiling.unemployment, above.unemployment);
        assert_eq!(above.pension, dec!(9430.20));
        assert_eq!(above.unemployment, dec!(1318.20));
    }

    /// SV-003: Health and care are capped at the lower ceiling
    #[test]
    fn test_health_ceiling() {
        let p = person(FederalState::Berlin);
        let at_ceiling = contributions(dec!(69750), &p);
        let above = contributions(dec!(90000), &p);

        assert_eq!(at_ceiling.health, above.health);
        assert_eq!(at_ceiling.care, above.care);
        assert_eq!(above.health, dec!(5684.63));
        assert_eq!(above.care, dec!(1674.00));
    }

    /// SV-004: Private insurance pays twelve premiums and no care
    #[test]
    fn test_private_health_insurance() {
        let mut p = person(FederalState::Berlin);
        p.health_insurance = HealthInsurance::Private {
            monthly_premium: dec!(600),
        };

        let result = contributions(dec!(90000), &p);

        assert_eq!(result.health, dec!(7200.00));
        assert_eq!(result.care, dec!(0));
        assert_eq!(result.pension, dec!(8370.00));
    }

    /// SV-005: Zero income, zero contributions
    #[test]
    fn test_zero_income() {
        let result = contributions(Decimal::ZERO, &person(FederalState::Berlin));

        assert_eq!(result, Contributions::default());
    }

    // ==========================================================================
    // Long-term care
    // ==========================================================================

    /// PV-001: The childless surcharge is exactly base * 0.006
    #[test]
    fn test_childless_surcharge_difference() {
        let childless = person(FederalState::Berlin);
        let mut parent = childless;
        parent.has_children = true;
        parent.child_count = Decimal::ONE;

        let diff = contributions(dec!(50000), &childless).care
            - contributions(dec!(50000), &parent).care;

        assert_eq!(diff, dec!(300.00));
    }

    /// PV-002: No surcharge up to age 23
    #[test]
    fn test_no_childless_surcharge_when_young() {
        let mut young = person(FederalState::Berlin);
        young.birth_year = YEAR - 23;

        assert_eq!(contributions(dec!(50000), &young).care, dec!(900.00));

        young.birth_year = YEAR - 24;
        assert_eq!(contributions(dec!(50000), &young).care, dec!(1200.00));
    }

    /// PV-003: Relief per child from the second child on
    #[test]
    fn test_child_relief() {
        let mut p = person(FederalState::Berlin);
        p.has_children = true;

        p.child_count = dec!(2);
        // 0.018 - 0.0025
        assert_eq!(contributions(dec!(50000), &p).care, dec!(775.00));

        p.child_count = dec!(3);
        assert_eq!(contributions(dec!(50000), &p).care, dec!(650.00));
    }

    /// PV-004: Relief saturates at five children
    #[test]
    fn test_child_relief_saturates() {
        let mut five = person(FederalState::Berlin);
        five.has_children = true;
        five.child_count = dec!(5);
        let mut ten = five;
        ten.child_count = dec!(10);

        assert_eq!(contributions(dec!(50000), &five), contributions(dec!(50000), &ten));
        // 0.018 - 4 * 0.0025 = 0.008
        assert_eq!(contributions(dec!(50000), &five).care, dec!(400.00));
    }

    /// PV-005: Fractional child counts are relieved proportionally
    #[test]
    fn test_fractional_child_count() {
        let mut p = person(FederalState::Berlin);
        p.has_children = true;
        p.child_count = dec!(2.5);

        // 0.018 - 1.5 * 0.0025 = 0.01425
        assert_eq!(contributions(dec!(50000), &p).care, dec!(712.50));
    }

    /// PV-006: Saxony fixes the employer share at 1.3 %
    #[test]
    fn test_saxony_employer_share() {
        let berlin = contributions(dec!(50000), &person(FederalState::Berlin));
        let saxony = contributions(dec!(50000), &person(FederalState::Saxony));

        // employee 0.023 + 0.006 instead of 0.018 + 0.006
        assert_eq!(saxony.care, dec!(1450.00));
        assert_eq!(saxony.care - berlin.care, dec!(250.00));
        assert_eq!(saxony.health, berlin.health);
    }

    /// PV-007: The employee rate is clamped at zero
    #[test]
    fn test_care_rate_clamped_at_zero() {
        let consts = constants();
        let mut p = person(FederalState::Saxony);
        p.has_children = true;
        p.child_count = dec!(5);
        let settings = SimulationSettings {
            care_rate: Some(dec!(0.01)),
            ..SimulationSettings::neutral()
        };
        let rates = ResolvedRates::resolve(&consts, &p.health_insurance, Some(&settings));

        let result = compute_contributions(dec!(50000), &p, YEAR, &rates, &consts);

        assert_eq!(result.care, dec!(0));
    }

    // ==========================================================================
    // Overrides
    // ==========================================================================

    /// SIM-001: Overridden totals flow into every statutory branch
    #[test]
    fn test_overrides_apply() {
        let consts = constants();
        let p = person(FederalState::Berlin);
        let settings = SimulationSettings {
            pension_rate: Some(dec!(0.225)),
            unemployment_rate: Some(dec!(0.03)),
            health_add_on_rate: Some(dec!(0.07)),
            care_rate: Some(dec!(0.07)),
            ..SimulationSettings::neutral()
        };
        let rates = ResolvedRates::resolve(&consts, &p.health_insurance, Some(&settings));

        let result = compute_contributions(dec!(50000), &p, YEAR, &rates, &consts);

        assert_eq!(result.pension, dec!(5625.00));
        assert_eq!(result.unemployment, dec!(750.00));
        // 0.073 + 0.035
        assert_eq!(result.health, dec!(5400.00));
        // 0.035 + 0.006
        assert_eq!(result.care, dec!(2050.00));
    }
}
