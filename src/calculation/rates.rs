//! Resolution of simulation overrides into effective rates.
//!
//! Every override field of [`SimulationSettings`] is individually optional.
//! [`ResolvedRates::resolve`] merges them with the statutory defaults in one
//! place, so the contribution and tax calculators never inspect overrides
//! themselves.

use rust_decimal::Decimal;

use crate::config::SocialInsuranceConstants;
use crate::models::{HealthInsurance, SimulationSettings};

/// The effective rates for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRates {
    /// Total pension insurance rate as a fraction.
    pub pension_rate: Decimal,
    /// Total unemployment insurance rate as a fraction.
    pub unemployment_rate: Decimal,
    /// Health add-on rate in percentage points.
    pub health_add_on_points: Decimal,
    /// Total long-term care rate as a fraction.
    pub care_rate: Decimal,
    /// Multiplier for the income tax.
    pub income_tax_factor: Decimal,
    /// Multiplier for the solidarity surcharge.
    pub solidarity_factor: Decimal,
}

impl ResolvedRates {
    /// Merges statutory defaults with optional simulation overrides.
    ///
    /// The request's add-on rate is already in percentage points (`1.7`),
    /// while the override arrives as a fraction (`0.07`) and is rescaled by
    /// 100. For private insurance the add-on is irrelevant and resolves to
    /// zero unless overridden.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_engine::calculation::ResolvedRates;
    /// use salary_engine::config::TaxYearConstants;
    /// use salary_engine::models::{HealthInsurance, SimulationSettings};
    ///
    /// let constants = TaxYearConstants::year_2026();
    /// let settings = SimulationSettings {
    ///     health_add_on_rate: Some(dec!(0.07)),
    ///     ..SimulationSettings::neutral()
    /// };
    ///
    /// let rates = ResolvedRates::resolve(
    ///     &constants.social_insurance,
    ///     &HealthInsurance::default(),
    ///     Some(&settings),
    /// );
    /// assert_eq!(rates.health_add_on_points, dec!(7));
    /// assert_eq!(rates.pension_rate, dec!(0.186));
    /// ```
    pub fn resolve(
        constants: &SocialInsuranceConstants,
        health_insurance: &HealthInsurance,
        simulation: Option<&SimulationSettings>,
    ) -> Self {
        let statutory_add_on = match health_insurance {
            HealthInsurance::Statutory { add_on_rate } => *add_on_rate,
            HealthInsurance::Private { .. } => Decimal::ZERO,
        };

        let Some(settings) = simulation else {
            return Self {
                pension_rate: constants.pension_rate,
                unemployment_rate: constants.unemployment_rate,
                health_add_on_points: statutory_add_on,
                care_rate: constants.care_rate,
                income_tax_factor: Decimal::ONE,
                solidarity_factor: Decimal::ONE,
            };
        };

        Self {
            pension_rate: settings.pension_rate.unwrap_or(constants.pension_rate),
            unemployment_rate: settings
                .unemployment_rate
                .unwrap_or(constants.unemployment_rate),
            health_add_on_points: settings
                .health_add_on_rate
                .map_or(statutory_add_on, |fraction| fraction * Decimal::ONE_HUNDRED),
            care_rate: settings.care_rate.unwrap_or(constants.care_rate),
            income_tax_factor: settings.income_tax_factor,
            solidarity_factor: settings.solidarity_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxYearConstants;
    use rust_decimal_macros::dec;

    fn constants() -> SocialInsuranceConstants {
        TaxYearConstants::year_2026().social_insurance
    }

    #[test]
    fn test_no_simulation_uses_statutory_defaults() {
        let rates = ResolvedRates::resolve(&constants(), &HealthInsurance::default(), None);

        assert_eq!(rates.pension_rate, dec!(0.186));
        assert_eq!(rates.unemployment_rate, dec!(0.026));
        assert_eq!(rates.health_add_on_points, dec!(1.7));
        assert_eq!(rates.care_rate, dec!(0.036));
        assert_eq!(rates.income_tax_factor, Decimal::ONE);
        assert_eq!(rates.solidarity_factor, Decimal::ONE);
    }

    #[test]
    fn test_null_overrides_keep_defaults_per_field() {
        let settings = SimulationSettings {
            pension_rate: Some(dec!(0.225)),
            care_rate: Some(dec!(0.07)),
            income_tax_factor: dec!(1.1),
            solidarity_factor: dec!(1.2),
            ..SimulationSettings::neutral()
        };
        let insurance = HealthInsurance::Statutory {
            add_on_rate: dec!(2.5),
        };

        let rates = ResolvedRates::resolve(&constants(), &insurance, Some(&settings));

        assert_eq!(rates.pension_rate, dec!(0.225));
        assert_eq!(rates.unemployment_rate, dec!(0.026));
        assert_eq!(rates.health_add_on_points, dec!(2.5));
        assert_eq!(rates.care_rate, dec!(0.07));
        assert_eq!(rates.income_tax_factor, dec!(1.1));
        assert_eq!(rates.solidarity_factor, dec!(1.2));
    }

    #[test]
    fn test_add_on_override_is_rescaled_to_points() {
        let settings = SimulationSettings {
            health_add_on_rate: Some(dec!(0.045)),
            ..SimulationSettings::neutral()
        };

        let rates =
            ResolvedRates::resolve(&constants(), &HealthInsurance::default(), Some(&settings));

        assert_eq!(rates.health_add_on_points, dec!(4.5));
    }

    #[test]
    fn test_private_insurance_has_no_add_on() {
        let insurance = HealthInsurance::Private {
            monthly_premium: dec!(600),
        };

        let rates = ResolvedRates::resolve(&constants(), &insurance, None);

        assert_eq!(rates.health_add_on_points, Decimal::ZERO);
    }
}
