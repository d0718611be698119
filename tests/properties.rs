//! Property-based tests for the calculation core.
//!
//! These tests check that the accounting identities and tariff properties
//! hold across randomly generated incomes and employee profiles, using the
//! `proptest` crate for case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use salary_engine::calculation::{
    compute_income_tax, evaluate, generate_curve, round_cents, run_scenarios,
};
use salary_engine::config::{ScenarioPresets, TaxYearConstants};
use salary_engine::models::{CalculationRequest, FederalState, HealthInsurance, PartTimeScenario};

const YEAR: i32 = 2026;

// =============================================================================
// Generators
// =============================================================================

/// Generates an amount in cents between zero and `max_euros`.
fn arb_amount(max_euros: i64) -> impl Strategy<Value = Decimal> {
    (0i64..=max_euros * 100).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates one of the sixteen federal states.
fn arb_state() -> impl Strategy<Value = FederalState> {
    proptest::sample::select(FederalState::ALL.to_vec())
}

/// Generates a health insurance arrangement.
fn arb_health_insurance() -> impl Strategy<Value = HealthInsurance> {
    prop_oneof![
        (0i64..=400).prop_map(|points| HealthInsurance::Statutory {
            add_on_rate: Decimal::new(points, 2),
        }),
        (0i64..=150_000).prop_map(|cents| HealthInsurance::Private {
            monthly_premium: Decimal::new(cents, 2),
        }),
    ]
}

/// Generates a complete calculation request.
fn arb_request() -> impl Strategy<Value = CalculationRequest> {
    (
        arb_amount(400_000),
        arb_state(),
        any::<bool>(),                      // church_tax
        0u32..=8,                           // child_count
        proptest::option::of(18u32..=80),   // age
        arb_health_insurance(),
    )
        .prop_map(|(gross, state, church_tax, children, age, health_insurance)| {
            let mut request = CalculationRequest::new(gross, state);
            request.church_tax = church_tax;
            request.has_children = children > 0;
            request.child_count = Decimal::from(children);
            request.age = age;
            request.health_insurance = health_insurance;
            request
        })
}

fn constants() -> TaxYearConstants {
    TaxYearConstants::year_2026()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Net income equals gross minus taxes minus contributions to the cent.
    #[test]
    fn prop_net_income_is_balanced(request in arb_request()) {
        let result = evaluate(&request, YEAR, &constants());

        prop_assert!(result.is_balanced());
        prop_assert_eq!(
            result.total_tax,
            result.income_tax + result.solidarity_surcharge + result.church_tax
        );
        prop_assert_eq!(
            result.total_social_insurance,
            result.pension_contribution
                + result.unemployment_contribution
                + result.health_contribution
                + result.care_contribution
        );
    }

    /// Every amount in the result is rounded to cents.
    #[test]
    fn prop_amounts_are_rounded_to_cents(request in arb_request()) {
        let result = evaluate(&request, YEAR, &constants());

        for amount in [
            result.gross_income,
            result.income_tax,
            result.solidarity_surcharge,
            result.church_tax,
            result.total_social_insurance,
            result.net_income,
            result.net_income_monthly,
        ] {
            prop_assert_eq!(amount, round_cents(amount));
        }
    }

    /// Income up to the basic allowance is tax free.
    #[test]
    fn prop_no_tax_up_to_basic_allowance(taxable in arb_amount(12_348)) {
        let tax = compute_income_tax(taxable, Decimal::ONE, 30, &constants().income_tax);
        prop_assert_eq!(tax, Decimal::ZERO);
    }

    /// Income tax never decreases as taxable income grows.
    #[test]
    fn prop_income_tax_is_monotonic(
        a in arb_amount(500_000),
        b in arb_amount(500_000),
        age in 18u32..=90,
    ) {
        let consts = constants();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_tax = compute_income_tax(low, Decimal::ONE, age, &consts.income_tax);
        let high_tax = compute_income_tax(high, Decimal::ONE, age, &consts.income_tax);
        prop_assert!(low_tax <= high_tax, "tax({}) = {} > tax({}) = {}", low, low_tax, high, high_tax);
    }

    /// The multiplier scales the final tax amount.
    #[test]
    fn prop_income_tax_factor_scales_result(
        taxable in arb_amount(400_000),
        factor_percent in 50i64..=300,
    ) {
        let consts = constants();
        let factor = Decimal::new(factor_percent, 2);

        let base = compute_income_tax(taxable, Decimal::ONE, 30, &consts.income_tax);
        let scaled = compute_income_tax(taxable, factor, 30, &consts.income_tax);
        prop_assert_eq!(scaled, base * factor);
    }

    /// Contributions stop growing above the pension ceiling.
    #[test]
    fn prop_contributions_capped_above_ceilings(
        state in arb_state(),
        extra_a in arb_amount(500_000),
        extra_b in arb_amount(500_000),
    ) {
        let consts = constants();
        let ceiling = consts.social_insurance.pension_ceiling;

        let mut request = CalculationRequest::new(ceiling + extra_a, state);
        let a = evaluate(&request, YEAR, &consts);
        request.gross_income = ceiling + extra_b;
        let b = evaluate(&request, YEAR, &consts);

        prop_assert_eq!(a.pension_contribution, b.pension_contribution);
        prop_assert_eq!(a.unemployment_contribution, b.unemployment_contribution);
        prop_assert_eq!(a.health_contribution, b.health_contribution);
        prop_assert_eq!(a.care_contribution, b.care_contribution);
    }

    /// Being childless adds 0.6 % of the capped gross to the care contribution.
    #[test]
    fn prop_childless_surcharge(gross in arb_amount(69_750), state in arb_state()) {
        let consts = constants();

        let mut childless = CalculationRequest::new(gross, state);
        childless.age = Some(40);
        let mut parent = childless.clone();
        parent.has_children = true;
        parent.child_count = Decimal::ONE;

        let difference = evaluate(&childless, YEAR, &consts).care_contribution
            - evaluate(&parent, YEAR, &consts).care_contribution;
        let expected = gross * consts.social_insurance.care_childless_surcharge;
        prop_assert!(
            (difference - expected).abs() <= dec!(0.01),
            "difference {} expected {}",
            difference,
            expected
        );
    }

    /// Child relief stops at five children.
    #[test]
    fn prop_child_relief_capped(gross in arb_amount(150_000), extra in 6u32..=20) {
        let consts = constants();

        let mut five = CalculationRequest::new(gross, FederalState::Hamburg);
        five.has_children = true;
        five.child_count = dec!(5);
        let mut more = five.clone();
        more.child_count = Decimal::from(extra);

        prop_assert_eq!(evaluate(&five, YEAR, &consts), evaluate(&more, YEAR, &consts));
    }

    /// Part-time scenarios earn their share of the base gross, to the cent.
    #[test]
    fn prop_scenario_gross_matches_ratio(request in arb_request()) {
        let scenarios = run_scenarios(&request, YEAR, &constants());

        prop_assert_eq!(scenarios.len(), 4);
        for scenario in PartTimeScenario::ALL {
            let result = &scenarios[&scenario];
            prop_assert_eq!(
                result.gross_income,
                round_cents(request.gross_income * scenario.ratio())
            );
            prop_assert!(result.is_balanced());
        }
    }

    /// A curve spans 50 % to 150 % of the base gross in `steps + 1` points.
    #[test]
    fn prop_curve_endpoints(half_gross in 0i64..=100_000, steps in 1u32..=200) {
        let gross = Decimal::from(half_gross * 2);
        let request = CalculationRequest::new(gross, FederalState::Berlin);

        let curve = generate_curve(&request, YEAR, steps, &constants());

        prop_assert_eq!(curve.len(), steps as usize + 1);
        prop_assert_eq!(curve[0].factor_percent, 50);
        prop_assert_eq!(curve[steps as usize].factor_percent, 150);
        prop_assert_eq!(curve[0].gross, gross * dec!(0.5));
        prop_assert_eq!(curve[steps as usize].gross, gross * dec!(1.5));
        prop_assert!(curve.windows(2).all(|w| w[0].factor_percent <= w[1].factor_percent));
    }

    /// Net income falls as presets get more pessimistic, from 1,000 euros up.
    #[test]
    fn prop_preset_net_ordering(
        gross in (100_000i64..=40_000_000).prop_map(|cents| Decimal::new(cents, 2)),
        state in arb_state(),
        health_insurance in arb_health_insurance(),
    ) {
        let consts = constants();
        let presets = ScenarioPresets::builtin();
        let net = |name: Option<&str>| {
            let mut request = CalculationRequest::new(gross, state);
            request.health_insurance = health_insurance;
            request.simulation = name
                .and_then(|n| presets.get(n))
                .map(|preset| preset.settings());
            evaluate(&request, YEAR, &consts).net_income
        };

        let statutory = net(None);
        let optimist = net(Some("optimist_2035"));
        let realist = net(Some("realist_2035"));
        let pessimist = net(Some("pessimist_2035"));

        prop_assert!(pessimist < realist, "pessimist {} realist {}", pessimist, realist);
        prop_assert!(realist < optimist, "realist {} optimist {}", realist, optimist);
        prop_assert!(optimist < statutory, "optimist {} statutory {}", optimist, statutory);
    }
}
